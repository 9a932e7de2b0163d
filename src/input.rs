//! Input handling: maps terminal events onto session actions.

use crate::dino::{process_input, DinoInput, DinoSession};
use crate::ui::dino_scene::SceneLayout;
use crate::ui::game_common::rect_contains;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// What a terminal event asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    Game(DinoInput),
    Quit,
    Ignore,
}

/// Result of handling an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    Continue,
    Quit,
}

/// Classify a terminal event. `layout` locates the start button for clicks.
pub fn map_event(event: &Event, layout: &SceneLayout, overlay_shown: bool) -> AppAction {
    match event {
        Event::Key(key) => map_key(key),
        Event::Mouse(mouse) => map_mouse(mouse, layout, overlay_shown),
        _ => AppAction::Ignore,
    }
}

fn map_key(key: &KeyEvent) -> AppAction {
    // Some platforms also report releases and repeats
    if key.kind != KeyEventKind::Press {
        return AppAction::Ignore;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => AppAction::Quit,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => AppAction::Quit,
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('k') => {
            AppAction::Game(DinoInput::Jump)
        }
        KeyCode::Enter | KeyCode::Char('s') | KeyCode::Char('S') => {
            AppAction::Game(DinoInput::Start)
        }
        _ => AppAction::Ignore,
    }
}

fn map_mouse(mouse: &MouseEvent, layout: &SceneLayout, overlay_shown: bool) -> AppAction {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return AppAction::Ignore;
    }

    if overlay_shown && rect_contains(layout.start_button, mouse.column, mouse.row) {
        AppAction::Game(DinoInput::Start)
    } else {
        // A tap anywhere else is a jump
        AppAction::Game(DinoInput::Jump)
    }
}

/// Apply an event to the session.
pub fn handle_event(session: &mut DinoSession, event: &Event, layout: &SceneLayout) -> InputResult {
    let overlay_shown = session.state.shows_start_overlay();
    match map_event(event, layout, overlay_shown) {
        AppAction::Game(input) => {
            if !process_input(session, input) {
                log::trace!("{:?} ignored in {}", input, session.state);
            }
            InputResult::Continue
        }
        AppAction::Quit => InputResult::Quit,
        AppAction::Ignore => InputResult::Continue,
    }
}
