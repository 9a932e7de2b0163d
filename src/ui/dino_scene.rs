//! Dino Runner scene rendering.
//!
//! The play canvas is drawn into a cell buffer (one cell = CELL_PX_WIDTH x
//! CELL_PX_HEIGHT logical pixels) and stamped row by row. Everything here is a
//! pure function of the session; nothing is mutated.

use super::game_common::{centered_row_rect, dim_area, render_status_bar, Cell, CellBuffer};
use crate::core::constants::*;
use crate::dino::types::{round_half_up, Bounds, DinoSession, SessionState, ViewportSize};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

const PLAYER_COLOR: Color = Color::DarkGray;
const OBSTACLE_COLOR: Color = Color::Gray;
const GROUND_COLOR: Color = Color::Gray;
const GROUND_CHAR: char = '━';

const START_BUTTON_LABEL: &str = "▶ Start playing";
const START_BUTTON_WIDTH: u16 = 21;
const START_BUTTON_HEIGHT: u16 = 3;
/// Highest-score line, a spacer row, then the button.
const PANEL_HEIGHT: u16 = 2 + START_BUTTON_HEIGHT;
const PANEL_TOP_PADDING: u16 = 3;

/// Screen regions of the scene for a given terminal area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneLayout {
    /// Inside the outer border, above the status bar.
    pub content: Rect,
    /// Where the player and obstacle move.
    pub canvas: Rect,
    /// Single row directly below the canvas.
    pub ground: Rect,
    pub status_bar: Rect,
    pub highest_score: Rect,
    pub start_button: Rect,
}

/// Compute the scene layout. Used both for drawing and for mapping mouse
/// clicks and terminal size back onto the session.
pub fn scene_layout(area: Rect) -> SceneLayout {
    let inner = Block::default().borders(Borders::ALL).inner(area);

    let status_height = inner.height.min(2);
    let content = Rect {
        height: inner.height - status_height,
        ..inner
    };
    let status_bar = Rect {
        y: content.y + content.height,
        height: status_height,
        ..inner
    };

    // Canvas plus ground row, vertically centered
    let canvas_rows = CANVAS_ROWS.min(content.height.saturating_sub(1));
    let block_height = canvas_rows + content.height.min(1);
    let canvas_y = content.y + (content.height - block_height) / 2;
    let canvas = Rect::new(content.x, canvas_y, content.width, canvas_rows);
    let ground = Rect::new(
        content.x,
        canvas_y + canvas_rows,
        content.width,
        content.height.min(1),
    );

    let bottom = content.y + content.height;
    let mut panel_y =
        content.y + content.height.saturating_sub(PANEL_HEIGHT) / 2 + PANEL_TOP_PADDING;
    if panel_y + PANEL_HEIGHT > bottom {
        panel_y = bottom.saturating_sub(PANEL_HEIGHT).max(content.y);
    }
    let highest_score = centered_row_rect(content, content.width, 1, panel_y);
    let start_button = centered_row_rect(
        content,
        START_BUTTON_WIDTH,
        START_BUTTON_HEIGHT,
        (panel_y + 2).min(bottom),
    );

    SceneLayout {
        content,
        canvas,
        ground,
        status_bar,
        highest_score,
        start_button,
    }
}

/// Logical pixel size of a canvas, or `None` for a degenerate area.
pub fn viewport_for_canvas(canvas: Rect) -> Option<ViewportSize> {
    if canvas.width == 0 || canvas.height == 0 {
        return None;
    }
    Some(ViewportSize::new(
        canvas.width as f32 * CELL_PX_WIDTH,
        canvas.height as f32 * CELL_PX_HEIGHT,
    ))
}

/// Render the whole scene for the current session.
pub fn render_dino_scene(frame: &mut Frame, area: Rect, session: &DinoSession) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", WINDOW_TITLE))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(block, area);

    let layout = scene_layout(area);

    render_canvas(frame, layout.canvas, session);
    render_ground(frame, layout.ground);
    render_score(frame, layout.content, session.score);
    render_status_bar_content(frame, layout.status_bar, session);

    if session.state.shows_start_overlay() {
        render_start_overlay(frame, &layout, session);
    }
}

/// Convert a box in logical units to a half-open cell range on each axis.
fn cell_span(bounds: &Bounds) -> (i32, i32, i32, i32) {
    let left = round_half_up(bounds.left / CELL_PX_WIDTH);
    let right = round_half_up(bounds.right() / CELL_PX_WIDTH);
    let top = round_half_up(bounds.top / CELL_PX_HEIGHT);
    let bottom = round_half_up(bounds.bottom() / CELL_PX_HEIGHT);
    (left, right, top, bottom)
}

fn render_canvas(frame: &mut Frame, area: Rect, session: &DinoSession) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let mut buffer = CellBuffer::new(area.width, area.height);

    // Geometry depends on a known viewport; draw nothing until then
    if let (Some(obstacle), Some(player)) = (session.obstacle_bounds(), session.player_bounds()) {
        draw_obstacle(&mut buffer, &obstacle);
        draw_player(&mut buffer, &player);
    }

    buffer.render(frame, area);
}

/// Rounded rectangle: quadrant blocks soften the four corners.
fn draw_obstacle(buffer: &mut CellBuffer, bounds: &Bounds) {
    let (left, right, top, bottom) = cell_span(bounds);
    for row in top..bottom {
        for col in left..right {
            let first_row = row == top;
            let last_row = row == bottom - 1;
            let first_col = col == left;
            let last_col = col == right - 1;
            let ch = match (first_row, last_row, first_col, last_col) {
                (true, _, true, _) => '▗',
                (true, _, _, true) => '▖',
                (_, true, true, _) => '▝',
                (_, true, _, true) => '▘',
                _ => '█',
            };
            buffer.set(col, row, Cell::new(ch, OBSTACLE_COLOR));
        }
    }
}

fn draw_player(buffer: &mut CellBuffer, bounds: &Bounds) {
    let (left, right, top, bottom) = cell_span(bounds);
    for row in top..bottom {
        for col in left..right {
            buffer.set(col, row, Cell::new('█', PLAYER_COLOR));
        }
    }
}

fn render_ground(frame: &mut Frame, area: Rect) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let mut buffer = CellBuffer::new(area.width, 1);
    buffer.fill_row(0, Cell::new(GROUND_CHAR, GROUND_COLOR));
    buffer.render(frame, area);
}

/// Score label in the top-right corner with fixed padding.
fn render_score(frame: &mut Frame, content: Rect, score: u32) {
    if content.height == 0 {
        return;
    }
    let text = format!("Score: {}", score);
    let width = (text.chars().count() as u16).min(content.width);
    let x = (content.x + content.width)
        .saturating_sub(width + SCORE_PADDING_X)
        .max(content.x);
    let y = content.y + SCORE_PADDING_Y.min(content.height - 1);

    let label = Paragraph::new(Span::styled(
        text,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(label, Rect::new(x, y, width, 1));
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, session: &DinoSession) {
    let quit = ("[Q/Esc]", "Quit");
    match session.state {
        SessionState::Stopped => render_status_bar(
            frame,
            area,
            Line::styled("Ready", Style::default().fg(Color::LightYellow)),
            &[("[Enter/Click]", "Start"), quit],
        ),
        SessionState::Dead => {
            let status = Line::from(vec![
                Span::styled("Game over! ", Style::default().fg(Color::Red)),
                Span::styled(
                    format!("Score: {}", session.score),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]);
            render_status_bar(
                frame,
                area,
                status,
                &[("[Enter/Click]", "Play again"), quit],
            );
        }
        _ => render_status_bar(
            frame,
            area,
            Line::styled("Run!", Style::default().fg(Color::LightYellow)),
            &[("[Space/Up/Click]", "Jump"), quit],
        ),
    }
}

/// Dimmed panel with the highest score and the start button.
fn render_start_overlay(frame: &mut Frame, layout: &SceneLayout, session: &DinoSession) {
    dim_area(frame, layout.content);

    if layout.highest_score.height > 0 {
        let highest = Paragraph::new(Line::from(Span::styled(
            format!("Highest Score: {}", session.highest_score),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(Clear, layout.highest_score);
        frame.render_widget(highest, layout.highest_score);
    }

    let button = layout.start_button;
    if button.height == 0 || button.width == 0 {
        return;
    }
    frame.render_widget(Clear, button);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::LightGreen));
    let inner = block.inner(button);
    frame.render_widget(block, button);
    let label = Paragraph::new(Span::styled(
        START_BUTTON_LABEL,
        Style::default()
            .fg(Color::LightGreen)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(label, inner);
}
