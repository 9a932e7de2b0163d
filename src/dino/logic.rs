//! Dino Runner logic: input handling, per-frame update, collision detection.
//!
//! Each frame runs in a fixed order: advance the animations, check for
//! collision, apply the entry effects of any state change. Rendering reads
//! the result afterwards.

use super::types::*;
use crate::core::config::JumpRetrigger;
use crate::core::constants::MAX_TICK_MS;

/// UI-agnostic input actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DinoInput {
    Jump,  // Space, Up, click anywhere
    Start, // Enter, click on the start button
}

/// Process player input. Returns true if the input had an effect.
pub fn process_input(session: &mut DinoSession, input: DinoInput) -> bool {
    match input {
        DinoInput::Jump => request_jump(session),
        DinoInput::Start => request_start(session),
    }
}

fn request_jump(session: &mut DinoSession) -> bool {
    if !session.state.is_active() {
        return false;
    }

    if session.jump.is_running() && session.jump_retrigger == JumpRetrigger::Ignore {
        return false;
    }

    session.is_jumping = true;
    session.jump.start();
    true
}

fn request_start(session: &mut DinoSession) -> bool {
    if !session.state.shows_start_overlay() {
        return false;
    }
    session.rounds_played += 1;
    enter_state(session, SessionState::Running)
}

/// Record a new render surface size.
pub fn resize(session: &mut DinoSession, viewport: ViewportSize) {
    if session.viewport != Some(viewport) {
        log::debug!(
            "Viewport resized to {}x{}",
            viewport.width,
            viewport.height
        );
        session.viewport = Some(viewport);
    }
}

/// Advance the session by `dt_ms`. Called once per frame.
///
/// Returns true if anything visible changed.
pub fn tick_session(session: &mut DinoSession, dt_ms: u64) -> bool {
    // A long stall would otherwise move the obstacle through the player
    // without a collision check in between
    let dt_ms = dt_ms.min(MAX_TICK_MS);

    // 1. Advance timers
    let jump_changed = session.jump.advance(dt_ms);
    if session.is_jumping && !session.jump.is_running() && session.jump.value() == 0.0 {
        session.is_jumping = false;
    }

    let obstacle_changed = session.obstacle_moving && session.obstacle.advance(dt_ms);

    // 2. Collision runs on every obstacle update
    // 3. Entry effects are applied inside enter_state
    let next = if obstacle_changed {
        detect_collision(session)
    } else {
        None
    };
    let state_changed = match next {
        Some(next) => enter_state(session, next),
        None => false,
    };

    jump_changed || obstacle_changed || state_changed
}

/// Work out the state the current geometry calls for.
///
/// Returns `None` when no transition applies or the viewport is unknown.
pub fn detect_collision(session: &DinoSession) -> Option<SessionState> {
    let player = session.player_bounds()?;
    let obstacle = session.obstacle_bounds()?;

    let horizontal = ranges_intersect(&player.horizontal_range(), &obstacle.horizontal_range());
    let vertical = ranges_intersect(&player.vertical_range(), &obstacle.vertical_range());

    if horizontal {
        if vertical {
            Some(SessionState::Dead)
        } else {
            Some(SessionState::OnObstacle)
        }
    } else if session.state == SessionState::OnObstacle {
        Some(SessionState::PassedObstacle)
    } else {
        None
    }
}

/// Move to `next` and apply its entry effects.
///
/// Re-entering the current state is a no-op. Returns true if the state changed.
pub fn enter_state(session: &mut DinoSession, next: SessionState) -> bool {
    if session.state == next {
        return false;
    }

    log::debug!("{} -> {}", session.state, next);
    session.state = next;

    match next {
        SessionState::Stopped => {
            session.jump.stop();
            session.obstacle.stop();
            session.obstacle_moving = false;
        }
        SessionState::Running => {
            session.score = 0;
            session.jump.snap_to(0.0);
            session.obstacle.snap_to(0.0);
            session.is_jumping = false;
            session.obstacle_moving = true;
            session.obstacle.start();
            log::info!("Round {} started", session.rounds_played);
        }
        SessionState::OnObstacle => {}
        SessionState::PassedObstacle => {
            session.score = session.score.saturating_add(1);
        }
        SessionState::Dead => {
            session.jump.stop();
            session.obstacle.stop();
            session.obstacle_moving = false;
            session.highest_score = session.highest_score.max(session.score);
            log::info!(
                "Round {} over: score {}, highest {}",
                session.rounds_played,
                session.score,
                session.highest_score
            );
            log::debug!("Final frame: {:?}", session.snapshot());
        }
    }

    true
}
