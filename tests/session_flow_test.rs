//! Integration test: session lifecycle and collision scenarios
//!
//! Drives a `DinoSession` through whole rounds using only the public API:
//! input, resize, and per-frame ticks.

use dino_runner::dino::{
    detect_collision, enter_state, process_input, resize, tick_session, DinoInput, DinoSession,
    SessionState, ViewportSize,
};
use dino_runner::ui::dino_scene::{scene_layout, viewport_for_canvas};
use dino_runner::{GameConfig, JumpRetrigger};
use ratatui::layout::Rect;

const FRAME_MS: u64 = 16;

fn standard_viewport() -> ViewportSize {
    ViewportSize::new(800.0, 260.0)
}

fn started_session() -> DinoSession {
    let mut session = DinoSession::default();
    resize(&mut session, standard_viewport());
    assert!(process_input(&mut session, DinoInput::Start));
    session
}

/// Tick frames until `done` holds, panicking after `max_frames`.
fn tick_until<F>(session: &mut DinoSession, max_frames: u32, mut done: F)
where
    F: FnMut(&DinoSession) -> bool,
{
    for _ in 0..max_frames {
        if done(session) {
            return;
        }
        tick_session(session, FRAME_MS);
    }
    assert!(done(session), "condition not reached in {} frames", max_frames);
}

/// Pixel surface of the canvas inside a terminal of the given size.
fn terminal_viewport(cols: u16, rows: u16) -> ViewportSize {
    let layout = scene_layout(Rect::new(0, 0, cols, rows));
    viewport_for_canvas(layout.canvas).expect("canvas has size")
}

/// Start a round and press jump exactly once, after `jump_frame` frames.
/// Returns once a point is scored or the player dies.
fn play_single_jump(viewport: ViewportSize, jump_frame: u32) -> DinoSession {
    let mut session = DinoSession::default();
    resize(&mut session, viewport);
    process_input(&mut session, DinoInput::Start);

    for frame in 0..600 {
        if frame == jump_frame {
            process_input(&mut session, DinoInput::Jump);
        }
        tick_session(&mut session, FRAME_MS);
        if session.score > 0 || session.state == SessionState::Dead {
            break;
        }
    }
    session
}

/// Sweep one obstacle past a player held at the peak of a jump.
/// Returns the states observed along the way.
fn clear_one_obstacle(session: &mut DinoSession) -> Vec<SessionState> {
    let mut seen = vec![session.state];
    let start_score = session.score;
    for _ in 0..400 {
        // Hold the player at the peak
        session.jump.snap_to(1.0);
        tick_session(session, FRAME_MS);
        if seen.last() != Some(&session.state) {
            seen.push(session.state);
        }
        if session.score > start_score {
            break;
        }
    }
    seen
}

// =============================================================================
// Lifecycle
// =============================================================================

#[test]
fn test_session_starts_stopped_with_overlay() {
    let session = DinoSession::default();
    assert_eq!(session.state, SessionState::Stopped);
    assert!(session.state.shows_start_overlay());
    assert!(!session.obstacle_moving);
}

#[test]
fn test_stopped_session_does_not_move() {
    let mut session = DinoSession::default();
    resize(&mut session, standard_viewport());
    for _ in 0..100 {
        assert!(!tick_session(&mut session, FRAME_MS));
    }
    assert_eq!(session.obstacle.value(), 0.0);
    assert_eq!(session.state, SessionState::Stopped);
}

#[test]
fn test_start_yields_fresh_round() {
    let session = started_session();
    assert_eq!(session.state, SessionState::Running);
    assert_eq!(session.score, 0);
    assert_eq!(session.jump.value(), 0.0);
    assert_eq!(session.obstacle.value(), 0.0);
    assert!(session.obstacle_moving);
}

#[test]
fn test_obstacle_holds_for_initial_delay() {
    let mut session = started_session();
    // 24 frames = 384ms, still inside the 400ms delay
    for _ in 0..24 {
        tick_session(&mut session, FRAME_MS);
    }
    assert_eq!(session.obstacle.value(), 0.0);

    tick_session(&mut session, FRAME_MS);
    tick_session(&mut session, FRAME_MS);
    assert!(session.obstacle.value() > 0.0);
}

// =============================================================================
// Collision scenarios
// =============================================================================

#[test]
fn test_no_state_change_before_viewport_known() {
    let mut session = DinoSession::default();
    process_input(&mut session, DinoInput::Start);

    // Two full sweeps without a viewport never collide
    for _ in 0..((400 + 6000) / FRAME_MS) {
        tick_session(&mut session, FRAME_MS);
        assert_eq!(session.state, SessionState::Running);
    }
    assert_eq!(session.score, 0);
}

#[test]
fn test_grounded_player_dies_at_overlap() {
    let mut session = started_session();
    session.obstacle.snap_to(0.73);
    assert_eq!(detect_collision(&session), Some(SessionState::Dead));

    let mut session = started_session();
    tick_until(&mut session, 1000, |s| s.state == SessionState::Dead);
    // Death happens inside the overlap window of the sweep
    let progress = session.obstacle.value();
    assert!(progress > 0.55 && progress < 0.8, "died at {}", progress);
}

#[test]
fn test_player_at_peak_passes_obstacle() {
    let mut session = started_session();
    let seen = clear_one_obstacle(&mut session);

    assert_eq!(
        seen,
        vec![
            SessionState::Running,
            SessionState::OnObstacle,
            SessionState::PassedObstacle
        ]
    );
    assert_eq!(session.score, 1);
}

#[test]
fn test_score_counts_each_passed_obstacle() {
    let mut session = started_session();
    for expected in 1..=3 {
        clear_one_obstacle(&mut session);
        assert_eq!(session.score, expected);
        assert_eq!(session.state, SessionState::PassedObstacle);
    }
}

#[test]
fn test_landing_on_obstacle_is_fatal() {
    let mut session = started_session();
    // Hold the player high until the obstacle is underneath
    for _ in 0..1000 {
        session.jump.snap_to(1.0);
        tick_session(&mut session, FRAME_MS);
        if session.state == SessionState::OnObstacle {
            break;
        }
    }
    assert_eq!(session.state, SessionState::OnObstacle);

    // Drop to the ground while still over the obstacle
    session.jump.snap_to(0.0);
    tick_session(&mut session, FRAME_MS);
    assert_eq!(session.state, SessionState::Dead);
}

// =============================================================================
// Real jumps on terminal-sized surfaces
// =============================================================================

#[test]
fn test_single_timed_jump_scores_a_point() {
    let mut session = DinoSession::default();
    resize(&mut session, terminal_viewport(82, 24));
    process_input(&mut session, DinoInput::Start);

    // Jump while the obstacle is still a few hundred pixels away
    tick_until(&mut session, 1000, |s| s.obstacle.value() >= 0.775);
    assert!(process_input(&mut session, DinoInput::Jump));
    tick_until(&mut session, 200, |s| {
        s.score > 0 || s.state == SessionState::Dead
    });

    assert_eq!(session.state, SessionState::PassedObstacle);
    assert_eq!(session.score, 1);

    // The arc lands normally afterwards
    tick_until(&mut session, 100, |s| !s.is_jumping);
    assert_eq!(session.jump.value(), 0.0);
}

#[test]
fn test_common_terminals_have_a_winning_jump_window() {
    for (cols, rows) in [(82, 24), (122, 40), (202, 50)] {
        let viewport = terminal_viewport(cols, rows);
        let winning = (0..260)
            .filter(|&frame| play_single_jump(viewport, frame).score > 0)
            .count();
        assert!(
            winning >= 5,
            "{}x{} terminal: only {} winning jump frames",
            cols,
            rows,
            winning
        );
    }
}

#[test]
fn test_early_jump_lands_before_the_obstacle() {
    // Lands long before the obstacle arrives
    let session = play_single_jump(terminal_viewport(82, 24), 60);
    assert_eq!(session.state, SessionState::Dead);
    assert_eq!(session.score, 0);
}

// =============================================================================
// Scores across rounds
// =============================================================================

#[test]
fn test_highest_score_tracks_max_at_death() {
    let mut session = started_session();
    let mut max_seen = 0;

    for obstacles in [2u32, 0, 3, 1] {
        for _ in 0..obstacles {
            clear_one_obstacle(&mut session);
        }
        max_seen = max_seen.max(session.score);
        // Back on the ground for the next obstacle
        session.jump.snap_to(0.0);
        tick_until(&mut session, 2000, |s| s.state == SessionState::Dead);
        assert_eq!(session.highest_score, max_seen);

        assert!(process_input(&mut session, DinoInput::Start));
        assert_eq!(session.score, 0);
    }

    assert_eq!(session.highest_score, 3);
    assert_eq!(session.rounds_played, 5);
}

#[test]
fn test_death_freezes_both_animations() {
    let mut session = started_session();
    process_input(&mut session, DinoInput::Jump);
    tick_session(&mut session, FRAME_MS * 5);
    session.obstacle.snap_to(0.73);
    enter_state(&mut session, SessionState::Dead);

    let frozen = session.snapshot();
    for _ in 0..60 {
        tick_session(&mut session, FRAME_MS);
        assert_eq!(session.snapshot(), frozen);
    }
    assert!(frozen.jump > 0.0);
    assert!((frozen.obstacle - 0.73).abs() < 1e-6);
}

#[test]
fn test_restart_after_death_resets_everything() {
    let mut session = started_session();
    clear_one_obstacle(&mut session);
    session.jump.snap_to(0.0);
    tick_until(&mut session, 2000, |s| s.state == SessionState::Dead);
    assert_eq!(session.highest_score, 1);

    process_input(&mut session, DinoInput::Start);
    let snapshot = session.snapshot();
    assert_eq!(snapshot.state, SessionState::Running);
    assert_eq!(snapshot.score, 0);
    assert_eq!(snapshot.highest_score, 1);
    assert_eq!(snapshot.jump, 0.0);
    assert_eq!(snapshot.obstacle, 0.0);
    assert!(session.obstacle_moving);
}

// =============================================================================
// Config switches
// =============================================================================

#[test]
fn test_delay_each_cycle_pauses_between_sweeps() {
    let config = GameConfig {
        obstacle_delay_each_cycle: true,
        ..GameConfig::default()
    };
    let mut session = DinoSession::new(&config);
    // No viewport: the obstacle sweeps freely
    process_input(&mut session, DinoInput::Start);

    // First delay + first sweep, then 200ms into the second delay
    for _ in 0..((3400 + 200) / 100) {
        tick_session(&mut session, 100);
    }
    assert_eq!(session.obstacle.value(), 0.0);
}

#[test]
fn test_delay_once_sweeps_back_to_back() {
    let mut session = DinoSession::default();
    process_input(&mut session, DinoInput::Start);

    for _ in 0..((3400 + 300) / 100) {
        tick_session(&mut session, 100);
    }
    assert!((session.obstacle.value() - 0.1).abs() < 1e-3);
}

#[test]
fn test_restart_retrigger_extends_hang_time() {
    let config = GameConfig {
        jump_retrigger: JumpRetrigger::Restart,
        ..GameConfig::default()
    };
    let mut session = DinoSession::new(&config);
    resize(&mut session, standard_viewport());
    process_input(&mut session, DinoInput::Start);

    process_input(&mut session, DinoInput::Jump);
    // Tap again every 300ms, right at each peak
    for _ in 0..10 {
        for _ in 0..3 {
            tick_session(&mut session, 100);
        }
        assert!(session.jump.value() > 0.99);
        assert!(process_input(&mut session, DinoInput::Jump));
    }
    assert!(session.is_jumping);
}
