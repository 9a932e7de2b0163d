//! Dino Runner data structures.
//!
//! A single-screen runner: the player box jumps over an obstacle that sweeps
//! in from the right edge on a fixed cycle. Geometry is expressed in logical
//! units; the terminal UI maps them onto cells.

use super::animation::{JumpAnimation, ObstacleAnimation};
use crate::core::config::{GameConfig, JumpRetrigger};
use crate::core::constants::*;
use std::fmt;
use std::ops::RangeInclusive;

/// Session lifecycle. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Before the first round. Start overlay shown.
    Stopped,
    /// Round in progress, obstacle not overlapping the player horizontally.
    Running,
    /// Obstacle under the player; cleared vertically so far.
    OnObstacle,
    /// Obstacle cleared. Scored on entry.
    PassedObstacle,
    /// Collided. Animations frozen, start overlay shown.
    Dead,
}

impl SessionState {
    /// True while a round is in progress and the obstacle should move.
    pub fn is_active(self) -> bool {
        !matches!(self, Self::Stopped | Self::Dead)
    }

    /// True while the start overlay is shown.
    pub fn shows_start_overlay(self) -> bool {
        !self.is_active()
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Stopped => "Stopped",
            Self::Running => "Running",
            Self::OnObstacle => "OnObstacle",
            Self::PassedObstacle => "PassedObstacle",
            Self::Dead => "Dead",
        };
        f.write_str(name)
    }
}

/// Size of the render surface in logical units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportSize {
    pub width: f32,
    pub height: f32,
}

impl ViewportSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Player box for a jump height in [0, 1]. Grounded at 0, touching the
    /// top of the surface at 1.
    pub fn player_bounds(&self, jump: f32) -> Bounds {
        let travel = self.height - PLAYER_HEIGHT;
        Bounds {
            left: PLAYER_X,
            top: travel - travel * jump,
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
        }
    }

    /// Obstacle box for a sweep progress in [0, 1]. Off the right edge at 0,
    /// past the left edge at 1, always standing on the ground.
    pub fn obstacle_bounds(&self, progress: f32) -> Bounds {
        Bounds {
            left: (self.width + OBSTACLE_TRAVEL_OVERSHOOT) * (1.0 - progress)
                - OBSTACLE_END_OFFSET,
            top: self.height - OBSTACLE_HEIGHT,
            width: OBSTACLE_WIDTH,
            height: OBSTACLE_HEIGHT,
        }
    }
}

/// Axis-aligned box in logical units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Closed integer range covered horizontally, edges rounded half-up.
    pub fn horizontal_range(&self) -> RangeInclusive<i32> {
        round_half_up(self.left)..=round_half_up(self.right())
    }

    /// Closed integer range covered vertically, edges rounded half-up.
    pub fn vertical_range(&self) -> RangeInclusive<i32> {
        round_half_up(self.top)..=round_half_up(self.bottom())
    }
}

/// Round to the nearest integer, ties toward positive infinity.
pub fn round_half_up(value: f32) -> i32 {
    (value + 0.5).floor() as i32
}

/// True if some integer lies in both closed ranges.
pub fn ranges_intersect(a: &RangeInclusive<i32>, b: &RangeInclusive<i32>) -> bool {
    !a.is_empty() && !b.is_empty() && a.start() <= b.end() && b.start() <= a.end()
}

/// Complete state of one game session.
#[derive(Debug, Clone)]
pub struct DinoSession {
    pub state: SessionState,
    /// Obstacles passed this round.
    pub score: u32,
    /// Best score at any death since launch.
    pub highest_score: u32,
    /// Set when a jump is requested, cleared once the arc lands.
    pub is_jumping: bool,
    pub obstacle_moving: bool,
    pub jump: JumpAnimation,
    pub obstacle: ObstacleAnimation,
    /// Unknown until the first resize. Collision checks are skipped until then.
    pub viewport: Option<ViewportSize>,
    pub jump_retrigger: JumpRetrigger,
    /// Rounds started since launch.
    pub rounds_played: u32,
}

impl DinoSession {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            state: SessionState::Stopped,
            score: 0,
            highest_score: 0,
            is_jumping: false,
            obstacle_moving: false,
            jump: JumpAnimation::new(config.jump_duration_ms),
            obstacle: ObstacleAnimation::new(
                config.obstacle_cycle_ms,
                config.obstacle_delay_ms,
                config.obstacle_delay_each_cycle,
            ),
            viewport: None,
            jump_retrigger: config.jump_retrigger,
            rounds_played: 0,
        }
    }

    /// Current player box, or `None` while the viewport is unknown.
    pub fn player_bounds(&self) -> Option<Bounds> {
        self.viewport.map(|v| v.player_bounds(self.jump.value()))
    }

    /// Current obstacle box, or `None` while the viewport is unknown.
    pub fn obstacle_bounds(&self) -> Option<Bounds> {
        self.viewport.map(|v| v.obstacle_bounds(self.obstacle.value()))
    }

    /// Copy of the values the renderer and logs care about.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            state: self.state,
            score: self.score,
            highest_score: self.highest_score,
            jump: self.jump.value(),
            obstacle: self.obstacle.value(),
            viewport: self.viewport,
        }
    }
}

impl Default for DinoSession {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}

/// Point-in-time copy of a session's observable values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionSnapshot {
    pub state: SessionState,
    pub score: u32,
    pub highest_score: u32,
    pub jump: f32,
    pub obstacle: f32,
    pub viewport: Option<ViewportSize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_defaults() {
        let session = DinoSession::default();
        assert_eq!(session.state, SessionState::Stopped);
        assert_eq!(session.score, 0);
        assert_eq!(session.highest_score, 0);
        assert!(!session.is_jumping);
        assert!(!session.obstacle_moving);
        assert_eq!(session.jump.value(), 0.0);
        assert_eq!(session.obstacle.value(), 0.0);
        assert!(session.viewport.is_none());
        assert!(session.player_bounds().is_none());
        assert!(session.obstacle_bounds().is_none());
    }

    #[test]
    fn test_state_activity() {
        assert!(!SessionState::Stopped.is_active());
        assert!(SessionState::Running.is_active());
        assert!(SessionState::OnObstacle.is_active());
        assert!(SessionState::PassedObstacle.is_active());
        assert!(!SessionState::Dead.is_active());

        assert!(SessionState::Stopped.shows_start_overlay());
        assert!(SessionState::Dead.shows_start_overlay());
        assert!(!SessionState::Running.shows_start_overlay());
    }

    #[test]
    fn test_player_bounds_grounded_and_peak() {
        let viewport = ViewportSize::new(800.0, 260.0);

        let grounded = viewport.player_bounds(0.0);
        assert_eq!(grounded.left, 200.0);
        assert_eq!(grounded.right(), 300.0);
        assert_eq!(grounded.top, 160.0);
        assert_eq!(grounded.bottom(), 260.0);

        let peak = viewport.player_bounds(1.0);
        assert_eq!(peak.top, 0.0);
        assert_eq!(peak.bottom(), 100.0);
    }

    #[test]
    fn test_obstacle_bounds_sweep() {
        let viewport = ViewportSize::new(800.0, 260.0);

        let start = viewport.obstacle_bounds(0.0);
        assert_eq!(start.left, 820.0);
        assert_eq!(start.top, 160.0);
        assert_eq!(start.bottom(), 260.0);

        let end = viewport.obstacle_bounds(1.0);
        assert_eq!(end.left, -80.0);
        assert_eq!(end.right(), -20.0);
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(1.4), 1);
        assert_eq!(round_half_up(1.5), 2);
        assert_eq!(round_half_up(-1.5), -1);
        assert_eq!(round_half_up(-1.6), -2);
    }

    #[test]
    fn test_ranges_intersect_inclusive_edges() {
        assert!(ranges_intersect(&(200..=300), &(300..=360)));
        assert!(ranges_intersect(&(200..=300), &(140..=200)));
        assert!(!ranges_intersect(&(200..=300), &(301..=361)));
        assert!(!ranges_intersect(&(200..=300), &(139..=199)));
        assert!(ranges_intersect(&(0..=100), &(20..=40)));
    }

    #[test]
    fn test_rounding_gives_one_unit_edge_tolerance() {
        // 300.4 rounds to 300 and touches the player's right edge
        let obstacle = Bounds {
            left: 300.4,
            top: 160.0,
            width: 60.0,
            height: 100.0,
        };
        assert_eq!(obstacle.horizontal_range(), 300..=360);
        assert!(ranges_intersect(&(200..=300), &obstacle.horizontal_range()));
    }

    #[test]
    fn test_state_display() {
        assert_eq!(SessionState::PassedObstacle.to_string(), "PassedObstacle");
        assert_eq!(SessionState::Dead.to_string(), "Dead");
    }
}
