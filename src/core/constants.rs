// Timing defaults (milliseconds)
pub const FRAME_INTERVAL_MS: u64 = 16;
pub const JUMP_DURATION_MS: u64 = 600;
pub const OBSTACLE_CYCLE_MS: u64 = 3000;
pub const OBSTACLE_DELAY_MS: u64 = 400;

// Frame intervals outside this range are rejected by config validation
pub const MIN_FRAME_INTERVAL_MS: u64 = 1;
pub const MAX_FRAME_INTERVAL_MS: u64 = 1000;

// Largest time step fed to the animations in one tick. Keeps a stalled
// terminal from teleporting the obstacle through the player.
pub const MAX_TICK_MS: u64 = 100;

// Player geometry (logical units)
pub const PLAYER_X: f32 = 200.0;
pub const PLAYER_WIDTH: f32 = 100.0;
pub const PLAYER_HEIGHT: f32 = 100.0;

// Obstacle geometry (logical units)
pub const OBSTACLE_WIDTH: f32 = 60.0;
pub const OBSTACLE_HEIGHT: f32 = 100.0;
/// Extra travel added to the viewport width so the obstacle enters from
/// beyond the right edge.
pub const OBSTACLE_TRAVEL_OVERSHOOT: f32 = 100.0;
/// Shift applied to the obstacle's left edge so a full sweep ends past the
/// left edge of the surface.
pub const OBSTACLE_END_OFFSET: f32 = 80.0;

// Terminal mapping: one cell covers this many density-independent units
pub const CELL_WIDTH: f32 = 10.0;
pub const CELL_HEIGHT: f32 = 20.0;

/// Logical pixels per density-independent unit. Player and obstacle sizes
/// are in pixels while the canvas is measured in dp, so an 80x13 canvas
/// (800x260 dp) becomes a 2400x780 pixel surface.
pub const PIXEL_DENSITY: f32 = 3.0;

/// Logical pixels covered by one terminal cell.
pub const CELL_PX_WIDTH: f32 = CELL_WIDTH * PIXEL_DENSITY;
pub const CELL_PX_HEIGHT: f32 = CELL_HEIGHT * PIXEL_DENSITY;

/// Rows of the play canvas (260 dp).
pub const CANVAS_ROWS: u16 = 13;

// Score label padding from the top-right corner (cells)
pub const SCORE_PADDING_X: u16 = 6;
pub const SCORE_PADDING_Y: u16 = 2;

// Directory under $HOME holding config and log files
pub const APP_DIR_NAME: &str = ".dino-runner";
pub const CONFIG_FILE_NAME: &str = "config.json";
pub const LOG_FILE_NAME: &str = "dino-runner.log";

pub const WINDOW_TITLE: &str = "Dino Runner";
