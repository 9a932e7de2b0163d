//! Dino Runner - a single-screen terminal runner.
//!
//! The game session lives in [`dino`]; [`ui`] and [`input`] connect it to a
//! crossterm terminal.

pub mod core;
pub mod dino;
pub mod input;
pub mod ui;
pub mod utils;

pub use crate::core::config::{ConfigError, GameConfig, JumpRetrigger};
pub use crate::dino::{DinoInput, DinoSession, SessionState, ViewportSize};
