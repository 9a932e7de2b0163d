//! Dino Runner game session.
//!
//! The player box jumps over an obstacle that sweeps across the screen on a
//! repeating cycle. Each obstacle cleared scores a point; touching one ends
//! the round and the best score is kept until the process exits.

pub mod animation;
pub mod logic;
pub mod types;

pub use animation::*;
pub use logic::*;
pub use types::*;
