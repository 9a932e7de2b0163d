//! Utility modules: build info, logging, config files.

pub mod build_info;
pub mod logging;
pub mod persistence;

pub use build_info::*;
pub use logging::*;
pub use persistence::*;
