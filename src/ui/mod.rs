//! Terminal UI.

pub mod dino_scene;
pub mod game_common;

use crate::dino::DinoSession;
use ratatui::Frame;

/// Draw one frame for the session over the whole terminal.
pub fn draw_ui(frame: &mut Frame, session: &DinoSession) {
    let area = frame.size();
    dino_scene::render_dino_scene(frame, area, session);
}
