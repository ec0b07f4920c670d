//! UI module for rendering the TUI

mod form;
mod layout;
mod preview;

pub use preview::resume_text;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let (form_area, preview_area) = layout::create_layout(area, app.preview_percent());

    form::draw(frame, form_area, app);
    preview::draw(frame, preview_area, app);

    layout::draw_status_bar(frame, app);
}
