//! View module - UI rendering
//!
//! - `utils`: string helpers shared by widgets
//! - `layout`: search bar, page controls and details line
//! - `grid`: the results grid
//! - `overlays`: help popup

mod utils;
mod layout;
mod grid;
mod overlays;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::model::{ContentState, UiState};

pub struct AppView {
    image_base_url: String,
}

impl AppView {
    pub fn new(image_base_url: impl Into<String>) -> Self {
        Self {
            image_base_url: image_base_url.into(),
        }
    }

    pub fn render(&self, frame: &mut Frame, ui_state: &UiState, content_state: &ContentState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Search bar + mode
                Constraint::Min(0),    // Results grid
                Constraint::Length(4), // Selected movie details
                Constraint::Length(3), // Page indicator + controls
            ])
            .split(frame.area());

        layout::render_top_bar(frame, chunks[0], ui_state);
        grid::render_grid(frame, chunks[1], ui_state, content_state, &self.image_base_url);
        layout::render_details(frame, chunks[2], ui_state, content_state);
        layout::render_page_bar(frame, chunks[3], ui_state, content_state);

        if ui_state.show_help_popup {
            overlays::render_help_popup(frame);
        }
    }
}
