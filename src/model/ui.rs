//! UI-facing state snapshots

use super::query::QueryState;
use super::types::ResultPage;

/// Number of cells per grid row
pub const GRID_COLUMNS: usize = 4;

/// Which part of the screen receives key presses
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus {
    Search,
    Grid,
}

impl Focus {
    pub fn toggle(self) -> Self {
        match self {
            Focus::Search => Focus::Grid,
            Focus::Grid => Focus::Search,
        }
    }
}

#[derive(Clone, Debug)]
pub struct UiState {
    pub query: QueryState,
    pub focus: Focus,
    pub selected: usize,
    pub show_help_popup: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            query: QueryState::default(),
            focus: Focus::Search,
            selected: 0,
            show_help_popup: false,
        }
    }
}

/// What the grid shows
#[derive(Clone, Debug, Default)]
pub struct ContentState {
    /// `None` until the first fetch succeeds
    pub page: Option<ResultPage>,
}
