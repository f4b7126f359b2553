//! Main application model with state management

use super::error::TmdbError;
use super::query::{CatalogRequest, QueryState};
use super::types::ResultPage;
use super::ui::{ContentState, Focus, UiState, GRID_COLUMNS};

/// A request the model decided to issue, tagged with its generation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IssuedRequest {
    pub generation: u64,
    pub request: CatalogRequest,
}

/// Main application model containing all state
pub struct AppModel {
    ui_state: UiState,
    content_state: ContentState,
    last_issued: Option<CatalogRequest>,
    generation: u64,
    should_quit: bool,
}

impl AppModel {
    pub fn new() -> Self {
        Self {
            ui_state: UiState::default(),
            content_state: ContentState::default(),
            last_issued: None,
            generation: 0,
            should_quit: false,
        }
    }

    pub fn get_ui_state(&self) -> UiState {
        self.ui_state.clone()
    }

    pub fn get_content_state(&self) -> ContentState {
        self.content_state.clone()
    }

    pub fn query(&self) -> &QueryState {
        &self.ui_state.query
    }

    pub fn result_page(&self) -> Option<&ResultPage> {
        self.content_state.page.as_ref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn set_should_quit(&mut self, quit: bool) {
        self.should_quit = quit;
    }

    // ========================================================================
    // Query state & fetch bookkeeping
    // ========================================================================

    /// Install a new query state and decide whether it needs a fetch.
    ///
    /// A request is issued when the derived request differs from the last one
    /// issued, or unconditionally when `force` is set.
    pub fn apply_query(&mut self, next: QueryState, force: bool) -> Option<IssuedRequest> {
        let request = next.request();
        self.ui_state.query = next;

        if !force && self.last_issued.as_ref() == Some(&request) {
            return None;
        }

        self.generation += 1;
        self.last_issued = Some(request.clone());
        Some(IssuedRequest {
            generation: self.generation,
            request,
        })
    }

    /// Apply the outcome of a fetch.
    ///
    /// Returns `false` when the response belongs to a superseded request and
    /// was dropped.
    pub fn accept_response(
        &mut self,
        generation: u64,
        result: Result<ResultPage, TmdbError>,
    ) -> bool {
        if generation != self.generation {
            tracing::debug!(
                generation,
                latest = self.generation,
                "Discarding response for superseded request"
            );
            return false;
        }

        match result {
            Ok(page) => {
                tracing::info!(
                    page = page.page,
                    results = page.results.len(),
                    total_pages = page.total_pages,
                    "Result page loaded"
                );
                self.content_state.page = Some(page);
                self.ui_state.selected = 0;
            }
            Err(e) => {
                tracing::error!(generation, error = %e, "Catalog request failed");
            }
        }
        true
    }

    // ========================================================================
    // Focus, selection & overlays
    // ========================================================================

    pub fn focus(&self) -> Focus {
        self.ui_state.focus
    }

    pub fn toggle_focus(&mut self) {
        self.ui_state.focus = self.ui_state.focus.toggle();
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.ui_state.focus = focus;
    }

    fn result_count(&self) -> usize {
        self.result_page().map_or(0, |p| p.results.len())
    }

    /// Move the grid selection by whole cells; stays inside the grid
    pub fn move_selection(&mut self, columns: isize, rows: isize) {
        let count = self.result_count();
        if count == 0 {
            return;
        }

        let delta = columns + rows * GRID_COLUMNS as isize;
        let target = self.ui_state.selected as isize + delta;
        if (0..count as isize).contains(&target) {
            self.ui_state.selected = target as usize;
        }
    }

    pub fn is_help_popup_open(&self) -> bool {
        self.ui_state.show_help_popup
    }

    pub fn toggle_help_popup(&mut self) {
        self.ui_state.show_help_popup = !self.ui_state.show_help_popup;
    }

    pub fn hide_help_popup(&mut self) {
        self.ui_state.show_help_popup = false;
    }
}

impl Default for AppModel {
    fn default() -> Self {
        Self::new()
    }
}
