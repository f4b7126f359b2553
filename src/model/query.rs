//! Query state and the request it maps to
//!
//! `QueryState` is never mutated in place: every user action produces a new
//! value, and `QueryState::request` is the only place that decides which
//! endpoint a state corresponds to.

/// Which endpoint the current state is browsing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Discover,
    Search,
}

/// The request a query state maps to
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogRequest {
    /// Popularity-sorted catalog
    Discover { page: u32 },
    /// Free-text title search
    Search { query: String, page: u32 },
}

impl CatalogRequest {
    pub fn page(&self) -> u32 {
        match self {
            CatalogRequest::Discover { page } | CatalogRequest::Search { page, .. } => *page,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryState {
    search_text: String,
    discover_page: u32,
    search_page: u32,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            discover_page: 1,
            search_page: 1,
        }
    }
}

impl QueryState {
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn discover_page(&self) -> u32 {
        self.discover_page
    }

    pub fn search_page(&self) -> u32 {
        self.search_page
    }

    /// Any non-empty text, whitespace included, is an active search
    pub fn mode(&self) -> Mode {
        if self.search_text.is_empty() {
            Mode::Discover
        } else {
            Mode::Search
        }
    }

    pub fn active_page(&self) -> u32 {
        match self.mode() {
            Mode::Discover => self.discover_page,
            Mode::Search => self.search_page,
        }
    }

    pub fn request(&self) -> CatalogRequest {
        match self.mode() {
            Mode::Discover => CatalogRequest::Discover { page: self.discover_page },
            Mode::Search => CatalogRequest::Search {
                query: self.search_text.clone(),
                page: self.search_page,
            },
        }
    }

    /// Clearing the text sends both counters back to page 1
    pub fn with_search_text(&self, value: impl Into<String>) -> Self {
        let search_text = value.into();
        if search_text.is_empty() {
            Self { search_text, ..Self::default() }
        } else {
            Self { search_text, ..self.clone() }
        }
    }

    pub fn advanced(&self) -> Self {
        let mut next = self.clone();
        match next.mode() {
            Mode::Discover => next.discover_page = next.discover_page.saturating_add(1),
            Mode::Search => next.search_page = next.search_page.saturating_add(1),
        }
        next
    }

    pub fn retreated(&self) -> Self {
        let mut next = self.clone();
        match next.mode() {
            Mode::Discover => next.discover_page = next.discover_page.saturating_sub(1).max(1),
            Mode::Search => next.search_page = next.search_page.saturating_sub(1).max(1),
        }
        next
    }

    pub fn home() -> Self {
        Self::default()
    }
}
