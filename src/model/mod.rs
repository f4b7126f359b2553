//! Model module - Application state and data types
//!
//! - `query`: query state, its transitions and the request it maps to
//! - `types`: catalog data returned by the movie database
//! - `ui`: UI state snapshots handed to the view
//! - `error`: catalog request errors
//! - `tmdb_client`: TMDB API client and the `CatalogSource` seam
//! - `app_model`: main application model with state management methods

mod query;
mod types;
mod ui;
mod error;
mod tmdb_client;
mod app_model;

pub use query::{CatalogRequest, Mode, QueryState};

pub use types::{MovieSummary, ResultPage};

pub use ui::{ContentState, Focus, UiState, GRID_COLUMNS};

pub use error::TmdbError;

pub use tmdb_client::{CatalogSource, TmdbClient};

pub use app_model::{AppModel, IssuedRequest};
