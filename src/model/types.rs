//! Catalog data as returned by the movie database

use std::collections::{BTreeSet, HashSet};

use chrono::NaiveDate;
use serde::Deserialize;

use super::error::TmdbError;

/// One movie entry inside a result page
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MovieSummary {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub adult: bool,
    #[serde(default)]
    pub genre_ids: BTreeSet<i64>,
    #[serde(default)]
    pub original_language: String,
    #[serde(default)]
    pub original_title: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub popularity: f64,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub video: bool,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: i64,
}

impl MovieSummary {
    /// Poster path fragment, empty when the API sent null or nothing
    pub fn poster_path(&self) -> &str {
        self.poster_path.as_deref().unwrap_or_default()
    }

    /// Release year, if the release date is a valid ISO date
    pub fn release_year(&self) -> Option<i32> {
        use chrono::Datelike;
        NaiveDate::parse_from_str(&self.release_date, "%Y-%m-%d")
            .ok()
            .map(|date| date.year())
    }
}

/// One page of movies plus pagination metadata
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ResultPage {
    pub page: i64,
    pub results: Vec<MovieSummary>,
    pub total_pages: i64,
    pub total_results: i64,
}

impl ResultPage {
    /// Reject pages that decoded fine but can't be a real answer
    pub fn validate(&self) -> Result<(), TmdbError> {
        if self.page < 1 {
            return Err(TmdbError::Invalid(format!("page {} is below 1", self.page)));
        }
        if self.total_pages < 0 || self.total_results < 0 {
            return Err(TmdbError::Invalid(format!(
                "negative totals (pages={}, results={})",
                self.total_pages, self.total_results
            )));
        }

        let mut seen = HashSet::with_capacity(self.results.len());
        for movie in &self.results {
            if !seen.insert(movie.id) {
                return Err(TmdbError::Invalid(format!("duplicate movie id {}", movie.id)));
            }
        }
        Ok(())
    }
}
