//! Error taxonomy for catalog requests

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TmdbError {
    /// Network or transport failure (DNS, TLS, connection reset, ...)
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("API error {status_code}: {message}")]
    Api { status_code: u16, message: String },

    /// The body was not the JSON shape we expect
    #[error("malformed response at `{path}`: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// The body parsed but violates a result page invariant
    #[error("invalid result page: {0}")]
    Invalid(String),
}
