//! Runtime configuration
//!
//! The two credentials are read from the environment exactly once, in `main`.
//! Nothing below the bootstrap touches environment variables.

pub const DEFAULT_API_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/w500/";

const API_TOKEN_VAR: &str = "TMDB_API_TOKEN";
const API_KEY_VAR: &str = "TMDB_API_KEY";

#[derive(Clone, Debug)]
pub struct Config {
    /// Bearer token used by the discover endpoint
    pub api_token: String,
    /// `api_key` query parameter used by the search endpoint
    pub api_key: String,
    pub api_base_url: String,
    pub image_base_url: String,
}

impl Config {
    pub fn new(api_token: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
            api_key: api_key.into(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
        }
    }

    /// Build the config from the process environment (and `.env`, if present).
    ///
    /// A missing credential is not an error: requests go out unauthenticated
    /// and fail at the API, which ends up in the log.
    pub fn from_env() -> Self {
        if let Err(e) = dotenv::dotenv() {
            tracing::debug!(error = %e, "No .env file loaded");
        }

        Self::new(read_credential(API_TOKEN_VAR), read_credential(API_KEY_VAR))
    }
}

fn read_credential(var: &str) -> String {
    match std::env::var(var) {
        Ok(value) if !value.is_empty() => value,
        _ => {
            tracing::warn!(var, "Credential not set, requests will be unauthenticated");
            String::new()
        }
    }
}
