//! TMDB API client covering the discover and search endpoints

use futures::future::BoxFuture;
use reqwest::{header, Client, Request, StatusCode};

use crate::config::Config;
use super::error::TmdbError;
use super::query::CatalogRequest;
use super::types::ResultPage;

/// Anything that can answer a catalog request.
///
/// The controller only sees this trait, so tests can script responses
/// without a network.
pub trait CatalogSource: Send + Sync {
    fn fetch(&self, request: CatalogRequest) -> BoxFuture<'_, Result<ResultPage, TmdbError>>;
}

pub struct TmdbClient {
    client: Client,
    config: Config,
}

impl TmdbClient {
    pub fn new(client: Client, config: Config) -> Self {
        Self { client, config }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.api_base_url.trim_end_matches('/'), path)
    }

    /// GET /discover/movie
    ///
    /// Authenticated with the bearer token.
    pub fn discover_request(&self, page: u32) -> Result<Request, TmdbError> {
        let page = page.to_string();
        let request = self
            .client
            .get(self.url("/discover/movie"))
            .header(header::ACCEPT, "application/json")
            .bearer_auth(&self.config.api_token)
            .query(&[
                ("include_adult", "false"),
                ("include_video", "false"),
                ("language", "en-US"),
                ("page", page.as_str()),
                ("sort_by", "popularity.desc"),
            ])
            .build()?;
        Ok(request)
    }

    /// GET /search/movie
    ///
    /// Authenticated with the `api_key` query parameter, not the bearer token.
    pub fn search_request(&self, query: &str, page: u32) -> Result<Request, TmdbError> {
        let page = page.to_string();
        let request = self
            .client
            .get(self.url("/search/movie"))
            .query(&[
                ("api_key", self.config.api_key.as_str()),
                ("page", page.as_str()),
                ("query", query),
            ])
            .build()?;
        Ok(request)
    }

    pub fn build_request(&self, request: &CatalogRequest) -> Result<Request, TmdbError> {
        match request {
            CatalogRequest::Discover { page } => self.discover_request(*page),
            CatalogRequest::Search { query, page } => self.search_request(query, *page),
        }
    }

    async fn execute(&self, request: Request) -> Result<ResultPage, TmdbError> {
        tracing::debug!(path = request.url().path(), "API request started");
        let response = self.client.execute(request).await?;
        let status = response.status();
        let body = response.text().await?;
        parse_result_page(status, &body)
    }
}

impl CatalogSource for TmdbClient {
    fn fetch(&self, request: CatalogRequest) -> BoxFuture<'_, Result<ResultPage, TmdbError>> {
        Box::pin(async move {
            let request = self.build_request(&request)?;
            self.execute(request).await
        })
    }
}

/// Decode and validate a response body
pub(crate) fn parse_result_page(status: StatusCode, body: &str) -> Result<ResultPage, TmdbError> {
    if !status.is_success() {
        return Err(TmdbError::Api {
            status_code: status.as_u16(),
            message: body.to_string(),
        });
    }

    let mut deserializer = serde_json::Deserializer::from_str(body);
    let page: ResultPage =
        serde_path_to_error::deserialize(&mut deserializer).map_err(|e| TmdbError::Json {
            path: e.path().to_string(),
            source: e.into_inner(),
        })?;
    // Only whitespace may follow the page object
    deserializer.end().map_err(|source| TmdbError::Json {
        path: ".".to_string(),
        source,
    })?;
    page.validate()?;
    Ok(page)
}
