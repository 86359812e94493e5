//! NewsAPI.org client.
//!
//! Thin wrapper over the three REST endpoints the tools expose. Responses
//! are returned as raw JSON values; no field extraction or reshaping
//! happens anywhere in this service.

use thiserror::Error;
use tracing::debug;

use crate::core::config::NewsConfig;

/// Errors from a NewsAPI request.
#[derive(Debug, Error)]
pub enum NewsError {
    /// NEWS_API_KEY is not configured.
    #[error("NEWS_API_KEY is not configured")]
    MissingApiKey,

    /// Transport failure, non-success status, or unparseable body.
    #[error("{0}")]
    Http(#[from] reqwest::Error),
}

/// Blocking HTTP client for NewsAPI.org.
pub struct NewsClient {
    http: reqwest::blocking::Client,
    base_url: String,
    api_key: String,
}

impl NewsClient {
    /// Build a client from configuration. Fails when no API key is set.
    pub fn from_config(config: &NewsConfig) -> Result<Self, NewsError> {
        let api_key = config.api_key.clone().ok_or(NewsError::MissingApiKey)?;
        Ok(Self {
            http: reqwest::blocking::Client::new(),
            base_url: config.base_url.clone(),
            api_key,
        })
    }

    /// GET an endpoint with the given query parameters, returning the raw
    /// JSON body. Unset optional parameters must already be filtered out by
    /// the caller.
    pub fn get(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> Result<serde_json::Value, NewsError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!("NewsAPI request: {} {:?}", endpoint, query);

        let body = self
            .http
            .get(url)
            .header("X-Api-Key", &self.api_key)
            .query(query)
            .send()?
            .error_for_status()?
            .json()?;

        Ok(body)
    }
}

/// Build a query-parameter list, skipping unset optionals.
pub fn build_query(pairs: Vec<(&str, Option<String>)>) -> Vec<(&str, String)> {
    pairs
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name, v)))
        .collect()
}
