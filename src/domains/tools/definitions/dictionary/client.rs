//! Merriam-Webster lookup client.
//!
//! The sole I/O boundary of the dictionary service: one GET per lookup with
//! a fixed timeout, failing on any non-success status. There is no caching
//! and no batching - looking up a word and each of its stems always issues
//! separate round trips.

use std::time::Duration;

use thiserror::Error;
use tracing::debug;

use crate::core::config::DictionaryConfig;

use super::entry::Entry;

/// Errors from a dictionary lookup.
#[derive(Debug, Error)]
pub enum FetchError {
    /// No API key configured; reported through the same sentinel path as
    /// network failures.
    #[error("DICTIONARY_API_KEY is not configured")]
    MissingApiKey,

    /// Transport failure, non-success status, or unparseable body.
    #[error("{0}")]
    Http(#[from] reqwest::Error),
}

/// Lookup seam: fan-out logic is written against this trait so it can be
/// tested with fixture responses instead of the live API.
pub trait Lookup {
    fn fetch(&self, word: &str) -> Result<Vec<Entry>, FetchError>;
}

/// Blocking HTTP client for the dictionary API.
pub struct DictionaryClient {
    http: reqwest::blocking::Client,
    base_url: String,
    api_key: String,
}

impl DictionaryClient {
    /// Build a client from configuration. Fails when no API key is set.
    pub fn from_config(config: &DictionaryConfig) -> Result<Self, FetchError> {
        let api_key = config.api_key.clone().ok_or(FetchError::MissingApiKey)?;
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            api_key,
        })
    }
}

impl Lookup for DictionaryClient {
    fn fetch(&self, word: &str) -> Result<Vec<Entry>, FetchError> {
        let url = format!("{}{}", self.base_url, word);
        debug!("Fetching dictionary entries for '{}'", word);

        let entries = self
            .http
            .get(url)
            .query(&[("key", self.api_key.as_str())])
            .send()?
            .error_for_status()?
            .json()?;

        Ok(entries)
    }
}
