//! Blocking HTTP client for the REST Countries v2 `name` endpoint

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use thiserror::Error;

use crate::country::Country;

/// A failed lookup. Both variants surface to the user as the single
/// "Country not found" notice; the split only matters for logs.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    #[error("request failed with status {0}")]
    Status(StatusCode),
}

/// Source of country records. A seam so the search worker can be driven by
/// a substitute in tests.
pub trait CountrySource: Send + 'static {
    fn search(&self, query: &str) -> Result<Vec<Country>, LookupError>;
}

/// Client for the v2 `name` endpoint
pub struct CountriesClient {
    http: Client,
    base_url: String,
}

impl CountriesClient {
    /// Create a client against the configured endpoint (`ATLAS_API_URL`
    /// overrides the public API).
    pub fn new() -> Result<Self, LookupError> {
        Self::with_base_url(crate::get_api_base_url())
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, LookupError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent("atlas-cli")
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    fn search_url(&self, query: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(query)
        )
    }
}

impl CountrySource for CountriesClient {
    fn search(&self, query: &str) -> Result<Vec<Country>, LookupError> {
        let response = self.http.get(self.search_url(query)).send()?;

        if !response.status().is_success() {
            return Err(LookupError::Status(response.status()));
        }

        Ok(response.json()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_url_percent_encodes_query() {
        let client = CountriesClient::with_base_url("https://restcountries.com/v2/name").unwrap();
        assert_eq!(
            client.search_url("south korea"),
            "https://restcountries.com/v2/name/south%20korea"
        );
        assert_eq!(
            client.search_url("côte d'ivoire"),
            "https://restcountries.com/v2/name/c%C3%B4te%20d%27ivoire"
        );
    }

    #[test]
    fn test_search_url_tolerates_trailing_slash() {
        let client = CountriesClient::with_base_url("http://localhost:3001/").unwrap();
        assert_eq!(client.search_url("poland"), "http://localhost:3001/poland");
    }
}
