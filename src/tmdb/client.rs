use reqwest::{Client as HttpClient, StatusCode};

use crate::config::TmdbConfig;

use super::records::{RawTitle, TrendingPage};

/// Errors from the TMDB API or the transport underneath it.
#[derive(Debug, thiserror::Error)]
pub enum TmdbError {
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("TMDB returned status {status}: {body}")]
    Api { status: StatusCode, body: String },
}

/// HTTP client for TMDB.
///
/// Cheap to clone; clones share the underlying connection pool, so each
/// background task takes its own copy.
#[derive(Debug, Clone)]
pub struct TmdbClient {
    http_client: HttpClient,
    config: TmdbConfig,
}

impl TmdbClient {
    pub fn new(config: TmdbConfig) -> Self {
        TmdbClient {
            http_client: HttpClient::new(),
            config,
        }
    }

    pub fn config(&self) -> &TmdbConfig {
        &self.config
    }

    fn trending_url(&self) -> String {
        format!(
            "{}/trending/movie/week?api_key={}",
            self.config.base_url, self.config.api_key
        )
    }

    /// Fetch this week's trending movies.
    ///
    /// One unpaginated GET; the caller maps the raw records itself.
    pub async fn trending_week(&self) -> Result<Vec<RawTitle>, TmdbError> {
        let response = self.http_client.get(self.trending_url()).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(TmdbError::Api { status, body });
        }

        let page: TrendingPage = response.json().await?;

        tracing::info!(results = page.results.len(), "Trending page fetched");

        Ok(page.results)
    }

    /// Download raw image bytes (poster or backdrop artwork).
    pub async fn fetch_image(&self, url: &str) -> Result<Vec<u8>, TmdbError> {
        let response = self.http_client.get(url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(TmdbError::Api { status, body });
        }

        Ok(response.bytes().await?.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> TmdbClient {
        TmdbClient::new(TmdbConfig {
            base_url: "https://api.themoviedb.org/3".to_string(),
            api_key: "test_key".to_string(),
            image_base_url: "https://image.tmdb.org/t/p/w500".to_string(),
        })
    }

    #[test]
    fn test_trending_url() {
        let client = test_client();
        assert_eq!(
            client.trending_url(),
            "https://api.themoviedb.org/3/trending/movie/week?api_key=test_key"
        );
    }

    #[test]
    fn test_missing_api_key_still_builds_a_url() {
        // An absent key is not validated at load; it only shows up as a
        // rejected request later.
        let client = TmdbClient::new(TmdbConfig {
            base_url: "https://api.themoviedb.org/3".to_string(),
            api_key: String::new(),
            image_base_url: "https://image.tmdb.org/t/p/w500".to_string(),
        });
        assert_eq!(
            client.trending_url(),
            "https://api.themoviedb.org/3/trending/movie/week?api_key="
        );
    }
}
