use anyhow::{Context, Result};
use medley_shared::{extract_results, AppConfig, RawgConfig, TmdbConfig};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use crate::error::GatewayError;

// Upstream catalog client. One reqwest client shared by both providers,
// built once with the configured timeout.
pub struct CatalogClient {
    http_client: reqwest::Client,
    tmdb: TmdbConfig,
    rawg: RawgConfig,
}

impl CatalogClient {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.upstream.timeout_secs))
            .build()
            .with_context(|| "Failed to build upstream HTTP client")?;

        Ok(Self {
            http_client,
            tmdb: config.tmdb.clone(),
            rawg: config.rawg.clone(),
        })
    }

    /// Weekly trending movies from the movie catalog.
    pub async fn trending_movies(&self) -> Result<Vec<Value>, GatewayError> {
        let url = format!("{}/trending/movie/week", self.tmdb.base_url);
        let params = [
            ("api_key", self.tmdb.api_key.as_str()),
            ("language", self.tmdb.language.as_str()),
        ];

        let body = self.fetch("TMDB", &url, &params).await?;
        Ok(extract_results(body))
    }

    /// Top-rated games from the game catalog.
    pub async fn trending_games(&self) -> Result<Vec<Value>, GatewayError> {
        let url = format!("{}/games", self.rawg.base_url);
        let params = [
            ("key", self.rawg.api_key.as_str()),
            ("ordering", "-rating"),
            ("page_size", "10"),
        ];

        let body = self.fetch("RAWG", &url, &params).await?;
        Ok(extract_results(body))
    }

    pub async fn search_movies(&self, term: &str) -> Result<Vec<Value>, GatewayError> {
        let url = format!("{}/search/movie", self.tmdb.base_url);
        let params = [
            ("api_key", self.tmdb.api_key.as_str()),
            ("query", term),
            ("language", self.tmdb.language.as_str()),
        ];

        let body = self.fetch("TMDB", &url, &params).await?;
        Ok(extract_results(body))
    }

    pub async fn search_games(&self, term: &str) -> Result<Vec<Value>, GatewayError> {
        let url = format!("{}/games", self.rawg.base_url);
        let params = [
            ("key", self.rawg.api_key.as_str()),
            ("search", term),
            ("page_size", "5"),
        ];

        let body = self.fetch("RAWG", &url, &params).await?;
        Ok(extract_results(body))
    }

    // Single GET against one provider. No retry, no backoff; a non-2xx
    // upstream status is an explicit error rather than forwarded data.
    async fn fetch(
        &self,
        provider: &'static str,
        url: &str,
        params: &[(&str, &str)],
    ) -> Result<Value, GatewayError> {
        debug!("Fetching {} {}", provider, url);

        let response = self.http_client.get(url).query(params).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(GatewayError::Upstream {
                provider,
                status: status.as_u16(),
            });
        }

        let body = response.json().await?;
        Ok(body)
    }
}
