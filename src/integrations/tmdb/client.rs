// src/integrations/tmdb/client.rs
//
// TMDB v3 REST client
//
// ARCHITECTURE:
// - Plain HTTP GET against the movie endpoints
// - Bearer-token authentication
// - Maps payloads straight into domain value types
// - Used by the view controllers through the CatalogClient trait
//
// RULES:
// - This is INFRASTRUCTURE, not DOMAIN
// - No retry, no backoff: a failed request fails the fetch cycle
// - Never touches local storage

use async_trait::async_trait;
use reqwest::{header, Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::config::CatalogConfig;
use crate::domain::{MovieCategory, MovieDetail, MoviePage, MovieSummary};
use crate::error::{AppError, AppResult};
use crate::integrations::catalog::CatalogClient;

/// Error payload TMDB sends with non-2xx responses
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[allow(dead_code)] // Part of the TMDB error schema
    status_code: Option<i32>,
    status_message: Option<String>,
}

/// TMDB API Client
pub struct TmdbClient {
    config: CatalogConfig,
    http_client: Client,
}

impl TmdbClient {
    /// Create a client from configuration
    pub fn new(config: CatalogConfig) -> AppResult<Self> {
        let http_client = Client::builder().timeout(config.timeout()).build()?;

        Ok(Self {
            config,
            http_client,
        })
    }

    /// Create a client around a preconfigured HTTP client
    pub fn with_http_client(config: CatalogConfig, http_client: Client) -> Self {
        Self {
            config,
            http_client,
        }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Absolute URL for a path below the API base ("/movie/550")
    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    // ========================================================================
    // INTERNAL: Request Execution
    // ========================================================================

    async fn get_json<T>(&self, path: &str, page: Option<u32>) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        let url = self.endpoint(path);

        let mut request = self
            .http_client
            .get(&url)
            .header(header::ACCEPT, "application/json")
            .query(&[("language", self.config.language.as_str())]);

        if let Some(page) = page {
            request = request.query(&[("page", page)]);
        }

        if let Some(token) = &self.config.api_token {
            request = request.bearer_auth(token);
        }

        log::debug!("GET {} (page {:?})", url, page);

        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(AppError::NotFound);
        }

        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.status_message)
                .unwrap_or_else(|| status.to_string());

            return Err(AppError::ExternalService {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl CatalogClient for TmdbClient {
    async fn list_movies(&self, category: MovieCategory, page: u32) -> AppResult<MoviePage> {
        let path = format!("/movie/{}", category.path_segment());
        self.get_json(&path, Some(page.max(1))).await
    }

    async fn movie_detail(&self, movie_id: i64) -> AppResult<MovieDetail> {
        self.get_json(&format!("/movie/{}", movie_id), None).await
    }

    async fn recommendations(&self, movie_id: i64) -> AppResult<Vec<MovieSummary>> {
        let page: MoviePage = self
            .get_json(&format!("/movie/{}/recommendations", movie_id), Some(1))
            .await?;
        Ok(page.results)
    }
}
