// src/integrations/catalog.rs
//
// Seam between view controllers and the remote movie catalog.
// Implementations own transport concerns; callers see domain types only.

use async_trait::async_trait;

use crate::domain::{MovieCategory, MovieDetail, MoviePage, MovieSummary};
use crate::error::AppResult;

#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// One page of a category listing. `total_pages` is returned as sent by the remote.
    async fn list_movies(&self, category: MovieCategory, page: u32) -> AppResult<MoviePage>;

    /// Full detail; `AppError::NotFound` for unknown ids
    async fn movie_detail(&self, movie_id: i64) -> AppResult<MovieDetail>;

    /// First page of recommendations for a movie
    async fn recommendations(&self, movie_id: i64) -> AppResult<Vec<MovieSummary>>;
}
