// src/application/commands/favorite_commands.rs
//
// Favorites Command Handlers
//
// RULES:
// - Every read and write goes through the FavoritesService
// - Commands never touch storage directly

use crate::application::dto::{FavoriteChangeDto, MovieCardDto};
use crate::application::error_handling::{ErrorResponse, ToErrorResponse};
use crate::application::state::AppState;
use crate::domain::FavoriteRecord;

/// Saved favorites in insertion order
pub fn list_favorites(state: &AppState) -> Vec<MovieCardDto> {
    state
        .favorites_service
        .load_all()
        .iter()
        .map(|record| MovieCardDto::from_favorite(record, &state.config))
        .collect()
}

/// Fetch the movie from the catalog and save it
pub async fn add_favorite(state: &AppState, movie_id: i64) -> Result<FavoriteChangeDto, ErrorResponse> {
    if state.favorites_service.contains(movie_id) {
        return Ok(FavoriteChangeDto {
            movie_id,
            title: None,
            changed: false,
        });
    }

    state.config.require_token().map(|_| ()).to_error_response()?;
    let movie = state.catalog.movie_detail(movie_id).await.to_error_response()?;
    let title = movie.summary.title.clone();
    let changed = state.favorites_service.add(FavoriteRecord::from(movie));

    Ok(FavoriteChangeDto {
        movie_id,
        title: Some(title),
        changed,
    })
}

pub fn remove_favorite(state: &AppState, movie_id: i64) -> FavoriteChangeDto {
    let title = state
        .favorites_service
        .load_all()
        .into_iter()
        .find(|record| record.id() == movie_id)
        .map(|record| record.movie.title);

    let changed = state.favorites_service.remove(movie_id);

    FavoriteChangeDto {
        movie_id,
        title,
        changed,
    }
}

/// Remove every favorite, returning how many were removed
pub fn clear_favorites(state: &AppState) -> usize {
    state.favorites_service.clear()
}
