// src/application/commands/catalog_commands.rs
//
// Catalog Command Handlers
//
// RULES:
// - Accept plain arguments
// - Drive controllers
// - Return DTOs

use crate::application::controllers::ViewState;
use crate::application::dto::{CategoryPageDto, MovieDetailDto, PaginationDto};
use crate::application::error_handling::{ErrorResponse, ToErrorResponse};
use crate::application::state::AppState;
use crate::domain::MovieCategory;

/// Load one page of a category ("popular", "top-rated", ...)
pub async fn list_category(
    state: &AppState,
    category: &str,
    page: u32,
) -> Result<CategoryPageDto, ErrorResponse> {
    let category: MovieCategory = category
        .parse()
        .map_err(|e| ErrorResponse::validation(format!("{}", e)))?;
    state.config.require_token().map(|_| ()).to_error_response()?;

    let controller = state.category_list(category);
    controller.load_page(page).await;

    match controller.state() {
        ViewState::Loaded(_) => Ok(CategoryPageDto {
            title: category.display_title().to_string(),
            movies: controller.cards(&state.config),
            pagination: PaginationDto::from(&controller.window()),
        }),
        ViewState::Errored(response) => Err(response),
        _ => Err(ErrorResponse::not_found("Page")),
    }
}

/// Load a movie with its recommendations and favorite flag
pub async fn show_movie(state: &AppState, movie_id: i64) -> Result<MovieDetailDto, ErrorResponse> {
    state.config.require_token().map(|_| ()).to_error_response()?;

    let controller = state.detail();
    controller.load(movie_id).await;

    match controller.movie() {
        Some(movie) => Ok(MovieDetailDto::new(
            &movie,
            &controller.recommendations(),
            controller.is_favorite(),
            &state.config,
        )),
        None => Err(ErrorResponse::not_found("Movie")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::application::controllers::test_support::{detail, page_of, summary, FakeCatalog};
    use crate::application::error_handling::ErrorType;
    use crate::config::CatalogConfig;
    use crate::db::create_memory_pool;
    use crate::domain::FavoriteRecord;
    use crate::repositories::SqliteKeyValueRepository;

    fn app_state(catalog: Arc<FakeCatalog>, token: Option<&str>) -> AppState {
        let config = CatalogConfig {
            api_token: token.map(str::to_string),
            ..CatalogConfig::default()
        };
        let storage = Arc::new(SqliteKeyValueRepository::new(Arc::new(create_memory_pool().unwrap())));
        AppState::with_parts(config, storage, catalog)
    }

    #[tokio::test]
    async fn test_list_category_builds_cards_and_pagination() {
        let catalog = Arc::new(FakeCatalog::new());
        catalog.add_page(50, page_of(50, &[1, 2, 3], 500));
        let state = app_state(catalog, Some("token"));

        let dto = list_category(&state, "top-rated", 50).await.unwrap();

        assert_eq!(dto.title, "Top Rated Movies");
        assert_eq!(dto.movies.len(), 3);
        assert_eq!(dto.pagination.current_page, 50);
        assert_eq!(dto.pagination.to_string(), "« Prev 1 ... 48 49 [50] 51 52 ... 500 Next »");
    }

    #[tokio::test]
    async fn test_list_unknown_category_is_validation_error() {
        let state = app_state(Arc::new(FakeCatalog::new()), Some("token"));

        let error = list_category(&state, "trending", 1).await.unwrap_err();
        assert_eq!(error.error_type, ErrorType::Validation);
    }

    #[tokio::test]
    async fn test_missing_token_is_configuration_error() {
        let catalog = Arc::new(FakeCatalog::new());
        let state = app_state(catalog.clone(), None);

        let error = list_category(&state, "popular", 1).await.unwrap_err();
        assert_eq!(error.error_type, ErrorType::Configuration);
        assert!(catalog.requests().is_empty());
    }

    #[tokio::test]
    async fn test_list_failure_is_returned_as_error() {
        let state = app_state(Arc::new(FakeCatalog::new()), Some("token"));

        let error = list_category(&state, "popular", 1).await.unwrap_err();
        assert_eq!(error.error_type, ErrorType::ExternalService);
    }

    #[tokio::test]
    async fn test_show_movie_reports_favorite_flag() {
        let catalog = Arc::new(FakeCatalog::new());
        catalog.add_detail(detail(550));
        catalog.add_recommendations(550, vec![summary(13)]);
        let state = app_state(catalog, Some("token"));
        state.favorites_service.add(FavoriteRecord::from(summary(550)));

        let dto = show_movie(&state, 550).await.unwrap();

        assert_eq!(dto.id, 550);
        assert_eq!(dto.genres, "Action");
        assert!(dto.is_favorite);
        assert_eq!(dto.recommendations.len(), 1);
    }

    #[tokio::test]
    async fn test_show_unknown_movie_is_not_found() {
        let state = app_state(Arc::new(FakeCatalog::new()), Some("token"));

        let error = show_movie(&state, 42).await.unwrap_err();
        assert_eq!(error.error_type, ErrorType::NotFound);
        assert_eq!(error.message, "Movie not found");
    }
}
