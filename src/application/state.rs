// src/application/state.rs

use std::sync::Arc;

use crate::application::controllers::{CategoryListController, DetailController, FavoritesController};
use crate::config::CatalogConfig;
use crate::db::ConnectionPool;
use crate::domain::MovieCategory;
use crate::error::AppResult;
use crate::events::EventBus;
use crate::integrations::{CatalogClient, TmdbClient};
use crate::repositories::{KeyValueRepository, SqliteKeyValueRepository};
use crate::services::FavoritesService;

/// Shared application state.
/// All fields are Arc-wrapped so controllers and commands can share them.
pub struct AppState {
    pub config: CatalogConfig,
    pub event_bus: Arc<EventBus>,
    pub favorites_service: Arc<FavoritesService>,
    pub catalog: Arc<dyn CatalogClient>,
}

impl AppState {
    /// Wire the SQLite favorites store and the TMDB client
    pub fn new(config: CatalogConfig, pool: Arc<ConnectionPool>) -> AppResult<Self> {
        let storage: Arc<dyn KeyValueRepository> = Arc::new(SqliteKeyValueRepository::new(pool));
        let catalog: Arc<dyn CatalogClient> = Arc::new(TmdbClient::new(config.clone())?);

        Ok(Self::with_parts(config, storage, catalog))
    }

    pub fn with_parts(
        config: CatalogConfig,
        storage: Arc<dyn KeyValueRepository>,
        catalog: Arc<dyn CatalogClient>,
    ) -> Self {
        let event_bus = Arc::new(EventBus::new());
        let favorites_service = Arc::new(FavoritesService::new(storage, event_bus.clone()));

        Self {
            config,
            event_bus,
            favorites_service,
            catalog,
        }
    }

    pub fn category_list(&self, category: MovieCategory) -> CategoryListController {
        CategoryListController::new(category, self.catalog.clone(), self.event_bus.clone())
    }

    pub fn detail(&self) -> DetailController {
        DetailController::new(
            self.catalog.clone(),
            self.favorites_service.clone(),
            self.event_bus.clone(),
        )
    }

    pub fn favorites_view(&self) -> Arc<FavoritesController> {
        FavoritesController::subscribed(self.favorites_service.clone(), &self.event_bus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::controllers::test_support::{summary, FakeCatalog};
    use crate::db::create_memory_pool;
    use crate::domain::FavoriteRecord;

    #[test]
    fn test_views_share_one_favorites_store() {
        let pool = Arc::new(create_memory_pool().unwrap());
        let state = AppState::with_parts(
            CatalogConfig::default(),
            Arc::new(SqliteKeyValueRepository::new(pool)),
            Arc::new(FakeCatalog::new()),
        );

        let view = state.favorites_view();
        assert!(view.is_empty());

        state.favorites_service.add(FavoriteRecord::from(summary(550)));
        assert_eq!(view.records().len(), 1);
        assert_eq!(state.category_list(MovieCategory::Upcoming).category(), MovieCategory::Upcoming);
    }
}
