// src/application/controllers/detail.rs
//
// Movie detail screen: detail, recommendations, favorite toggle.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::application::controllers::request_token::RequestSequencer;
use crate::application::controllers::view_state::ViewState;
use crate::domain::{FavoriteRecord, MovieDetail, MovieSummary};
use crate::events::{CatalogFetchFailed, EventBus, MovieDetailLoaded, StaleResponseDiscarded};
use crate::integrations::CatalogClient;
use crate::services::FavoritesService;

/// Recommendations shown below a movie
pub const RECOMMENDATION_LIMIT: usize = 10;

const VIEW_NAME: &str = "detail";

#[derive(Debug, Default)]
struct DetailState {
    movie: ViewState<MovieDetail>,
    recommendations: Vec<MovieSummary>,
}

pub struct DetailController {
    catalog: Arc<dyn CatalogClient>,
    favorites: Arc<FavoritesService>,
    event_bus: Arc<EventBus>,
    sequencer: RequestSequencer,
    state: Mutex<DetailState>,
}

impl DetailController {
    pub fn new(
        catalog: Arc<dyn CatalogClient>,
        favorites: Arc<FavoritesService>,
        event_bus: Arc<EventBus>,
    ) -> Self {
        Self {
            catalog,
            favorites,
            event_bus,
            sequencer: RequestSequencer::new(),
            state: Mutex::new(DetailState::default()),
        }
    }

    /// Fetch detail, then recommendations, for `movie_id`
    ///
    /// Any detail failure shows as NotFound. A recommendations failure after
    /// a successful detail leaves the recommendation list empty.
    /// Returns true when this response was applied to the view.
    pub async fn load(&self, movie_id: i64) -> bool {
        // Token and Loading are taken under the same lock the result is applied under
        let token = {
            let mut state = self.lock_state();
            state.movie = ViewState::Loading;
            state.recommendations.clear();
            self.sequencer.dispatch()
        };

        let detail = self.catalog.movie_detail(movie_id).await;

        let (movie, recommendations) = match detail {
            Ok(movie) => {
                let recommendations = match self.catalog.recommendations(movie_id).await {
                    Ok(mut movies) => {
                        movies.truncate(RECOMMENDATION_LIMIT);
                        movies
                    }
                    Err(e) => {
                        log::warn!("Error loading recommendations for {}: {}", movie_id, e);
                        Vec::new()
                    }
                };
                (ViewState::Loaded(movie), recommendations)
            }
            Err(e) => {
                log::error!("Error loading movie details for {}: {}", movie_id, e);
                self.event_bus
                    .emit(CatalogFetchFailed::new(VIEW_NAME.to_string(), e.to_string()));
                (ViewState::NotFound, Vec::new())
            }
        };

        let loaded = matches!(movie, ViewState::Loaded(_));
        let recommendation_count = recommendations.len();

        let mut state = self.lock_state();
        if !self.sequencer.is_latest(token) {
            drop(state);
            log::debug!("Discarding stale detail for {}", movie_id);
            self.event_bus.emit(StaleResponseDiscarded::new(
                VIEW_NAME.to_string(),
                token.value(),
                self.sequencer.latest(),
            ));
            return false;
        }
        state.movie = movie;
        state.recommendations = recommendations;
        drop(state);

        if loaded {
            self.event_bus
                .emit(MovieDetailLoaded::new(movie_id, recommendation_count));
        }

        true
    }

    pub fn state(&self) -> ViewState<MovieDetail> {
        self.lock_state().movie.clone()
    }

    pub fn movie(&self) -> Option<MovieDetail> {
        self.lock_state().movie.loaded().cloned()
    }

    pub fn recommendations(&self) -> Vec<MovieSummary> {
        self.lock_state().recommendations.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.lock_state().movie.is_loading()
    }

    /// Favorited state of the movie on screen, read through the store
    pub fn is_favorite(&self) -> bool {
        match self.movie() {
            Some(movie) => self.favorites.contains(movie.id()),
            None => false,
        }
    }

    /// Add or remove the loaded movie. `None` when no movie is loaded.
    pub fn toggle_favorite(&self) -> Option<bool> {
        let movie = self.movie()?;
        Some(self.favorites.toggle(FavoriteRecord::from(movie)))
    }

    fn lock_state(&self) -> MutexGuard<'_, DetailState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
