// src/application/controllers/category_list.rs
//
// One paginated category screen (popular, top rated, now playing, upcoming).
// Every category uses this controller; only the MovieCategory differs.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::application::controllers::request_token::RequestSequencer;
use crate::application::controllers::view_state::ViewState;
use crate::application::dto::MovieCardDto;
use crate::application::error_handling::ErrorResponse;
use crate::config::CatalogConfig;
use crate::domain::{
    clamp_total_pages, MovieCategory, MovieSummary, PageWindow, PaginationState, MAX_PAGES,
};
use crate::events::{CatalogFetchFailed, CatalogPageLoaded, EventBus, StaleResponseDiscarded};
use crate::integrations::CatalogClient;

#[derive(Debug, Default)]
struct ListState {
    pagination: PaginationState,
    movies: ViewState<Vec<MovieSummary>>,
}

pub struct CategoryListController {
    category: MovieCategory,
    catalog: Arc<dyn CatalogClient>,
    event_bus: Arc<EventBus>,
    sequencer: RequestSequencer,
    state: Mutex<ListState>,
}

impl CategoryListController {
    pub fn new(
        category: MovieCategory,
        catalog: Arc<dyn CatalogClient>,
        event_bus: Arc<EventBus>,
    ) -> Self {
        Self {
            category,
            catalog,
            event_bus,
            sequencer: RequestSequencer::new(),
            state: Mutex::new(ListState::default()),
        }
    }

    pub fn category(&self) -> MovieCategory {
        self.category
    }

    /// Fetch `page` and apply it unless a newer request was dispatched meanwhile
    ///
    /// Returns true when this response was applied to the view.
    pub async fn load_page(&self, page: u32) -> bool {
        let requested = page.clamp(1, MAX_PAGES);
        let token = {
            let mut state = self.lock_state();
            state.movies = ViewState::Loading;
            self.sequencer.dispatch()
        };

        let result = self.catalog.list_movies(self.category, requested).await;

        let mut state = self.lock_state();
        if !self.sequencer.is_latest(token) {
            drop(state);
            log::debug!(
                "Discarding stale {} page {} (token {} < {})",
                self.category,
                requested,
                token.value(),
                self.sequencer.latest()
            );
            self.event_bus.emit(StaleResponseDiscarded::new(
                self.category.to_string(),
                token.value(),
                self.sequencer.latest(),
            ));
            return false;
        }

        match result {
            Ok(movie_page) => {
                let total_pages = clamp_total_pages(movie_page.total_pages);
                state.pagination.set_total_pages(total_pages);
                let current = state.pagination.go_to(requested);
                let count = movie_page.results.len();
                state.movies = ViewState::Loaded(movie_page.results);
                drop(state);

                self.event_bus.emit(CatalogPageLoaded::new(
                    self.category.to_string(),
                    current,
                    total_pages,
                    count,
                ));
            }
            Err(e) => {
                log::error!("Error loading {} movies: {}", self.category, e);
                let reason = e.to_string();
                state.movies = ViewState::Errored(ErrorResponse::from_app_error(e));
                drop(state);

                self.event_bus
                    .emit(CatalogFetchFailed::new(self.category.to_string(), reason));
            }
        }

        true
    }

    /// Reload the current page (initial mount uses this)
    pub async fn reload(&self) -> bool {
        let current = self.pagination().current_page();
        self.load_page(current).await
    }

    pub async fn next_page(&self) -> bool {
        let mut pagination = self.pagination();
        let target = pagination.next();
        self.load_page(target).await
    }

    pub async fn previous_page(&self) -> bool {
        let mut pagination = self.pagination();
        let target = pagination.previous();
        self.load_page(target).await
    }

    pub fn state(&self) -> ViewState<Vec<MovieSummary>> {
        self.lock_state().movies.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.lock_state().movies.is_loading()
    }

    /// Movies currently shown; empty unless the last fetch succeeded
    pub fn movies(&self) -> Vec<MovieSummary> {
        self.lock_state().movies.loaded().cloned().unwrap_or_default()
    }

    pub fn cards(&self, config: &CatalogConfig) -> Vec<MovieCardDto> {
        self.movies()
            .iter()
            .map(|movie| MovieCardDto::from_summary(movie, config))
            .collect()
    }

    pub fn pagination(&self) -> PaginationState {
        self.lock_state().pagination
    }

    pub fn window(&self) -> PageWindow {
        self.pagination().window()
    }

    fn lock_state(&self) -> MutexGuard<'_, ListState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
