// src/lib.rs
// CineHub - Movie discovery with locally stored favorites
//
// Architecture:
// - Domain-centric: movie, favorite and pagination rules live in domain/
// - Event-driven: favorites and catalog loads publish events on the bus
// - Local-first: favorites are persisted in SQLite, never remotely
// - Application Layer: per-screen controllers, commands and DTOs

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod events;
pub mod repositories;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;
pub mod integrations;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    clamp_total_pages,
    page_window,
    validate_favorite,
    validate_movie,
    // Favorites
    FavoriteRecord,
    // Movies
    Genre,
    MovieCategory,
    MovieDetail,
    MoviePage,
    MovieSummary,
    // Pagination
    PageWindow,
    PaginationState,
    MAX_PAGES,
    WINDOW_SIZE,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{
    create_event_bus,
    // Catalog events
    CatalogFetchFailed,
    CatalogPageLoaded,
    DomainEvent,
    EventBus,
    EventLogEntry,
    Subscription,
    // Favorites events
    FavoriteAdded,
    FavoriteRemoved,
    FavoritesCleared,
    MovieDetailLoaded,
    StaleResponseDiscarded,
};

// ============================================================================
// PUBLIC API - Configuration & Database
// ============================================================================

pub use config::CatalogConfig;
pub use db::{create_connection_pool, create_memory_pool, initialize_database, ConnectionPool};

// ============================================================================
// PUBLIC API - Repositories & Services
// ============================================================================

pub use repositories::{KeyValueRepository, SqliteKeyValueRepository};
pub use services::{FavoritesService, FAVORITES_KEY};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::{
    AppState, CategoryListController, DetailController, ErrorResponse, FavoritesController,
    ViewState,
};

// Re-export application submodules
pub use application::commands;
pub use application::dto;

// ============================================================================
// PUBLIC API - Integrations
// ============================================================================

pub use integrations::{CatalogClient, TmdbClient};
