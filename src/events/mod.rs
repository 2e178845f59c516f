// src/events/mod.rs
//
// Internal Event System - Public API
//
// EventHandler is internal to the bus and must NOT be exported

pub mod bus;
pub mod types;

pub use types::DomainEvent;

pub use types::{
    // Catalog
    CatalogFetchFailed,
    CatalogPageLoaded,
    // Favorites
    FavoriteAdded,
    FavoriteRemoved,
    FavoritesCleared,
    MovieDetailLoaded,
    StaleResponseDiscarded,
};

pub use bus::{EventBus, EventLogEntry, Subscription, EVENT_LOG_CAPACITY};

/// Initialize a new event bus
pub fn create_event_bus() -> EventBus {
    EventBus::new()
}
