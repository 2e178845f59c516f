// src/events/types.rs
//
// All domain events in the system.
// Each event represents an immutable fact that has already occurred.
//
// CRITICAL RULES:
// - Events are facts, not commands
// - Events carry only the data needed to react
// - No business logic in event types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Trait that all domain events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

macro_rules! impl_domain_event {
    ($name:ident) => {
        impl DomainEvent for $name {
            fn event_id(&self) -> Uuid { self.event_id }
            fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
            fn event_type(&self) -> &'static str { stringify!($name) }
        }
    };
}

// ============================================================================
// FAVORITES EVENTS
// ============================================================================

/// Emitted when a movie is appended to the favorites collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteAdded {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub movie_id: i64,
    pub title: String,
}

impl FavoriteAdded {
    pub fn new(movie_id: i64, title: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            movie_id,
            title,
        }
    }
}

impl_domain_event!(FavoriteAdded);

/// Emitted when a movie is removed from the favorites collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteRemoved {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub movie_id: i64,
}

impl FavoriteRemoved {
    pub fn new(movie_id: i64) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            movie_id,
        }
    }
}

impl_domain_event!(FavoriteRemoved);

/// Emitted after a bulk clear of the favorites collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoritesCleared {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub removed_count: usize,
}

impl FavoritesCleared {
    pub fn new(removed_count: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            removed_count,
        }
    }
}

impl_domain_event!(FavoritesCleared);

// ============================================================================
// CATALOG EVENTS
// ============================================================================

/// Emitted when a category page is applied to a list view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogPageLoaded {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub category: String,
    pub page: u32,
    pub total_pages: u32,
    pub result_count: usize,
}

impl CatalogPageLoaded {
    pub fn new(category: String, page: u32, total_pages: u32, result_count: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            category,
            page,
            total_pages,
            result_count,
        }
    }
}

impl_domain_event!(CatalogPageLoaded);

/// Emitted when a detail view is populated
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieDetailLoaded {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub movie_id: i64,
    pub recommendation_count: usize,
}

impl MovieDetailLoaded {
    pub fn new(movie_id: i64, recommendation_count: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            movie_id,
            recommendation_count,
        }
    }
}

impl_domain_event!(MovieDetailLoaded);

/// Emitted when a remote fetch fails and the view degrades
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFetchFailed {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    /// View that dispatched the request ("popular", "detail", ...)
    pub view: String,
    pub reason: String,
}

impl CatalogFetchFailed {
    pub fn new(view: String, reason: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            view,
            reason,
        }
    }
}

impl_domain_event!(CatalogFetchFailed);

/// Emitted when a response arrives after a newer request was dispatched
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaleResponseDiscarded {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub view: String,
    pub token: u64,
    pub latest_token: u64,
}

impl StaleResponseDiscarded {
    pub fn new(view: String, token: u64, latest_token: u64) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            view,
            token,
            latest_token,
        }
    }
}

impl_domain_event!(StaleResponseDiscarded);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_type_names() {
        assert_eq!(FavoriteAdded::new(1, "Heat".to_string()).event_type(), "FavoriteAdded");
        assert_eq!(StaleResponseDiscarded::new("popular".to_string(), 1, 2).event_type(), "StaleResponseDiscarded");
    }

    #[test]
    fn test_events_have_unique_ids() {
        let a = FavoriteRemoved::new(1);
        let b = FavoriteRemoved::new(1);
        assert_ne!(a.event_id(), b.event_id());
    }
}
