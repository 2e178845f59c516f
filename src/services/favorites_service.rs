// src/services/favorites_service.rs
//
// Favorites Store
//
// Sole owner and only mutator of the persisted favorites entry.
// Views never touch the storage key directly.
//
// RULES:
// - Every mutation is one full read-modify-write of the entry
// - Writes inside this process are serialized by `write_lock`
// - Across processes sharing the database, last write wins
// - Failures are logged and degrade to the empty collection; nothing is raised
// - An entry that cannot be read is never overwritten by a mutation

use std::collections::HashSet;
use std::sync::{Arc, Mutex, PoisonError};

use crate::domain::{validate_favorite, FavoriteRecord};
use crate::error::AppResult;
use crate::events::{EventBus, FavoriteAdded, FavoriteRemoved, FavoritesCleared};
use crate::repositories::KeyValueRepository;

/// Storage entry holding the JSON array of favorites
pub const FAVORITES_KEY: &str = "favoriteMovies";

pub struct FavoritesService {
    storage: Arc<dyn KeyValueRepository>,
    event_bus: Arc<EventBus>,
    write_lock: Mutex<()>,
}

impl FavoritesService {
    pub fn new(storage: Arc<dyn KeyValueRepository>, event_bus: Arc<EventBus>) -> Self {
        Self {
            storage,
            event_bus,
            write_lock: Mutex::new(()),
        }
    }

    /// All favorites in insertion order
    ///
    /// Empty when the entry is absent, unreadable, or corrupt.
    pub fn load_all(&self) -> Vec<FavoriteRecord> {
        match self.read_records() {
            Ok(records) => records,
            Err(e) => {
                log::error!("Error loading favorites: {}", e);
                Vec::new()
            }
        }
    }

    pub fn contains(&self, movie_id: i64) -> bool {
        self.load_all().iter().any(|r| r.id() == movie_id)
    }

    /// Append `record` unless its id is already stored
    ///
    /// Returns true when the collection changed.
    pub fn add(&self, record: FavoriteRecord) -> bool {
        if let Err(e) = validate_favorite(&record) {
            log::warn!("Refusing to favorite invalid movie {}: {}", record.id(), e);
            return false;
        }

        let change = self.apply("adding", |records| insert(records, record));
        self.publish(change)
    }

    /// Drop the record with `movie_id`; no-op when absent
    ///
    /// Returns true when the collection changed.
    pub fn remove(&self, movie_id: i64) -> bool {
        let change = self.apply("removing", |records| take_out(records, movie_id));
        self.publish(change)
    }

    /// Remove when present, add otherwise. Returns the resulting favorited state.
    ///
    /// The membership check and the write happen under one lock.
    pub fn toggle(&self, record: FavoriteRecord) -> bool {
        let movie_id = record.id();
        let valid = validate_favorite(&record).is_ok();

        let change = self.apply("toggling", |records| {
            if records.iter().any(|r| r.id() == movie_id) {
                take_out(records, movie_id)
            } else if valid {
                insert(records, record)
            } else {
                Change::Unchanged
            }
        });

        let favorited = match &change {
            Change::Added { .. } => true,
            Change::Removed { .. } => false,
            _ => return self.contains(movie_id),
        };
        self.publish(change);
        favorited
    }

    /// Bulk-clear. Returns how many records were dropped.
    pub fn clear(&self) -> usize {
        let change = self.apply("clearing", |records| {
            let removed_count = records.len();
            records.clear();
            Change::Cleared { removed_count }
        });

        let removed_count = match &change {
            Change::Cleared { removed_count } => *removed_count,
            _ => 0,
        };
        self.publish(change);
        removed_count
    }

    // ========================================================================
    // INTERNAL: Read-Modify-Write
    // ========================================================================

    /// One read-modify-write of the entry under `write_lock`
    ///
    /// Nothing is written when the entry cannot be read (storage failure or
    /// an entry that does not parse) or when `change` reports no change.
    fn apply<F>(&self, action: &str, change: F) -> Change
    where
        F: FnOnce(&mut Vec<FavoriteRecord>) -> Change,
    {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);

        let mut records = match self.read_records() {
            Ok(records) => records,
            Err(e) => {
                log::error!("Error {} favorites, entry left untouched: {}", action, e);
                return Change::Unchanged;
            }
        };

        let outcome = change(&mut records);
        if let Change::Unchanged = outcome {
            return outcome;
        }

        match self.write_records(&records) {
            Ok(()) => outcome,
            Err(e) => {
                log::error!("Error {} favorites: {}", action, e);
                Change::Unchanged
            }
        }
    }

    /// Emit the event for a persisted change. Returns whether anything changed.
    fn publish(&self, change: Change) -> bool {
        match change {
            Change::Added { movie_id, title } => {
                log::info!("Added favorite {} (#{})", title, movie_id);
                self.event_bus.emit(FavoriteAdded::new(movie_id, title));
            }
            Change::Removed { movie_id } => {
                log::info!("Removed favorite #{}", movie_id);
                self.event_bus.emit(FavoriteRemoved::new(movie_id));
            }
            Change::Cleared { removed_count } => {
                log::info!("Cleared {} favorites", removed_count);
                self.event_bus.emit(FavoritesCleared::new(removed_count));
            }
            Change::Unchanged => return false,
        }
        true
    }

    // ========================================================================
    // INTERNAL: Entry Serialization
    // ========================================================================

    /// Parse the stored entry. Duplicate ids keep their first occurrence.
    fn read_records(&self) -> AppResult<Vec<FavoriteRecord>> {
        let Some(raw) = self.storage.get(FAVORITES_KEY)? else {
            return Ok(Vec::new());
        };

        let records: Vec<FavoriteRecord> = serde_json::from_str(&raw)?;

        let mut seen = HashSet::new();
        Ok(records.into_iter().filter(|r| seen.insert(r.id())).collect())
    }

    fn write_records(&self, records: &[FavoriteRecord]) -> AppResult<()> {
        let raw = serde_json::to_string(records)?;
        self.storage.set(FAVORITES_KEY, &raw)
    }
}

/// Outcome of one mutation, published after the write lock is released
enum Change {
    Added { movie_id: i64, title: String },
    Removed { movie_id: i64 },
    Cleared { removed_count: usize },
    Unchanged,
}

fn insert(records: &mut Vec<FavoriteRecord>, record: FavoriteRecord) -> Change {
    let movie_id = record.id();
    if records.iter().any(|r| r.id() == movie_id) {
        return Change::Unchanged;
    }

    let title = record.movie.title.clone();
    records.push(record);
    Change::Added { movie_id, title }
}

fn take_out(records: &mut Vec<FavoriteRecord>, movie_id: i64) -> Change {
    let before = records.len();
    records.retain(|r| r.id() != movie_id);

    if records.len() == before {
        Change::Unchanged
    } else {
        Change::Removed { movie_id }
    }
}
