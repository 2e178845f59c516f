// src/application/controllers/favorites.rs
//
// "My favorites" screen. Reads only through the Favorites Store and
// refreshes itself when favorites change anywhere in the process.
// Dropping the controller drops its subscriptions.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use crate::domain::FavoriteRecord;
use crate::events::{EventBus, FavoriteAdded, FavoriteRemoved, FavoritesCleared, Subscription};
use crate::services::FavoritesService;

pub struct FavoritesController {
    favorites: Arc<FavoritesService>,
    records: Mutex<Vec<FavoriteRecord>>,
    _subscriptions: Vec<Subscription>,
}

impl FavoritesController {
    pub fn new(favorites: Arc<FavoritesService>) -> Self {
        Self {
            favorites,
            records: Mutex::new(Vec::new()),
            _subscriptions: Vec::new(),
        }
    }

    /// Create a controller that reloads on every favorites event
    pub fn subscribed(favorites: Arc<FavoritesService>, event_bus: &EventBus) -> Arc<Self> {
        let controller = Arc::new_cyclic(|weak: &Weak<Self>| Self {
            favorites,
            records: Mutex::new(Vec::new()),
            _subscriptions: vec![
                event_bus.subscribe::<FavoriteAdded, _>(reload_on_event::<FavoriteAdded>(weak.clone())),
                event_bus.subscribe::<FavoriteRemoved, _>(reload_on_event::<FavoriteRemoved>(weak.clone())),
                event_bus.subscribe::<FavoritesCleared, _>(reload_on_event::<FavoritesCleared>(weak.clone())),
            ],
        });
        controller.load();
        controller
    }

    /// Re-read the store (initial mount)
    pub fn load(&self) {
        let records = self.favorites.load_all();
        *self.lock_records() = records;
    }

    /// Remove one favorite and refresh the list
    pub fn remove(&self, movie_id: i64) -> bool {
        let removed = self.favorites.remove(movie_id);
        self.load();
        removed
    }

    pub fn records(&self) -> Vec<FavoriteRecord> {
        self.lock_records().clone()
    }

    /// Drives the "no favorites saved" state
    pub fn is_empty(&self) -> bool {
        self.lock_records().is_empty()
    }

    fn lock_records(&self) -> MutexGuard<'_, Vec<FavoriteRecord>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn reload_on_event<E: 'static>(
    controller: Weak<FavoritesController>,
) -> impl Fn(&E) + Send + Sync + 'static {
    move |_event: &E| {
        if let Some(controller) = controller.upgrade() {
            controller.load();
        }
    }
}
