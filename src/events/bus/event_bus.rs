// src/events/bus/event_bus.rs
//
// Synchronous, typed event bus shared by the favorites store and the views.
//
// - Handlers run on the emitting thread, in subscription order
// - A handler stays registered for as long as its Subscription is alive
// - Handlers are invoked without holding the registry lock, so a handler
//   may subscribe, or drop a Subscription, while an event is being delivered

use std::any::{Any, TypeId};
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock, Weak};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::events::types::DomainEvent;

/// Emissions kept for inspection; older entries are dropped first
pub const EVENT_LOG_CAPACITY: usize = 256;

type Handler = Arc<dyn Fn(&dyn Any) + Send + Sync>;

struct Registration {
    id: u64,
    handler: Handler,
}

type Registry = RwLock<HashMap<TypeId, Vec<Registration>>>;

pub struct EventBus {
    registry: Arc<Registry>,
    next_id: AtomicU64,
    recent: Mutex<VecDeque<EventLogEntry>>,
}

/// One emitted event, as recorded in the bounded log
#[derive(Debug, Clone)]
pub struct EventLogEntry {
    pub event_type: &'static str,
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub handler_count: usize,
}

/// Keeps a handler registered; dropping it unsubscribes
#[must_use = "dropping a Subscription unsubscribes its handler"]
pub struct Subscription {
    type_id: TypeId,
    id: u64,
    registry: Weak<Registry>,
}

impl Subscription {
    /// Leave the handler registered for the lifetime of the bus
    pub fn detach(mut self) {
        self.registry = Weak::new();
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(registry) = self.registry.upgrade() else {
            return;
        };

        let mut registry = registry.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(registrations) = registry.get_mut(&self.type_id) {
            registrations.retain(|r| r.id != self.id);
            if registrations.is_empty() {
                registry.remove(&self.type_id);
            }
        }
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            registry: Arc::new(RwLock::new(HashMap::new())),
            next_id: AtomicU64::new(1),
            recent: Mutex::new(VecDeque::with_capacity(EVENT_LOG_CAPACITY)),
        }
    }

    /// Register `handler` for events of type `E`
    ///
    /// ```ignore
    /// let subscription = bus.subscribe::<FavoriteAdded, _>(|event| {
    ///     log::info!("Favorited: {}", event.title);
    /// });
    /// ```
    pub fn subscribe<E, F>(&self, handler: F) -> Subscription
    where
        E: DomainEvent + 'static,
        F: Fn(&E) + Send + Sync + 'static,
    {
        let type_id = TypeId::of::<E>();
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);

        let handler: Handler = Arc::new(move |event: &dyn Any| {
            if let Some(event) = event.downcast_ref::<E>() {
                handler(event);
            }
        });

        self.registry
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(type_id)
            .or_default()
            .push(Registration { id, handler });

        Subscription {
            type_id,
            id,
            registry: Arc::downgrade(&self.registry),
        }
    }

    /// Deliver `event` to every current subscriber of its type
    ///
    /// A panicking handler is logged and does not stop the others.
    pub fn emit<E>(&self, event: E)
    where
        E: DomainEvent + 'static,
    {
        let handlers: Vec<Handler> = self
            .registry
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&TypeId::of::<E>())
            .map(|registrations| registrations.iter().map(|r| Arc::clone(&r.handler)).collect())
            .unwrap_or_default();

        self.record(EventLogEntry {
            event_type: event.event_type(),
            event_id: event.event_id(),
            occurred_at: event.occurred_at(),
            handler_count: handlers.len(),
        });

        log::debug!(
            "[EVENT] {} ({}) -> {} handlers",
            event.event_type(),
            event.event_id(),
            handlers.len()
        );

        for handler in handlers {
            let delivered = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                handler(&event as &dyn Any);
            }));

            if delivered.is_err() {
                log::error!("Handler for {} panicked", event.event_type());
            }
        }
    }

    /// Most recent emissions, oldest first
    pub fn recent_events(&self) -> Vec<EventLogEntry> {
        self.recent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .cloned()
            .collect()
    }

    pub fn subscriber_count<E: 'static>(&self) -> usize {
        self.registry
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&TypeId::of::<E>())
            .map_or(0, Vec::len)
    }

    fn record(&self, entry: EventLogEntry) {
        let mut recent = self.recent.lock().unwrap_or_else(PoisonError::into_inner);
        if recent.len() == EVENT_LOG_CAPACITY {
            recent.pop_front();
        }
        recent.push_back(entry);
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::types::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn test_handlers_run_in_subscription_order() {
        let bus = EventBus::new();
        let sequence = Arc::new(Mutex::new(Vec::new()));

        let _subscriptions: Vec<Subscription> = (1..=3)
            .map(|n| {
                let sequence = Arc::clone(&sequence);
                bus.subscribe::<FavoriteRemoved, _>(move |event| {
                    sequence.lock().unwrap().push((n, event.movie_id));
                })
            })
            .collect();

        bus.emit(FavoriteRemoved::new(13));

        assert_eq!(*sequence.lock().unwrap(), vec![(1, 13), (2, 13), (3, 13)]);
    }

    #[test]
    fn test_dropping_subscription_unsubscribes() {
        let bus = EventBus::new();
        let counter = Arc::new(AtomicUsize::new(0));

        let subscription = bus.subscribe::<FavoriteAdded, _>({
            let counter = Arc::clone(&counter);
            move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            }
        });
        assert_eq!(bus.subscriber_count::<FavoriteAdded>(), 1);

        bus.emit(FavoriteAdded::new(550, "Fight Club".to_string()));
        drop(subscription);
        bus.emit(FavoriteAdded::new(13, "Forrest Gump".to_string()));

        assert_eq!(counter.load(Ordering::SeqCst), 1);
        assert_eq!(bus.subscriber_count::<FavoriteAdded>(), 0);
    }

    #[test]
    fn test_detached_subscription_stays_registered() {
        let bus = EventBus::new();
        bus.subscribe::<FavoritesCleared, _>(|_| {}).detach();
        assert_eq!(bus.subscriber_count::<FavoritesCleared>(), 1);
    }

    #[test]
    fn test_handler_may_drop_its_own_subscription() {
        let bus = EventBus::new();
        let slot: Arc<Mutex<Option<Subscription>>> = Arc::new(Mutex::new(None));

        let subscription = bus.subscribe::<FavoriteRemoved, _>({
            let slot = Arc::clone(&slot);
            move |_| {
                slot.lock().unwrap().take();
            }
        });
        *slot.lock().unwrap() = Some(subscription);

        bus.emit(FavoriteRemoved::new(1));
        assert_eq!(bus.subscriber_count::<FavoriteRemoved>(), 0);
    }

    #[test]
    fn test_event_log_is_bounded() {
        let bus = EventBus::new();

        for page in 0..(EVENT_LOG_CAPACITY as u32 + 10) {
            bus.emit(CatalogPageLoaded::new("popular".to_string(), page, 500, 20));
        }

        let log = bus.recent_events();
        assert_eq!(log.len(), EVENT_LOG_CAPACITY);
        assert!(log.iter().all(|e| e.event_type == "CatalogPageLoaded"));
    }

    #[test]
    fn test_handler_panic_doesnt_break_bus() {
        let bus = EventBus::new();
        let counter = Arc::new(AtomicUsize::new(0));

        let _failing = bus.subscribe::<FavoritesCleared, _>(|_| {
            panic!("Intentional panic");
        });
        let _counting = bus.subscribe::<FavoritesCleared, _>({
            let counter = Arc::clone(&counter);
            move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            }
        });

        bus.emit(FavoritesCleared::new(3));

        assert_eq!(counter.load(Ordering::SeqCst), 1);
        assert_eq!(bus.recent_events()[0].handler_count, 2);
    }
}
