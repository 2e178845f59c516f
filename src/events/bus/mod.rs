pub mod event_bus;

pub use event_bus::{EventBus, EventLogEntry, Subscription, EVENT_LOG_CAPACITY};
