// src/application/controllers/request_token.rs
//
// Request fencing for views that fetch asynchronously.
// A response is applied only if no newer request was dispatched after it.

use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Monotonic token source, one per view
#[derive(Debug, Default)]
pub struct RequestSequencer {
    latest: AtomicU64,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture a token for a request about to be dispatched
    pub fn dispatch(&self) -> RequestToken {
        RequestToken(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn latest(&self) -> u64 {
        self.latest.load(Ordering::SeqCst)
    }

    pub fn is_latest(&self, token: RequestToken) -> bool {
        token.0 == self.latest()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_newest_token_is_latest() {
        let sequencer = RequestSequencer::new();
        let first = sequencer.dispatch();
        let second = sequencer.dispatch();

        assert!(first < second);
        assert!(!sequencer.is_latest(first));
        assert!(sequencer.is_latest(second));
        assert_eq!(sequencer.latest(), second.value());
    }
}
