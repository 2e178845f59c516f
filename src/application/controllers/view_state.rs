// src/application/controllers/view_state.rs

use serde::Serialize;

use crate::application::error_handling::ErrorResponse;

/// Per-screen fetch lifecycle
///
/// `Idle → Loading → {Loaded | NotFound | Errored}`, re-entering `Loading`
/// whenever the page or target id changes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum ViewState<T> {
    Idle,
    Loading,
    Loaded(T),
    /// Target does not exist (or could not be fetched, for detail screens)
    NotFound,
    /// Fetch failed; the screen shows an empty result
    Errored(ErrorResponse),
}

impl<T> ViewState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            ViewState::Loaded(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        ViewState::Idle
    }
}
