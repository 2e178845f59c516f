// src/application/controllers/mod.rs
//
// View Controllers
//
// ARCHITECTURE:
// - One controller per screen, holding transient view state only
// - Catalog access through CatalogClient, favorites through FavoritesService
// - Every fetch is fenced by a request token; stale responses are dropped
// - Failures degrade to empty / not-found state, never propagate

pub mod category_list;
pub mod detail;
pub mod favorites;
pub mod request_token;
pub mod view_state;

#[cfg(test)]
pub(crate) mod test_support;

pub use category_list::CategoryListController;
pub use detail::{DetailController, RECOMMENDATION_LIMIT};
pub use favorites::FavoritesController;
pub use request_token::{RequestSequencer, RequestToken};
pub use view_state::ViewState;
