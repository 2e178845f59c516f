pub mod entity;

pub use entity::{validate_favorite, FavoriteRecord};
