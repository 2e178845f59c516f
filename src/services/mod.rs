// src/services/mod.rs
//
// Service layer
//
// Services own the rules; repositories only map data.

pub mod favorites_service;


pub use favorites_service::{FavoritesService, FAVORITES_KEY};
