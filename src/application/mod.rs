// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - Controllers hold per-screen view state
// - Commands are the boundary between the CLI and controllers
// - DTOs translate domain values for display

pub mod commands;
pub mod controllers;
pub mod dto;
pub mod error_handling;
pub mod state;

pub use commands::*;
pub use controllers::{
    CategoryListController, DetailController, FavoritesController, RequestSequencer,
    RequestToken, ViewState, RECOMMENDATION_LIMIT,
};
pub use dto::*;
pub use error_handling::{ErrorResponse, ErrorType, ToErrorResponse};
pub use state::AppState;
