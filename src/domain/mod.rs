// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod favorite;
pub mod movie;
pub mod pagination;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Movie Domain
pub use movie::{validate_movie, Genre, MovieCategory, MovieDetail, MoviePage, MovieSummary};

// Favorite Domain
pub use favorite::{validate_favorite, FavoriteRecord};

// Pagination
pub use pagination::{
    clamp_total_pages, page_window, PageWindow, PaginationState, MAX_PAGES, WINDOW_SIZE,
};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Unknown movie category: {0}")]
    UnknownCategory(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
