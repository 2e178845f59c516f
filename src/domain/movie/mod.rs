pub mod entity;
pub mod invariants;

pub use entity::{Genre, MovieCategory, MovieDetail, MoviePage, MovieSummary};
pub use invariants::validate_movie;
