use super::entity::MovieSummary;
use crate::domain::{DomainError, DomainResult};

/// Validates all MovieSummary invariants
pub fn validate_movie(movie: &MovieSummary) -> DomainResult<()> {
    validate_id(movie.id)?;
    validate_title(&movie.title)?;
    validate_vote_average(movie.vote_average)?;
    Ok(())
}

/// Catalog ids are always positive
fn validate_id(id: i64) -> DomainResult<()> {
    if id <= 0 {
        return Err(DomainError::InvariantViolation(format!(
            "Movie id must be positive, got {}",
            id
        )));
    }
    Ok(())
}

fn validate_title(title: &str) -> DomainResult<()> {
    if title.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Movie title cannot be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_vote_average(vote: f64) -> DomainResult<()> {
    if !vote.is_finite() || !(0.0..=10.0).contains(&vote) {
        return Err(DomainError::InvariantViolation(format!(
            "Vote average {} outside [0, 10]",
            vote
        )));
    }
    Ok(())
}

/// Invariants that must hold true for Movie domain:
///
/// 1. Identity (catalog id) is positive and never changes
/// 2. Title cannot be blank
/// 3. Vote average lies in [0, 10]
/// 4. Release date may be empty (unreleased titles)
