// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// CRITICAL PRINCIPLES:
// - DTOs are UI-friendly representations
// - DTOs are simple, serializable structs
// - Conversion FROM domain values only (never TO)

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::config::CatalogConfig;
use crate::domain::{FavoriteRecord, MovieDetail, MovieSummary, PageWindow};

// ============================================================================
// MOVIE CARD DTOs
// ============================================================================

/// Colour band of the rating badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatingTier {
    High,
    Medium,
    Low,
}

impl RatingTier {
    pub fn from_score(score: f64) -> Self {
        if score >= 8.0 {
            RatingTier::High
        } else if score >= 6.0 {
            RatingTier::Medium
        } else {
            RatingTier::Low
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieCardDto {
    pub id: i64,
    pub title: String,
    /// One decimal ("8.4"), or "N/A" for unrated titles
    pub rating_label: String,
    pub rating_tier: RatingTier,
    pub release_year: Option<i32>,
    pub poster_url: String,
    pub description: String,
}

impl MovieCardDto {
    pub fn from_summary(movie: &MovieSummary, config: &CatalogConfig) -> Self {
        let rated = movie.vote_average.is_finite() && movie.vote_average > 0.0;

        Self {
            id: movie.id,
            title: movie.title.clone(),
            rating_label: if rated {
                format!("{:.1}", movie.vote_average)
            } else {
                "N/A".to_string()
            },
            rating_tier: RatingTier::from_score(if rated { movie.vote_average } else { 0.0 }),
            release_year: release_year(&movie.release_date),
            poster_url: config.poster_url(movie.poster_path.as_deref()),
            description: movie.overview.clone(),
        }
    }

    pub fn from_favorite(record: &FavoriteRecord, config: &CatalogConfig) -> Self {
        Self::from_summary(&record.movie, config)
    }
}

/// Year part of an ISO date; None for empty or malformed dates
pub fn release_year(release_date: &str) -> Option<i32> {
    NaiveDate::parse_from_str(release_date.trim(), "%Y-%m-%d")
        .ok()
        .map(|date| date.year())
}

// ============================================================================
// DETAIL DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetailDto {
    pub id: i64,
    pub title: String,
    pub tagline: Option<String>,
    pub overview: String,
    pub genres: String,
    pub release_date: String,
    pub rating: String,
    pub runtime_minutes: Option<u32>,
    pub poster_url: String,
    pub is_favorite: bool,
    pub recommendations: Vec<MovieCardDto>,
}

impl MovieDetailDto {
    pub fn new(
        movie: &MovieDetail,
        recommendations: &[MovieSummary],
        is_favorite: bool,
        config: &CatalogConfig,
    ) -> Self {
        Self {
            id: movie.id(),
            title: movie.summary.title.clone(),
            tagline: movie.tagline.clone().filter(|t| !t.is_empty()),
            overview: movie.summary.overview.clone(),
            genres: movie.genre_names(),
            release_date: movie.summary.release_date.clone(),
            rating: format!("{:.1}", movie.summary.vote_average),
            runtime_minutes: movie.runtime,
            poster_url: config.poster_url(movie.summary.poster_path.as_deref()),
            is_favorite,
            recommendations: recommendations
                .iter()
                .map(|m| MovieCardDto::from_summary(m, config))
                .collect(),
        }
    }
}

// ============================================================================
// PAGINATION DTOs
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageItem {
    Previous { enabled: bool },
    Page { number: u32, current: bool },
    Ellipsis,
    Next { enabled: bool },
}

/// Flattened pagination bar: Prev, [1, ...], window, [..., last], Next
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationDto {
    pub current_page: u32,
    pub total_pages: u32,
    pub items: Vec<PageItem>,
}

impl From<&PageWindow> for PaginationDto {
    fn from(window: &PageWindow) -> Self {
        let mut items = vec![PageItem::Previous { enabled: window.has_previous }];

        if window.show_first_shortcut {
            items.push(PageItem::Page { number: 1, current: false });
            if window.show_leading_ellipsis {
                items.push(PageItem::Ellipsis);
            }
        }

        items.extend(window.pages.iter().map(|&number| PageItem::Page {
            number,
            current: number == window.current,
        }));

        if window.show_last_shortcut {
            if window.show_trailing_ellipsis {
                items.push(PageItem::Ellipsis);
            }
            items.push(PageItem::Page { number: window.total, current: false });
        }

        items.push(PageItem::Next { enabled: window.has_next });

        Self {
            current_page: window.current,
            total_pages: window.total,
            items,
        }
    }
}

impl std::fmt::Display for PaginationDto {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rendered: Vec<String> = self
            .items
            .iter()
            .map(|item| match item {
                PageItem::Previous { enabled: true } => "« Prev".to_string(),
                PageItem::Previous { enabled: false } => "(« Prev)".to_string(),
                PageItem::Page { number, current: true } => format!("[{}]", number),
                PageItem::Page { number, current: false } => number.to_string(),
                PageItem::Ellipsis => "...".to_string(),
                PageItem::Next { enabled: true } => "Next »".to_string(),
                PageItem::Next { enabled: false } => "(Next »)".to_string(),
            })
            .collect();
        write!(f, "{}", rendered.join(" "))
    }
}

// ============================================================================
// CATEGORY PAGE DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryPageDto {
    pub title: String,
    pub movies: Vec<MovieCardDto>,
    pub pagination: PaginationDto,
}

// ============================================================================
// FAVORITE DTOs
// ============================================================================

/// Outcome of a favorites mutation; `changed` is false for no-ops
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteChangeDto {
    pub movie_id: i64,
    pub title: Option<String>,
    pub changed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PLACEHOLDER_POSTER_URL;
    use crate::domain::page_window;

    fn summary(vote: f64, date: &str, poster: Option<&str>) -> MovieSummary {
        MovieSummary {
            id: 1,
            title: "Inception".to_string(),
            poster_path: poster.map(str::to_string),
            vote_average: vote,
            release_date: date.to_string(),
            overview: "Dreams within dreams".to_string(),
        }
    }

    #[test]
    fn test_rating_tiers() {
        assert_eq!(RatingTier::from_score(8.0), RatingTier::High);
        assert_eq!(RatingTier::from_score(7.9), RatingTier::Medium);
        assert_eq!(RatingTier::from_score(6.0), RatingTier::Medium);
        assert_eq!(RatingTier::from_score(5.9), RatingTier::Low);
    }

    #[test]
    fn test_card_from_summary() {
        let config = CatalogConfig::default();
        let card = MovieCardDto::from_summary(&summary(8.367, "2010-07-15", Some("/x.jpg")), &config);

        assert_eq!(card.rating_label, "8.4");
        assert_eq!(card.rating_tier, RatingTier::High);
        assert_eq!(card.release_year, Some(2010));
        assert_eq!(card.poster_url, "https://image.tmdb.org/t/p/w500/x.jpg");
    }

    #[test]
    fn test_card_for_unrated_unreleased_movie() {
        let config = CatalogConfig::default();
        let card = MovieCardDto::from_summary(&summary(0.0, "", None), &config);

        assert_eq!(card.rating_label, "N/A");
        assert_eq!(card.rating_tier, RatingTier::Low);
        assert_eq!(card.release_year, None);
        assert_eq!(card.poster_url, PLACEHOLDER_POSTER_URL);
    }

    #[test]
    fn test_pagination_items_in_middle() {
        let dto = PaginationDto::from(&page_window(50, 500));
        assert_eq!(dto.to_string(), "« Prev 1 ... 48 49 [50] 51 52 ... 500 Next »");
    }

    #[test]
    fn test_pagination_items_single_page() {
        let dto = PaginationDto::from(&page_window(1, 1));
        assert_eq!(dto.to_string(), "(« Prev) [1] (Next »)");
    }

    #[test]
    fn test_pagination_items_at_end() {
        let dto = PaginationDto::from(&page_window(500, 500));
        assert_eq!(dto.to_string(), "« Prev 1 ... 496 497 498 499 [500] (Next »)");
    }
}
