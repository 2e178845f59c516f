use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

use crate::domain::DomainError;

/// A movie as it appears in catalog listings
/// Immutable once fetched; field names follow the catalog payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieSummary {
    /// Catalog-assigned identifier, stable across requests
    pub id: i64,

    pub title: String,

    /// Relative poster path (e.g. "/abc.jpg"), resolved against the image base URL
    #[serde(default)]
    pub poster_path: Option<String>,

    /// Average rating in [0, 10]
    #[serde(default, deserialize_with = "null_as_default")]
    pub vote_average: f64,

    /// ISO date (YYYY-MM-DD); empty for unreleased titles
    #[serde(default, deserialize_with = "null_as_default")]
    pub release_date: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub overview: String,
}

/// Read an explicit `null` the same way as a missing field
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    #[serde(default)]
    pub id: i64,
    pub name: String,
}

/// Full movie detail: summary fields plus tagline and genres
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetail {
    #[serde(flatten)]
    pub summary: MovieSummary,

    #[serde(default)]
    pub tagline: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub genres: Vec<Genre>,

    /// Runtime in minutes
    #[serde(default)]
    pub runtime: Option<u32>,
}

impl MovieDetail {
    pub fn id(&self) -> i64 {
        self.summary.id
    }

    /// Genre names joined for display ("Drama, Crime")
    pub fn genre_names(&self) -> String {
        self.genres
            .iter()
            .map(|g| g.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// One page of a category listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoviePage {
    #[serde(default = "first_page")]
    pub page: u32,

    #[serde(default, deserialize_with = "null_as_default")]
    pub results: Vec<MovieSummary>,

    #[serde(default = "first_page")]
    pub total_pages: u32,

    #[serde(default)]
    pub total_results: u32,
}

fn first_page() -> u32 {
    1
}

/// Remote catalog collections that can be browsed page by page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovieCategory {
    Popular,
    TopRated,
    NowPlaying,
    Upcoming,
}

impl MovieCategory {
    pub const ALL: [MovieCategory; 4] = [
        MovieCategory::Popular,
        MovieCategory::TopRated,
        MovieCategory::NowPlaying,
        MovieCategory::Upcoming,
    ];

    /// Path segment used by the catalog API (`/movie/{segment}`)
    pub fn path_segment(&self) -> &'static str {
        match self {
            MovieCategory::Popular => "popular",
            MovieCategory::TopRated => "top_rated",
            MovieCategory::NowPlaying => "now_playing",
            MovieCategory::Upcoming => "upcoming",
        }
    }

    pub fn display_title(&self) -> &'static str {
        match self {
            MovieCategory::Popular => "Popular Movies",
            MovieCategory::TopRated => "Top Rated Movies",
            MovieCategory::NowPlaying => "Now Playing",
            MovieCategory::Upcoming => "Upcoming Movies",
        }
    }
}

impl std::fmt::Display for MovieCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path_segment())
    }
}

impl FromStr for MovieCategory {
    type Err = DomainError;

    /// Accepts the API segment as well as the dashed route form ("top-rated")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "popular" => Ok(MovieCategory::Popular),
            "top_rated" => Ok(MovieCategory::TopRated),
            "now_playing" => Ok(MovieCategory::NowPlaying),
            "upcoming" => Ok(MovieCategory::Upcoming),
            _ => Err(DomainError::UnknownCategory(s.to_string())),
        }
    }
}
