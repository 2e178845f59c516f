use serde::{Deserialize, Serialize};

use crate::domain::movie::entity::null_as_default;
use crate::domain::movie::{validate_movie, Genre, MovieDetail, MovieSummary};
use crate::domain::DomainResult;

/// A bookmarked movie, persisted verbatim in the favorites entry
///
/// Uniqueness is by `id` and is enforced by the favorites store,
/// not by this type. Records favorited from a detail view keep
/// their tagline and genres.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteRecord {
    #[serde(flatten)]
    pub movie: MovieSummary,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,

    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub genres: Vec<Genre>,
}

impl FavoriteRecord {
    pub fn id(&self) -> i64 {
        self.movie.id
    }
}

impl From<MovieSummary> for FavoriteRecord {
    fn from(movie: MovieSummary) -> Self {
        Self {
            movie,
            tagline: None,
            genres: Vec::new(),
        }
    }
}

impl From<MovieDetail> for FavoriteRecord {
    fn from(detail: MovieDetail) -> Self {
        Self {
            movie: detail.summary,
            tagline: detail.tagline,
            genres: detail.genres,
        }
    }
}

impl std::fmt::Display for FavoriteRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (#{})", self.movie.title, self.movie.id)
    }
}

pub fn validate_favorite(record: &FavoriteRecord) -> DomainResult<()> {
    validate_movie(&record.movie)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_layout_is_flat() {
        let record = FavoriteRecord::from(MovieSummary {
            id: 13,
            title: "Forrest Gump".to_string(),
            poster_path: Some("/arw2vcBveWOVZr6pxd9XTd1TdQa.jpg".to_string()),
            vote_average: 8.5,
            release_date: "1994-06-23".to_string(),
            overview: String::new(),
        });

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["id"], 13);
        assert_eq!(value["title"], "Forrest Gump");
        assert!(value.get("tagline").is_none());
        assert!(value.get("genres").is_none());
    }

    #[test]
    fn test_from_detail_keeps_genres() {
        let detail: MovieDetail = serde_json::from_str(
            r#"{"id": 13, "title": "Forrest Gump", "genres": [{"id": 35, "name": "Comedy"}]}"#,
        )
        .unwrap();

        let record = FavoriteRecord::from(detail);
        assert_eq!(record.id(), 13);
        assert_eq!(record.genres.len(), 1);
    }

    #[test]
    fn test_stored_records_with_null_fields_parse() {
        let raw = r#"[
            {"id": 1, "title": "Kept"},
            {"id": 2, "title": "Partial", "release_date": null, "overview": null, "genres": null, "tagline": null}
        ]"#;

        let records: Vec<FavoriteRecord> = serde_json::from_str(raw).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].movie.title, "Partial");
        assert!(records[1].movie.release_date.is_empty());
        assert!(records[1].genres.is_empty());
        assert!(records[1].tagline.is_none());
    }
}
