//! Domain entity representing a book in the catalogue.

use chrono::NaiveDate;

/// Separator used when genre ids and titles are aggregated into one string.
pub const GENRE_SEPARATOR: &str = ", ";

/// A book record as stored in the `books` table.
#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub info: Option<String>,
    pub summary: Option<String>,
    pub published_at: NaiveDate,
}

/// A book together with its genres, aggregated over the association table.
///
/// Both aggregates are `None` when the book has no genres. `genre_titles` is
/// only filled by the single-book lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct BookWithGenres {
    pub book: Book,
    pub genre_ids: Option<String>,
    pub genre_titles: Option<String>,
}

impl BookWithGenres {
    /// Parses the aggregated genre id string back into ids, in insertion order.
    pub fn genre_id_list(&self) -> Vec<i64> {
        self.genre_ids
            .as_deref()
            .map(|ids| {
                ids.split(GENRE_SEPARATOR)
                    .filter_map(|id| id.trim().parse().ok())
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Input data for creating a new book.
#[derive(Debug, Clone)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub info: Option<String>,
    pub summary: Option<String>,
    pub published_at: NaiveDate,
}

/// Partial update for a book.
///
/// `info` and `summary` are nullable columns: the outer `Option` says whether
/// the field is touched, the inner one carries the new value or `NULL`.
#[derive(Debug, Clone, Default)]
pub struct BookPatch {
    pub title: Option<String>,
    pub author: Option<String>,
    pub info: Option<Option<String>>,
    pub summary: Option<Option<String>>,
    pub published_at: Option<NaiveDate>,
}

impl BookPatch {
    /// Returns true if the patch touches no column.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.author.is_none()
            && self.info.is_none()
            && self.summary.is_none()
            && self.published_at.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_book() -> Book {
        Book {
            id: 1,
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            info: None,
            summary: None,
            published_at: NaiveDate::from_ymd_opt(1965, 8, 1).unwrap(),
        }
    }

    #[test]
    fn test_genre_id_list_keeps_order() {
        let view = BookWithGenres {
            book: sample_book(),
            genre_ids: Some("7, 3, 12".to_string()),
            genre_titles: None,
        };

        assert_eq!(view.genre_id_list(), vec![7, 3, 12]);
    }

    #[test]
    fn test_genre_id_list_without_genres() {
        let view = BookWithGenres {
            book: sample_book(),
            genre_ids: None,
            genre_titles: None,
        };

        assert!(view.genre_id_list().is_empty());
    }

    #[test]
    fn test_book_patch_is_empty() {
        assert!(BookPatch::default().is_empty());

        let clear_info = BookPatch {
            info: Some(None),
            ..Default::default()
        };
        assert!(!clear_info.is_empty());
    }
}
