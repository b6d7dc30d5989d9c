//! DTOs for book endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::book_genre::BookGenreItem;
use crate::domain::entities::{Book, BookWithGenres};

/// Request body for `POST /books`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookRequest {
    #[validate(length(min = 1, max = 255))]
    pub title: String,

    #[validate(length(min = 1, max = 255))]
    pub author: String,

    pub published_at: NaiveDate,

    #[validate(length(min = 1, max = 255))]
    pub info: Option<String>,

    #[validate(length(min = 1, max = 255))]
    pub summary: Option<String>,

    /// Genres to associate, in display order. `null` or absent means none.
    #[serde(default)]
    pub genres_id: Option<Vec<i64>>,
}

/// Request body for `PATCH /books/{id}`.
///
/// All fields are optional; only provided fields are changed.
///
/// # `info` / `summary` semantics
///
/// - **Absent** → leave existing value unchanged
/// - **`null`** → clear the value
/// - **String** → set new value
///
/// When `genresId` is present the book's genres are replaced by that list in
/// the same transaction as the field update.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookRequest {
    #[validate(length(min = 1, max = 255))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = 255))]
    pub author: Option<String>,

    pub published_at: Option<NaiveDate>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    #[validate(length(min = 1, max = 255))]
    pub info: Option<Option<String>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    #[validate(length(min = 1, max = 255))]
    pub summary: Option<Option<String>>,

    pub genres_id: Option<Vec<i64>>,
}

/// Request body for `PUT /books/{id}/genres`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SetGenresRequest {
    pub genres_id: Vec<i64>,
}

/// A bare book record.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookItem {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub info: Option<String>,
    pub summary: Option<String>,
    pub published_at: NaiveDate,
}

impl From<Book> for BookItem {
    fn from(b: Book) -> Self {
        Self {
            id: b.id,
            title: b.title,
            author: b.author,
            info: b.info,
            summary: b.summary,
            published_at: b.published_at,
        }
    }
}

/// Book in the list view with its genre ids joined into one string.
#[derive(Debug, Serialize)]
pub struct BookListItem {
    #[serde(flatten)]
    pub book: BookItem,

    /// Genre ids, `", "`-separated in insertion order; `null` without genres.
    pub genres: Option<String>,
}

impl From<BookWithGenres> for BookListItem {
    fn from(b: BookWithGenres) -> Self {
        Self {
            book: b.book.into(),
            genres: b.genre_ids,
        }
    }
}

/// Book detail view with genre ids and titles.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookDetailItem {
    #[serde(flatten)]
    pub book: BookItem,
    pub genres: Option<String>,
    pub genres_title: Option<String>,
}

impl From<BookWithGenres> for BookDetailItem {
    fn from(b: BookWithGenres) -> Self {
        Self {
            book: b.book.into(),
            genres: b.genre_ids,
            genres_title: b.genre_titles,
        }
    }
}

/// Response for `POST /books`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookResponse {
    pub success: bool,
    pub book: BookItem,
    /// Id of the new book, kept under the key the front-end reads.
    #[serde(rename = "bookid")]
    pub book_id: i64,
    pub genres_id: Vec<i64>,
}

/// Response for `PATCH` and `DELETE /books/{id}`.
#[derive(Debug, Serialize)]
pub struct BookResponse {
    pub success: bool,
    pub book: BookItem,
}

/// Response for `PUT /books/{id}/genres`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetGenresResponse {
    pub success: bool,
    pub book_id: i64,
    pub genres: Vec<BookGenreItem>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_request_camel_case() {
        let req: CreateBookRequest = serde_json::from_value(json!({
            "title": "Dune",
            "author": "Frank Herbert",
            "publishedAt": "1965-08-01",
            "info": null,
            "summary": "Spice",
            "genresId": [1, 2]
        }))
        .unwrap();

        assert_eq!(req.published_at, NaiveDate::from_ymd_opt(1965, 8, 1).unwrap());
        assert_eq!(req.genres_id, Some(vec![1, 2]));
        assert!(req.info.is_none());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_create_request_rejects_empty_title() {
        let req: CreateBookRequest = serde_json::from_value(json!({
            "title": "",
            "author": "Frank Herbert",
            "publishedAt": "1965-08-01"
        }))
        .unwrap();

        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("title"));
    }

    #[test]
    fn test_update_request_distinguishes_null_and_absent() {
        let req: UpdateBookRequest = serde_json::from_value(json!({
            "info": null
        }))
        .unwrap();

        assert_eq!(req.info, Some(None));
        assert_eq!(req.summary, None);
        assert!(req.title.is_none());
    }

    #[test]
    fn test_detail_item_serialization() {
        let item = BookDetailItem {
            book: BookItem {
                id: 1,
                title: "Dune".to_string(),
                author: "Frank Herbert".to_string(),
                info: None,
                summary: None,
                published_at: NaiveDate::from_ymd_opt(1965, 8, 1).unwrap(),
            },
            genres: Some("1, 2".to_string()),
            genres_title: Some("Sci-Fi, Classic".to_string()),
        };

        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["publishedAt"], "1965-08-01");
        assert_eq!(value["genres"], "1, 2");
        assert_eq!(value["genresTitle"], "Sci-Fi, Classic");
        assert_eq!(value["id"], 1);
    }
}
