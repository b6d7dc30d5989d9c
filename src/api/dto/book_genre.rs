//! DTOs for the book/genre association endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::BookGenre;

/// Request body for `POST /bookGenres` and `PATCH /bookGenres/{bookId}/{genreId}`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BookGenreRequest {
    #[validate(range(min = 1))]
    pub book_id: i64,

    #[validate(range(min = 1))]
    pub genre_id: i64,
}

impl From<BookGenreRequest> for BookGenre {
    fn from(r: BookGenreRequest) -> Self {
        BookGenre::new(r.book_id, r.genre_id)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookGenreItem {
    pub book_id: i64,
    pub genre_id: i64,
}

impl From<BookGenre> for BookGenreItem {
    fn from(bg: BookGenre) -> Self {
        Self {
            book_id: bg.book_id,
            genre_id: bg.genre_id,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookGenreResponse {
    pub success: bool,
    pub book_genre: BookGenreItem,
}

/// Response for `DELETE /bookGenres/{bookId}/all`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAllBookGenresResponse {
    pub success: bool,
    pub deleted_count: usize,
    pub genres: Vec<BookGenreItem>,
}
