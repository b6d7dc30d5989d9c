//! Handlers for the book/genre association endpoints.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
};

use crate::api::dto::book_genre::{
    BookGenreItem, BookGenreRequest, BookGenreResponse, DeleteAllBookGenresResponse,
};
use crate::api::extractors::{PathParam, ValidatedJson};
use crate::error::AppError;
use crate::state::AppState;

/// `GET /bookGenres`
pub async fn list_book_genres_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<BookGenreItem>>, AppError> {
    let rows = state.book_genre_service.list().await?;

    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

/// `GET /bookGenres/{bookId}/all`
///
/// An unknown book yields an empty array.
pub async fn list_genres_for_book_handler(
    PathParam(book_id): PathParam<i64>,
    State(state): State<AppState>,
) -> Result<Json<Vec<BookGenreItem>>, AppError> {
    let rows = state.book_genre_service.list_for_book(book_id).await?;

    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

/// `GET /bookGenres/{bookId}/{genreId}`
pub async fn get_book_genre_handler(
    PathParam((book_id, genre_id)): PathParam<(i64, i64)>,
    State(state): State<AppState>,
) -> Result<Json<BookGenreItem>, AppError> {
    let row = state.book_genre_service.get(book_id, genre_id).await?;

    Ok(Json(row.into()))
}

/// Adds one association.
///
/// # Endpoint
///
/// `POST /bookGenres`
///
/// # Errors
///
/// Returns 400 if the book or genre does not exist.
/// Returns 409 if the pair already exists.
pub async fn create_book_genre_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<BookGenreRequest>,
) -> Result<(StatusCode, Json<BookGenreResponse>), AppError> {
    let row = state.book_genre_service.create(payload.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(BookGenreResponse {
            success: true,
            book_genre: row.into(),
        }),
    ))
}

/// Rewrites the keys of an association.
///
/// # Endpoint
///
/// `PATCH /bookGenres/{bookId}/{genreId}`
///
/// # Errors
///
/// Returns 404 if the original pair does not exist.
/// Returns 400 / 409 if the new keys are invalid or already taken.
pub async fn update_book_genre_handler(
    PathParam((book_id, genre_id)): PathParam<(i64, i64)>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<BookGenreRequest>,
) -> Result<Json<BookGenreResponse>, AppError> {
    let row = state
        .book_genre_service
        .update(book_id, genre_id, payload.into())
        .await?;

    Ok(Json(BookGenreResponse {
        success: true,
        book_genre: row.into(),
    }))
}

/// `DELETE /bookGenres/{bookId}/{genreId}`
pub async fn delete_book_genre_handler(
    PathParam((book_id, genre_id)): PathParam<(i64, i64)>,
    State(state): State<AppState>,
) -> Result<Json<BookGenreResponse>, AppError> {
    let row = state.book_genre_service.delete(book_id, genre_id).await?;

    Ok(Json(BookGenreResponse {
        success: true,
        book_genre: row.into(),
    }))
}

/// `DELETE /bookGenres/{bookId}/all`
///
/// Never 404s; a book without associations returns `deletedCount: 0`.
pub async fn delete_all_book_genres_handler(
    PathParam(book_id): PathParam<i64>,
    State(state): State<AppState>,
) -> Result<Json<DeleteAllBookGenresResponse>, AppError> {
    let rows = state.book_genre_service.delete_all_for_book(book_id).await?;

    Ok(Json(DeleteAllBookGenresResponse {
        success: true,
        deleted_count: rows.len(),
        genres: rows.into_iter().map(Into::into).collect(),
    }))
}
