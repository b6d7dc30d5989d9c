//! Handlers for book endpoints.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
};

use crate::api::dto::book::{
    BookDetailItem, BookListItem, BookResponse, CreateBookRequest, CreateBookResponse,
    SetGenresRequest, SetGenresResponse, UpdateBookRequest,
};
use crate::api::extractors::{PathParam, ValidatedJson};
use crate::domain::entities::{BookPatch, NewBook};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all books with their genre ids.
///
/// # Endpoint
///
/// `GET /books`
pub async fn list_books_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<BookListItem>>, AppError> {
    let books = state.book_service.list_books().await?;

    Ok(Json(books.into_iter().map(Into::into).collect()))
}

/// Returns one book with genre ids and titles.
///
/// # Endpoint
///
/// `GET /books/{id}`
///
/// # Errors
///
/// Returns 404 if the book does not exist.
pub async fn get_book_handler(
    PathParam(id): PathParam<i64>,
    State(state): State<AppState>,
) -> Result<Json<BookDetailItem>, AppError> {
    let book = state.book_service.get_book(id).await?;

    Ok(Json(book.into()))
}

/// Creates a book and its genre associations in one transaction.
///
/// # Endpoint
///
/// `POST /books`
///
/// # Errors
///
/// Returns 400 on validation failure or an unknown genre id.
pub async fn create_book_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateBookRequest>,
) -> Result<(StatusCode, Json<CreateBookResponse>), AppError> {
    let new_book = NewBook {
        title: payload.title,
        author: payload.author,
        info: payload.info,
        summary: payload.summary,
        published_at: payload.published_at,
    };

    let (book, genre_ids) = state
        .book_service
        .create_book(new_book, payload.genres_id.unwrap_or_default())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateBookResponse {
            success: true,
            book_id: book.id,
            book: book.into(),
            genres_id: genre_ids,
        }),
    ))
}

/// Partially updates a book.
///
/// # Endpoint
///
/// `PATCH /books/{id}`
///
/// `info: null` / `summary: null` clear those fields. A `genresId` array
/// replaces the genre set in the same transaction.
///
/// # Errors
///
/// Returns 400 on validation failure or an unknown genre id.
/// Returns 404 if the book does not exist.
pub async fn update_book_handler(
    PathParam(id): PathParam<i64>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UpdateBookRequest>,
) -> Result<Json<BookResponse>, AppError> {
    let patch = BookPatch {
        title: payload.title,
        author: payload.author,
        info: payload.info,
        summary: payload.summary,
        published_at: payload.published_at,
    };

    let book = state
        .book_service
        .update_book(id, patch, payload.genres_id)
        .await?;

    Ok(Json(BookResponse {
        success: true,
        book: book.into(),
    }))
}

/// Deletes a book; its genre associations go with it.
///
/// # Endpoint
///
/// `DELETE /books/{id}`
///
/// # Errors
///
/// Returns 404 if the book does not exist.
pub async fn delete_book_handler(
    PathParam(id): PathParam<i64>,
    State(state): State<AppState>,
) -> Result<Json<BookResponse>, AppError> {
    let book = state.book_service.delete_book(id).await?;

    Ok(Json(BookResponse {
        success: true,
        book: book.into(),
    }))
}

/// Replaces the genre set of a book atomically.
///
/// # Endpoint
///
/// `PUT /books/{id}/genres`
///
/// # Errors
///
/// Returns 400 if any genre id is unknown; the previous set is kept.
/// Returns 404 if the book does not exist.
pub async fn set_book_genres_handler(
    PathParam(id): PathParam<i64>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<SetGenresRequest>,
) -> Result<Json<SetGenresResponse>, AppError> {
    let rows = state.book_service.set_genres(id, payload.genres_id).await?;

    Ok(Json(SetGenresResponse {
        success: true,
        book_id: id,
        genres: rows.into_iter().map(Into::into).collect(),
    }))
}
