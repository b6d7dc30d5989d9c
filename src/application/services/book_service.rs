//! Book management service.

use crate::domain::entities::{Book, BookGenre, BookPatch, BookWithGenres, NewBook};
use crate::domain::repositories::BookRepository;
use crate::error::AppError;
use serde_json::json;
use std::collections::HashSet;
use std::sync::Arc;

/// Service for books and their genre sets.
///
/// Genre id lists are deduplicated before they reach the repository, so a
/// client sending `[3, 5, 3]` gets genres `3, 5` rather than a key conflict.
pub struct BookService<R: BookRepository> {
    repository: Arc<R>,
}

impl<R: BookRepository> BookService<R> {
    /// Creates a new book service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists all books with their aggregated genre ids.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_books(&self) -> Result<Vec<BookWithGenres>, AppError> {
        self.repository.list().await
    }

    /// Retrieves one book with genre ids and titles.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the book does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_book(&self, id: i64) -> Result<BookWithGenres, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| book_not_found(id))
    }

    /// Creates a book together with its genre associations.
    ///
    /// The book and all associations are written in one transaction; an
    /// unknown genre id leaves nothing behind.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a genre does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_book(
        &self,
        new_book: NewBook,
        genre_ids: Vec<i64>,
    ) -> Result<(Book, Vec<i64>), AppError> {
        let genre_ids = dedupe_genre_ids(genre_ids);

        let book = self
            .repository
            .create(new_book, genre_ids.clone())
            .await?;

        tracing::info!(book_id = book.id, genres = genre_ids.len(), "Book created");

        Ok((book, genre_ids))
    }

    /// Partially updates a book.
    ///
    /// When `genre_ids` is present the book's genre set is replaced in the
    /// same transaction as the field update.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the book does not exist.
    /// Returns [`AppError::Validation`] if a genre does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_book(
        &self,
        id: i64,
        patch: BookPatch,
        genre_ids: Option<Vec<i64>>,
    ) -> Result<Book, AppError> {
        let genre_ids = genre_ids.map(dedupe_genre_ids);

        self.repository
            .update(id, patch, genre_ids)
            .await?
            .ok_or_else(|| book_not_found(id))
    }

    /// Deletes a book and, through the cascade, its genre associations.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the book does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_book(&self, id: i64) -> Result<Book, AppError> {
        let book = self
            .repository
            .delete(id)
            .await?
            .ok_or_else(|| book_not_found(id))?;

        tracing::info!(book_id = id, "Book deleted");

        Ok(book)
    }

    /// Replaces the genre set of a book atomically.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the book does not exist.
    /// Returns [`AppError::Validation`] if a genre does not exist; the
    /// previous set is kept.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn set_genres(
        &self,
        book_id: i64,
        genre_ids: Vec<i64>,
    ) -> Result<Vec<BookGenre>, AppError> {
        let genre_ids = dedupe_genre_ids(genre_ids);

        self.repository
            .set_genres(book_id, genre_ids)
            .await?
            .ok_or_else(|| book_not_found(book_id))
    }
}

fn book_not_found(id: i64) -> AppError {
    AppError::not_found("Book not found", json!({ "id": id }))
}

/// Removes repeated genre ids, keeping the first occurrence of each.
pub fn dedupe_genre_ids(genre_ids: Vec<i64>) -> Vec<i64> {
    let mut seen = HashSet::with_capacity(genre_ids.len());
    genre_ids.into_iter().filter(|id| seen.insert(*id)).collect()
}
