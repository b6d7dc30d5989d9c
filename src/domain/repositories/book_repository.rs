//! Repository trait for books and their genre sets.

use crate::domain::entities::{Book, BookGenre, BookPatch, BookWithGenres, NewBook};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for books.
///
/// Read operations return books with their genres aggregated into
/// delimited strings. Every write that touches more than one row runs in a
/// single transaction.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgBookRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Lists every book with its genre ids, including books without genres.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<BookWithGenres>, AppError>;

    /// Finds a book with both genre ids and genre titles aggregated.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<BookWithGenres>, AppError>;

    /// Inserts a book and its genre associations in one transaction.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a genre id does not exist; the book
    /// is not created in that case.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_book: NewBook, genre_ids: Vec<i64>) -> Result<Book, AppError>;

    /// Applies a partial update and, when `genre_ids` is given, replaces the
    /// book's genre set in the same transaction.
    ///
    /// Returns `None` if the book does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a genre id does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(
        &self,
        id: i64,
        patch: BookPatch,
        genre_ids: Option<Vec<i64>>,
    ) -> Result<Option<Book>, AppError>;

    /// Deletes a book, returning the removed record. Associations cascade.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<Option<Book>, AppError>;

    /// Replaces the whole genre set of a book atomically.
    ///
    /// Returns the new association rows in insertion order, or `None` if the
    /// book does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a genre id does not exist; the
    /// previous genre set is kept.
    /// Returns [`AppError::Internal`] on database errors.
    async fn set_genres(
        &self,
        book_id: i64,
        genre_ids: Vec<i64>,
    ) -> Result<Option<Vec<BookGenre>>, AppError>;
}
