//! Repository trait for the book/genre association table.

use crate::domain::entities::BookGenre;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for individual association rows.
///
/// Rows are identified by the `(book_id, genre_id)` pair.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgBookGenreRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookGenreRepository: Send + Sync {
    /// Lists all association rows in insertion order.
    async fn list(&self) -> Result<Vec<BookGenre>, AppError>;

    /// Lists the association rows of one book in insertion order.
    async fn list_by_book(&self, book_id: i64) -> Result<Vec<BookGenre>, AppError>;

    async fn find(&self, book_id: i64, genre_id: i64) -> Result<Option<BookGenre>, AppError>;

    /// Inserts one association row.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the book or genre does not exist.
    /// Returns [`AppError::Conflict`] if the pair already exists.
    async fn create(&self, row: BookGenre) -> Result<BookGenre, AppError>;

    /// Rewrites the keys of an existing row. Returns `None` if it does not exist.
    ///
    /// # Errors
    ///
    /// Same as [`BookGenreRepository::create`] for the new keys.
    async fn update(
        &self,
        book_id: i64,
        genre_id: i64,
        row: BookGenre,
    ) -> Result<Option<BookGenre>, AppError>;

    /// Deletes one row, returning it. Returns `None` if it does not exist.
    async fn delete(&self, book_id: i64, genre_id: i64) -> Result<Option<BookGenre>, AppError>;

    /// Deletes every row of a book, returning the removed rows.
    async fn delete_by_book(&self, book_id: i64) -> Result<Vec<BookGenre>, AppError>;
}
