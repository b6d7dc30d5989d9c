//! Repository trait for genres.

use crate::domain::entities::{Genre, GenrePatch, NewGenre};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for genres.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgGenreRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GenreRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Genre>, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Genre>, AppError>;

    async fn create(&self, new: NewGenre) -> Result<Genre, AppError>;

    /// Returns `None` if the genre does not exist.
    async fn update(&self, id: i64, patch: GenrePatch) -> Result<Option<Genre>, AppError>;

    /// Deletes a genre, returning it. Association rows referencing it cascade.
    async fn delete(&self, id: i64) -> Result<Option<Genre>, AppError>;
}
