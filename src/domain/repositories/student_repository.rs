//! Repository trait for students.

use crate::domain::entities::{NewStudent, Student, StudentPatch};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for students.
///
/// Students live in the `users` table; `user_id` is the client-supplied
/// external id and is not unique.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgStudentRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StudentRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Student>, AppError>;

    /// Finds a student by primary key (not by external `user_id`).
    async fn find_by_id(&self, id: i64) -> Result<Option<Student>, AppError>;

    async fn create(&self, new: NewStudent) -> Result<Student, AppError>;

    /// Applies a partial update. Returns `None` if the record does not exist.
    async fn update(&self, id: i64, patch: StudentPatch) -> Result<Option<Student>, AppError>;

    /// Deletes a record, returning it. Returns `None` if it does not exist.
    async fn delete(&self, id: i64) -> Result<Option<Student>, AppError>;
}
