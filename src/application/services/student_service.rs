//! Student management service.

use crate::domain::entities::{NewStudent, Student, StudentPatch};
use crate::domain::repositories::StudentRepository;
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Service for students (store users).
pub struct StudentService<R: StudentRepository> {
    repository: Arc<R>,
}

impl<R: StudentRepository> StudentService<R> {
    /// Creates a new student service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists all students ordered by id.
    pub async fn list_students(&self) -> Result<Vec<Student>, AppError> {
        self.repository.list().await
    }

    /// Retrieves a student by primary key.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the student does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_student(&self, id: i64) -> Result<Student, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| student_not_found(id))
    }

    /// Registers a student.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_student(&self, new: NewStudent) -> Result<Student, AppError> {
        self.repository.create(new).await
    }

    /// Partially updates a student.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the student does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_student(&self, id: i64, patch: StudentPatch) -> Result<Student, AppError> {
        self.repository
            .update(id, patch)
            .await?
            .ok_or_else(|| student_not_found(id))
    }

    /// Deletes a student, returning the removed record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the student does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_student(&self, id: i64) -> Result<Student, AppError> {
        self.repository
            .delete(id)
            .await?
            .ok_or_else(|| student_not_found(id))
    }
}

fn student_not_found(id: i64) -> AppError {
    AppError::not_found("Student not found", json!({ "id": id }))
}
