//! Genre management service.

use crate::domain::entities::{Genre, GenrePatch, NewGenre};
use crate::domain::repositories::GenreRepository;
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Service for genres. Duplicate titles are allowed.
pub struct GenreService<R: GenreRepository> {
    repository: Arc<R>,
}

impl<R: GenreRepository> GenreService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn list_genres(&self) -> Result<Vec<Genre>, AppError> {
        self.repository.list().await
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the genre does not exist.
    pub async fn get_genre(&self, id: i64) -> Result<Genre, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| genre_not_found(id))
    }

    pub async fn create_genre(&self, new: NewGenre) -> Result<Genre, AppError> {
        self.repository.create(new).await
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the genre does not exist.
    pub async fn update_genre(&self, id: i64, patch: GenrePatch) -> Result<Genre, AppError> {
        self.repository
            .update(id, patch)
            .await?
            .ok_or_else(|| genre_not_found(id))
    }

    /// Deletes a genre. Books lose the genre through the association cascade.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the genre does not exist.
    pub async fn delete_genre(&self, id: i64) -> Result<Genre, AppError> {
        self.repository
            .delete(id)
            .await?
            .ok_or_else(|| genre_not_found(id))
    }
}

fn genre_not_found(id: i64) -> AppError {
    AppError::not_found("Genre not found", json!({ "id": id }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockGenreRepository;

    #[tokio::test]
    async fn test_get_genre_not_found() {
        let mut mock_repo = MockGenreRepository::new();

        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = GenreService::new(Arc::new(mock_repo));

        match service.get_genre(9).await.unwrap_err() {
            AppError::NotFound { message, .. } => assert_eq!(message, "Genre not found"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_create_genre() {
        let mut mock_repo = MockGenreRepository::new();

        mock_repo
            .expect_create()
            .withf(|new| new.title == "Fantasy")
            .times(1)
            .returning(|new| {
                Ok(Genre {
                    id: 1,
                    title: new.title,
                })
            });

        let service = GenreService::new(Arc::new(mock_repo));

        let genre = service
            .create_genre(NewGenre {
                title: "Fantasy".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(genre.id, 1);
        assert_eq!(genre.title, "Fantasy");
    }

    #[tokio::test]
    async fn test_delete_genre_not_found() {
        let mut mock_repo = MockGenreRepository::new();

        mock_repo.expect_delete().times(1).returning(|_| Ok(None));

        let service = GenreService::new(Arc::new(mock_repo));

        assert!(matches!(
            service.delete_genre(1).await.unwrap_err(),
            AppError::NotFound { .. }
        ));
    }
}
