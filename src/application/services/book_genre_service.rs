//! Service for individual book/genre association rows.

use crate::domain::entities::BookGenre;
use crate::domain::repositories::BookGenreRepository;
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Row-level access to the association table.
///
/// Replacing a book's whole genre set belongs to
/// [`crate::application::services::BookService::set_genres`]; this service
/// keeps the single-row operations the front-end used before that existed.
pub struct BookGenreService<R: BookGenreRepository> {
    repository: Arc<R>,
}

impl<R: BookGenreRepository> BookGenreService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> Result<Vec<BookGenre>, AppError> {
        self.repository.list().await
    }

    pub async fn list_for_book(&self, book_id: i64) -> Result<Vec<BookGenre>, AppError> {
        self.repository.list_by_book(book_id).await
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the pair does not exist.
    pub async fn get(&self, book_id: i64, genre_id: i64) -> Result<BookGenre, AppError> {
        self.repository
            .find(book_id, genre_id)
            .await?
            .ok_or_else(|| not_found(book_id, genre_id))
    }

    /// Creates one association.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the book or genre does not exist.
    /// Returns [`AppError::Conflict`] if the pair already exists.
    pub async fn create(&self, row: BookGenre) -> Result<BookGenre, AppError> {
        self.repository.create(row).await
    }

    /// Rewrites the keys of an association.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the original pair does not exist.
    /// Returns [`AppError::Validation`] / [`AppError::Conflict`] for bad new keys.
    pub async fn update(
        &self,
        book_id: i64,
        genre_id: i64,
        row: BookGenre,
    ) -> Result<BookGenre, AppError> {
        self.repository
            .update(book_id, genre_id, row)
            .await?
            .ok_or_else(|| not_found(book_id, genre_id))
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the pair does not exist.
    pub async fn delete(&self, book_id: i64, genre_id: i64) -> Result<BookGenre, AppError> {
        self.repository
            .delete(book_id, genre_id)
            .await?
            .ok_or_else(|| not_found(book_id, genre_id))
    }

    /// Removes every association of a book. An empty result is not an error.
    pub async fn delete_all_for_book(&self, book_id: i64) -> Result<Vec<BookGenre>, AppError> {
        self.repository.delete_by_book(book_id).await
    }
}

fn not_found(book_id: i64, genre_id: i64) -> AppError {
    AppError::not_found(
        "BookGenre not found",
        json!({ "bookId": book_id, "genreId": genre_id }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockBookGenreRepository;

    #[tokio::test]
    async fn test_get_missing_pair() {
        let mut mock_repo = MockBookGenreRepository::new();

        mock_repo
            .expect_find()
            .withf(|b, g| *b == 1 && *g == 2)
            .times(1)
            .returning(|_, _| Ok(None));

        let service = BookGenreService::new(Arc::new(mock_repo));

        match service.get(1, 2).await.unwrap_err() {
            AppError::NotFound { message, .. } => assert_eq!(message, "BookGenre not found"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_update_rewrites_keys() {
        let mut mock_repo = MockBookGenreRepository::new();

        mock_repo
            .expect_update()
            .withf(|b, g, row| *b == 1 && *g == 2 && *row == BookGenre::new(1, 3))
            .times(1)
            .returning(|_, _, row| Ok(Some(row)));

        let service = BookGenreService::new(Arc::new(mock_repo));

        let updated = service.update(1, 2, BookGenre::new(1, 3)).await.unwrap();
        assert_eq!(updated, BookGenre::new(1, 3));
    }

    #[tokio::test]
    async fn test_delete_missing_pair() {
        let mut mock_repo = MockBookGenreRepository::new();

        mock_repo
            .expect_delete()
            .times(1)
            .returning(|_, _| Ok(None));

        let service = BookGenreService::new(Arc::new(mock_repo));

        assert!(matches!(
            service.delete(4, 4).await.unwrap_err(),
            AppError::NotFound { .. }
        ));
    }

    #[tokio::test]
    async fn test_delete_all_for_book_empty_is_ok() {
        let mut mock_repo = MockBookGenreRepository::new();

        mock_repo
            .expect_delete_by_book()
            .withf(|b| *b == 8)
            .times(1)
            .returning(|_| Ok(vec![]));

        let service = BookGenreService::new(Arc::new(mock_repo));

        let removed = service.delete_all_for_book(8).await.unwrap();
        assert!(removed.is_empty());
    }
}
