//! PostgreSQL implementation of the book/genre association repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use super::pg_book_repository::BookGenreRow;
use crate::domain::entities::BookGenre;
use crate::domain::repositories::BookGenreRepository;
use crate::error::AppError;

/// PostgreSQL repository for raw association rows.
///
/// Listing follows the hidden `seq` column, i.e. insertion order.
pub struct PgBookGenreRepository {
    pool: Arc<PgPool>,
}

impl PgBookGenreRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookGenreRepository for PgBookGenreRepository {
    async fn list(&self) -> Result<Vec<BookGenre>, AppError> {
        let rows = sqlx::query_as::<_, BookGenreRow>(
            "SELECT book_id, genre_id FROM book_genres ORDER BY seq",
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn list_by_book(&self, book_id: i64) -> Result<Vec<BookGenre>, AppError> {
        let rows = sqlx::query_as::<_, BookGenreRow>(
            "SELECT book_id, genre_id FROM book_genres WHERE book_id = $1 ORDER BY seq",
        )
        .bind(book_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find(&self, book_id: i64, genre_id: i64) -> Result<Option<BookGenre>, AppError> {
        let row = sqlx::query_as::<_, BookGenreRow>(
            "SELECT book_id, genre_id FROM book_genres WHERE book_id = $1 AND genre_id = $2",
        )
        .bind(book_id)
        .bind(genre_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn create(&self, row: BookGenre) -> Result<BookGenre, AppError> {
        let row = sqlx::query_as::<_, BookGenreRow>(
            r#"
            INSERT INTO book_genres (book_id, genre_id)
            VALUES ($1, $2)
            RETURNING book_id, genre_id
            "#,
        )
        .bind(row.book_id)
        .bind(row.genre_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn update(
        &self,
        book_id: i64,
        genre_id: i64,
        row: BookGenre,
    ) -> Result<Option<BookGenre>, AppError> {
        let row = sqlx::query_as::<_, BookGenreRow>(
            r#"
            UPDATE book_genres SET book_id = $3, genre_id = $4
            WHERE book_id = $1 AND genre_id = $2
            RETURNING book_id, genre_id
            "#,
        )
        .bind(book_id)
        .bind(genre_id)
        .bind(row.book_id)
        .bind(row.genre_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn delete(&self, book_id: i64, genre_id: i64) -> Result<Option<BookGenre>, AppError> {
        let row = sqlx::query_as::<_, BookGenreRow>(
            r#"
            DELETE FROM book_genres
            WHERE book_id = $1 AND genre_id = $2
            RETURNING book_id, genre_id
            "#,
        )
        .bind(book_id)
        .bind(genre_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn delete_by_book(&self, book_id: i64) -> Result<Vec<BookGenre>, AppError> {
        let rows = sqlx::query_as::<_, BookGenreRow>(
            r#"
            DELETE FROM book_genres
            WHERE book_id = $1
            RETURNING book_id, genre_id
            "#,
        )
        .bind(book_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        tracing::debug!(book_id, removed = rows.len(), "Cleared book genres");

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
