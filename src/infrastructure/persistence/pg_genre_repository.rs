//! PostgreSQL implementation of the genre repository.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{Genre, GenrePatch, NewGenre};
use crate::domain::repositories::GenreRepository;
use crate::error::AppError;

#[derive(Debug, FromRow)]
struct GenreRow {
    id: i64,
    title: String,
}

impl From<GenreRow> for Genre {
    fn from(r: GenreRow) -> Self {
        Genre {
            id: r.id,
            title: r.title,
        }
    }
}

pub struct PgGenreRepository {
    pool: Arc<PgPool>,
}

impl PgGenreRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GenreRepository for PgGenreRepository {
    async fn list(&self) -> Result<Vec<Genre>, AppError> {
        let rows = sqlx::query_as::<_, GenreRow>("SELECT id, title FROM genres ORDER BY id")
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Genre>, AppError> {
        let row = sqlx::query_as::<_, GenreRow>("SELECT id, title FROM genres WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Into::into))
    }

    async fn create(&self, new: NewGenre) -> Result<Genre, AppError> {
        let row = sqlx::query_as::<_, GenreRow>(
            "INSERT INTO genres (title) VALUES ($1) RETURNING id, title",
        )
        .bind(&new.title)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn update(&self, id: i64, patch: GenrePatch) -> Result<Option<Genre>, AppError> {
        let row = sqlx::query_as::<_, GenreRow>(
            r#"
            UPDATE genres SET title = COALESCE($2::TEXT, title)
            WHERE id = $1
            RETURNING id, title
            "#,
        )
        .bind(id)
        .bind(&patch.title)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn delete(&self, id: i64) -> Result<Option<Genre>, AppError> {
        // book_genres rows go with it via ON DELETE CASCADE.
        let row = sqlx::query_as::<_, GenreRow>(
            "DELETE FROM genres WHERE id = $1 RETURNING id, title",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }
}
