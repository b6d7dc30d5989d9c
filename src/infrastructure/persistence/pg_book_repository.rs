//! PostgreSQL implementation of the book repository.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{FromRow, PgConnection, PgPool};
use std::sync::Arc;

use crate::domain::entities::{Book, BookGenre, BookPatch, BookWithGenres, NewBook};
use crate::domain::repositories::BookRepository;
use crate::error::AppError;

#[derive(Debug, FromRow)]
struct BookRow {
    id: i64,
    title: String,
    author: String,
    info: Option<String>,
    summary: Option<String>,
    published_at: NaiveDate,
}

impl From<BookRow> for Book {
    fn from(r: BookRow) -> Self {
        Book {
            id: r.id,
            title: r.title,
            author: r.author,
            info: r.info,
            summary: r.summary,
            published_at: r.published_at,
        }
    }
}

#[derive(Debug, FromRow)]
struct BookWithGenresRow {
    #[sqlx(flatten)]
    book: BookRow,
    genre_ids: Option<String>,
    genre_titles: Option<String>,
}

impl From<BookWithGenresRow> for BookWithGenres {
    fn from(r: BookWithGenresRow) -> Self {
        BookWithGenres {
            book: r.book.into(),
            genre_ids: r.genre_ids,
            genre_titles: r.genre_titles,
        }
    }
}

#[derive(Debug, FromRow)]
pub(crate) struct BookGenreRow {
    pub book_id: i64,
    pub genre_id: i64,
}

impl From<BookGenreRow> for BookGenre {
    fn from(r: BookGenreRow) -> Self {
        BookGenre::new(r.book_id, r.genre_id)
    }
}

/// PostgreSQL repository for books.
///
/// Genre aggregates are built with `STRING_AGG ... ORDER BY seq`, so ids and
/// titles come back in the order the associations were inserted.
pub struct PgBookRepository {
    pool: Arc<PgPool>,
}

impl PgBookRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

/// Inserts association rows one by one so `seq` follows the given order.
async fn insert_genres(
    conn: &mut PgConnection,
    book_id: i64,
    genre_ids: &[i64],
) -> Result<Vec<BookGenre>, sqlx::Error> {
    let mut rows = Vec::with_capacity(genre_ids.len());

    for genre_id in genre_ids {
        let row = sqlx::query_as::<_, BookGenreRow>(
            r#"
            INSERT INTO book_genres (book_id, genre_id)
            VALUES ($1, $2)
            RETURNING book_id, genre_id
            "#,
        )
        .bind(book_id)
        .bind(genre_id)
        .fetch_one(&mut *conn)
        .await?;

        rows.push(row.into());
    }

    Ok(rows)
}

/// Clears the genre set of a book and inserts the new one.
///
/// Must run inside a transaction that already holds the book row lock.
async fn replace_genres(
    conn: &mut PgConnection,
    book_id: i64,
    genre_ids: &[i64],
) -> Result<Vec<BookGenre>, sqlx::Error> {
    sqlx::query("DELETE FROM book_genres WHERE book_id = $1")
        .bind(book_id)
        .execute(&mut *conn)
        .await?;

    insert_genres(conn, book_id, genre_ids).await
}

#[async_trait]
impl BookRepository for PgBookRepository {
    async fn list(&self) -> Result<Vec<BookWithGenres>, AppError> {
        let rows = sqlx::query_as::<_, BookWithGenresRow>(
            r#"
            SELECT b.id, b.title, b.author, b.info, b.summary, b.published_at,
                   STRING_AGG(CAST(bg.genre_id AS TEXT), ', ' ORDER BY bg.seq) AS genre_ids,
                   NULL::TEXT AS genre_titles
            FROM books b
            LEFT JOIN book_genres bg ON bg.book_id = b.id
            GROUP BY b.id
            ORDER BY b.id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<BookWithGenres>, AppError> {
        let row = sqlx::query_as::<_, BookWithGenresRow>(
            r#"
            SELECT b.id, b.title, b.author, b.info, b.summary, b.published_at,
                   STRING_AGG(CAST(bg.genre_id AS TEXT), ', ' ORDER BY bg.seq) AS genre_ids,
                   STRING_AGG(CAST(g.title AS TEXT), ', ' ORDER BY bg.seq) AS genre_titles
            FROM books b
            LEFT JOIN book_genres bg ON bg.book_id = b.id
            LEFT JOIN genres g ON g.id = bg.genre_id
            WHERE b.id = $1
            GROUP BY b.id
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn create(&self, new_book: NewBook, genre_ids: Vec<i64>) -> Result<Book, AppError> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, BookRow>(
            r#"
            INSERT INTO books (title, author, info, summary, published_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, author, info, summary, published_at
            "#,
        )
        .bind(&new_book.title)
        .bind(&new_book.author)
        .bind(&new_book.info)
        .bind(&new_book.summary)
        .bind(new_book.published_at)
        .fetch_one(&mut *tx)
        .await?;

        insert_genres(&mut tx, row.id, &genre_ids).await?;

        tx.commit().await?;

        Ok(row.into())
    }

    async fn update(
        &self,
        id: i64,
        patch: BookPatch,
        genre_ids: Option<Vec<i64>>,
    ) -> Result<Option<Book>, AppError> {
        let fields_unchanged = patch.is_empty();
        let update_info = patch.info.is_some();
        let new_info = patch.info.flatten();
        let update_summary = patch.summary.is_some();
        let new_summary = patch.summary.flatten();

        let mut tx = self.pool.begin().await?;

        // Genre-only patches lock the row instead of rewriting it
        let row = if fields_unchanged {
            sqlx::query_as::<_, BookRow>(
                r#"
                SELECT id, title, author, info, summary, published_at
                FROM books
                WHERE id = $1
                FOR UPDATE
                "#,
            )
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
        } else {
            sqlx::query_as::<_, BookRow>(
                r#"
                UPDATE books SET
                    title        = COALESCE($2::TEXT, title),
                    author       = COALESCE($3::TEXT, author),
                    info         = CASE WHEN $4 THEN $5::TEXT ELSE info END,
                    summary      = CASE WHEN $6 THEN $7::TEXT ELSE summary END,
                    published_at = COALESCE($8::DATE, published_at)
                WHERE id = $1
                RETURNING id, title, author, info, summary, published_at
                "#,
            )
            .bind(id)
            .bind(&patch.title)
            .bind(&patch.author)
            .bind(update_info)
            .bind(&new_info)
            .bind(update_summary)
            .bind(&new_summary)
            .bind(patch.published_at)
            .fetch_optional(&mut *tx)
            .await?
        };

        let Some(row) = row else {
            tx.rollback().await?;
            return Ok(None);
        };

        if let Some(genre_ids) = genre_ids {
            replace_genres(&mut tx, id, &genre_ids).await?;
        }

        tx.commit().await?;

        Ok(Some(row.into()))
    }

    async fn delete(&self, id: i64) -> Result<Option<Book>, AppError> {
        let row = sqlx::query_as::<_, BookRow>(
            r#"
            DELETE FROM books
            WHERE id = $1
            RETURNING id, title, author, info, summary, published_at
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn set_genres(
        &self,
        book_id: i64,
        genre_ids: Vec<i64>,
    ) -> Result<Option<Vec<BookGenre>>, AppError> {
        let mut tx = self.pool.begin().await?;

        let exists = sqlx::query_scalar::<_, i64>("SELECT id FROM books WHERE id = $1 FOR UPDATE")
            .bind(book_id)
            .fetch_optional(&mut *tx)
            .await?;

        if exists.is_none() {
            tx.rollback().await?;
            return Ok(None);
        }

        let rows = replace_genres(&mut tx, book_id, &genre_ids).await?;

        tx.commit().await?;

        Ok(Some(rows))
    }
}
