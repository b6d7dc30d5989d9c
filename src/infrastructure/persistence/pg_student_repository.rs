//! PostgreSQL implementation of the student repository.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{NewStudent, Student, StudentPatch};
use crate::domain::repositories::StudentRepository;
use crate::error::AppError;

#[derive(Debug, FromRow)]
struct StudentRow {
    id: i64,
    name: String,
    surname: String,
    user_id: i64,
    birth: NaiveDate,
    sex: String,
}

impl From<StudentRow> for Student {
    fn from(r: StudentRow) -> Self {
        Student {
            id: r.id,
            name: r.name,
            surname: r.surname,
            user_id: r.user_id,
            birth: r.birth,
            sex: r.sex,
        }
    }
}

/// PostgreSQL repository for students, stored in the `users` table.
pub struct PgStudentRepository {
    pool: Arc<PgPool>,
}

impl PgStudentRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StudentRepository for PgStudentRepository {
    async fn list(&self) -> Result<Vec<Student>, AppError> {
        let rows = sqlx::query_as::<_, StudentRow>(
            "SELECT id, name, surname, user_id, birth, sex FROM users ORDER BY id",
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Student>, AppError> {
        let row = sqlx::query_as::<_, StudentRow>(
            "SELECT id, name, surname, user_id, birth, sex FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn create(&self, new: NewStudent) -> Result<Student, AppError> {
        let row = sqlx::query_as::<_, StudentRow>(
            r#"
            INSERT INTO users (name, surname, user_id, birth, sex)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, surname, user_id, birth, sex
            "#,
        )
        .bind(&new.name)
        .bind(&new.surname)
        .bind(new.user_id)
        .bind(new.birth)
        .bind(&new.sex)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn update(&self, id: i64, patch: StudentPatch) -> Result<Option<Student>, AppError> {
        let row = sqlx::query_as::<_, StudentRow>(
            r#"
            UPDATE users SET
                name    = COALESCE($2::TEXT, name),
                surname = COALESCE($3::TEXT, surname),
                user_id = COALESCE($4::BIGINT, user_id),
                birth   = COALESCE($5::DATE, birth),
                sex     = COALESCE($6::TEXT, sex)
            WHERE id = $1
            RETURNING id, name, surname, user_id, birth, sex
            "#,
        )
        .bind(id)
        .bind(&patch.name)
        .bind(&patch.surname)
        .bind(patch.user_id)
        .bind(patch.birth)
        .bind(&patch.sex)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn delete(&self, id: i64) -> Result<Option<Student>, AppError> {
        let row = sqlx::query_as::<_, StudentRow>(
            r#"
            DELETE FROM users
            WHERE id = $1
            RETURNING id, name, surname, user_id, birth, sex
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }
}
