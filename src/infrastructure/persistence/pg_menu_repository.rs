//! PostgreSQL implementation of the menu repository.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{Menu, MenuPatch, NewMenu};
use crate::domain::repositories::MenuRepository;
use crate::error::AppError;

#[derive(Debug, FromRow)]
struct MenuRow {
    id: i64,
    name: Option<String>,
}

impl From<MenuRow> for Menu {
    fn from(r: MenuRow) -> Self {
        Menu {
            id: r.id,
            name: r.name,
        }
    }
}

pub struct PgMenuRepository {
    pool: Arc<PgPool>,
}

impl PgMenuRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MenuRepository for PgMenuRepository {
    async fn list(&self) -> Result<Vec<Menu>, AppError> {
        let rows = sqlx::query_as::<_, MenuRow>("SELECT id, name FROM menus ORDER BY id")
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Menu>, AppError> {
        let row = sqlx::query_as::<_, MenuRow>("SELECT id, name FROM menus WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Into::into))
    }

    async fn create(&self, new: NewMenu) -> Result<Menu, AppError> {
        let row =
            sqlx::query_as::<_, MenuRow>("INSERT INTO menus (name) VALUES ($1) RETURNING id, name")
                .bind(&new.name)
                .fetch_one(self.pool.as_ref())
                .await?;

        Ok(row.into())
    }

    async fn update(&self, id: i64, patch: MenuPatch) -> Result<Option<Menu>, AppError> {
        let update_name = patch.name.is_some();
        let new_name = patch.name.flatten();

        let row = sqlx::query_as::<_, MenuRow>(
            r#"
            UPDATE menus SET name = CASE WHEN $2 THEN $3::TEXT ELSE name END
            WHERE id = $1
            RETURNING id, name
            "#,
        )
        .bind(id)
        .bind(update_name)
        .bind(&new_name)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn delete(&self, id: i64) -> Result<Option<Menu>, AppError> {
        // orders.menu_id is reset by ON DELETE SET NULL.
        let row =
            sqlx::query_as::<_, MenuRow>("DELETE FROM menus WHERE id = $1 RETURNING id, name")
                .bind(id)
                .fetch_optional(self.pool.as_ref())
                .await?;

        Ok(row.map(Into::into))
    }
}
