//! PostgreSQL implementation of the order repository.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{Menu, NewOrder, Order, OrderPatch, OrderWithMenu};
use crate::domain::repositories::OrderRepository;
use crate::error::AppError;

#[derive(Debug, FromRow)]
struct OrderRow {
    id: i64,
    menu_id: Option<i64>,
    count: i64,
    annotation: Option<String>,
}

impl From<OrderRow> for Order {
    fn from(r: OrderRow) -> Self {
        Order {
            id: r.id,
            menu_id: r.menu_id,
            count: r.count,
            annotation: r.annotation,
        }
    }
}

#[derive(Debug, FromRow)]
struct OrderWithMenuRow {
    #[sqlx(flatten)]
    order: OrderRow,
    menu_name: Option<String>,
}

impl From<OrderWithMenuRow> for OrderWithMenu {
    fn from(r: OrderWithMenuRow) -> Self {
        // The foreign key guarantees the menu row exists whenever menu_id is set.
        let menu = r.order.menu_id.map(|id| Menu {
            id,
            name: r.menu_name,
        });

        OrderWithMenu {
            order: r.order.into(),
            menu,
        }
    }
}

/// PostgreSQL repository for orders.
pub struct PgOrderRepository {
    pool: Arc<PgPool>,
}

impl PgOrderRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderRepository for PgOrderRepository {
    async fn list(&self) -> Result<Vec<Order>, AppError> {
        let rows = sqlx::query_as::<_, OrderRow>(
            "SELECT id, menu_id, count, annotation FROM orders ORDER BY id",
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<OrderWithMenu>, AppError> {
        let row = sqlx::query_as::<_, OrderWithMenuRow>(
            r#"
            SELECT o.id, o.menu_id, o.count, o.annotation, m.name AS menu_name
            FROM orders o
            LEFT JOIN menus m ON m.id = o.menu_id
            WHERE o.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn create(&self, new: NewOrder) -> Result<Order, AppError> {
        let row = sqlx::query_as::<_, OrderRow>(
            r#"
            INSERT INTO orders (menu_id, count, annotation)
            VALUES ($1, $2, $3)
            RETURNING id, menu_id, count, annotation
            "#,
        )
        .bind(new.menu_id)
        .bind(new.count)
        .bind(&new.annotation)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn update(&self, id: i64, patch: OrderPatch) -> Result<Option<Order>, AppError> {
        let update_annotation = patch.annotation.is_some();
        let new_annotation = patch.annotation.flatten();

        let row = sqlx::query_as::<_, OrderRow>(
            r#"
            UPDATE orders SET
                menu_id    = COALESCE($2::BIGINT, menu_id),
                count      = COALESCE($3::BIGINT, count),
                annotation = CASE WHEN $4 THEN $5::TEXT ELSE annotation END
            WHERE id = $1
            RETURNING id, menu_id, count, annotation
            "#,
        )
        .bind(id)
        .bind(patch.menu_id)
        .bind(patch.count)
        .bind(update_annotation)
        .bind(&new_annotation)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn delete(&self, id: i64) -> Result<Option<Order>, AppError> {
        let row = sqlx::query_as::<_, OrderRow>(
            r#"
            DELETE FROM orders
            WHERE id = $1
            RETURNING id, menu_id, count, annotation
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }
}
