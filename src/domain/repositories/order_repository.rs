//! Repository trait for cafe orders.

use crate::domain::entities::{NewOrder, Order, OrderPatch, OrderWithMenu};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for orders.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgOrderRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Order>, AppError>;

    /// Finds an order with its menu entry joined in.
    async fn find_by_id(&self, id: i64) -> Result<Option<OrderWithMenu>, AppError>;

    /// Inserts an order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the menu does not exist.
    async fn create(&self, new: NewOrder) -> Result<Order, AppError>;

    /// Applies a partial update. Returns `None` if the order does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the new menu does not exist.
    async fn update(&self, id: i64, patch: OrderPatch) -> Result<Option<Order>, AppError>;

    async fn delete(&self, id: i64) -> Result<Option<Order>, AppError>;
}
