//! Order management service.

use crate::domain::entities::{NewOrder, Order, OrderPatch, OrderWithMenu};
use crate::domain::repositories::OrderRepository;
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Service for cafe orders.
///
/// Menu references are checked by the database foreign key; a missing menu
/// surfaces as [`AppError::Validation`].
pub struct OrderService<R: OrderRepository> {
    repository: Arc<R>,
}

impl<R: OrderRepository> OrderService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn list_orders(&self) -> Result<Vec<Order>, AppError> {
        self.repository.list().await
    }

    /// Retrieves an order with its menu entry.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the order does not exist.
    pub async fn get_order(&self, id: i64) -> Result<OrderWithMenu, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| order_not_found(id))
    }

    pub async fn create_order(&self, new: NewOrder) -> Result<Order, AppError> {
        self.repository.create(new).await
    }

    pub async fn update_order(&self, id: i64, patch: OrderPatch) -> Result<Order, AppError> {
        self.repository
            .update(id, patch)
            .await?
            .ok_or_else(|| order_not_found(id))
    }

    pub async fn delete_order(&self, id: i64) -> Result<Order, AppError> {
        self.repository
            .delete(id)
            .await?
            .ok_or_else(|| order_not_found(id))
    }
}

fn order_not_found(id: i64) -> AppError {
    AppError::not_found("Order not found", json!({ "id": id }))
}
