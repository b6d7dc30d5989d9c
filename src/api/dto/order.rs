//! DTOs for order endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::menu::MenuItem;
use crate::domain::entities::{Order, OrderWithMenu};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    #[validate(range(min = 1))]
    pub menu_id: i64,

    #[validate(range(min = 1))]
    pub count: i64,

    #[validate(length(max = 255))]
    pub annotation: Option<String>,
}

/// Partial order update. `annotation: null` clears the annotation.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderRequest {
    #[validate(range(min = 1))]
    pub menu_id: Option<i64>,

    #[validate(range(min = 1))]
    pub count: Option<i64>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    #[validate(length(max = 255))]
    pub annotation: Option<Option<String>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: i64,
    /// `null` once the referenced menu entry has been deleted.
    pub menu_id: Option<i64>,
    pub count: i64,
    pub annotation: Option<String>,
}

impl From<Order> for OrderItem {
    fn from(o: Order) -> Self {
        Self {
            id: o.id,
            menu_id: o.menu_id,
            count: o.count,
            annotation: o.annotation,
        }
    }
}

/// Order detail with the menu entry embedded.
#[derive(Debug, Serialize)]
pub struct OrderDetailItem {
    #[serde(flatten)]
    pub order: OrderItem,
    pub menu: Option<MenuItem>,
}

impl From<OrderWithMenu> for OrderDetailItem {
    fn from(o: OrderWithMenu) -> Self {
        Self {
            order: o.order.into(),
            menu: o.menu.map(Into::into),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct OrderResponse {
    pub success: bool,
    pub order: OrderItem,
}
