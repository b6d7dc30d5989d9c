//! Domain entity representing a cafe order.

use super::menu::Menu;

/// An order for a menu entry.
///
/// `menu_id` becomes `None` when the referenced menu is deleted; the order
/// itself is kept.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: i64,
    pub menu_id: Option<i64>,
    pub count: i64,
    pub annotation: Option<String>,
}

/// An order with its menu entry resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderWithMenu {
    pub order: Order,
    pub menu: Option<Menu>,
}

#[derive(Debug, Clone)]
pub struct NewOrder {
    pub menu_id: i64,
    pub count: i64,
    pub annotation: Option<String>,
}

/// Partial update for an order. `annotation: Some(None)` clears the annotation.
#[derive(Debug, Clone, Default)]
pub struct OrderPatch {
    pub menu_id: Option<i64>,
    pub count: Option<i64>,
    pub annotation: Option<Option<String>>,
}
