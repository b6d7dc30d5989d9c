//! DTOs for menu endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Menu;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateMenuRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
}

/// `name: null` clears the name, an absent `name` leaves it unchanged.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateMenuRequest {
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[validate(length(min = 1, max = 255))]
    pub name: Option<Option<String>>,
}

#[derive(Debug, Serialize)]
pub struct MenuItem {
    pub id: i64,
    pub name: Option<String>,
}

impl From<Menu> for MenuItem {
    fn from(m: Menu) -> Self {
        Self {
            id: m.id,
            name: m.name,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MenuResponse {
    pub success: bool,
    pub menu: MenuItem,
}
