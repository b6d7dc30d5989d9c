//! Domain entity representing a cafe menu entry.

#[derive(Debug, Clone, PartialEq)]
pub struct Menu {
    pub id: i64,
    pub name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewMenu {
    pub name: Option<String>,
}

/// Partial update for a menu. `Some(None)` clears the name.
#[derive(Debug, Clone, Default)]
pub struct MenuPatch {
    pub name: Option<Option<String>>,
}
