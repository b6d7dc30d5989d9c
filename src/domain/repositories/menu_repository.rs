//! Repository trait for menu entries.

use crate::domain::entities::{Menu, MenuPatch, NewMenu};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for menu entries.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgMenuRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MenuRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Menu>, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Menu>, AppError>;

    async fn create(&self, new: NewMenu) -> Result<Menu, AppError>;

    /// Applies a partial update. Returns `None` if the record does not exist.
    async fn update(&self, id: i64, patch: MenuPatch) -> Result<Option<Menu>, AppError>;

    /// Deletes a menu entry, returning it. Orders referencing it keep existing
    /// with `menu_id` set to `NULL`.
    async fn delete(&self, id: i64) -> Result<Option<Menu>, AppError>;
}
