//! Menu management service.

use crate::domain::entities::{Menu, MenuPatch, NewMenu};
use crate::domain::repositories::MenuRepository;
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

pub struct MenuService<R: MenuRepository> {
    repository: Arc<R>,
}

impl<R: MenuRepository> MenuService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn list_menus(&self) -> Result<Vec<Menu>, AppError> {
        self.repository.list().await
    }

    pub async fn get_menu(&self, id: i64) -> Result<Menu, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| menu_not_found(id))
    }

    pub async fn create_menu(&self, new: NewMenu) -> Result<Menu, AppError> {
        self.repository.create(new).await
    }

    pub async fn update_menu(&self, id: i64, patch: MenuPatch) -> Result<Menu, AppError> {
        self.repository
            .update(id, patch)
            .await?
            .ok_or_else(|| menu_not_found(id))
    }

    /// Deletes a menu entry. Its orders stay, with `menu_id` cleared.
    pub async fn delete_menu(&self, id: i64) -> Result<Menu, AppError> {
        let menu = self
            .repository
            .delete(id)
            .await?
            .ok_or_else(|| menu_not_found(id))?;

        tracing::info!(menu_id = id, "Menu deleted, dependent orders detached");

        Ok(menu)
    }
}

fn menu_not_found(id: i64) -> AppError {
    AppError::not_found("Menu not found", json!({ "id": id }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockMenuRepository;

    #[tokio::test]
    async fn test_update_menu_clears_name() {
        let mut mock_repo = MockMenuRepository::new();

        mock_repo
            .expect_update()
            .withf(|id, patch| *id == 2 && patch.name == Some(None))
            .times(1)
            .returning(|id, _| Ok(Some(Menu { id, name: None })));

        let service = MenuService::new(Arc::new(mock_repo));

        let menu = service
            .update_menu(2, MenuPatch { name: Some(None) })
            .await
            .unwrap();

        assert!(menu.name.is_none());
    }

    #[tokio::test]
    async fn test_get_menu_not_found() {
        let mut mock_repo = MockMenuRepository::new();

        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = MenuService::new(Arc::new(mock_repo));

        assert!(matches!(
            service.get_menu(3).await.unwrap_err(),
            AppError::NotFound { .. }
        ));
    }
}
