//! Handlers for menu endpoints.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
};

use crate::api::dto::menu::{CreateMenuRequest, MenuItem, MenuResponse, UpdateMenuRequest};
use crate::api::extractors::{PathParam, ValidatedJson};
use crate::domain::entities::{MenuPatch, NewMenu};
use crate::error::AppError;
use crate::state::AppState;

pub async fn list_menus_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<MenuItem>>, AppError> {
    let menus = state.menu_service.list_menus().await?;

    Ok(Json(menus.into_iter().map(Into::into).collect()))
}

pub async fn get_menu_handler(
    PathParam(id): PathParam<i64>,
    State(state): State<AppState>,
) -> Result<Json<MenuItem>, AppError> {
    let menu = state.menu_service.get_menu(id).await?;

    Ok(Json(menu.into()))
}

pub async fn create_menu_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateMenuRequest>,
) -> Result<(StatusCode, Json<MenuResponse>), AppError> {
    let menu = state
        .menu_service
        .create_menu(NewMenu { name: payload.name })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MenuResponse {
            success: true,
            menu: menu.into(),
        }),
    ))
}

pub async fn update_menu_handler(
    PathParam(id): PathParam<i64>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UpdateMenuRequest>,
) -> Result<Json<MenuResponse>, AppError> {
    let menu = state
        .menu_service
        .update_menu(id, MenuPatch { name: payload.name })
        .await?;

    Ok(Json(MenuResponse {
        success: true,
        menu: menu.into(),
    }))
}

/// Deletes a menu entry. Orders referencing it keep existing with `menuId: null`.
pub async fn delete_menu_handler(
    PathParam(id): PathParam<i64>,
    State(state): State<AppState>,
) -> Result<Json<MenuResponse>, AppError> {
    let menu = state.menu_service.delete_menu(id).await?;

    Ok(Json(MenuResponse {
        success: true,
        menu: menu.into(),
    }))
}
