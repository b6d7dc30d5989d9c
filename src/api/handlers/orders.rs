//! Handlers for order endpoints.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
};

use crate::api::dto::order::{
    CreateOrderRequest, OrderDetailItem, OrderItem, OrderResponse, UpdateOrderRequest,
};
use crate::api::extractors::{PathParam, ValidatedJson};
use crate::domain::entities::{NewOrder, OrderPatch};
use crate::error::AppError;
use crate::state::AppState;

/// `GET /orders`
pub async fn list_orders_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<OrderItem>>, AppError> {
    let orders = state.order_service.list_orders().await?;

    Ok(Json(orders.into_iter().map(Into::into).collect()))
}

/// Returns one order with its menu entry embedded.
///
/// # Endpoint
///
/// `GET /orders/{id}`
pub async fn get_order_handler(
    PathParam(id): PathParam<i64>,
    State(state): State<AppState>,
) -> Result<Json<OrderDetailItem>, AppError> {
    let order = state.order_service.get_order(id).await?;

    Ok(Json(order.into()))
}

/// Places an order.
///
/// # Endpoint
///
/// `POST /orders`
///
/// # Errors
///
/// Returns 400 if `count < 1` or the menu entry does not exist.
pub async fn create_order_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateOrderRequest>,
) -> Result<(StatusCode, Json<OrderResponse>), AppError> {
    let order = state
        .order_service
        .create_order(NewOrder {
            menu_id: payload.menu_id,
            count: payload.count,
            annotation: payload.annotation,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(OrderResponse {
            success: true,
            order: order.into(),
        }),
    ))
}

/// `PATCH /orders/{id}`
pub async fn update_order_handler(
    PathParam(id): PathParam<i64>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UpdateOrderRequest>,
) -> Result<Json<OrderResponse>, AppError> {
    let patch = OrderPatch {
        menu_id: payload.menu_id,
        count: payload.count,
        annotation: payload.annotation,
    };

    let order = state.order_service.update_order(id, patch).await?;

    Ok(Json(OrderResponse {
        success: true,
        order: order.into(),
    }))
}

/// `DELETE /orders/{id}`
pub async fn delete_order_handler(
    PathParam(id): PathParam<i64>,
    State(state): State<AppState>,
) -> Result<Json<OrderResponse>, AppError> {
    let order = state.order_service.delete_order(id).await?;

    Ok(Json(OrderResponse {
        success: true,
        order: order.into(),
    }))
}
