//! Service order handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::domain::entities::ServiceOrderId;
use crate::dto::{CreateServiceOrderDto, NewServiceOrderDto, ServiceOrderDto};
use crate::error::AppError;
use crate::AppState;

/// GET /service-orders
pub async fn list_service_orders(
    State(state): State<AppState>,
) -> Result<Json<Vec<ServiceOrderDto>>, AppError> {
    Ok(Json(state.service_order_service.get_all().await?))
}

/// GET /service-orders/:id
pub async fn get_service_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ServiceOrderDto>, AppError> {
    Ok(Json(
        state
            .service_order_service
            .get_service_order(&ServiceOrderId(id))
            .await?,
    ))
}

/// POST /service-orders
///
/// Open a new order for an existing customer.
pub async fn create_service_order(
    State(state): State<AppState>,
    Json(request): Json<CreateServiceOrderDto>,
) -> Result<(StatusCode, Json<NewServiceOrderDto>), AppError> {
    let order = state
        .service_order_service
        .create_service_order(&request)
        .await?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// PUT /service-orders/:id/finish
pub async fn finish_service_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    state
        .service_order_service
        .finish_service_order(&ServiceOrderId(id))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /service-orders/:id/cancel
pub async fn cancel_service_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    state
        .service_order_service
        .cancel_service_order(&ServiceOrderId(id))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
