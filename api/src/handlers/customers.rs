//! Customer handlers
//!
//! Endpoints for customer registration and management.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::domain::entities::CustomerId;
use crate::dto::{CreateCustomerDto, CustomerDto};
use crate::error::AppError;
use crate::AppState;

/// GET /customers
pub async fn list_customers(
    State(state): State<AppState>,
) -> Result<Json<Vec<CustomerDto>>, AppError> {
    Ok(Json(state.customer_service.list_customers().await?))
}

/// GET /customers/:id
pub async fn get_customer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<CustomerDto>, AppError> {
    Ok(Json(
        state.customer_service.get_customer(&CustomerId(id)).await?,
    ))
}

/// POST /customers
///
/// Register a new customer. Emails must be unique.
pub async fn create_customer(
    State(state): State<AppState>,
    Json(request): Json<CreateCustomerDto>,
) -> Result<(StatusCode, Json<CustomerDto>), AppError> {
    let customer = state.customer_service.create(&request).await?;
    Ok((StatusCode::CREATED, Json(customer)))
}

/// PUT /customers/:id
pub async fn update_customer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<CreateCustomerDto>,
) -> Result<StatusCode, AppError> {
    state
        .customer_service
        .update(&CustomerId(id), &request)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /customers/:id
pub async fn delete_customer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    state.customer_service.delete(&CustomerId(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /customers/:id/service-orders
pub async fn get_customer_service_orders(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<CustomerDto>, AppError> {
    Ok(Json(
        state
            .service_order_service
            .get_customer_service_orders(&CustomerId(id))
            .await?,
    ))
}
