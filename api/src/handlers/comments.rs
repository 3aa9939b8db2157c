//! Comment handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::domain::entities::ServiceOrderId;
use crate::dto::{CommentDto, CreateCommentDto, ServiceOrderDto};
use crate::error::AppError;
use crate::AppState;

/// GET /service-orders/:id/comments
///
/// The service order with its full comment thread.
pub async fn get_service_order_with_comments(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ServiceOrderDto>, AppError> {
    Ok(Json(
        state
            .comment_service
            .get_service_order_with_comments(&ServiceOrderId(id))
            .await?,
    ))
}

/// POST /service-orders/:id/comments
pub async fn add_comment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<CreateCommentDto>,
) -> Result<(StatusCode, Json<CommentDto>), AppError> {
    let comment = state
        .comment_service
        .add_comment(&ServiceOrderId(id), &request)
        .await?;
    Ok((StatusCode::CREATED, Json(comment)))
}
