//! Comment service
//!
//! Reads a service order together with its comment thread and appends new
//! comments to existing orders.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::entities::{NewComment, ServiceOrderId};
use crate::domain::ports::{CommentRepository, ServiceOrderRepository};
use crate::dto::{CommentDto, CreateCommentDto, ServiceOrderDto};
use crate::error::AppError;

/// Service for service order comments
pub struct CommentService<CMR, SR>
where
    CMR: CommentRepository,
    SR: ServiceOrderRepository,
{
    comments: Arc<CMR>,
    orders: Arc<SR>,
}

impl<CMR, SR> CommentService<CMR, SR>
where
    CMR: CommentRepository,
    SR: ServiceOrderRepository,
{
    pub fn new(comments: Arc<CMR>, orders: Arc<SR>) -> Self {
        Self { comments, orders }
    }

    /// Get a service order with its comments, oldest first
    pub async fn get_service_order_with_comments(
        &self,
        id: &ServiceOrderId,
    ) -> Result<ServiceOrderDto, AppError> {
        let order = self
            .orders
            .find_with_comments(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Service order {} not found", id)))?;

        Ok(ServiceOrderDto::from(&order))
    }

    /// Append a comment to an existing service order
    pub async fn add_comment(
        &self,
        service_order_id: &ServiceOrderId,
        dto: &CreateCommentDto,
    ) -> Result<CommentDto, AppError> {
        if dto.description.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Comment description must not be empty".to_string(),
            ));
        }

        if self.orders.find_by_id(service_order_id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Service order {} not found",
                service_order_id
            )));
        }

        let comment = self
            .comments
            .create(&NewComment {
                description: dto.description.clone(),
                send_date: Utc::now(),
                service_order_id: *service_order_id,
            })
            .await?;
        tracing::info!(
            service_order_id = %service_order_id,
            comment_id = %comment.id,
            "Comment added"
        );

        Ok(CommentDto::from(&comment))
    }
}
