use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Comment;

/// A comment as returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    pub id: i32,
    pub description: String,
    pub send_date: DateTime<Utc>,
    pub service_order_id: i32,
}

impl From<&Comment> for CommentDto {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id.0,
            description: comment.description.clone(),
            send_date: comment.send_date,
            service_order_id: comment.service_order_id.0,
        }
    }
}

/// Request body for adding a comment to a service order
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentDto {
    pub description: String,
}
