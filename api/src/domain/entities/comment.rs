//! Comment domain entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::service_order::ServiceOrderId;

/// Unique identifier for a comment (assigned by storage)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CommentId(pub i32);

impl From<i32> for CommentId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CommentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A note attached to a service order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comment {
    pub id: CommentId,
    pub description: String,
    pub send_date: DateTime<Utc>,
    pub service_order_id: ServiceOrderId,
}

/// Data needed to create a new comment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub description: String,
    pub send_date: DateTime<Utc>,
    pub service_order_id: ServiceOrderId,
}
