use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::comment::CommentDto;
use crate::domain::entities::{ServiceOrder, ServiceOrderStatus};

/// A service order with its comments, as returned to clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceOrderDto {
    pub id: i32,
    pub description: String,
    pub price: f64,
    pub status: ServiceOrderStatus,
    pub opening_date: DateTime<Utc>,
    pub finish_date: Option<DateTime<Utc>>,
    pub comments: Vec<CommentDto>,
}

impl From<&ServiceOrder> for ServiceOrderDto {
    fn from(order: &ServiceOrder) -> Self {
        Self {
            id: order.id.0,
            description: order.description.clone(),
            price: order.price,
            status: order.status,
            opening_date: order.opening_date,
            finish_date: order.finish_date,
            comments: order.comments.iter().map(CommentDto::from).collect(),
        }
    }
}

/// A freshly created service order, as returned to clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewServiceOrderDto {
    pub id: i32,
    pub description: String,
    pub price: f64,
    pub status: ServiceOrderStatus,
    pub opening_date: DateTime<Utc>,
    pub finish_date: Option<DateTime<Utc>>,
    pub customer_id: i32,
}

impl From<&ServiceOrder> for NewServiceOrderDto {
    fn from(order: &ServiceOrder) -> Self {
        Self {
            id: order.id.0,
            description: order.description.clone(),
            price: order.price,
            status: order.status,
            opening_date: order.opening_date,
            finish_date: order.finish_date,
            customer_id: order.customer_id.0,
        }
    }
}

/// Request body for opening a service order
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateServiceOrderDto {
    pub description: String,
    pub price: f64,
    pub customer_id: i32,
}
