//! Service order domain entity
//!
//! A unit of billable work for a customer, tracked with a status and timestamps.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::comment::Comment;
use super::customer::CustomerId;

/// Unique identifier for a service order (assigned by storage)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ServiceOrderId(pub i32);

impl From<i32> for ServiceOrderId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ServiceOrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Service order status
///
/// Orders start `Open`; `Finished` and `Cancelled` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ServiceOrderStatus {
    Open,
    Finished,
    Cancelled,
}

impl ServiceOrderStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ServiceOrderStatus::Finished | ServiceOrderStatus::Cancelled
        )
    }
}

impl std::fmt::Display for ServiceOrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceOrderStatus::Open => write!(f, "OPEN"),
            ServiceOrderStatus::Finished => write!(f, "FINISHED"),
            ServiceOrderStatus::Cancelled => write!(f, "CANCELLED"),
        }
    }
}

impl std::str::FromStr for ServiceOrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "OPEN" => Ok(ServiceOrderStatus::Open),
            "FINISHED" => Ok(ServiceOrderStatus::Finished),
            "CANCELLED" | "CANCELED" => Ok(ServiceOrderStatus::Cancelled),
            _ => Err(format!("Unknown service order status: {}", s)),
        }
    }
}

/// A service order, optionally carrying its comments
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceOrder {
    pub id: ServiceOrderId,
    pub description: String,
    pub price: f64,
    pub status: ServiceOrderStatus,
    pub opening_date: DateTime<Utc>,
    /// Set when the order is finished
    pub finish_date: Option<DateTime<Utc>>,
    pub customer_id: CustomerId,
    /// Populated only by the join fetch; insertion order
    pub comments: Vec<Comment>,
}

impl ServiceOrder {
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Mark the order finished at the given instant
    pub fn finish(&mut self, at: DateTime<Utc>) {
        self.status = ServiceOrderStatus::Finished;
        self.finish_date = Some(at);
    }

    pub fn cancel(&mut self) {
        self.status = ServiceOrderStatus::Cancelled;
    }
}

/// Data needed to create a new service order
#[derive(Debug, Clone, PartialEq)]
pub struct NewServiceOrder {
    pub description: String,
    pub price: f64,
    pub status: ServiceOrderStatus,
    pub opening_date: DateTime<Utc>,
    pub customer_id: CustomerId,
}

impl NewServiceOrder {
    /// A fresh order for a customer: `Open`, opened now
    pub fn open(description: String, price: f64, customer_id: CustomerId) -> Self {
        Self {
            description,
            price,
            status: ServiceOrderStatus::Open,
            opening_date: Utc::now(),
            customer_id,
        }
    }
}
