//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and response shapes.

pub mod comment_service;
pub mod customer_service;
pub mod service_order_service;

pub use comment_service::CommentService;
pub use customer_service::CustomerService;
pub use service_order_service::ServiceOrderService;
