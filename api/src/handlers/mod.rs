//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod comments;
pub mod customers;
pub mod service_orders;

pub use comments::{add_comment, get_service_order_with_comments};
pub use customers::{
    create_customer, delete_customer, get_customer, get_customer_service_orders, list_customers,
    update_customer,
};
pub use service_orders::{
    cancel_service_order, create_service_order, finish_service_order, get_service_order,
    list_service_orders,
};
