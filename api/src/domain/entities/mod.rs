//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod comment;
pub mod customer;
pub mod service_order;

pub use comment::{Comment, CommentId, NewComment};
pub use customer::{Customer, CustomerId, NewCustomer};
pub use service_order::{NewServiceOrder, ServiceOrder, ServiceOrderId, ServiceOrderStatus};
