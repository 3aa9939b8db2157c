//! Request and response shapes exchanged at the service boundary
//!
//! Conversions from domain entities are explicit `From` impls; there is no
//! generic mapper.

pub mod comment;
pub mod customer;
pub mod service_order;

pub use comment::{CommentDto, CreateCommentDto};
pub use customer::{CreateCustomerDto, CustomerDto};
pub use service_order::{CreateServiceOrderDto, NewServiceOrderDto, ServiceOrderDto};
