//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod comment_repo;
pub mod customer_repo;
pub mod service_order_repo;


use sea_orm::DbErr;

use crate::error::DomainError;

pub use comment_repo::PostgresCommentRepository;
pub use customer_repo::PostgresCustomerRepository;
pub use service_order_repo::PostgresServiceOrderRepository;

/// Map an update error, treating a missing row as `NotFound`
fn update_error(err: DbErr, entity: &str, id: i32) -> DomainError {
    match err {
        DbErr::RecordNotUpdated => DomainError::NotFound(format!("{} {} not found", entity, id)),
        e => DomainError::Database(e.to_string()),
    }
}
