//! SeaORM entities
//!
//! Table models for the PostgreSQL schema in `api/migrations/`.

pub mod comments;
pub mod customers;
pub mod service_orders;

