//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).

use async_trait::async_trait;

use crate::domain::entities::{
    Comment, Customer, CustomerId, NewComment, NewCustomer, NewServiceOrder, ServiceOrder,
    ServiceOrderId,
};
use crate::error::DomainError;

/// Repository for Customer entities
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// List all customers
    async fn find_all(&self) -> Result<Vec<Customer>, DomainError>;

    /// Find a customer by ID
    async fn find_by_id(&self, id: &CustomerId) -> Result<Option<Customer>, DomainError>;

    /// Find a customer by email
    async fn find_by_email(&self, email: &str) -> Result<Option<Customer>, DomainError>;

    /// Create a new customer
    async fn create(&self, customer: &NewCustomer) -> Result<Customer, DomainError>;

    /// Persist the current field values of an existing customer
    async fn update(&self, customer: &Customer) -> Result<(), DomainError>;

    /// Delete a customer
    async fn delete(&self, customer: &Customer) -> Result<(), DomainError>;
}

/// Repository for ServiceOrder entities
#[async_trait]
pub trait ServiceOrderRepository: Send + Sync {
    /// List all service orders (without comments)
    async fn find_all(&self) -> Result<Vec<ServiceOrder>, DomainError>;

    /// Find a service order by ID (without comments)
    async fn find_by_id(&self, id: &ServiceOrderId) -> Result<Option<ServiceOrder>, DomainError>;

    /// Find a service order together with its comments, in insertion order
    async fn find_with_comments(
        &self,
        id: &ServiceOrderId,
    ) -> Result<Option<ServiceOrder>, DomainError>;

    /// List service orders opened by a customer
    async fn find_by_customer(
        &self,
        customer_id: &CustomerId,
    ) -> Result<Vec<ServiceOrder>, DomainError>;

    /// Create a new service order
    async fn create(&self, order: &NewServiceOrder) -> Result<ServiceOrder, DomainError>;

    /// Mark a service order finished (sets the finish date)
    async fn finish(&self, order: &ServiceOrder) -> Result<(), DomainError>;

    /// Mark a service order cancelled
    async fn cancel(&self, order: &ServiceOrder) -> Result<(), DomainError>;
}

/// Repository for Comment entities
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Attach a new comment to a service order
    async fn create(&self, comment: &NewComment) -> Result<Comment, DomainError>;
}
