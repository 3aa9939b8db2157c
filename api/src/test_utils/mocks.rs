//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and record every write so tests can verify
//! which repository calls a service made.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{
    Comment, CommentId, Customer, CustomerId, NewComment, NewCustomer, NewServiceOrder,
    ServiceOrder, ServiceOrderId,
};
use crate::domain::ports::{CommentRepository, CustomerRepository, ServiceOrderRepository};
use crate::error::DomainError;

fn unavailable() -> DomainError {
    DomainError::Database("connection refused".to_string())
}

// ============================================================================
// In-Memory Customer Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryCustomerRepository {
    customers: Arc<RwLock<BTreeMap<CustomerId, Customer>>>,
    created: Arc<RwLock<Vec<NewCustomer>>>,
    updated: Arc<RwLock<Vec<Customer>>>,
    deleted: Arc<RwLock<Vec<Customer>>>,
    fail: bool,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call returns a database error
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Pre-populate with a customer for testing
    pub fn with_customer(self, customer: Customer) -> Self {
        self.customers
            .write()
            .unwrap()
            .insert(customer.id, customer);
        self
    }

    pub fn created_calls(&self) -> Vec<NewCustomer> {
        self.created.read().unwrap().clone()
    }

    pub fn updated_calls(&self) -> Vec<Customer> {
        self.updated.read().unwrap().clone()
    }

    pub fn deleted_calls(&self) -> Vec<Customer> {
        self.deleted.read().unwrap().clone()
    }

    pub fn stored(&self, id: &CustomerId) -> Option<Customer> {
        self.customers.read().unwrap().get(id).cloned()
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn find_all(&self) -> Result<Vec<Customer>, DomainError> {
        if self.fail {
            return Err(unavailable());
        }
        Ok(self.customers.read().unwrap().values().cloned().collect())
    }

    async fn find_by_id(&self, id: &CustomerId) -> Result<Option<Customer>, DomainError> {
        if self.fail {
            return Err(unavailable());
        }
        Ok(self.customers.read().unwrap().get(id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Customer>, DomainError> {
        if self.fail {
            return Err(unavailable());
        }
        let customers = self.customers.read().unwrap();
        Ok(customers.values().find(|c| c.email == email).cloned())
    }

    async fn create(&self, new_customer: &NewCustomer) -> Result<Customer, DomainError> {
        if self.fail {
            return Err(unavailable());
        }
        self.created.write().unwrap().push(new_customer.clone());

        let mut customers = self.customers.write().unwrap();
        let next_id = customers.keys().next_back().map_or(1, |id| id.0 + 1);
        let customer = Customer {
            id: CustomerId(next_id),
            name: new_customer.name.clone(),
            email: new_customer.email.clone(),
            phone: new_customer.phone.clone(),
        };
        customers.insert(customer.id, customer.clone());

        Ok(customer)
    }

    async fn update(&self, customer: &Customer) -> Result<(), DomainError> {
        if self.fail {
            return Err(unavailable());
        }
        self.updated.write().unwrap().push(customer.clone());

        let mut customers = self.customers.write().unwrap();
        match customers.get_mut(&customer.id) {
            Some(stored) => {
                *stored = customer.clone();
                Ok(())
            }
            None => Err(DomainError::NotFound(format!(
                "Customer {} not found",
                customer.id
            ))),
        }
    }

    async fn delete(&self, customer: &Customer) -> Result<(), DomainError> {
        if self.fail {
            return Err(unavailable());
        }
        self.deleted.write().unwrap().push(customer.clone());
        self.customers.write().unwrap().remove(&customer.id);
        Ok(())
    }
}

// ============================================================================
// In-Memory Service Order Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryServiceOrderRepository {
    orders: Arc<RwLock<BTreeMap<ServiceOrderId, ServiceOrder>>>,
    created: Arc<RwLock<Vec<NewServiceOrder>>>,
    finished: Arc<RwLock<Vec<ServiceOrder>>>,
    cancelled: Arc<RwLock<Vec<ServiceOrder>>>,
    fail: bool,
}

impl InMemoryServiceOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call returns a database error
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Pre-populate with a service order (and any comments it carries)
    pub fn with_order(self, order: ServiceOrder) -> Self {
        self.orders.write().unwrap().insert(order.id, order);
        self
    }

    pub fn created_calls(&self) -> Vec<NewServiceOrder> {
        self.created.read().unwrap().clone()
    }

    pub fn finished_calls(&self) -> Vec<ServiceOrder> {
        self.finished.read().unwrap().clone()
    }

    pub fn cancelled_calls(&self) -> Vec<ServiceOrder> {
        self.cancelled.read().unwrap().clone()
    }

    pub fn stored(&self, id: &ServiceOrderId) -> Option<ServiceOrder> {
        self.orders.read().unwrap().get(id).cloned()
    }
}

/// Plain lookups do not load comments
fn without_comments(order: &ServiceOrder) -> ServiceOrder {
    ServiceOrder {
        comments: vec![],
        ..order.clone()
    }
}

#[async_trait]
impl ServiceOrderRepository for InMemoryServiceOrderRepository {
    async fn find_all(&self) -> Result<Vec<ServiceOrder>, DomainError> {
        if self.fail {
            return Err(unavailable());
        }
        Ok(self
            .orders
            .read()
            .unwrap()
            .values()
            .map(without_comments)
            .collect())
    }

    async fn find_by_id(&self, id: &ServiceOrderId) -> Result<Option<ServiceOrder>, DomainError> {
        if self.fail {
            return Err(unavailable());
        }
        Ok(self.orders.read().unwrap().get(id).map(without_comments))
    }

    async fn find_with_comments(
        &self,
        id: &ServiceOrderId,
    ) -> Result<Option<ServiceOrder>, DomainError> {
        if self.fail {
            return Err(unavailable());
        }
        Ok(self.orders.read().unwrap().get(id).cloned())
    }

    async fn find_by_customer(
        &self,
        customer_id: &CustomerId,
    ) -> Result<Vec<ServiceOrder>, DomainError> {
        if self.fail {
            return Err(unavailable());
        }
        Ok(self
            .orders
            .read()
            .unwrap()
            .values()
            .filter(|o| o.customer_id == *customer_id)
            .map(without_comments)
            .collect())
    }

    async fn create(&self, new_order: &NewServiceOrder) -> Result<ServiceOrder, DomainError> {
        if self.fail {
            return Err(unavailable());
        }
        self.created.write().unwrap().push(new_order.clone());

        let mut orders = self.orders.write().unwrap();
        let next_id = orders.keys().next_back().map_or(1, |id| id.0 + 1);
        let order = ServiceOrder {
            id: ServiceOrderId(next_id),
            description: new_order.description.clone(),
            price: new_order.price,
            status: new_order.status,
            opening_date: new_order.opening_date,
            finish_date: None,
            customer_id: new_order.customer_id,
            comments: vec![],
        };
        orders.insert(order.id, order.clone());

        Ok(order)
    }

    async fn finish(&self, order: &ServiceOrder) -> Result<(), DomainError> {
        if self.fail {
            return Err(unavailable());
        }
        self.finished.write().unwrap().push(order.clone());

        let mut orders = self.orders.write().unwrap();
        match orders.get_mut(&order.id) {
            Some(stored) => {
                stored.finish(Utc::now());
                Ok(())
            }
            None => Err(DomainError::NotFound(format!(
                "Service order {} not found",
                order.id
            ))),
        }
    }

    async fn cancel(&self, order: &ServiceOrder) -> Result<(), DomainError> {
        if self.fail {
            return Err(unavailable());
        }
        self.cancelled.write().unwrap().push(order.clone());

        let mut orders = self.orders.write().unwrap();
        match orders.get_mut(&order.id) {
            Some(stored) => {
                stored.cancel();
                Ok(())
            }
            None => Err(DomainError::NotFound(format!(
                "Service order {} not found",
                order.id
            ))),
        }
    }
}

// ============================================================================
// In-Memory Comment Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryCommentRepository {
    comments: Arc<RwLock<Vec<Comment>>>,
    created: Arc<RwLock<Vec<NewComment>>>,
    /// Order store to append new comments to, when attached
    orders: Option<Arc<RwLock<BTreeMap<ServiceOrderId, ServiceOrder>>>>,
    fail: bool,
}

impl InMemoryCommentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call returns a database error
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Share an order store so created comments show up in `find_with_comments`
    pub fn attached_to(orders: &InMemoryServiceOrderRepository) -> Self {
        Self {
            orders: Some(orders.orders.clone()),
            ..Self::default()
        }
    }

    pub fn created_calls(&self) -> Vec<NewComment> {
        self.created.read().unwrap().clone()
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn create(&self, new_comment: &NewComment) -> Result<Comment, DomainError> {
        if self.fail {
            return Err(unavailable());
        }
        self.created.write().unwrap().push(new_comment.clone());

        let mut comments = self.comments.write().unwrap();
        let comment = Comment {
            id: CommentId(comments.len() as i32 + 1),
            description: new_comment.description.clone(),
            send_date: new_comment.send_date,
            service_order_id: new_comment.service_order_id,
        };
        comments.push(comment.clone());

        if let Some(orders) = &self.orders {
            if let Some(order) = orders.write().unwrap().get_mut(&comment.service_order_id) {
                order.comments.push(comment.clone());
            }
        }

        Ok(comment)
    }
}
