//! Service order service
//!
//! Handles the service order lifecycle: opening an order for an existing
//! customer, listing and fetching orders, and moving an order to one of the
//! terminal statuses (`FINISHED`, `CANCELLED`).

use std::sync::Arc;

use crate::domain::entities::{
    CustomerId, NewServiceOrder, ServiceOrder, ServiceOrderId, ServiceOrderStatus,
};
use crate::domain::ports::{CustomerRepository, ServiceOrderRepository};
use crate::dto::{CreateServiceOrderDto, CustomerDto, NewServiceOrderDto, ServiceOrderDto};
use crate::error::{AppError, DomainError};

/// Service for managing service orders
pub struct ServiceOrderService<SR, CR>
where
    SR: ServiceOrderRepository,
    CR: CustomerRepository,
{
    orders: Arc<SR>,
    customers: Arc<CR>,
    /// When set, finishing or cancelling a terminal order is a conflict
    strict_transitions: bool,
}

impl<SR, CR> ServiceOrderService<SR, CR>
where
    SR: ServiceOrderRepository,
    CR: CustomerRepository,
{
    pub fn new(orders: Arc<SR>, customers: Arc<CR>) -> Self {
        Self {
            orders,
            customers,
            strict_transitions: false,
        }
    }

    /// Reject status changes on orders that are already finished or cancelled
    pub fn with_strict_transitions(mut self, strict: bool) -> Self {
        self.strict_transitions = strict;
        self
    }

    /// List every service order, in repository order
    pub async fn get_all(&self) -> Result<Vec<ServiceOrderDto>, AppError> {
        let orders = self.orders.find_all().await?;
        Ok(orders.iter().map(ServiceOrderDto::from).collect())
    }

    /// Get a single service order
    pub async fn get_service_order(
        &self,
        id: &ServiceOrderId,
    ) -> Result<ServiceOrderDto, AppError> {
        let order = self.find_order(id).await?;
        Ok(ServiceOrderDto::from(&order))
    }

    /// Open a new service order for an existing customer
    ///
    /// The order starts `OPEN` with its opening date set to now.
    pub async fn create_service_order(
        &self,
        dto: &CreateServiceOrderDto,
    ) -> Result<NewServiceOrderDto, AppError> {
        if dto.description.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Service order description must not be empty".to_string(),
            ));
        }
        if !dto.price.is_finite() || dto.price < 0.0 {
            return Err(AppError::BadRequest(format!(
                "Service order price must be a non-negative number, got {}",
                dto.price
            )));
        }

        let customer_id = CustomerId(dto.customer_id);
        if self.customers.find_by_id(&customer_id).await?.is_none() {
            tracing::debug!(customer_id = %customer_id, "Rejected order for unknown customer");
            return Err(AppError::BadRequest(format!(
                "Customer {} does not exist",
                customer_id
            )));
        }

        let new_order = NewServiceOrder::open(dto.description.clone(), dto.price, customer_id);
        let order = self.orders.create(&new_order).await?;
        tracing::info!(
            service_order_id = %order.id,
            customer_id = %order.customer_id,
            "Service order opened"
        );

        Ok(NewServiceOrderDto::from(&order))
    }

    /// Mark a service order finished
    pub async fn finish_service_order(&self, id: &ServiceOrderId) -> Result<(), AppError> {
        let order = self.find_order(id).await?;
        self.check_transition(&order, ServiceOrderStatus::Finished)?;

        self.orders.finish(&order).await?;
        tracing::info!(service_order_id = %order.id, "Service order finished");

        Ok(())
    }

    /// Mark a service order cancelled
    pub async fn cancel_service_order(&self, id: &ServiceOrderId) -> Result<(), AppError> {
        let order = self.find_order(id).await?;
        self.check_transition(&order, ServiceOrderStatus::Cancelled)?;

        self.orders.cancel(&order).await?;
        tracing::info!(service_order_id = %order.id, "Service order cancelled");

        Ok(())
    }

    /// Get a customer together with the service orders they opened
    pub async fn get_customer_service_orders(
        &self,
        customer_id: &CustomerId,
    ) -> Result<CustomerDto, AppError> {
        let customer = self
            .customers
            .find_by_id(customer_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Customer {} not found", customer_id)))?;

        let orders = self.orders.find_by_customer(customer_id).await?;

        let mut dto = CustomerDto::from(&customer);
        dto.service_orders = Some(orders.iter().map(ServiceOrderDto::from).collect());
        Ok(dto)
    }

    async fn find_order(&self, id: &ServiceOrderId) -> Result<ServiceOrder, AppError> {
        self.orders
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Service order {} not found", id)))
    }

    fn check_transition(
        &self,
        order: &ServiceOrder,
        target: ServiceOrderStatus,
    ) -> Result<(), AppError> {
        if !order.is_terminal() {
            return Ok(());
        }
        if self.strict_transitions {
            return Err(AppError::Domain(DomainError::Conflict(format!(
                "Service order {} is already {} and cannot become {}",
                order.id, order.status, target
            ))));
        }
        tracing::warn!(
            service_order_id = %order.id,
            status = %order.status,
            target = %target,
            "Changing status of a service order that is already closed"
        );
        Ok(())
    }
}
