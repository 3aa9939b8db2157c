//! Customer service
//!
//! Handles customer registration, lookup, contact updates and removal.

use std::sync::{Arc, OnceLock};

use regex::Regex;

use crate::domain::entities::{CustomerId, NewCustomer};
use crate::domain::ports::CustomerRepository;
use crate::dto::{CreateCustomerDto, CustomerDto};
use crate::error::{AppError, DomainError};

/// Service for managing customers
pub struct CustomerService<CR>
where
    CR: CustomerRepository,
{
    customers: Arc<CR>,
}

impl<CR> CustomerService<CR>
where
    CR: CustomerRepository,
{
    pub fn new(customers: Arc<CR>) -> Self {
        Self { customers }
    }

    /// List every customer, in repository order
    pub async fn list_customers(&self) -> Result<Vec<CustomerDto>, AppError> {
        let customers = self.customers.find_all().await?;
        Ok(customers.iter().map(CustomerDto::from).collect())
    }

    /// Get a single customer
    pub async fn get_customer(&self, id: &CustomerId) -> Result<CustomerDto, AppError> {
        let customer = self
            .customers
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Customer {} not found", id)))?;

        Ok(CustomerDto::from(&customer))
    }

    /// Register a new customer
    ///
    /// Emails are unique across customers; a second registration with the
    /// same email is rejected before anything is written.
    pub async fn create(&self, dto: &CreateCustomerDto) -> Result<CustomerDto, AppError> {
        validate_contact(&dto.name, &dto.email)?;

        let new_customer = NewCustomer::from(dto);

        if self
            .customers
            .find_by_email(&new_customer.email)
            .await?
            .is_some()
        {
            tracing::debug!(email = %new_customer.email, "Rejected duplicate customer email");
            return Err(AppError::Domain(DomainError::Conflict(
                "Customer already exists".to_string(),
            )));
        }

        let customer = self.customers.create(&new_customer).await?;
        tracing::info!(customer_id = %customer.id, "Customer created");

        Ok(CustomerDto::from(&customer))
    }

    /// Overwrite a customer's name, email and phone
    pub async fn update(&self, id: &CustomerId, dto: &CreateCustomerDto) -> Result<(), AppError> {
        let mut customer = self
            .customers
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Customer {} not found", id)))?;

        customer.apply_update(dto.name.clone(), dto.email.clone(), dto.phone.clone());
        self.customers.update(&customer).await?;
        tracing::info!(customer_id = %customer.id, "Customer updated");

        Ok(())
    }

    /// Remove a customer
    pub async fn delete(&self, id: &CustomerId) -> Result<(), AppError> {
        let customer = self
            .customers
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Customer {} not found", id)))?;

        self.customers.delete(&customer).await?;
        tracing::info!(customer_id = %customer.id, "Customer deleted");

        Ok(())
    }
}

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern"))
}

fn validate_contact(name: &str, email: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Customer name must not be empty".to_string(),
        ));
    }
    if !email_pattern().is_match(email) {
        return Err(AppError::BadRequest(format!(
            "Invalid email address: {}",
            email
        )));
    }
    Ok(())
}
