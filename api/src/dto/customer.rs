use serde::{Deserialize, Serialize};

use super::service_order::ServiceOrderDto;
use crate::domain::entities::{Customer, NewCustomer};

/// A customer as returned to clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDto {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Present only when the customer was fetched together with its orders
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_orders: Option<Vec<ServiceOrderDto>>,
}

impl From<&Customer> for CustomerDto {
    fn from(customer: &Customer) -> Self {
        Self {
            name: customer.name.clone(),
            email: customer.email.clone(),
            phone: customer.phone.clone(),
            service_orders: None,
        }
    }
}

/// Request body for creating or updating a customer
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerDto {
    pub name: String,
    /// Accepted from clients but never stored
    #[serde(default)]
    pub password: Option<String>,
    pub email: String,
    pub phone: String,
}

impl From<&CreateCustomerDto> for NewCustomer {
    fn from(dto: &CreateCustomerDto) -> Self {
        Self {
            name: dto.name.clone(),
            email: dto.email.clone(),
            phone: dto.phone.clone(),
        }
    }
}
