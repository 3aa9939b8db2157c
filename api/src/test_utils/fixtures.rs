//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid entity that can be customized.

use chrono::{Duration, Utc};

use crate::domain::entities::{
    Comment, CommentId, Customer, CustomerId, ServiceOrder, ServiceOrderId, ServiceOrderStatus,
};
use crate::dto::{CreateCustomerDto, CreateServiceOrderDto};

/// Create the canonical test customer (id 1, John Doe)
pub fn test_customer() -> Customer {
    Customer {
        id: CustomerId(1),
        name: "John Doe".to_string(),
        email: "john.doe@example.com".to_string(),
        phone: "1234567890".to_string(),
    }
}

/// Create a test customer with a specific id and name
pub fn test_customer_named(id: i32, name: &str) -> Customer {
    Customer {
        id: CustomerId(id),
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        phone: format!("555{:07}", id),
    }
}

/// Create an open service order for a customer
pub fn test_service_order(id: i32, customer_id: CustomerId) -> ServiceOrder {
    ServiceOrder {
        id: ServiceOrderId(id),
        description: format!("Service {}", id),
        price: 100.0 * id as f64,
        status: ServiceOrderStatus::Open,
        opening_date: Utc::now(),
        finish_date: None,
        customer_id,
        comments: vec![],
    }
}

/// Create a service order in a specific status
pub fn test_service_order_with_status(
    id: i32,
    customer_id: CustomerId,
    status: ServiceOrderStatus,
) -> ServiceOrder {
    let mut order = test_service_order(id, customer_id);
    order.status = status;
    if status == ServiceOrderStatus::Finished {
        order.finish_date = Some(order.opening_date + Duration::hours(1));
    }
    order
}

/// Create a comment on a service order
pub fn test_comment(id: i32, service_order_id: ServiceOrderId, description: &str) -> Comment {
    Comment {
        id: CommentId(id),
        description: description.to_string(),
        send_date: Utc::now(),
        service_order_id,
    }
}

/// Create a service order carrying the given comments
pub fn test_service_order_with_comments(
    id: i32,
    customer_id: CustomerId,
    descriptions: &[&str],
) -> ServiceOrder {
    let mut order = test_service_order(id, customer_id);
    order.comments = descriptions
        .iter()
        .enumerate()
        .map(|(i, d)| test_comment(i as i32 + 1, order.id, d))
        .collect();
    order
}

/// Request body matching `test_customer`
pub fn create_customer_dto() -> CreateCustomerDto {
    CreateCustomerDto {
        name: "John Doe".to_string(),
        password: None,
        email: "john.doe@example.com".to_string(),
        phone: "1234567890".to_string(),
    }
}

/// Request body for opening an order for a customer
pub fn create_service_order_dto(customer_id: i32) -> CreateServiceOrderDto {
    CreateServiceOrderDto {
        description: "New Service".to_string(),
        price: 300.0,
        customer_id,
    }
}
