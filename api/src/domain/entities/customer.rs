//! Customer domain entity
//!
//! Represents a customer who can open service orders.

use serde::{Deserialize, Serialize};

/// Unique identifier for a customer (assigned by storage)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CustomerId(pub i32);

impl From<i32> for CustomerId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A persisted customer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    /// Unique across customers (checked when a customer is created)
    pub email: String,
    pub phone: String,
}

impl Customer {
    /// Overwrite the contact fields, leaving the id untouched
    pub fn apply_update(&mut self, name: String, email: String, phone: String) {
        self.name = name;
        self.email = email;
        self.phone = phone;
    }
}

/// Data needed to create a new customer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
    pub phone: String,
}
