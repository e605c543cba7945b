//! In-Memory Repository Implementation
//!
//! Process-local store with the same upsert-by-email semantics as the
//! PostgreSQL repository. Used by tests and database-less local runs.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::domain::entity::customer::Customer;
use crate::domain::repository::CustomerRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

#[derive(Clone, Default)]
pub struct InMemoryCustomerRepository {
    customers: Arc<Mutex<HashMap<String, Customer>>>,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.customers.lock().map(|c| c.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned<T>(_: T) -> AuthError {
    AuthError::Internal("customer store lock poisoned".to_string())
}

impl CustomerRepository for InMemoryCustomerRepository {
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<Customer>> {
        let customers = self.customers.lock().map_err(poisoned)?;
        Ok(customers.get(email.as_str()).cloned())
    }

    async fn save(&self, customer: &Customer) -> AuthResult<()> {
        let mut customers = self.customers.lock().map_err(poisoned)?;
        match customers.get_mut(customer.email.as_str()) {
            Some(stored) if stored.is_verified => Err(AuthError::AlreadyRegistered),
            Some(stored) => {
                let customer_id = stored.customer_id;
                let created_at = stored.created_at;
                *stored = customer.clone();
                stored.customer_id = customer_id;
                stored.created_at = created_at;
                Ok(())
            }
            None => {
                customers.insert(customer.email.as_str().to_string(), customer.clone());
                Ok(())
            }
        }
    }
}
