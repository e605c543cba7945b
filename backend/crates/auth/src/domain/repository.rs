//! Repository Traits
//!
//! Interfaces for data persistence. Implementations are in the infra layer.

use crate::domain::entity::customer::Customer;
use crate::domain::value_object::email::Email;
use crate::error::AuthResult;

/// Customer repository trait
#[trait_variant::make(CustomerRepository: Send)]
pub trait LocalCustomerRepository {
    /// Find a customer by (normalized) email
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<Customer>>;

    /// Insert, or overwrite the unverified record with the same email
    ///
    /// A single statement; the last writer wins when two requests race.
    /// A verified record is left untouched and `AlreadyRegistered` returned.
    async fn save(&self, customer: &Customer) -> AuthResult<()>;
}
