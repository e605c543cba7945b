//! Infrastructure Layer
//!
//! Database implementations and external service integrations.

pub mod mail;
pub mod memory;
pub mod postgres;

pub use mail::{LogOtpMailer, Mailer, SmtpOtpMailer};
pub use memory::InMemoryCustomerRepository;
pub use postgres::PgCustomerRepository;
