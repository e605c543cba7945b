//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::customer::{Customer, PendingOtp};
use crate::domain::repository::CustomerRepository;
use crate::domain::value_object::{
    customer_id::CustomerId, customer_name::CustomerName, email::Email, otp_code::OtpCode,
    phone_number::PhoneNumber, user_password::UserPassword,
};
use crate::error::{AuthError, AuthResult};

/// PostgreSQL-backed customer repository
#[derive(Clone)]
pub struct PgCustomerRepository {
    pool: PgPool,
}

impl PgCustomerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl CustomerRepository for PgCustomerRepository {
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<Customer>> {
        let row = sqlx::query_as::<_, CustomerRow>(
            r#"
            SELECT
                customer_id,
                email,
                name,
                phone,
                password_hash,
                otp,
                otp_expires_at,
                is_verified,
                created_at,
                updated_at
            FROM customers
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(CustomerRow::into_customer).transpose()
    }

    async fn save(&self, customer: &Customer) -> AuthResult<()> {
        let (otp, otp_expires_at) = match &customer.pending_otp {
            Some(pending) => (Some(pending.code.as_str()), Some(pending.expires_at)),
            None => (None, None),
        };

        let result = sqlx::query(
            r#"
            INSERT INTO customers (
                customer_id,
                email,
                name,
                phone,
                password_hash,
                otp,
                otp_expires_at,
                is_verified,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ON CONFLICT (email) DO UPDATE SET
                name = EXCLUDED.name,
                phone = EXCLUDED.phone,
                password_hash = EXCLUDED.password_hash,
                otp = EXCLUDED.otp,
                otp_expires_at = EXCLUDED.otp_expires_at,
                is_verified = EXCLUDED.is_verified,
                updated_at = EXCLUDED.updated_at
            WHERE customers.is_verified = FALSE
            "#,
        )
        .bind(customer.customer_id.as_uuid())
        .bind(customer.email.as_str())
        .bind(customer.name.as_str())
        .bind(customer.phone.as_str())
        .bind(customer.password.as_phc_string())
        .bind(otp)
        .bind(otp_expires_at)
        .bind(customer.is_verified)
        .bind(customer.created_at)
        .bind(customer.updated_at)
        .execute(&self.pool)
        .await?;

        // A verified row is never overwritten; the conflict update is skipped.
        if result.rows_affected() == 0 {
            return Err(AuthError::AlreadyRegistered);
        }

        Ok(())
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct CustomerRow {
    customer_id: Uuid,
    email: String,
    name: String,
    phone: String,
    password_hash: String,
    otp: Option<String>,
    otp_expires_at: Option<DateTime<Utc>>,
    is_verified: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl CustomerRow {
    fn into_customer(self) -> AuthResult<Customer> {
        let password = UserPassword::from_phc_string(self.password_hash)
            .map_err(|e| AuthError::Internal(format!("Invalid password_hash: {}", e)))?;

        let pending_otp = match (self.otp, self.otp_expires_at) {
            (Some(code), Some(expires_at)) => Some(PendingOtp {
                code: OtpCode::from_db(code),
                expires_at,
            }),
            (None, None) => None,
            _ => {
                return Err(AuthError::Internal(format!(
                    "customer {} has otp without expiry",
                    self.customer_id
                )));
            }
        };

        Ok(Customer {
            customer_id: CustomerId::from_uuid(self.customer_id),
            email: Email::from_db(self.email),
            name: CustomerName::from_db(self.name),
            phone: PhoneNumber::from_db(self.phone),
            password,
            is_verified: self.is_verified,
            pending_otp,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
