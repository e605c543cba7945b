//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{
    AdminSignInInput, AdminSignInUseCase, RegisterInput, RegisterUseCase, SignInInput,
    SignInUseCase, VerifyOtpInput, VerifyOtpUseCase,
};
use crate::domain::mailer::OtpMailer;
use crate::domain::repository::CustomerRepository;
use crate::error::AuthResult;
use crate::presentation::dto::{
    AdminLoginResponse, CustomerProfile, LoginRequest, LoginResponse, MessageResponse,
    RegisterRequest, VerifiedUser, VerifyRequest, VerifyResponse,
};
use crate::presentation::extract::AppJson;
use crate::presentation::middleware::RateGovernor;

/// Shared state for customer auth handlers
#[derive(Clone)]
pub struct AuthAppState<R, M>
where
    R: CustomerRepository + Clone + Send + Sync + 'static,
    M: OtpMailer + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub mailer: Arc<M>,
    pub governor: RateGovernor,
    pub config: Arc<AuthConfig>,
}

/// Shared state for admin handlers
#[derive(Clone)]
pub struct AdminAppState {
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Register
// ============================================================================

/// POST /api/auth/register
pub async fn register<R, M>(
    State(state): State<AuthAppState<R, M>>,
    AppJson(req): AppJson<RegisterRequest>,
) -> AuthResult<Json<MessageResponse>>
where
    R: CustomerRepository + Clone + Send + Sync + 'static,
    M: OtpMailer + Clone + Send + Sync + 'static,
{
    let use_case = RegisterUseCase::new(
        state.repo.clone(),
        state.mailer.clone(),
        state.governor.verify_attempts(),
        state.config.clone(),
    );

    use_case
        .execute(RegisterInput {
            name: req.name,
            phone: req.phone,
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok(Json(MessageResponse {
        message: "OTP sent to email.",
    }))
}

// ============================================================================
// Verify
// ============================================================================

/// POST /api/auth/verify
pub async fn verify<R, M>(
    State(state): State<AuthAppState<R, M>>,
    AppJson(req): AppJson<VerifyRequest>,
) -> AuthResult<Json<VerifyResponse>>
where
    R: CustomerRepository + Clone + Send + Sync + 'static,
    M: OtpMailer + Clone + Send + Sync + 'static,
{
    let use_case = VerifyOtpUseCase::new(
        state.repo.clone(),
        state.governor.verify_attempts(),
        state.config.clone(),
    );

    let output = use_case
        .execute(VerifyOtpInput {
            email: req.email,
            otp: req.otp,
        })
        .await?;

    Ok(Json(VerifyResponse {
        message: "Account verified!",
        user: VerifiedUser {
            id: output.customer_id.to_string(),
            name: output.name.to_string(),
            email: output.email.to_string(),
        },
    }))
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/auth/login
pub async fn login<R, M>(
    State(state): State<AuthAppState<R, M>>,
    AppJson(req): AppJson<LoginRequest>,
) -> AuthResult<Json<LoginResponse>>
where
    R: CustomerRepository + Clone + Send + Sync + 'static,
    M: OtpMailer + Clone + Send + Sync + 'static,
{
    let use_case = SignInUseCase::new(state.repo.clone(), state.config.clone());

    let output = use_case
        .execute(SignInInput {
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok(Json(LoginResponse {
        message: "Login successful",
        user: CustomerProfile {
            id: output.customer_id.to_string(),
            name: output.name.to_string(),
            email: output.email.to_string(),
            phone: output.phone.to_string(),
        },
    }))
}

// ============================================================================
// Admin
// ============================================================================

/// POST /api/admin/login
pub async fn admin_login(
    State(state): State<AdminAppState>,
    AppJson(req): AppJson<LoginRequest>,
) -> AuthResult<Json<AdminLoginResponse>> {
    AdminSignInUseCase::new(state.config.clone()).execute(AdminSignInInput {
        email: req.email,
        password: req.password,
    })?;

    Ok(Json(AdminLoginResponse {
        message: "Login successful",
        is_admin: true,
    }))
}
