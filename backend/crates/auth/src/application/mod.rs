//! Application Layer
//!
//! Use cases and application services.

pub mod admin_sign_in;
pub mod config;
pub mod register;
pub mod sign_in;
pub mod verify_otp;

// Re-exports
pub use admin_sign_in::{AdminSignInInput, AdminSignInUseCase};
pub use config::AuthConfig;
pub use register::{RegisterInput, RegisterOutput, RegisterUseCase};
pub use sign_in::{SignInInput, SignInOutput, SignInUseCase};
pub use verify_otp::{VerifyOtpInput, VerifyOtpOutput, VerifyOtpUseCase};
