//! Flow and router tests for the auth crate

#[cfg(test)]
mod support {
    use std::sync::{Arc, Mutex};

    use platform::mail::MailError;

    use crate::domain::mailer::{OtpMailer, OtpMessage};

    /// Captures every passcode instead of sending it
    #[derive(Clone, Default)]
    pub struct RecordingMailer {
        sent: Arc<Mutex<Vec<(String, String)>>>,
    }

    impl RecordingMailer {
        pub fn last_code_for(&self, email: &str) -> Option<String> {
            self.sent
                .lock()
                .unwrap()
                .iter()
                .rev()
                .find(|(to, _)| to == email)
                .map(|(_, code)| code.clone())
        }

        pub fn count(&self) -> usize {
            self.sent.lock().unwrap().len()
        }
    }

    impl OtpMailer for RecordingMailer {
        async fn send_otp(&self, message: OtpMessage<'_>) -> Result<(), MailError> {
            self.sent
                .lock()
                .unwrap()
                .push((message.to.to_string(), message.code.to_string()));
            Ok(())
        }
    }

    #[derive(Clone, Default)]
    pub struct FailingMailer;

    impl OtpMailer for FailingMailer {
        async fn send_otp(&self, _message: OtpMessage<'_>) -> Result<(), MailError> {
            Err(MailError::InvalidAddress("smtp down".to_string()))
        }
    }
}

#[cfg(test)]
mod flow_tests {
    use std::sync::Arc;

    use chrono::{Duration, Utc};
    use platform::rate_limit::InMemoryRateLimitStore;

    use super::support::{FailingMailer, RecordingMailer};
    use crate::application::*;
    use crate::domain::repository::CustomerRepository;
    use crate::domain::value_object::email::Email;
    use crate::error::AuthError;
    use crate::infra::memory::InMemoryCustomerRepository;

    struct Harness {
        repo: Arc<InMemoryCustomerRepository>,
        mailer: Arc<RecordingMailer>,
        attempts: Arc<InMemoryRateLimitStore>,
        config: Arc<AuthConfig>,
    }

    impl Harness {
        fn new() -> Self {
            Self::with_config(AuthConfig::default())
        }

        fn with_config(config: AuthConfig) -> Self {
            Self {
                repo: Arc::new(InMemoryCustomerRepository::new()),
                mailer: Arc::new(RecordingMailer::default()),
                attempts: Arc::new(InMemoryRateLimitStore::new()),
                config: Arc::new(config),
            }
        }

        fn register_uc(
            &self,
        ) -> RegisterUseCase<InMemoryCustomerRepository, RecordingMailer, InMemoryRateLimitStore>
        {
            RegisterUseCase::new(
                self.repo.clone(),
                self.mailer.clone(),
                self.attempts.clone(),
                self.config.clone(),
            )
        }

        fn verify_uc(&self) -> VerifyOtpUseCase<InMemoryCustomerRepository, InMemoryRateLimitStore> {
            VerifyOtpUseCase::new(self.repo.clone(), self.attempts.clone(), self.config.clone())
        }

        fn sign_in_uc(&self) -> SignInUseCase<InMemoryCustomerRepository> {
            SignInUseCase::new(self.repo.clone(), self.config.clone())
        }
    }

    fn alice() -> RegisterInput {
        RegisterInput {
            name: "Alice".to_string(),
            phone: "9990000000".to_string(),
            email: "alice@example.com".to_string(),
            password: "secret123".to_string(),
        }
    }

    fn verify_input(otp: &str) -> VerifyOtpInput {
        VerifyOtpInput {
            email: "alice@example.com".to_string(),
            otp: otp.to_string(),
        }
    }

    fn login_input(password: &str) -> SignInInput {
        SignInInput {
            email: "alice@example.com".to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_round_trip_register_verify_login() {
        let h = Harness::new();

        let registered = h.register_uc().execute(alice()).await.unwrap();
        assert!(!registered.resent);
        assert_eq!(registered.email.as_str(), "alice@example.com");

        let code = h.mailer.last_code_for("alice@example.com").unwrap();
        assert_eq!(code.len(), 6);

        let verified = h.verify_uc().execute(verify_input(&code)).await.unwrap();
        assert_eq!(verified.customer_id, registered.customer_id);
        assert_eq!(verified.name.as_str(), "Alice");

        let profile = h.sign_in_uc().execute(login_input("secret123")).await.unwrap();
        assert_eq!(profile.customer_id, registered.customer_id);
        assert_eq!(profile.name.as_str(), "Alice");
        assert_eq!(profile.email.as_str(), "alice@example.com");
        assert_eq!(profile.phone.as_str(), "9990000000");
    }

    #[tokio::test]
    async fn test_verified_state_is_persisted_and_code_cleared() {
        let h = Harness::new();
        h.register_uc().execute(alice()).await.unwrap();
        let code = h.mailer.last_code_for("alice@example.com").unwrap();
        h.verify_uc().execute(verify_input(&code)).await.unwrap();

        let email = Email::new("alice@example.com").unwrap();
        let stored = h.repo.find_by_email(&email).await.unwrap().unwrap();
        assert!(stored.is_verified);
        assert!(stored.pending_otp.is_none());
    }

    #[tokio::test]
    async fn test_code_is_single_use() {
        let h = Harness::new();
        h.register_uc().execute(alice()).await.unwrap();
        let code = h.mailer.last_code_for("alice@example.com").unwrap();

        h.verify_uc().execute(verify_input(&code)).await.unwrap();
        let err = h.verify_uc().execute(verify_input(&code)).await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidCode));
    }

    #[tokio::test]
    async fn test_wrong_code_is_invalid() {
        let h = Harness::new();
        h.register_uc().execute(alice()).await.unwrap();
        let code = h.mailer.last_code_for("alice@example.com").unwrap();
        let wrong = if code == "100000" { "100001" } else { "100000" };

        let err = h.verify_uc().execute(verify_input(wrong)).await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidCode));
    }

    #[tokio::test]
    async fn test_expired_code_regardless_of_correctness() {
        let h = Harness::new();
        let t0 = Utc::now();
        h.register_uc().execute_at(alice(), t0).await.unwrap();
        let code = h.mailer.last_code_for("alice@example.com").unwrap();
        let late = t0 + Duration::minutes(5) + Duration::seconds(1);

        let err = h
            .verify_uc()
            .execute_at(verify_input("000000"), late)
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::Expired));

        let err = h
            .verify_uc()
            .execute_at(verify_input(&code), late)
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::Expired));
    }

    #[tokio::test]
    async fn test_code_valid_just_before_expiry() {
        let h = Harness::new();
        let t0 = Utc::now();
        h.register_uc().execute_at(alice(), t0).await.unwrap();
        let code = h.mailer.last_code_for("alice@example.com").unwrap();

        let almost = t0 + Duration::minutes(5) - Duration::seconds(1);
        assert!(h.verify_uc().execute_at(verify_input(&code), almost).await.is_ok());
    }

    #[tokio::test]
    async fn test_login_requires_verification() {
        let h = Harness::new();
        h.register_uc().execute(alice()).await.unwrap();

        let err = h
            .sign_in_uc()
            .execute(login_input("secret123"))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::NotVerified));
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let h = Harness::new();
        h.register_uc().execute(alice()).await.unwrap();
        let code = h.mailer.last_code_for("alice@example.com").unwrap();
        h.verify_uc().execute(verify_input(&code)).await.unwrap();

        let err = h
            .sign_in_uc()
            .execute(login_input("secret124"))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidPassword));

        let err = h.sign_in_uc().execute(login_input("")).await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidPassword));
    }

    #[tokio::test]
    async fn test_unknown_email_not_found() {
        let h = Harness::new();

        let err = h.verify_uc().execute(verify_input("123456")).await.unwrap_err();
        assert!(matches!(err, AuthError::NotFound));

        let err = h
            .sign_in_uc()
            .execute(login_input("secret123"))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::NotFound));
    }

    #[tokio::test]
    async fn test_reregistration_overwrites_until_verified() {
        let h = Harness::new();

        let first = h.register_uc().execute(alice()).await.unwrap();
        let second = h
            .register_uc()
            .execute(RegisterInput {
                name: "Alice Sharma".to_string(),
                password: "newsecret".to_string(),
                ..alice()
            })
            .await
            .unwrap();

        assert!(second.resent);
        assert_eq!(first.customer_id, second.customer_id);
        assert_eq!(h.repo.len(), 1);
        assert_eq!(h.mailer.count(), 2);

        let code = h.mailer.last_code_for("alice@example.com").unwrap();
        let verified = h.verify_uc().execute(verify_input(&code)).await.unwrap();
        assert_eq!(verified.name.as_str(), "Alice Sharma");

        // The overwritten password is the one that signs in.
        assert!(h.sign_in_uc().execute(login_input("newsecret")).await.is_ok());

        let err = h.register_uc().execute(alice()).await.unwrap_err();
        assert!(matches!(err, AuthError::AlreadyRegistered));
        assert_eq!(h.mailer.count(), 2);
    }

    #[tokio::test]
    async fn test_email_is_case_insensitive_identity() {
        let h = Harness::new();
        h.register_uc()
            .execute(RegisterInput {
                email: "  Alice@Example.COM ".to_string(),
                ..alice()
            })
            .await
            .unwrap();

        let code = h.mailer.last_code_for("alice@example.com").unwrap();
        assert!(h.verify_uc().execute(verify_input(&code)).await.is_ok());
    }

    #[tokio::test]
    async fn test_invalid_input_rejected_before_persistence() {
        let h = Harness::new();

        for input in [
            RegisterInput {
                email: "not-an-email".to_string(),
                ..alice()
            },
            RegisterInput {
                name: " ".to_string(),
                ..alice()
            },
            RegisterInput {
                phone: String::new(),
                ..alice()
            },
            RegisterInput {
                password: String::new(),
                ..alice()
            },
        ] {
            let err = h.register_uc().execute(input).await.unwrap_err();
            assert!(matches!(err, AuthError::Validation(_)));
        }

        assert!(h.repo.is_empty());
        assert_eq!(h.mailer.count(), 0);
    }

    #[tokio::test]
    async fn test_mail_failure_still_succeeds() {
        let repo = Arc::new(InMemoryCustomerRepository::new());
        let use_case = RegisterUseCase::new(
            repo.clone(),
            Arc::new(FailingMailer),
            Arc::new(InMemoryRateLimitStore::new()),
            Arc::new(AuthConfig::default()),
        );

        assert!(use_case.execute(alice()).await.is_ok());

        let email = Email::new("alice@example.com").unwrap();
        let stored = repo.find_by_email(&email).await.unwrap().unwrap();
        assert!(stored.pending_otp.is_some());
    }

    #[tokio::test]
    async fn test_verify_attempts_capped_per_email() {
        let h = Harness::with_config(AuthConfig {
            verify_attempts_per_email: 3,
            ..Default::default()
        });
        h.register_uc().execute(alice()).await.unwrap();
        let code = h.mailer.last_code_for("alice@example.com").unwrap();
        let wrong = if code == "100000" { "100001" } else { "100000" };

        for _ in 0..3 {
            let err = h.verify_uc().execute(verify_input(wrong)).await.unwrap_err();
            assert!(matches!(err, AuthError::InvalidCode));
        }

        let err = h.verify_uc().execute(verify_input(&code)).await.unwrap_err();
        assert!(matches!(err, AuthError::RateLimited { .. }));
        assert_eq!(err.status_code(), 429);
    }

    #[tokio::test]
    async fn test_register_again_clears_verify_lockout() {
        let h = Harness::with_config(AuthConfig {
            verify_attempts_per_email: 2,
            ..Default::default()
        });
        h.register_uc().execute(alice()).await.unwrap();
        let stale = h.mailer.last_code_for("alice@example.com").unwrap();
        let wrong = if stale == "100000" { "100001" } else { "100000" };

        for _ in 0..2 {
            h.verify_uc().execute(verify_input(wrong)).await.unwrap_err();
        }
        let err = h.verify_uc().execute(verify_input(&stale)).await.unwrap_err();
        assert!(matches!(err, AuthError::RateLimited { .. }));

        h.register_uc().execute(alice()).await.unwrap();
        let fresh = h.mailer.last_code_for("alice@example.com").unwrap();
        let output = h.verify_uc().execute(verify_input(&fresh)).await.unwrap();
        assert_eq!(output.email.as_str(), "alice@example.com");
    }

    #[tokio::test]
    async fn test_pepper_applies_to_hash_and_verify() {
        let h = Harness::with_config(AuthConfig {
            password_pepper: Some(b"storefront-pepper".to_vec()),
            ..Default::default()
        });
        h.register_uc().execute(alice()).await.unwrap();
        let code = h.mailer.last_code_for("alice@example.com").unwrap();
        h.verify_uc().execute(verify_input(&code)).await.unwrap();

        assert!(h.sign_in_uc().execute(login_input("secret123")).await.is_ok());
    }
}

#[cfg(test)]
mod error_tests {
    use axum::response::IntoResponse;

    use crate::error::{AuthError, ORIGIN_LIMIT_MESSAGE};

    #[test]
    fn test_status_codes() {
        assert_eq!(AuthError::AlreadyRegistered.status_code(), 400);
        assert_eq!(AuthError::NotFound.status_code(), 404);
        assert_eq!(AuthError::InvalidCode.status_code(), 400);
        assert_eq!(AuthError::Expired.status_code(), 400);
        assert_eq!(AuthError::NotVerified.status_code(), 400);
        assert_eq!(AuthError::InvalidPassword.status_code(), 400);
        assert_eq!(AuthError::InvalidAdminCredentials.status_code(), 401);
        assert_eq!(AuthError::rate_limited(60).status_code(), 429);
        assert_eq!(AuthError::Validation("x".into()).status_code(), 400);
        assert_eq!(AuthError::Internal("x".into()).status_code(), 500);
    }

    #[test]
    fn test_messages() {
        assert_eq!(AuthError::AlreadyRegistered.to_string(), "Email already registered.");
        assert_eq!(AuthError::NotFound.to_string(), "User not found.");
        assert_eq!(AuthError::InvalidCode.to_string(), "Invalid OTP.");
        assert_eq!(AuthError::Expired.to_string(), "OTP expired.");
        assert_eq!(
            AuthError::NotVerified.to_string(),
            "Please verify your email first."
        );
        assert_eq!(AuthError::rate_limited(1).to_string(), ORIGIN_LIMIT_MESSAGE);
    }

    #[test]
    fn test_internal_cause_not_rendered() {
        let app_err = AuthError::Internal("pool exploded at 10.0.0.5".into()).to_app_error();
        assert!(!app_err.message().contains("10.0.0.5"));
    }

    #[test]
    fn test_rate_limited_sets_retry_after() {
        let response = AuthError::rate_limited(42).into_response();
        assert_eq!(response.status(), 429);
        assert_eq!(response.headers()["retry-after"], "42");
    }
}

#[cfg(test)]
mod router_tests {
    use std::sync::Arc;
    use std::time::Duration;

    use axum::Router;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use secrecy::SecretString;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::support::RecordingMailer;
    use crate::application::config::{AuthConfig, RateLimitConfig};
    use crate::error::ORIGIN_LIMIT_MESSAGE;
    use crate::infra::memory::InMemoryCustomerRepository;
    use crate::presentation::middleware::RateGovernor;
    use crate::presentation::router::{admin_router, auth_router_generic};

    fn app_with(config: AuthConfig) -> (Router, RecordingMailer) {
        let config = Arc::new(config);
        let governor = RateGovernor::new(&config);
        let mailer = RecordingMailer::default();
        let router = Router::new()
            .nest(
                "/api/auth",
                auth_router_generic(
                    InMemoryCustomerRepository::new(),
                    mailer.clone(),
                    governor,
                    config.clone(),
                ),
            )
            .nest("/api/admin", admin_router(config));
        (router, mailer)
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn alice_json() -> Value {
        json!({
            "name": "Alice",
            "phone": "9990000000",
            "email": "alice@example.com",
            "password": "secret123"
        })
    }

    #[tokio::test]
    async fn test_http_round_trip() {
        let (app, mailer) = app_with(AuthConfig::default());

        let response = app
            .clone()
            .oneshot(post_json("/api/auth/register", alice_json()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["ratelimit-limit"], "20");
        assert_eq!(response.headers()["ratelimit-remaining"], "19");
        assert!(response.headers().contains_key("ratelimit-reset"));
        assert_eq!(body_json(response).await, json!({"message": "OTP sent to email."}));

        let code = mailer.last_code_for("alice@example.com").unwrap();
        let response = app
            .clone()
            .oneshot(post_json(
                "/api/auth/verify",
                json!({"email": "alice@example.com", "otp": code}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Account verified!");
        assert_eq!(body["user"]["name"], "Alice");
        assert_eq!(body["user"]["email"], "alice@example.com");
        let id = body["user"]["id"].as_str().unwrap().to_string();

        let response = app
            .oneshot(post_json(
                "/api/auth/login",
                json!({"email": "alice@example.com", "password": "secret123"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Login successful");
        assert_eq!(
            body["user"],
            json!({
                "id": id,
                "name": "Alice",
                "email": "alice@example.com",
                "phone": "9990000000"
            })
        );
    }

    #[tokio::test]
    async fn test_error_body_shape() {
        let (app, _) = app_with(AuthConfig::default());

        let response = app
            .oneshot(post_json(
                "/api/auth/verify",
                json!({"email": "nobody@example.com", "otp": "123456"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            json!({"message": "User not found.", "error": "NOT_FOUND"})
        );
    }

    #[tokio::test]
    async fn test_malformed_json_renders_error_body() {
        let (app, mailer) = app_with(AuthConfig::default());

        for uri in ["/api/auth/register", "/api/auth/verify", "/api/admin/login"] {
            let request = Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from("{\"email\": "))
                .unwrap();
            let response = app.clone().oneshot(request).await.unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", uri);
            let body = body_json(response).await;
            assert_eq!(body["error"], "BAD_REQUEST");
            assert!(body["message"].is_string());
        }

        let request = Request::builder()
            .method("POST")
            .uri("/api/auth/login")
            .body(Body::from(r#"{"email":"a@b.co","password":"x"}"#))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "BAD_REQUEST");
        assert_eq!(mailer.count(), 0);
    }

    #[tokio::test]
    async fn test_reregister_after_verify_lockout() {
        let (app, mailer) = app_with(AuthConfig {
            verify_attempts_per_email: 1,
            ..Default::default()
        });
        let verify = |otp: &str| {
            post_json(
                "/api/auth/verify",
                json!({"email": "alice@example.com", "otp": otp}),
            )
        };

        app.clone()
            .oneshot(post_json("/api/auth/register", alice_json()))
            .await
            .unwrap();
        let stale = mailer.last_code_for("alice@example.com").unwrap();
        let wrong = if stale == "100000" { "100001" } else { "100000" };

        let response = app.clone().oneshot(verify(wrong)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let response = app.clone().oneshot(verify(&stale)).await.unwrap();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);

        let response = app
            .clone()
            .oneshot(post_json("/api/auth/register", alice_json()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let fresh = mailer.last_code_for("alice@example.com").unwrap();

        let response = app.oneshot(verify(&fresh)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["message"], "Account verified!");
    }

    #[tokio::test]
    async fn test_origin_quota_exceeded() {
        let (app, _) = app_with(AuthConfig {
            rate_limit: RateLimitConfig::new(2, 3600),
            ..Default::default()
        });
        let login = || {
            post_json(
                "/api/auth/login",
                json!({"email": "nobody@example.com", "password": "x"}),
            )
        };

        for _ in 0..2 {
            let response = app.clone().oneshot(login()).await.unwrap();
            assert_eq!(response.status(), StatusCode::NOT_FOUND);
        }

        let response = app.clone().oneshot(login()).await.unwrap();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(response.headers()["ratelimit-remaining"], "0");
        assert!(response.headers().contains_key("retry-after"));
        let body = body_json(response).await;
        assert_eq!(body["message"], ORIGIN_LIMIT_MESSAGE);
        assert_eq!(body["error"], "TOO_MANY_REQUESTS");

        // Admin login is not governed.
        let response = app
            .oneshot(post_json(
                "/api/admin/login",
                json!({"email": "a@b.co", "password": "x"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_forwarded_origins_counted_separately_when_trusted() {
        let (app, _) = app_with(AuthConfig {
            rate_limit: RateLimitConfig::new(1, 3600),
            trust_forwarded_for: true,
            ..Default::default()
        });
        let from = |ip: &str| {
            let mut req = post_json(
                "/api/auth/login",
                json!({"email": "nobody@example.com", "password": "x"}),
            );
            req.headers_mut()
                .insert("x-forwarded-for", ip.parse().unwrap());
            req
        };

        let first = app.clone().oneshot(from("203.0.113.7")).await.unwrap();
        assert_eq!(first.status(), StatusCode::NOT_FOUND);
        let other = app.clone().oneshot(from("203.0.113.8")).await.unwrap();
        assert_eq!(other.status(), StatusCode::NOT_FOUND);
        let again = app.oneshot(from("203.0.113.7")).await.unwrap();
        assert_eq!(again.status(), StatusCode::TOO_MANY_REQUESTS);
    }

    #[tokio::test]
    async fn test_admin_login() {
        let (app, _) = app_with(AuthConfig {
            admin_email: Some("owner@krishna.in".to_string()),
            admin_password: Some(SecretString::from("s3cret")),
            otp_ttl: Duration::from_secs(300),
            ..Default::default()
        });

        let response = app
            .clone()
            .oneshot(post_json(
                "/api/admin/login",
                json!({"email": "owner@krishna.in", "password": "s3cret"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({"message": "Login successful", "isAdmin": true})
        );

        let response = app
            .oneshot(post_json(
                "/api/admin/login",
                json!({"email": "owner@krishna.in", "password": "guess"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            body_json(response).await,
            json!({"message": "Invalid admin credentials", "error": "UNAUTHORIZED"})
        );
    }
}
