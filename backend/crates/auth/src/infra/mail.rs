//! OTP Mailer Implementations
//!
//! SMTP delivery with Askama templates, and a log-only fallback for
//! environments without SMTP credentials.

use askama::Template;
use platform::mail::{MailError, SmtpMailer};

use crate::domain::mailer::{OtpMailer, OtpMessage};

pub const OTP_SUBJECT: &str = "Verify your account - Krishna Jewelry";

#[derive(Template)]
#[template(path = "email/otp.html")]
struct OtpEmailHtml<'a> {
    name: &'a str,
    code: &'a str,
    valid_for_mins: i64,
}

#[derive(Template)]
#[template(path = "email/otp.txt")]
struct OtpEmailText<'a> {
    name: &'a str,
    code: &'a str,
    valid_for_mins: i64,
}

/// Render (text, html) bodies for a passcode email
pub fn render_otp_email(message: &OtpMessage<'_>) -> Result<(String, String), MailError> {
    let name = message.name.as_str();
    let code = message.code.as_str();
    let valid_for_mins = message.valid_for_mins;

    let text = OtpEmailText {
        name,
        code,
        valid_for_mins,
    }
    .render()
    .map_err(|e| MailError::Template(e.to_string()))?;
    let html = OtpEmailHtml {
        name,
        code,
        valid_for_mins,
    }
    .render()
    .map_err(|e| MailError::Template(e.to_string()))?;

    Ok((text, html))
}

#[derive(Clone)]
pub struct SmtpOtpMailer {
    smtp: SmtpMailer,
}

impl SmtpOtpMailer {
    pub fn new(smtp: SmtpMailer) -> Self {
        Self { smtp }
    }
}

impl OtpMailer for SmtpOtpMailer {
    async fn send_otp(&self, message: OtpMessage<'_>) -> Result<(), MailError> {
        let (text, html) = render_otp_email(&message)?;
        self.smtp
            .send_html(message.to.as_str(), OTP_SUBJECT, &text, &html)
            .await
    }
}

/// Writes the passcode to the log instead of sending it
#[derive(Clone, Default)]
pub struct LogOtpMailer;

impl OtpMailer for LogOtpMailer {
    async fn send_otp(&self, message: OtpMessage<'_>) -> Result<(), MailError> {
        tracing::warn!(
            to = %message.to,
            otp = %message.code,
            valid_for_mins = message.valid_for_mins,
            "SMTP not configured; OTP email not sent"
        );
        Ok(())
    }
}

/// Mailer chosen at startup
#[derive(Clone)]
pub enum Mailer {
    Smtp(SmtpOtpMailer),
    Log(LogOtpMailer),
}

impl OtpMailer for Mailer {
    async fn send_otp(&self, message: OtpMessage<'_>) -> Result<(), MailError> {
        match self {
            Mailer::Smtp(mailer) => mailer.send_otp(message).await,
            Mailer::Log(mailer) => mailer.send_otp(message).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::{
        customer_name::CustomerName, email::Email, otp_code::OtpCode,
    };

    #[test]
    fn test_render_otp_email() {
        let to = Email::new("alice@example.com").unwrap();
        let name = CustomerName::new("Alice").unwrap();
        let code = OtpCode::from_db("482913");
        let (text, html) = render_otp_email(&OtpMessage {
            to: &to,
            name: &name,
            code: &code,
            valid_for_mins: 5,
        })
        .unwrap();

        assert!(html.contains("<h3>Welcome Alice!</h3>"));
        assert!(html.contains("<b>482913</b>"));
        assert!(html.contains("(Valid for 5 mins)"));
        assert!(text.contains("Your OTP is: 482913"));
    }

    #[test]
    fn test_html_escapes_name() {
        let to = Email::new("eve@example.com").unwrap();
        let name = CustomerName::new("<script>").unwrap();
        let code = OtpCode::from_db("111111");
        let (_, html) = render_otp_email(&OtpMessage {
            to: &to,
            name: &name,
            code: &code,
            valid_for_mins: 5,
        })
        .unwrap();

        assert!(!html.contains("<script>"));
    }

    #[tokio::test]
    async fn test_log_mailer_succeeds() {
        let to = Email::new("alice@example.com").unwrap();
        let name = CustomerName::new("Alice").unwrap();
        let code = OtpCode::generate();
        let mailer = Mailer::Log(LogOtpMailer);
        assert!(
            mailer
                .send_otp(OtpMessage {
                    to: &to,
                    name: &name,
                    code: &code,
                    valid_for_mins: 5,
                })
                .await
                .is_ok()
        );
    }
}
