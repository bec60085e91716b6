//! Mail transport trait and the HTTP mail-API implementation.

use async_trait::async_trait;
use serde::Serialize;
use tracing::debug;

use vitrine_core::config::mail::MailConfig;
use vitrine_core::error::AppError;
use vitrine_core::result::AppResult;

use crate::message::OutgoingEmail;

/// Delivers rendered emails.
///
/// The production implementation posts to an HTTP mail API; tests
/// substitute recording or failing transports.
#[async_trait]
pub trait MailTransport: Send + Sync + std::fmt::Debug + 'static {
    /// Deliver one email. Errors are per-message; callers decide whether
    /// to continue with other recipients.
    async fn send(&self, email: &OutgoingEmail) -> AppResult<()>;
}

/// Wire payload for the HTTP mail API.
#[derive(Debug, Serialize)]
struct SendMailRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    text_body: &'a str,
    html_body: &'a str,
}

/// [`MailTransport`] over an HTTP mail API, authenticated with the
/// configured account and secret.
#[derive(Debug, Clone)]
pub struct HttpMailTransport {
    client: reqwest::Client,
    api_url: String,
    sender: String,
    account: String,
    secret: String,
}

impl HttpMailTransport {
    /// Create a transport from mail configuration.
    pub fn new(config: &MailConfig) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| AppError::internal(format!("Failed to build mail client: {e}")))?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            sender: config.sender_email.clone(),
            account: config.account.clone(),
            secret: config.secret.clone(),
        })
    }
}

#[async_trait]
impl MailTransport for HttpMailTransport {
    async fn send(&self, email: &OutgoingEmail) -> AppResult<()> {
        let payload = SendMailRequest {
            from: &self.sender,
            to: &email.to,
            subject: &email.subject,
            text_body: &email.text_body,
            html_body: &email.html_body,
        };

        let response = self
            .client
            .post(&self.api_url)
            .basic_auth(&self.account, Some(&self.secret))
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                AppError::external_service(format!("Mail API request failed: {e}"))
            })?;

        response.error_for_status().map_err(|e| {
            AppError::external_service(format!("Mail API rejected message: {e}"))
        })?;

        debug!(to = %email.to, subject = %email.subject, "Email delivered");
        Ok(())
    }
}
