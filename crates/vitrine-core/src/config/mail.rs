//! Outgoing mail configuration.

use serde::{Deserialize, Serialize};

/// Mail delivery configuration.
///
/// The account and secret are credentials for the HTTP mail API and are
/// normally supplied through `VITRINE__MAIL__ACCOUNT` /
/// `VITRINE__MAIL__SECRET` environment variables rather than checked-in
/// TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailConfig {
    /// Base URL of the HTTP mail API.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Sender address for outgoing mail.
    #[serde(default = "default_sender")]
    pub sender_email: String,
    /// Mail service account.
    #[serde(default)]
    pub account: String,
    /// Mail service secret.
    #[serde(default)]
    pub secret: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
    /// Base URL of the storefront, used to build links in email bodies.
    #[serde(default = "default_storefront_base_url")]
    pub storefront_base_url: String,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            sender_email: default_sender(),
            account: String::new(),
            secret: String::new(),
            timeout_seconds: default_timeout(),
            storefront_base_url: default_storefront_base_url(),
        }
    }
}

fn default_api_url() -> String {
    "http://localhost:8025/api/send".to_string()
}

fn default_sender() -> String {
    "no-reply@vitrine.local".to_string()
}

fn default_timeout() -> u64 {
    10
}

fn default_storefront_base_url() -> String {
    "http://localhost:3000".to_string()
}
