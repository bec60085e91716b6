//! # vitrine-mailer
//!
//! Outgoing email for the Vitrine storefront backend: message types, the
//! low-stock alert builder, and the [`MailTransport`] trait with its HTTP
//! mail-API implementation.

pub mod message;
pub mod transport;

pub use message::{OutgoingEmail, low_stock_email};
pub use transport::{HttpMailTransport, MailTransport};
