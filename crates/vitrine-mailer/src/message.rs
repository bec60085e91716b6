//! Outgoing email message types and builders.

use serde::{Deserialize, Serialize};

use vitrine_entity::product::Product;

/// A fully rendered outgoing email.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutgoingEmail {
    /// Recipient address.
    pub to: String,
    /// Subject line.
    pub subject: String,
    /// Plain-text body.
    pub text_body: String,
    /// HTML body.
    pub html_body: String,
}

/// Render the low-stock warning email for one admin recipient.
///
/// `listing_url` points at the admin panel's low-stock listing page.
pub fn low_stock_email(to: &str, product: &Product, listing_url: &str) -> OutgoingEmail {
    let subject = format!("Low stock alert: {}", product.name);

    let text_body = format!(
        "The product \"{}\" is running low on stock.\n\
         \n\
         Current quantity: {}\n\
         Minimum threshold: {}\n\
         \n\
         Review all low-stock products: {}\n",
        product.name, product.quantity, product.min_quantity, listing_url,
    );

    let html_body = format!(
        "<p>The product <strong>{}</strong> is running low on stock.</p>\
         <ul>\
         <li>Current quantity: <strong>{}</strong></li>\
         <li>Minimum threshold: <strong>{}</strong></li>\
         </ul>\
         <p><a href=\"{}\">Review all low-stock products</a></p>",
        product.name, product.quantity, product.min_quantity, listing_url,
    );

    OutgoingEmail {
        to: to.to_string(),
        subject,
        text_body,
        html_body,
    }
}
