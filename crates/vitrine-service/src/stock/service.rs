//! Stock alert service.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use vitrine_core::error::AppError;
use vitrine_core::result::AppResult;
use vitrine_database::store::{ProductStore, UserStore};
use vitrine_entity::product::Product;
use vitrine_entity::user::UserRole;
use vitrine_mailer::message::low_stock_email;
use vitrine_mailer::transport::MailTransport;

/// One admin the alert mail could not reach.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertFailure {
    /// The admin's email address.
    pub email: String,
    /// What went wrong.
    pub error: String,
}

/// Outcome of a low-stock alert fan-out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertReport {
    /// Admins that received the email.
    pub notified: Vec<String>,
    /// Admins that could not be reached.
    pub failed: Vec<AlertFailure>,
}

/// Outcome of a stock check on one product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockCheckOutcome {
    /// The product that was checked.
    pub product: Product,
    /// Whether the low-stock condition held.
    pub triggered: bool,
    /// Delivery report when the alert fired.
    pub alert: Option<AlertReport>,
}

/// Checks product stock levels and mails every admin when a product is at
/// or below its threshold.
#[derive(Debug, Clone)]
pub struct StockAlertService {
    products: Arc<dyn ProductStore>,
    users: Arc<dyn UserStore>,
    transport: Arc<dyn MailTransport>,
    /// URL of the admin low-stock listing page, linked from the email.
    listing_url: String,
}

impl StockAlertService {
    /// Creates a new stock alert service.
    ///
    /// `storefront_base_url` is the admin panel origin; the listing link
    /// is derived from it.
    pub fn new(
        products: Arc<dyn ProductStore>,
        users: Arc<dyn UserStore>,
        transport: Arc<dyn MailTransport>,
        storefront_base_url: &str,
    ) -> Self {
        Self {
            products,
            users,
            transport,
            listing_url: format!(
                "{}/admin/stock/low",
                storefront_base_url.trim_end_matches('/')
            ),
        }
    }

    /// Checks one product and fires the alert when stock is at or below
    /// the threshold.
    ///
    /// The threshold comparison lives here, on the caller side; the mail
    /// fan-out itself never re-checks it.
    pub async fn check_product(&self, product_id: Uuid) -> AppResult<StockCheckOutcome> {
        let product = self
            .products
            .find_by_id(product_id)
            .await?
            .ok_or_else(|| AppError::not_found("Product not found"))?;

        if !product.is_low_stock() {
            return Ok(StockCheckOutcome {
                product,
                triggered: false,
                alert: None,
            });
        }

        let report = self.alert(&product).await?;
        Ok(StockCheckOutcome {
            product,
            triggered: true,
            alert: Some(report),
        })
    }

    /// Emails every admin a low-stock warning for the given product.
    ///
    /// Recipients are processed independently: a failed send is recorded
    /// in the report and the remaining admins are still mailed.
    pub async fn alert(&self, product: &Product) -> AppResult<AlertReport> {
        let admins = self.users.find_all_by_role(UserRole::Admin).await?;

        let mut report = AlertReport {
            notified: Vec::new(),
            failed: Vec::new(),
        };

        for admin in &admins {
            let email = low_stock_email(&admin.email, product, &self.listing_url);
            match self.transport.send(&email).await {
                Ok(()) => report.notified.push(admin.email.clone()),
                Err(e) => {
                    warn!(
                        admin = %admin.email,
                        product = %product.name,
                        error = %e,
                        "Low-stock alert delivery failed"
                    );
                    report.failed.push(AlertFailure {
                        email: admin.email.clone(),
                        error: e.message.clone(),
                    });
                }
            }
        }

        info!(
            product = %product.name,
            quantity = product.quantity,
            threshold = product.min_quantity,
            notified = report.notified.len(),
            failed = report.failed.len(),
            "Low-stock alert fan-out complete"
        );

        Ok(report)
    }

    /// Lists all products at or below their threshold (the listing page
    /// the alert email links to).
    pub async fn low_stock_products(&self) -> AppResult<Vec<Product>> {
        self.products.find_low_stock().await
    }
}
