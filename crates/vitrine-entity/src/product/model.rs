//! Product entity model.
//!
//! Only the fields the stock-alert flow needs; catalog browsing and
//! pricing live outside this service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A product tracked for stock alerts.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
    /// Unique product identifier.
    pub id: Uuid,
    /// Product designation (display name).
    pub name: String,
    /// Current stock quantity.
    pub quantity: i32,
    /// Minimum stock threshold before an alert fires.
    pub min_quantity: i32,
    /// When the product was created.
    pub created_at: DateTime<Utc>,
    /// When the product was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Check whether stock is at or below the configured threshold.
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.min_quantity
    }
}
