//! Low-stock checks and admin alert mail.

pub mod service;

pub use service::{AlertFailure, AlertReport, StockAlertService, StockCheckOutcome};
