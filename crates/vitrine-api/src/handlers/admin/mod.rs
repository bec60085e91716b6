//! Admin-only handlers.

pub mod broadcast;
pub mod stock;
