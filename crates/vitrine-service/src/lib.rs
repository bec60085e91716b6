//! # vitrine-service
//!
//! Business logic services for the Vitrine storefront backend. Services
//! depend on the store traits from `vitrine-database`, never on a concrete
//! backend, and receive a verified [`Principal`] from the API layer.

pub mod auth;
pub mod context;
pub mod notification;
pub mod stock;

pub use context::Principal;
