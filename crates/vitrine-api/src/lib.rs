//! # vitrine-api
//!
//! HTTP API layer for Vitrine built on Axum.
//!
//! Provides all REST endpoints, middleware (auth, RBAC, CORS, logging),
//! extractors, DTOs, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
