//! HTTP middleware: role gates, CORS, and request logging.

pub mod cors;
pub mod logging;
pub mod rbac;
