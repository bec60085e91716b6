//! Notification listing, read-state, and broadcast fan-out.

pub mod service;

pub use service::{BroadcastFailure, BroadcastReport, NotificationService};
