//! Product entity (stock-alert context).

pub mod model;

pub use model::Product;
