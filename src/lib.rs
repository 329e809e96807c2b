//! Shoplite
//!
//! In-memory e-commerce demo service.
//!
//! ## Features
//! - Product catalog browsing
//! - Per-user shopping cart
//! - Checkout into immutable orders
//! - Periodic single-use discount codes
//! - Store analytics
//!
//! All state is process-resident and resets on restart.

pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod store;

pub use config::Config;
pub use error::{Result, ShopError};
pub use store::Shop;
