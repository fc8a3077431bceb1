//! Shared utilities, configuration, and error handling for Clipstream
//!
//! This crate provides common functionality used across the Clipstream workspace:
//! - Configuration management following 12-factor principles
//! - Error types and their HTTP mapping
//! - Validated JSON, validated query and pagination extractors
//! - Password hashing

pub mod config;
pub mod crypto;
pub mod error;
pub mod extractors;

pub use config::Config;
pub use crypto::{hash_password, verify_password};
pub use error::{Error, Result};
pub use extractors::{Pagination, ValidatedJson, ValidatedQuery};
