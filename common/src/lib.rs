//! Common types and utilities for the ledger service
//!
//! This library contains the shared types used on both sides of the service
//! boundary: the unified error type, the account and statement domain models,
//! and the decimal aliases used for monetary amounts.

pub mod error;
pub mod model;
pub mod decimal;

/// Re-export important types
pub use error::{Error, Result, ErrorExt};
pub use decimal::*;

// Re-export utoipa for use in model ToSchema derives
#[cfg(feature = "utoipa")]
pub use utoipa;
