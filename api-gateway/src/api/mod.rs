//! API handlers
//!
//! This module contains all the API endpoint handlers organized by resource.
//! Each handler follows a consistent pattern:
//! - Extract state, the identifier header, and body/query parameters
//! - Call the appropriate ledger service method
//! - Map the result to the wire response shape

pub mod account;
pub mod statement;

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use common::error::Error;

use crate::error::ApiError;

/// Request header carrying the account identifier
pub const IDENTIFIER_HEADER: &str = "x-identifier";

/// Extractor for the account identifier header
///
/// Every operation except account creation addresses an account through this
/// header. A missing or non-ASCII header value cannot resolve to any account,
/// so it is rejected the same way as an unknown identifier.
pub struct AccountIdentifier(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for AccountIdentifier
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let identifier = parts
            .headers
            .get(IDENTIFIER_HEADER)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| {
                ApiError::Common(Error::CustomerNotFound(format!(
                    "missing or invalid {} header",
                    IDENTIFIER_HEADER
                )))
            })?;

        Ok(AccountIdentifier(identifier.to_string()))
    }
}
