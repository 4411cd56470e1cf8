//! Account API handlers
//!
//! Handles endpoints related to account management:
//! - Create account
//! - Get account details
//! - Rename account
//! - Delete account

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use common::model::account::Account;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::api::AccountIdentifier;
use crate::error::ApiError;
use crate::AppState;

/// Create account request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAccountRequest {
    /// Unique external identifier
    pub identifier: String,
    /// Display name
    pub name: String,
}

/// Create a new account
#[utoipa::path(
    post,
    path = "/account",
    request_body = CreateAccountRequest,
    responses(
        (status = 201, description = "Account successfully created"),
        (status = 400, description = "Customer already exists")
    ),
    tag = "account"
)]
pub async fn create_account(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateAccountRequest>,
) -> Result<StatusCode, ApiError> {
    state
        .ledger_service
        .create_account(&request.identifier, &request.name)
        .await
        .map_err(ApiError::Common)?;

    Ok(StatusCode::CREATED)
}

/// Get the resolved account's full record
#[utoipa::path(
    get,
    path = "/account",
    params(
        ("x-identifier" = String, Header, description = "Account identifier")
    ),
    responses(
        (status = 200, description = "Account details retrieved successfully", body = Account),
        (status = 400, description = "Customer not found")
    ),
    tag = "account"
)]
pub async fn get_account(
    State(state): State<Arc<AppState>>,
    AccountIdentifier(identifier): AccountIdentifier,
) -> Result<Json<Account>, ApiError> {
    let account = state
        .ledger_service
        .get_account(&identifier)
        .await
        .map_err(ApiError::Common)?;

    Ok(Json(account))
}

/// Rename account request
#[derive(Debug, Deserialize, ToSchema)]
pub struct RenameAccountRequest {
    /// New display name
    pub name: String,
}

/// Overwrite the account's display name
#[utoipa::path(
    put,
    path = "/account",
    params(
        ("x-identifier" = String, Header, description = "Account identifier")
    ),
    request_body = RenameAccountRequest,
    responses(
        (status = 201, description = "Account renamed"),
        (status = 400, description = "Customer not found")
    ),
    tag = "account"
)]
pub async fn rename_account(
    State(state): State<Arc<AppState>>,
    AccountIdentifier(identifier): AccountIdentifier,
    Json(request): Json<RenameAccountRequest>,
) -> Result<StatusCode, ApiError> {
    state
        .ledger_service
        .rename(&identifier, &request.name)
        .await
        .map_err(ApiError::Common)?;

    Ok(StatusCode::CREATED)
}

/// Delete the account and return the remaining registry contents
#[utoipa::path(
    delete,
    path = "/account",
    params(
        ("x-identifier" = String, Header, description = "Account identifier")
    ),
    responses(
        (status = 200, description = "Account deleted, remaining accounts returned", body = [Account]),
        (status = 400, description = "Customer not found")
    ),
    tag = "account"
)]
pub async fn delete_account(
    State(state): State<Arc<AppState>>,
    AccountIdentifier(identifier): AccountIdentifier,
) -> Result<Json<Vec<Account>>, ApiError> {
    let remaining = state
        .ledger_service
        .delete_account(&identifier)
        .await
        .map_err(ApiError::Common)?;

    Ok(Json(remaining))
}
