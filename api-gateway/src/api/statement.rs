//! Statement API handlers
//!
//! Handles endpoints operating on the resolved account's statement log:
//! - Get statement (full and filtered by calendar day)
//! - Deposit and withdraw funds
//! - Get computed balance

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use common::decimal::Amount;
use common::model::account::StatementEntry;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::api::AccountIdentifier;
use crate::error::ApiError;
use crate::AppState;

/// Get the full ordered statement log
#[utoipa::path(
    get,
    path = "/statement",
    params(
        ("x-identifier" = String, Header, description = "Account identifier")
    ),
    responses(
        (status = 200, description = "Statement retrieved successfully", body = [StatementEntry]),
        (status = 400, description = "Customer not found")
    ),
    tag = "statement"
)]
pub async fn get_statement(
    State(state): State<Arc<AppState>>,
    AccountIdentifier(identifier): AccountIdentifier,
) -> Result<Json<Vec<StatementEntry>>, ApiError> {
    let entries = state
        .ledger_service
        .statement(&identifier)
        .await
        .map_err(ApiError::Common)?;

    Ok(Json(entries))
}

/// Statement by date query
#[derive(Debug, Deserialize, IntoParams)]
pub struct StatementDateQuery {
    /// Calendar day in YYYY-MM-DD format
    pub date: String,
}

/// Get the statement entries created on the given calendar day
#[utoipa::path(
    get,
    path = "/statement/date",
    params(
        ("x-identifier" = String, Header, description = "Account identifier"),
        StatementDateQuery
    ),
    responses(
        (status = 200, description = "Filtered statement, possibly empty", body = [StatementEntry]),
        (status = 400, description = "Customer not found or malformed date")
    ),
    tag = "statement"
)]
pub async fn get_statement_by_date(
    State(state): State<Arc<AppState>>,
    AccountIdentifier(identifier): AccountIdentifier,
    Query(query): Query<StatementDateQuery>,
) -> Result<Json<Vec<StatementEntry>>, ApiError> {
    let day = NaiveDate::parse_from_str(&query.date, "%Y-%m-%d")
        .map_err(|e| ApiError::BadRequest(format!("invalid date '{}': {}", query.date, e)))?;

    let entries = state
        .ledger_service
        .statement_on(&identifier, day)
        .await
        .map_err(ApiError::Common)?;

    Ok(Json(entries))
}

/// Deposit request
#[derive(Debug, Deserialize, ToSchema)]
pub struct DepositRequest {
    /// Description recorded on the credit entry
    pub description: String,
    /// Amount
    pub amount: Amount,
}

/// Deposit funds into the resolved account
#[utoipa::path(
    post,
    path = "/deposit",
    params(
        ("x-identifier" = String, Header, description = "Account identifier")
    ),
    request_body = DepositRequest,
    responses(
        (status = 201, description = "Funds deposited successfully"),
        (status = 400, description = "Customer not found")
    ),
    tag = "statement"
)]
pub async fn deposit(
    State(state): State<Arc<AppState>>,
    AccountIdentifier(identifier): AccountIdentifier,
    Json(request): Json<DepositRequest>,
) -> Result<StatusCode, ApiError> {
    state
        .ledger_service
        .deposit(&identifier, request.description, request.amount)
        .await
        .map_err(ApiError::Common)?;

    Ok(StatusCode::CREATED)
}

/// Withdraw request
#[derive(Debug, Deserialize, ToSchema)]
pub struct WithdrawRequest {
    /// Amount
    pub amount: Amount,
}

/// Withdraw funds from the resolved account
#[utoipa::path(
    post,
    path = "/withdraw",
    params(
        ("x-identifier" = String, Header, description = "Account identifier")
    ),
    request_body = WithdrawRequest,
    responses(
        (status = 201, description = "Funds withdrawn successfully"),
        (status = 400, description = "Customer not found or insufficient funds")
    ),
    tag = "statement"
)]
pub async fn withdraw(
    State(state): State<Arc<AppState>>,
    AccountIdentifier(identifier): AccountIdentifier,
    Json(request): Json<WithdrawRequest>,
) -> Result<StatusCode, ApiError> {
    state
        .ledger_service
        .withdraw(&identifier, request.amount)
        .await
        .map_err(ApiError::Common)?;

    Ok(StatusCode::CREATED)
}

/// Get the computed balance of the resolved account
#[utoipa::path(
    get,
    path = "/balance",
    params(
        ("x-identifier" = String, Header, description = "Account identifier")
    ),
    responses(
        (status = 200, description = "Balance retrieved successfully", body = Amount),
        (status = 400, description = "Customer not found")
    ),
    tag = "statement"
)]
pub async fn get_balance(
    State(state): State<Arc<AppState>>,
    AccountIdentifier(identifier): AccountIdentifier,
) -> Result<Json<Amount>, ApiError> {
    let balance = state
        .ledger_service
        .balance(&identifier)
        .await
        .map_err(ApiError::Common)?;

    Ok(Json(balance))
}
