//! API gateway for the ledger service

pub mod api;
pub mod config;
pub mod error;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use ledger_service::LedgerService;

use crate::api::account::{create_account, delete_account, get_account, rename_account};
use crate::api::statement::{deposit, get_balance, get_statement, get_statement_by_date, withdraw};

/// App state shared across handlers
pub struct AppState {
    /// Ledger service
    pub ledger_service: Arc<LedgerService>,
}

/// Build the API router
///
/// Kept separate from `main` so tests can drive the full HTTP surface
/// in-process.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/account",
            post(create_account)
                .get(get_account)
                .put(rename_account)
                .delete(delete_account),
        )
        .route("/statement", get(get_statement))
        .route("/statement/date", get(get_statement_by_date))
        .route("/deposit", post(deposit))
        .route("/withdraw", post(withdraw))
        .route("/balance", get(get_balance))
        .with_state(state)
}
