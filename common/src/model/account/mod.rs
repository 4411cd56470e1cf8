//! Account models and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::decimal::Amount;
#[cfg(feature = "utoipa")]
use crate::utoipa::ToSchema;

/// Kind of statement operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
pub enum OperationKind {
    /// Funds entering the account
    Credit,
    /// Funds leaving the account
    Debit,
}

/// A single ledger movement, immutable once appended
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
pub struct StatementEntry {
    /// Free-form description; present on credits, absent on debits
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Movement amount
    pub amount: Amount,
    /// Server-assigned insertion timestamp
    pub created_at: DateTime<Utc>,
    /// Credit or debit discriminant
    #[serde(rename = "type")]
    pub kind: OperationKind,
}

impl StatementEntry {
    /// Create a credit entry stamped with the current time
    pub fn credit(description: String, amount: Amount) -> Self {
        Self {
            description: Some(description),
            amount,
            created_at: Utc::now(),
            kind: OperationKind::Credit,
        }
    }

    /// Create a debit entry stamped with the current time
    pub fn debit(amount: Amount) -> Self {
        Self {
            description: None,
            amount,
            created_at: Utc::now(),
            kind: OperationKind::Debit,
        }
    }
}

/// Customer account with its append-only statement log
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
pub struct Account {
    /// Externally supplied unique identifier (fiscal id)
    pub identifier: String,
    /// Display name
    pub name: String,
    /// System-generated unique id
    pub id: Uuid,
    /// Ordered statement log, insertion order
    pub statement: Vec<StatementEntry>,
}

impl Account {
    /// Create a new account with an empty statement log
    pub fn new(identifier: String, name: String) -> Self {
        Self {
            identifier,
            name,
            id: Uuid::new_v4(),
            statement: Vec::new(),
        }
    }

    /// Compute the balance as a fold over the statement log: credits add,
    /// debits subtract, starting at zero
    pub fn balance(&self) -> Amount {
        self.statement
            .iter()
            .fold(Amount::ZERO, |acc, entry| match entry.kind {
                OperationKind::Credit => acc + entry.amount,
                OperationKind::Debit => acc - entry.amount,
            })
    }
}
