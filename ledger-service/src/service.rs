//! Ledger service implementation

use std::sync::Arc;

use chrono::{Local, NaiveDate};
use common::decimal::Amount;
use common::error::{Error, ErrorExt, Result};
use common::model::account::{Account, StatementEntry};
use tracing::info;

use crate::repository::{AccountRepository, InMemoryAccountRepository};

/// Ledger service for managing customer accounts and statements
pub struct LedgerService {
    /// Repository for account data
    repo: Arc<dyn AccountRepository>,
}

impl LedgerService {
    /// Create a new ledger service backed by the in-memory repository
    pub fn new() -> Self {
        Self {
            repo: Arc::new(InMemoryAccountRepository::new()),
        }
    }

    /// Create a new ledger service with an injected repository
    pub fn with_repository(repo: Arc<dyn AccountRepository>) -> Self {
        Self { repo }
    }

    /// Create a new account with an empty statement log
    pub async fn create_account(&self, identifier: &str, name: &str) -> Result<Account> {
        info!("Creating account for identifier {}", identifier);
        self.repo.insert(identifier, name).await
    }

    /// Resolve an account by its external identifier
    pub async fn get_account(&self, identifier: &str) -> Result<Account> {
        self.repo
            .find_by_identifier(identifier)
            .await?
            .ok_or_else(|| {
                Error::CustomerNotFound(format!("no account for identifier {}", identifier))
            })
    }

    /// Full ordered statement log of the resolved account
    pub async fn statement(&self, identifier: &str) -> Result<Vec<StatementEntry>> {
        Ok(self.get_account(identifier).await?.statement)
    }

    /// Statement entries created on the given calendar day
    ///
    /// The day comparison happens in server-local time, the same clock that
    /// stamped the entries at insertion.
    pub async fn statement_on(
        &self,
        identifier: &str,
        day: NaiveDate,
    ) -> Result<Vec<StatementEntry>> {
        let account = self.get_account(identifier).await?;
        Ok(account
            .statement
            .into_iter()
            .filter(|entry| entry.created_at.with_timezone(&Local).date_naive() == day)
            .collect())
    }

    /// Current balance of the resolved account
    pub async fn balance(&self, identifier: &str) -> Result<Amount> {
        Ok(self.get_account(identifier).await?.balance())
    }

    /// Deposit funds into an account
    pub async fn deposit(&self, identifier: &str, description: String, amount: Amount) -> Result<()> {
        info!("Depositing {} to account {}", amount, identifier);
        self.repo
            .append_credit(identifier, description, amount)
            .await
            .with_context(|| format!("Failed to append credit for identifier {}", identifier))?;
        Ok(())
    }

    /// Withdraw funds from an account; the repository rejects the debit if it
    /// exceeds the current balance
    pub async fn withdraw(&self, identifier: &str, amount: Amount) -> Result<()> {
        info!("Withdrawing {} from account {}", amount, identifier);
        self.repo
            .append_debit(identifier, amount)
            .await
            .with_context(|| format!("Failed to append debit for identifier {}", identifier))?;
        Ok(())
    }

    /// Overwrite the account's display name
    pub async fn rename(&self, identifier: &str, name: &str) -> Result<Account> {
        info!("Renaming account {}", identifier);
        self.repo.rename(identifier, name).await
    }

    /// Remove the account and return the remaining registry contents
    pub async fn delete_account(&self, identifier: &str) -> Result<Vec<Account>> {
        info!("Deleting account {}", identifier);
        self.repo.remove(identifier).await
    }
}

impl Default for LedgerService {
    fn default() -> Self {
        Self::new()
    }
}
