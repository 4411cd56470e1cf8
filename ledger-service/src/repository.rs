//! Repository for account data

use async_trait::async_trait;
use common::decimal::Amount;
use common::error::{Error, Result};
use common::model::account::{Account, StatementEntry};
use tokio::sync::RwLock;
use tracing::debug;

/// Account repository trait defining the interface for account storage
///
/// The read-modify-write operations (duplicate check on insert, balance check
/// on debit, find-then-remove on delete) are exposed as single calls so an
/// implementation can make each one atomic with respect to concurrent
/// requests touching the same account.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Insert a new account; fails if the identifier is already registered
    async fn insert(&self, identifier: &str, name: &str) -> Result<Account>;

    /// Look up an account by its external identifier (exact match)
    async fn find_by_identifier(&self, identifier: &str) -> Result<Option<Account>>;

    /// Append a credit entry to the account's statement log
    async fn append_credit(
        &self,
        identifier: &str,
        description: String,
        amount: Amount,
    ) -> Result<StatementEntry>;

    /// Append a debit entry, only if the amount does not exceed the current
    /// balance; check and append happen under one exclusive lock
    async fn append_debit(&self, identifier: &str, amount: Amount) -> Result<StatementEntry>;

    /// Overwrite the account's display name
    async fn rename(&self, identifier: &str, name: &str) -> Result<Account>;

    /// Remove the account and return the remaining registry contents
    async fn remove(&self, identifier: &str) -> Result<Vec<Account>>;

    /// List all accounts in insertion order
    async fn list(&self) -> Result<Vec<Account>>;
}

/// In-memory repository for account data
///
/// The registry is an ordered sequence: insertion order is observable through
/// `list` and through the delete response, so a Vec under an async RwLock is
/// used rather than a keyed map.
pub struct InMemoryAccountRepository {
    accounts: RwLock<Vec<Account>>,
}

impl InMemoryAccountRepository {
    /// Create a new empty in-memory account repository
    pub fn new() -> Self {
        Self {
            accounts: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryAccountRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn not_found(identifier: &str) -> Error {
    Error::CustomerNotFound(format!("no account for identifier {}", identifier))
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn insert(&self, identifier: &str, name: &str) -> Result<Account> {
        let mut accounts = self.accounts.write().await;

        if accounts.iter().any(|a| a.identifier == identifier) {
            return Err(Error::CustomerAlreadyExists(format!(
                "identifier {} already registered",
                identifier
            )));
        }

        let account = Account::new(identifier.to_string(), name.to_string());
        debug!("Registering account {} for identifier {}", account.id, identifier);
        accounts.push(account.clone());
        Ok(account)
    }

    async fn find_by_identifier(&self, identifier: &str) -> Result<Option<Account>> {
        let accounts = self.accounts.read().await;
        Ok(accounts.iter().find(|a| a.identifier == identifier).cloned())
    }

    async fn append_credit(
        &self,
        identifier: &str,
        description: String,
        amount: Amount,
    ) -> Result<StatementEntry> {
        let mut accounts = self.accounts.write().await;
        let account = accounts
            .iter_mut()
            .find(|a| a.identifier == identifier)
            .ok_or_else(|| not_found(identifier))?;

        let entry = StatementEntry::credit(description, amount);
        account.statement.push(entry.clone());
        Ok(entry)
    }

    async fn append_debit(&self, identifier: &str, amount: Amount) -> Result<StatementEntry> {
        let mut accounts = self.accounts.write().await;
        let account = accounts
            .iter_mut()
            .find(|a| a.identifier == identifier)
            .ok_or_else(|| not_found(identifier))?;

        // Boundary is non-strict: a debit equal to the balance is allowed.
        let balance = account.balance();
        if amount > balance {
            return Err(Error::InsufficientFunds(format!(
                "debit of {} exceeds balance {} for identifier {}",
                amount, balance, identifier
            )));
        }

        let entry = StatementEntry::debit(amount);
        account.statement.push(entry.clone());
        Ok(entry)
    }

    async fn rename(&self, identifier: &str, name: &str) -> Result<Account> {
        let mut accounts = self.accounts.write().await;
        let account = accounts
            .iter_mut()
            .find(|a| a.identifier == identifier)
            .ok_or_else(|| not_found(identifier))?;

        account.name = name.to_string();
        Ok(account.clone())
    }

    async fn remove(&self, identifier: &str) -> Result<Vec<Account>> {
        let mut accounts = self.accounts.write().await;
        let index = accounts
            .iter()
            .position(|a| a.identifier == identifier)
            .ok_or_else(|| not_found(identifier))?;

        let removed = accounts.remove(index);
        debug!("Removed account {} for identifier {}", removed.id, identifier);
        Ok(accounts.clone())
    }

    async fn list(&self) -> Result<Vec<Account>> {
        let accounts = self.accounts.read().await;
        Ok(accounts.clone())
    }
}
