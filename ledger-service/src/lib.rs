//! Ledger service for managing customer accounts and their statement logs

pub mod service;
pub mod repository;

pub use service::LedgerService;
pub use repository::{AccountRepository, InMemoryAccountRepository};
