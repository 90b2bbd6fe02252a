//! Prelude module for convenient imports
//!
//! Import everything you need with: `use teller::prelude::*;`

// Domain types
pub use crate::domain::{
    Account, AccountId, AccountLimits, Customer, DomainError, IdentityCode, LedgerEntry, Money,
    TransactionHistory, apply_deposit, apply_withdrawal, record_inquiry,
};

// Storage types
pub use crate::storage::{AccountPolicy, InMemoryRegistry, Registry, StorageError};

// Engine types
pub use crate::engine::{
    AccountSummary, EngineError, Reply, Request, Session, SessionSnapshot, StatementReport, Teller,
};

// Config types
pub use crate::config::{BankConfig, ConfigError};

// App types
pub use crate::app::{AppError, MenuShell, init_logging};
