use thiserror::Error;

use crate::storage::StorageError;

/// Engine-level errors for session and request handling
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Customer has no accounts")]
    NoAccountsForCustomer,

    #[error("Account choice {chosen} is out of range 1..={count}")]
    InvalidSelection { chosen: usize, count: usize },

    #[error("Not logged in")]
    NotLoggedIn,

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}
