use thiserror::Error;

use crate::domain::{AccountId, DomainError};

/// Storage-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("A customer with this identity code already exists")]
    DuplicateIdentity,

    #[error("No customer found for this identity code")]
    IdentityNotFound,

    #[error("Account {0} not found")]
    AccountNotFound(AccountId),

    #[error("Domain error: {0}")]
    DomainError(#[from] DomainError),
}
