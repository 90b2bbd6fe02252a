use super::error::StorageError;
use crate::domain::{Account, AccountId, AccountLimits, Customer, DomainError, IdentityCode};

/// How the registry opens accounts: which branch they belong to, which
/// limits they start with, and whether registering a customer opens
/// their first account on the spot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountPolicy {
    pub branch_code: String,
    pub limits: AccountLimits,
    pub auto_open_on_register: bool,
}

impl Default for AccountPolicy {
    fn default() -> Self {
        Self {
            branch_code: "0001".to_string(),
            limits: AccountLimits::default(),
            auto_open_on_register: true,
        }
    }
}

/// Trait for managing customers and their accounts with pluggable
/// storage backends
pub trait Registry {
    /// Register a customer keyed by identity code. Returns the id of
    /// the automatically opened first account, if policy calls for one.
    fn register_customer(&mut self, customer: Customer)
    -> Result<Option<AccountId>, StorageError>;

    /// Open a new account for an already registered customer
    fn open_account(&mut self, identity: &IdentityCode) -> Result<AccountId, StorageError>;

    /// Look up a customer by identity code
    fn find_customer(&self, identity: &IdentityCode) -> Option<&Customer>;

    /// Accounts held by a customer, in opening order
    fn accounts_of(&self, identity: &IdentityCode) -> Vec<&Account>;

    /// Read-only access to an account
    fn account(&self, id: AccountId) -> Option<&Account>;

    /// Atomic read-modify-write with validation. The closure must
    /// leave the account unchanged when it returns an error.
    fn with_account<T, F>(&mut self, id: AccountId, update_fn: F) -> Result<T, StorageError>
    where
        F: FnOnce(&mut Account) -> Result<T, DomainError>;
}
