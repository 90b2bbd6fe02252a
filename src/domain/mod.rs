pub mod account;
pub mod customer;
pub mod entry;
pub mod error;
pub mod history;
pub mod money;
pub mod operations;

// Re-export commonly used types
pub use account::{Account, AccountId, AccountLimits};
pub use customer::{Customer, IdentityCode};
pub use entry::LedgerEntry;
pub use error::DomainError;
pub use history::TransactionHistory;
pub use money::Money;
pub use operations::{apply_deposit, apply_withdrawal, record_inquiry};
