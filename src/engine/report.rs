use crate::domain::{AccountId, LedgerEntry, Money};

/// Snapshot of the active session handed to the presentation shell.
/// Structured data only; formatting happens in the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub customer_name: String,
    pub account_id: AccountId,
    pub branch: String,
    pub balance: Money,
    pub withdrawals_left_today: usize,
    pub transactions_left_today: usize,
}

/// One row in an account-selection list, numbered from 1
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountSummary {
    pub ordinal: usize,
    pub id: AccountId,
    pub branch: String,
    pub balance: Money,
}

/// Owned view of an account's recent activity: the most recent entries
/// in chronological order, with the current balance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementReport {
    pub account_id: AccountId,
    pub branch: String,
    pub customer_name: String,
    pub entries: Vec<LedgerEntry>,
    pub balance: Money,
}

/// Successful replies crossing the engine/shell boundary
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// An account is now active
    LoggedIn(SessionSnapshot),
    /// The customer holds several accounts; one must be chosen
    SelectionNeeded(Vec<AccountSummary>),
    DepositMade(SessionSnapshot),
    WithdrawalMade(SessionSnapshot),
    Statement(StatementReport),
    CustomerRegistered { first_account: Option<AccountId> },
    AccountOpened(AccountId),
    LoggedOut,
}
