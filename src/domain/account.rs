use std::fmt;

use chrono::NaiveDate;

use super::customer::IdentityCode;
use super::entry::LedgerEntry;
use super::history::TransactionHistory;
use super::money::Money;

/// Sequential account number, unique within the bank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AccountId(u32);

impl AccountId {
    pub fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Operating limits applied to an account's daily activity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountLimits {
    /// Largest amount a single withdrawal may move
    pub per_withdrawal_cap: Money,
    /// Withdrawals allowed per calendar day
    pub daily_withdrawal_quota: usize,
    /// Monetary transactions allowed per calendar day
    pub daily_transaction_quota: usize,
}

impl Default for AccountLimits {
    fn default() -> Self {
        Self {
            per_withdrawal_cap: Money::from_cents(50_000),
            daily_withdrawal_quota: 3,
            daily_transaction_quota: 10,
        }
    }
}

/// Checking account with private fields enforcing invariants
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    id: AccountId,
    branch: String,
    owner: IdentityCode,
    balance: Money,
    limits: AccountLimits,
    history: TransactionHistory,
}

impl Account {
    /// Open a new account with zero balance and no history
    pub fn new(id: AccountId, branch: String, owner: IdentityCode, limits: AccountLimits) -> Self {
        Self {
            id,
            branch,
            owner,
            balance: Money::zero(),
            limits,
            history: TransactionHistory::new(),
        }
    }

    /// Get the account number
    pub fn id(&self) -> AccountId {
        self.id
    }

    /// Get the branch code
    pub fn branch(&self) -> &str {
        &self.branch
    }

    /// Get the identity code of the owning customer
    pub fn owner(&self) -> &IdentityCode {
        &self.owner
    }

    /// Get the current balance
    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Get the operating limits
    pub fn limits(&self) -> AccountLimits {
        self.limits
    }

    /// Get the full transaction history
    pub fn history(&self) -> &TransactionHistory {
        &self.history
    }

    /// Number of withdrawals made on the given calendar date
    pub fn withdrawals_on(&self, date: NaiveDate) -> usize {
        self.history.withdrawals_on(date)
    }

    /// Number of monetary transactions made on the given calendar date
    pub fn transactions_on(&self, date: NaiveDate) -> usize {
        self.history.monetary_on(date)
    }

    // Internal mutation methods for use by operations module
    pub(crate) fn set_balance(&mut self, balance: Money) {
        self.balance = balance;
    }

    pub(crate) fn record(&mut self, entry: LedgerEntry) {
        self.history.append(entry);
    }
}
