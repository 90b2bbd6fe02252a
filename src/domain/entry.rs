use chrono::{DateTime, NaiveDate, Utc};

use super::money::Money;

/// Ledger entry types with separate variants for type safety
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerEntry {
    Deposit {
        amount: Money,
        at: DateTime<Utc>,
    },
    Withdrawal {
        amount: Money,
        at: DateTime<Utc>,
    },
    Inquiry {
        at: DateTime<Utc>,
    },
}

impl LedgerEntry {
    /// Record a deposit of the given amount
    pub fn deposit(amount: Money, at: DateTime<Utc>) -> Self {
        Self::Deposit { amount, at }
    }

    /// Record a withdrawal of the given amount
    pub fn withdrawal(amount: Money, at: DateTime<Utc>) -> Self {
        Self::Withdrawal { amount, at }
    }

    /// Record a balance inquiry
    pub fn inquiry(at: DateTime<Utc>) -> Self {
        Self::Inquiry { at }
    }

    /// Get the timestamp for this entry
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Self::Deposit { at, .. } => *at,
            Self::Withdrawal { at, .. } => *at,
            Self::Inquiry { at } => *at,
        }
    }

    /// Get the calendar date this entry was made on
    pub fn date(&self) -> NaiveDate {
        self.timestamp().date_naive()
    }

    /// Get the amount moved, if any
    pub fn amount(&self) -> Option<Money> {
        match self {
            Self::Deposit { amount, .. } => Some(*amount),
            Self::Withdrawal { amount, .. } => Some(*amount),
            Self::Inquiry { .. } => None,
        }
    }

    /// Get the effect on the balance: positive for deposits, negative
    /// for withdrawals, zero for inquiries
    pub fn signed_amount(&self) -> Money {
        match self {
            Self::Deposit { amount, .. } => *amount,
            Self::Withdrawal { amount, .. } => Money::from_cents(-amount.cents()),
            Self::Inquiry { .. } => Money::zero(),
        }
    }

    /// Whether this entry moved money (deposits and withdrawals)
    pub fn is_monetary(&self) -> bool {
        matches!(self, Self::Deposit { .. } | Self::Withdrawal { .. })
    }

    /// Whether this entry is a withdrawal
    pub fn is_withdrawal(&self) -> bool {
        matches!(self, Self::Withdrawal { .. })
    }

    /// Human-readable label for statement rendering
    pub fn label(&self) -> &'static str {
        match self {
            Self::Deposit { .. } => "Deposit",
            Self::Withdrawal { .. } => "Withdrawal",
            Self::Inquiry { .. } => "Balance inquiry",
        }
    }
}
