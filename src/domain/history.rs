use chrono::NaiveDate;

use super::entry::LedgerEntry;
use super::money::Money;

/// Append-only record of every operation performed against an account,
/// in the order the operations happened
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionHistory {
    entries: Vec<LedgerEntry>,
}

impl TransactionHistory {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub(crate) fn append(&mut self, entry: LedgerEntry) {
        self.entries.push(entry);
    }

    /// All entries in chronological order
    pub fn iter(&self) -> impl Iterator<Item = &LedgerEntry> {
        self.entries.iter()
    }

    /// Entries made on the given calendar date
    pub fn entries_on(&self, date: NaiveDate) -> impl Iterator<Item = &LedgerEntry> {
        self.entries.iter().filter(move |entry| entry.date() == date)
    }

    /// Number of withdrawals made on the given calendar date
    pub fn withdrawals_on(&self, date: NaiveDate) -> usize {
        self.entries_on(date)
            .filter(|entry| entry.is_withdrawal())
            .count()
    }

    /// Number of monetary entries (deposits and withdrawals) made on
    /// the given calendar date; inquiries are not counted
    pub fn monetary_on(&self, date: NaiveDate) -> usize {
        self.entries_on(date)
            .filter(|entry| entry.is_monetary())
            .count()
    }

    /// The most recent entries, up to `depth`, oldest first
    pub fn tail(&self, depth: usize) -> impl Iterator<Item = &LedgerEntry> {
        self.entries
            .iter()
            .skip(self.entries.len().saturating_sub(depth))
    }

    /// Net effect of every entry on the balance
    pub fn signed_total(&self) -> Money {
        self.entries
            .iter()
            .fold(Money::zero(), |total, entry| total + entry.signed_amount())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
