//! Rendering of amounts, statements and failure messages.

use crate::domain::{LedgerEntry, Money};
use crate::engine::{EngineError, StatementReport};
use crate::storage::StorageError;
use chrono::{DateTime, Utc};

const LABEL_WIDTH: usize = 18;
const AMOUNT_WIDTH: usize = 15;

/// Renders an amount the way a teller slip would: `R$ 150.00`.
pub fn currency(amount: Money) -> String {
    format!("R$ {}", amount.to_decimal_string())
}

/// Renders a ledger timestamp, minute precision.
pub fn timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M").to_string()
}

/// One statement line: dotted label column, right-aligned signed
/// amount, then the timestamp.
pub fn statement_line(entry: &LedgerEntry) -> String {
    format!(
        "{:.<lw$}{:.>aw$}  {}",
        entry.label(),
        currency(entry.signed_amount()),
        timestamp(entry.timestamp()),
        lw = LABEL_WIDTH,
        aw = AMOUNT_WIDTH,
    )
}

/// Renders a full statement: header, recent entries, balance footer.
pub fn statement(report: &StatementReport) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Statement for account {} (branch {})\n",
        report.account_id, report.branch
    ));
    out.push_str(&format!("Holder: {}\n\n", report.customer_name));

    // The inquiry that produced this report is already on the list, so
    // the list itself is never empty. Flag the absence of real money
    // movement instead.
    if !report.entries.iter().any(LedgerEntry::is_monetary) {
        out.push_str("No deposits or withdrawals on record.\n");
    }
    for entry in &report.entries {
        out.push_str(&statement_line(entry));
        out.push('\n');
    }

    out.push_str(&"-".repeat(LABEL_WIDTH + AMOUNT_WIDTH));
    out.push('\n');
    out.push_str(&format!(
        "{:.<lw$}{:.>aw$}\n",
        "Balance",
        currency(report.balance),
        lw = LABEL_WIDTH,
        aw = AMOUNT_WIDTH,
    ));
    out
}

/// Unwraps the error chain down to the message a customer should see.
///
/// A rejected withdrawal surfaces as
/// `Engine(Storage(DomainError(InsufficientFunds)))`; printing the
/// outer layers would read like a stack trace, not a teller.
pub fn failure_message(err: &EngineError) -> String {
    match err {
        EngineError::Storage(StorageError::DomainError(domain)) => domain.to_string(),
        EngineError::Storage(storage) => storage.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AccountId, DomainError};
    use chrono::TimeZone;

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 26, 12, 30, 0).unwrap()
    }

    fn sample_report() -> StatementReport {
        StatementReport {
            account_id: AccountId::new(1),
            branch: "0001".to_string(),
            customer_name: "Maria Silva".to_string(),
            entries: vec![
                LedgerEntry::deposit(Money::from_cents(10_000), noon()),
                LedgerEntry::withdrawal(Money::from_cents(5_000), noon()),
                LedgerEntry::inquiry(noon()),
            ],
            balance: Money::from_cents(5_000),
        }
    }

    #[test]
    fn currency_renders_cents() {
        assert_eq!(currency(Money::from_cents(15_075)), "R$ 150.75");
        assert_eq!(currency(Money::from_cents(0)), "R$ 0.00");
        assert_eq!(currency(Money::from_cents(-5_000)), "R$ -50.00");
    }

    #[test]
    fn timestamp_has_minute_precision() {
        assert_eq!(timestamp(noon()), "2026-08-26 12:30");
    }

    #[test]
    fn statement_line_pads_columns_with_dots() {
        let line = statement_line(&LedgerEntry::deposit(Money::from_cents(10_000), noon()));
        assert_eq!(line, "Deposit.................R$ 100.00  2026-08-26 12:30");
    }

    #[test]
    fn withdrawal_line_shows_negative_amount() {
        let line = statement_line(&LedgerEntry::withdrawal(Money::from_cents(5_000), noon()));
        assert_eq!(line, "Withdrawal..............R$ -50.00  2026-08-26 12:30");
    }

    #[test]
    fn statement_lists_entries_and_balance() {
        let rendered = statement(&sample_report());

        assert!(rendered.contains("Statement for account 1 (branch 0001)"));
        assert!(rendered.contains("Holder: Maria Silva"));
        assert!(rendered.contains("Deposit"));
        assert!(rendered.contains("Withdrawal"));
        assert!(rendered.contains("Balance inquiry"));
        assert!(rendered.contains("R$ 50.00"));
        assert!(!rendered.contains("No deposits or withdrawals"));
    }

    #[test]
    fn statement_flags_accounts_without_movement() {
        let report = StatementReport {
            entries: vec![LedgerEntry::inquiry(noon())],
            balance: Money::zero(),
            ..sample_report()
        };
        let rendered = statement(&report);

        assert!(rendered.contains("No deposits or withdrawals on record."));
        assert!(rendered.contains("Balance inquiry"));
    }

    #[test]
    fn failure_message_unwraps_domain_errors() {
        let err = EngineError::Storage(StorageError::DomainError(DomainError::InsufficientFunds));
        assert_eq!(failure_message(&err), "Insufficient funds for withdrawal");
    }

    #[test]
    fn failure_message_unwraps_storage_errors() {
        let err = EngineError::Storage(StorageError::IdentityNotFound);
        assert_eq!(
            failure_message(&err),
            "No customer found for this identity code"
        );
    }

    #[test]
    fn failure_message_keeps_engine_errors_as_is() {
        let err = EngineError::InvalidSelection {
            chosen: 5,
            count: 2,
        };
        assert_eq!(
            failure_message(&err),
            "Account choice 5 is out of range 1..=2"
        );
    }
}
