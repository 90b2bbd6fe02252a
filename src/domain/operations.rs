use chrono::{DateTime, Utc};

use super::account::Account;
use super::entry::LedgerEntry;
use super::error::DomainError;
use super::money::Money;

/// Apply a deposit to an account
pub fn apply_deposit(
    account: &mut Account,
    amount: Money,
    now: DateTime<Utc>,
) -> Result<(), DomainError> {
    // Validate amount is positive
    if amount <= Money::zero() {
        return Err(DomainError::InvalidAmount);
    }

    // Check today's transaction quota
    let today = now.date_naive();
    if account.transactions_on(today) >= account.limits().daily_transaction_quota {
        return Err(DomainError::DailyTransactionLimitReached);
    }

    // Add to balance with overflow check
    let new_balance = account
        .balance()
        .checked_add(amount)
        .ok_or(DomainError::Overflow)?;

    account.set_balance(new_balance);
    account.record(LedgerEntry::deposit(amount, now));
    Ok(())
}

/// Apply a withdrawal from an account.
///
/// Checks run in the order users expect to hear about them: daily
/// quotas first, then the per-withdrawal cap, then funds, then the
/// amount itself. The first failing check is reported and the account
/// is left untouched.
pub fn apply_withdrawal(
    account: &mut Account,
    amount: Money,
    now: DateTime<Utc>,
) -> Result<(), DomainError> {
    let today = now.date_naive();
    let limits = account.limits();

    // Check today's transaction quota
    if account.transactions_on(today) >= limits.daily_transaction_quota {
        return Err(DomainError::DailyTransactionLimitReached);
    }

    // Check today's withdrawal quota
    if account.withdrawals_on(today) >= limits.daily_withdrawal_quota {
        return Err(DomainError::DailyWithdrawalLimitReached);
    }

    // Check per-withdrawal cap (boundary inclusive)
    if amount > limits.per_withdrawal_cap {
        return Err(DomainError::WithdrawalLimitExceeded);
    }

    // Check sufficient funds
    if amount > account.balance() {
        return Err(DomainError::InsufficientFunds);
    }

    // Validate amount is positive
    if amount <= Money::zero() {
        return Err(DomainError::InvalidAmount);
    }

    // Subtract from balance with underflow check
    let new_balance = account
        .balance()
        .checked_sub(amount)
        .ok_or(DomainError::Overflow)?;

    account.set_balance(new_balance);
    account.record(LedgerEntry::withdrawal(amount, now));
    Ok(())
}

/// Record a balance inquiry against an account.
///
/// Inquiries always succeed and never count toward daily quotas.
pub fn record_inquiry(account: &mut Account, now: DateTime<Utc>) {
    account.record(LedgerEntry::inquiry(now));
}
