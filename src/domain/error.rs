use thiserror::Error;

/// Domain-level errors representing business rule violations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Amount must be greater than zero")]
    InvalidAmount,

    #[error("Insufficient funds for withdrawal")]
    InsufficientFunds,

    #[error("Amount exceeds the per-withdrawal limit")]
    WithdrawalLimitExceeded,

    #[error("Daily withdrawal limit reached")]
    DailyWithdrawalLimitReached,

    #[error("Daily transaction limit reached")]
    DailyTransactionLimitReached,

    #[error("Arithmetic overflow")]
    Overflow,

    #[error("Identity code must be 11 numeric digits")]
    MalformedIdentity,
}
