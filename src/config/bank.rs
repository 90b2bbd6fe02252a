use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::domain::{AccountLimits, Money};
use crate::storage::AccountPolicy;

/// Bank-wide settings, loadable from a TOML file.
///
/// Every field has a default, so running without a file works and a
/// file only needs the values being changed. Amounts are written as
/// decimal strings: `withdrawal_limit_per_op = "500.00"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BankConfig {
    /// Branch code stamped on every account
    pub branch_code: String,
    /// Largest amount a single withdrawal may move
    pub withdrawal_limit_per_op: Money,
    /// Withdrawals allowed per account per calendar day
    pub max_withdrawals_per_day: usize,
    /// Monetary transactions allowed per account per calendar day
    pub max_transactions_per_day: usize,
    /// Number of entries a statement shows
    pub statement_entries: usize,
    /// Open a first account as part of customer registration
    pub auto_open_account: bool,
}

impl Default for BankConfig {
    fn default() -> Self {
        Self {
            branch_code: "0001".to_string(),
            withdrawal_limit_per_op: Money::from_cents(50_000),
            max_withdrawals_per_day: 3,
            max_transactions_per_day: 10,
            statement_entries: 10,
            auto_open_account: true,
        }
    }
}

impl BankConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check for values the bank cannot operate with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.branch_code.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "branch_code".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        if self.withdrawal_limit_per_op <= Money::zero() {
            return Err(ConfigError::Invalid {
                field: "withdrawal_limit_per_op".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }

        if self.max_withdrawals_per_day == 0 {
            return Err(ConfigError::Invalid {
                field: "max_withdrawals_per_day".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        if self.max_transactions_per_day == 0 {
            return Err(ConfigError::Invalid {
                field: "max_transactions_per_day".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        if self.statement_entries == 0 {
            return Err(ConfigError::Invalid {
                field: "statement_entries".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(())
    }

    /// Limits carried by every newly opened account
    pub fn account_limits(&self) -> AccountLimits {
        AccountLimits {
            per_withdrawal_cap: self.withdrawal_limit_per_op,
            daily_withdrawal_quota: self.max_withdrawals_per_day,
            daily_transaction_quota: self.max_transactions_per_day,
        }
    }

    /// Policy handed to the registry for opening accounts
    pub fn account_policy(&self) -> AccountPolicy {
        AccountPolicy {
            branch_code: self.branch_code.clone(),
            limits: self.account_limits(),
            auto_open_on_register: self.auto_open_account,
        }
    }
}
