use chrono::Utc;
use tracing::{debug, warn};

use super::error::EngineError;
use super::report::{AccountSummary, Reply, SessionSnapshot, StatementReport};
use super::request::Request;
use super::session::Session;
use crate::domain::{
    Account, AccountId, Customer, IdentityCode, Money, apply_deposit, apply_withdrawal,
    record_inquiry,
};
use crate::storage::{Registry, StorageError};

/// Request dispatcher orchestrating domain operations, the registry
/// and the session state machine
pub struct Teller<R: Registry> {
    registry: R,
    session: Session,
    statement_depth: usize,
}

impl<R: Registry> Teller<R> {
    /// Create a teller over the given registry. Statements show at
    /// most `statement_depth` entries.
    pub fn new(registry: R, statement_depth: usize) -> Self {
        Self {
            registry,
            session: Session::default(),
            statement_depth,
        }
    }

    /// Current session state
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Read-only access to the registry
    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Handle a single request
    pub fn handle(&mut self, request: Request) -> Result<Reply, EngineError> {
        match request {
            Request::Login { identity } => self.login(identity),
            Request::SelectAccount { ordinal } => self.select_account(ordinal),
            Request::Deposit { amount } => self.deposit(amount),
            Request::Withdraw { amount } => self.withdraw(amount),
            Request::Statement => self.statement(),
            Request::SwitchAccount => self.switch_account(),
            Request::CreateCustomer { customer } => self.create_customer(customer),
            Request::CreateAccount { identity } => self.create_account(identity),
            Request::Logout => self.logout(),
        }
    }

    fn login(&mut self, identity: IdentityCode) -> Result<Reply, EngineError> {
        debug!(%identity, "Handling login");

        if self.registry.find_customer(&identity).is_none() {
            warn!(%identity, "Login rejected: unknown identity");
            return Err(StorageError::IdentityNotFound.into());
        }

        let accounts = self.registry.accounts_of(&identity);
        match accounts.len() {
            0 => {
                warn!(%identity, "Login rejected: customer has no accounts");
                Err(EngineError::NoAccountsForCustomer)
            }
            1 => {
                let account = accounts[0].id();
                self.session = Session::LoggedIn { identity, account };
                Ok(Reply::LoggedIn(self.snapshot(account)?))
            }
            _ => {
                let candidates: Vec<AccountId> =
                    accounts.iter().map(|account| account.id()).collect();
                let choices = summarize(&accounts);
                self.session = Session::AwaitingAccountChoice {
                    identity,
                    candidates,
                };
                Ok(Reply::SelectionNeeded(choices))
            }
        }
    }

    fn select_account(&mut self, ordinal: usize) -> Result<Reply, EngineError> {
        debug!(ordinal, "Handling account selection");

        let Session::AwaitingAccountChoice {
            identity,
            candidates,
        } = &self.session
        else {
            warn!("Selection with no pending account choice");
            return Err(EngineError::NotLoggedIn);
        };

        if ordinal == 0 || ordinal > candidates.len() {
            warn!(ordinal, count = candidates.len(), "Selection out of range");
            return Err(EngineError::InvalidSelection {
                chosen: ordinal,
                count: candidates.len(),
            });
        }

        let identity = identity.clone();
        let account = candidates[ordinal - 1];
        self.session = Session::LoggedIn { identity, account };
        Ok(Reply::LoggedIn(self.snapshot(account)?))
    }

    fn deposit(&mut self, amount: Money) -> Result<Reply, EngineError> {
        let account = self.require_account()?;
        debug!(%account, %amount, "Handling deposit");

        let now = Utc::now();
        self.registry
            .with_account(account, |acc| apply_deposit(acc, amount, now))
            .inspect_err(|err| warn!(%account, %err, "Deposit rejected"))?;

        Ok(Reply::DepositMade(self.snapshot(account)?))
    }

    fn withdraw(&mut self, amount: Money) -> Result<Reply, EngineError> {
        let account = self.require_account()?;
        debug!(%account, %amount, "Handling withdrawal");

        let now = Utc::now();
        self.registry
            .with_account(account, |acc| apply_withdrawal(acc, amount, now))
            .inspect_err(|err| warn!(%account, %err, "Withdrawal rejected"))?;

        Ok(Reply::WithdrawalMade(self.snapshot(account)?))
    }

    fn statement(&mut self) -> Result<Reply, EngineError> {
        let account = self.require_account()?;
        debug!(%account, "Handling statement");

        // The inquiry goes on record before the view is taken, so it
        // shows up as the newest entry of its own report
        let now = Utc::now();
        self.registry.with_account(account, |acc| {
            record_inquiry(acc, now);
            Ok(())
        })?;

        Ok(Reply::Statement(self.report(account)?))
    }

    fn switch_account(&mut self) -> Result<Reply, EngineError> {
        debug!("Handling account switch");

        let Session::LoggedIn { identity, account } = &self.session else {
            warn!("Switch request with no active account");
            return Err(EngineError::NotLoggedIn);
        };
        let identity = identity.clone();
        let current = *account;

        let accounts = self.registry.accounts_of(&identity);
        if accounts.len() <= 1 {
            // Only one account to be in: switching is a no-op
            return Ok(Reply::LoggedIn(self.snapshot(current)?));
        }

        let candidates: Vec<AccountId> = accounts.iter().map(|account| account.id()).collect();
        let choices = summarize(&accounts);
        self.session = Session::AwaitingAccountChoice {
            identity,
            candidates,
        };
        Ok(Reply::SelectionNeeded(choices))
    }

    fn create_customer(&mut self, customer: Customer) -> Result<Reply, EngineError> {
        debug!(identity = %customer.identity(), "Handling customer registration");

        let first_account = self
            .registry
            .register_customer(customer)
            .inspect_err(|err| warn!(%err, "Registration rejected"))?;

        Ok(Reply::CustomerRegistered { first_account })
    }

    fn create_account(&mut self, identity: IdentityCode) -> Result<Reply, EngineError> {
        debug!(%identity, "Handling account opening");

        let id = self
            .registry
            .open_account(&identity)
            .inspect_err(|err| warn!(%identity, %err, "Account opening rejected"))?;

        Ok(Reply::AccountOpened(id))
    }

    fn logout(&mut self) -> Result<Reply, EngineError> {
        debug!("Handling logout");

        self.session = Session::LoggedOut;
        Ok(Reply::LoggedOut)
    }

    fn require_account(&self) -> Result<AccountId, EngineError> {
        self.session.active_account().ok_or_else(|| {
            warn!("Transaction request with no active account");
            EngineError::NotLoggedIn
        })
    }

    fn snapshot(&self, id: AccountId) -> Result<SessionSnapshot, EngineError> {
        let account = self
            .registry
            .account(id)
            .ok_or(StorageError::AccountNotFound(id))?;
        let customer = self
            .registry
            .find_customer(account.owner())
            .ok_or(StorageError::IdentityNotFound)?;

        let today = Utc::now().date_naive();
        let limits = account.limits();

        Ok(SessionSnapshot {
            customer_name: customer.name().to_string(),
            account_id: account.id(),
            branch: account.branch().to_string(),
            balance: account.balance(),
            withdrawals_left_today: limits
                .daily_withdrawal_quota
                .saturating_sub(account.withdrawals_on(today)),
            transactions_left_today: limits
                .daily_transaction_quota
                .saturating_sub(account.transactions_on(today)),
        })
    }

    fn report(&self, id: AccountId) -> Result<StatementReport, EngineError> {
        let account = self
            .registry
            .account(id)
            .ok_or(StorageError::AccountNotFound(id))?;
        let customer = self
            .registry
            .find_customer(account.owner())
            .ok_or(StorageError::IdentityNotFound)?;

        Ok(StatementReport {
            account_id: account.id(),
            branch: account.branch().to_string(),
            customer_name: customer.name().to_string(),
            entries: account
                .history()
                .tail(self.statement_depth)
                .cloned()
                .collect(),
            balance: account.balance(),
        })
    }
}

fn summarize(accounts: &[&Account]) -> Vec<AccountSummary> {
    accounts
        .iter()
        .enumerate()
        .map(|(index, account)| AccountSummary {
            ordinal: index + 1,
            id: account.id(),
            branch: account.branch().to_string(),
            balance: account.balance(),
        })
        .collect()
}
