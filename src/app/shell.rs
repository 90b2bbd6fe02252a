//! Interactive menu shell.
//!
//! The shell owns the terminal conversation: it prints menus, reads
//! lines, turns them into [`Request`]s and renders the [`Reply`] or
//! the failure message. It is generic over its streams so tests can
//! drive a whole session from a string script.

use std::io::{BufRead, Write};

use crate::app::error::AppError;
use crate::app::{format, input};
use crate::domain::{Customer, IdentityCode};
use crate::engine::{AccountSummary, EngineError, Reply, Request, SessionSnapshot, Teller};
use crate::storage::{Registry, StorageError};

const WELCOME_BANNER: &str = "\
========================================
        Welcome to Digital Bank
    Where your digits become codes!
========================================";

const GOODBYE: &str = "\
========================================
  Thank you for banking with Digital
         Bank. See you soon!
========================================";

const LOGGED_OUT_MENU: &str = "\n [1] Log in\n [2] New customer\n [3] New account\n [0] Quit\n\n Option: ";

const LOGGED_IN_MENU: &str = "\n [1] Deposit\n [2] Withdraw\n [3] Statement\n [4] Switch account\n [5] Log out\n [0] Quit\n\n Option: ";

/// What a menu interaction decided about the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Continue,
    Exit,
}

/// Result of asking for an identity code.
enum IdentityAnswer {
    Code(IdentityCode),
    Invalid,
    End,
}

/// Text-menu front end over a [`Teller`].
pub struct MenuShell<R: Registry, I: BufRead, O: Write> {
    teller: Teller<R>,
    input: I,
    output: O,
}

impl<R: Registry, I: BufRead, O: Write> MenuShell<R, I, O> {
    pub fn new(teller: Teller<R>, input: I, output: O) -> Self {
        Self {
            teller,
            input,
            output,
        }
    }

    pub fn teller(&self) -> &Teller<R> {
        &self.teller
    }

    /// Runs the menu loop until the customer quits or input ends.
    pub fn run(&mut self) -> Result<(), AppError> {
        writeln!(self.output, "{WELCOME_BANNER}")?;

        loop {
            let outcome = if self.teller.session().is_logged_in() {
                self.logged_in_menu()?
            } else {
                self.logged_out_menu()?
            };
            if outcome == Outcome::Exit {
                break;
            }
        }

        writeln!(self.output, "\n{GOODBYE}")?;
        Ok(())
    }

    fn logged_out_menu(&mut self) -> Result<Outcome, AppError> {
        let Some(choice) = self.prompt(LOGGED_OUT_MENU)? else {
            return Ok(Outcome::Exit);
        };
        match choice.as_str() {
            "1" => self.login_flow(),
            "2" => self.register_flow(),
            "3" => self.open_account_flow(),
            "0" => Ok(Outcome::Exit),
            other => self.invalid_option(other),
        }
    }

    fn logged_in_menu(&mut self) -> Result<Outcome, AppError> {
        let Some(choice) = self.prompt(LOGGED_IN_MENU)? else {
            return Ok(Outcome::Exit);
        };
        match choice.as_str() {
            "1" => self.deposit_flow(),
            "2" => self.withdraw_flow(),
            "3" => self.statement_flow(),
            "4" => self.switch_flow(),
            "5" => self.logout_flow(),
            "0" => Ok(Outcome::Exit),
            other => self.invalid_option(other),
        }
    }

    fn login_flow(&mut self) -> Result<Outcome, AppError> {
        let identity = match self.ask_identity("\nIdentity code (11 digits): ")? {
            IdentityAnswer::Code(identity) => identity,
            IdentityAnswer::Invalid => return Ok(Outcome::Continue),
            IdentityAnswer::End => return Ok(Outcome::Exit),
        };

        match self.teller.handle(Request::Login { identity }) {
            Ok(Reply::LoggedIn(snapshot)) => self.greet(&snapshot),
            Ok(Reply::SelectionNeeded(choices)) => self.choose_account(&choices),
            Ok(_) => Ok(Outcome::Continue),
            Err(EngineError::Storage(StorageError::IdentityNotFound)) => {
                self.say("\nNo customer with this identity code. Pick [2] to register.\n")?;
                Ok(Outcome::Continue)
            }
            Err(EngineError::NoAccountsForCustomer) => {
                self.say("\nThis customer has no accounts yet. Pick [3] to open one.\n")?;
                Ok(Outcome::Continue)
            }
            Err(err) => self.report_failure(&err),
        }
    }

    fn register_flow(&mut self) -> Result<Outcome, AppError> {
        let identity = match self.ask_identity("\nIdentity code (11 digits): ")? {
            IdentityAnswer::Code(identity) => identity,
            IdentityAnswer::Invalid => return Ok(Outcome::Continue),
            IdentityAnswer::End => return Ok(Outcome::Exit),
        };

        let Some(name) = self.prompt("Full name: ")? else {
            return Ok(Outcome::Exit);
        };
        if name.is_empty() {
            self.say("\nA name is required.\n")?;
            return Ok(Outcome::Continue);
        }

        let Some(raw_birth) = self.prompt("Birth date (dd/mm/yyyy): ")? else {
            return Ok(Outcome::Exit);
        };
        let Some(birth_date) = input::parse_birth_date(&raw_birth) else {
            self.say("\nThat is not a date in dd/mm/yyyy form.\n")?;
            return Ok(Outcome::Continue);
        };

        let Some(address) = self.prompt("Address (street, number - district - city/state): ")?
        else {
            return Ok(Outcome::Exit);
        };

        let customer = Customer::new(identity, name, birth_date, address);
        match self.teller.handle(Request::CreateCustomer { customer }) {
            Ok(Reply::CustomerRegistered {
                first_account: Some(id),
            }) => {
                writeln!(
                    self.output,
                    "\nCustomer registered. Account {id} is ready; pick [1] to log in.\n"
                )?;
                Ok(Outcome::Continue)
            }
            Ok(Reply::CustomerRegistered {
                first_account: None,
            }) => {
                self.say("\nCustomer registered. Pick [3] to open an account.\n")?;
                Ok(Outcome::Continue)
            }
            Ok(_) => Ok(Outcome::Continue),
            Err(err) => self.report_failure(&err),
        }
    }

    fn open_account_flow(&mut self) -> Result<Outcome, AppError> {
        let identity = match self.ask_identity("\nIdentity code of the holder: ")? {
            IdentityAnswer::Code(identity) => identity,
            IdentityAnswer::Invalid => return Ok(Outcome::Continue),
            IdentityAnswer::End => return Ok(Outcome::Exit),
        };

        match self.teller.handle(Request::CreateAccount { identity }) {
            Ok(Reply::AccountOpened(id)) => {
                writeln!(self.output, "\nAccount {id} opened.\n")?;
                Ok(Outcome::Continue)
            }
            Ok(_) => Ok(Outcome::Continue),
            Err(err) => self.report_failure(&err),
        }
    }

    fn deposit_flow(&mut self) -> Result<Outcome, AppError> {
        let Some(raw) = self.prompt("\nDeposit amount: R$ ")? else {
            return Ok(Outcome::Exit);
        };
        let Ok(amount) = input::parse_amount(&raw) else {
            writeln!(
                self.output,
                "\n'{raw}' is not an amount. Use digits, like 150.00.\n"
            )?;
            return Ok(Outcome::Continue);
        };

        match self.teller.handle(Request::Deposit { amount }) {
            Ok(Reply::DepositMade(snapshot)) => {
                writeln!(
                    self.output,
                    "\nDeposit accepted. New balance: {}.\n",
                    format::currency(snapshot.balance)
                )?;
                Ok(Outcome::Continue)
            }
            Ok(_) => Ok(Outcome::Continue),
            Err(err) => self.report_failure(&err),
        }
    }

    fn withdraw_flow(&mut self) -> Result<Outcome, AppError> {
        let Some(raw) = self.prompt("\nWithdrawal amount: R$ ")? else {
            return Ok(Outcome::Exit);
        };
        let Ok(amount) = input::parse_amount(&raw) else {
            writeln!(
                self.output,
                "\n'{raw}' is not an amount. Use digits, like 150.00.\n"
            )?;
            return Ok(Outcome::Continue);
        };

        match self.teller.handle(Request::Withdraw { amount }) {
            Ok(Reply::WithdrawalMade(snapshot)) => {
                writeln!(
                    self.output,
                    "\nPlease take your notes. New balance: {}. Withdrawals left today: {}.\n",
                    format::currency(snapshot.balance),
                    snapshot.withdrawals_left_today
                )?;
                Ok(Outcome::Continue)
            }
            Ok(_) => Ok(Outcome::Continue),
            Err(err) => self.report_failure(&err),
        }
    }

    fn statement_flow(&mut self) -> Result<Outcome, AppError> {
        match self.teller.handle(Request::Statement) {
            Ok(Reply::Statement(report)) => {
                write!(self.output, "\n{}\n", format::statement(&report))?;
                Ok(Outcome::Continue)
            }
            Ok(_) => Ok(Outcome::Continue),
            Err(err) => self.report_failure(&err),
        }
    }

    fn switch_flow(&mut self) -> Result<Outcome, AppError> {
        match self.teller.handle(Request::SwitchAccount) {
            Ok(Reply::LoggedIn(snapshot)) => {
                writeln!(
                    self.output,
                    "\nThis is your only account. Staying on account {}.\n",
                    snapshot.account_id
                )?;
                Ok(Outcome::Continue)
            }
            Ok(Reply::SelectionNeeded(choices)) => self.choose_account(&choices),
            Ok(_) => Ok(Outcome::Continue),
            Err(err) => self.report_failure(&err),
        }
    }

    fn logout_flow(&mut self) -> Result<Outcome, AppError> {
        match self.teller.handle(Request::Logout) {
            Ok(_) => {
                self.say("\nLogged out.\n")?;
                Ok(Outcome::Continue)
            }
            Err(err) => self.report_failure(&err),
        }
    }

    /// Lists the accounts and keeps asking until a valid choice, a
    /// cancel, or the end of input.
    fn choose_account(&mut self, choices: &[AccountSummary]) -> Result<Outcome, AppError> {
        self.say("\nYour accounts:")?;
        for choice in choices {
            writeln!(
                self.output,
                " [{}] account {}  branch {}  {}",
                choice.ordinal,
                choice.id,
                choice.branch,
                format::currency(choice.balance)
            )?;
        }

        loop {
            let Some(raw) = self.prompt("\n Which one (0 cancels)? ")? else {
                return Ok(Outcome::Exit);
            };
            if raw == "0" {
                if let Err(err) = self.teller.handle(Request::Logout) {
                    return self.report_failure(&err);
                }
                self.say("\nNo account selected.\n")?;
                return Ok(Outcome::Continue);
            }
            let Some(ordinal) = input::parse_ordinal(&raw) else {
                self.say(" Numbers only, please.")?;
                continue;
            };

            match self.teller.handle(Request::SelectAccount { ordinal }) {
                Ok(Reply::LoggedIn(snapshot)) => return self.greet(&snapshot),
                Ok(_) => return Ok(Outcome::Continue),
                Err(err @ EngineError::InvalidSelection { .. }) => {
                    writeln!(self.output, " {}.", format::failure_message(&err))?;
                }
                Err(err) => return self.report_failure(&err),
            }
        }
    }

    /// Prompts for an identity code and reports a malformed one.
    fn ask_identity(&mut self, label: &str) -> Result<IdentityAnswer, AppError> {
        let Some(raw) = self.prompt(label)? else {
            return Ok(IdentityAnswer::End);
        };
        match IdentityCode::parse(&raw) {
            Ok(identity) => Ok(IdentityAnswer::Code(identity)),
            Err(_) => {
                self.say("\nAn identity code has exactly 11 digits. Try again.\n")?;
                Ok(IdentityAnswer::Invalid)
            }
        }
    }

    fn greet(&mut self, snapshot: &SessionSnapshot) -> Result<Outcome, AppError> {
        writeln!(
            self.output,
            "\nHello, {}! Using account {} (branch {}). Balance: {}.\n",
            snapshot.customer_name,
            snapshot.account_id,
            snapshot.branch,
            format::currency(snapshot.balance)
        )?;
        Ok(Outcome::Continue)
    }

    fn invalid_option(&mut self, chosen: &str) -> Result<Outcome, AppError> {
        writeln!(
            self.output,
            "\nOption '{chosen}' is not on the menu. Try again.\n"
        )?;
        Ok(Outcome::Continue)
    }

    fn report_failure(&mut self, err: &EngineError) -> Result<Outcome, AppError> {
        writeln!(
            self.output,
            "\nOperation failed: {}.\n",
            format::failure_message(err)
        )?;
        Ok(Outcome::Continue)
    }

    /// Writes a prompt and reads one trimmed line. `None` on end of
    /// input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>, AppError> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn say(&mut self, text: &str) -> Result<(), AppError> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BankConfig;
    use crate::storage::InMemoryRegistry;
    use chrono::NaiveDate;
    use std::io::Cursor;

    const IDENTITY: &str = "11122233396";

    fn maria() -> Customer {
        Customer::new(
            IdentityCode::parse(IDENTITY).unwrap(),
            "Maria Silva".to_string(),
            NaiveDate::from_ymd_opt(1990, 3, 14).unwrap(),
            "Flower St, 42 - Downtown - Springfield/SP".to_string(),
        )
    }

    fn registry_with_customer() -> InMemoryRegistry {
        let mut registry = InMemoryRegistry::new(BankConfig::default().account_policy());
        registry.register_customer(maria()).unwrap();
        registry
    }

    fn run_script(registry: InMemoryRegistry, script: &str) -> String {
        let teller = Teller::new(registry, 10);
        let mut output = Vec::new();
        MenuShell::new(teller, Cursor::new(script.to_string()), &mut output)
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn end_of_input_ends_the_session_politely() {
        let output = run_script(registry_with_customer(), "");

        assert!(output.contains("Welcome to Digital Bank"));
        assert!(output.contains("See you soon!"));
    }

    #[test]
    fn unknown_option_is_reported_and_menu_repeats() {
        let output = run_script(registry_with_customer(), "9\n0\n");

        assert!(output.contains("Option '9' is not on the menu."));
        assert!(output.contains("See you soon!"));
    }

    #[test]
    fn login_and_deposit_with_comma_amount() {
        let output = run_script(registry_with_customer(), "1\n111.222.333-96\n1\n100,50\n0\n");

        assert!(output.contains("Hello, Maria Silva!"));
        assert!(output.contains("Deposit accepted. New balance: R$ 100.50."));
    }

    #[test]
    fn malformed_identity_is_rejected() {
        let output = run_script(registry_with_customer(), "1\n123\n0\n");

        assert!(output.contains("An identity code has exactly 11 digits."));
    }

    #[test]
    fn unknown_identity_suggests_registration() {
        let registry = InMemoryRegistry::new(BankConfig::default().account_policy());
        let output = run_script(registry, "1\n98765432100\n0\n");

        assert!(output.contains("No customer with this identity code. Pick [2] to register."));
    }

    #[test]
    fn garbage_amount_is_reported() {
        let output = run_script(registry_with_customer(), "1\n11122233396\n1\nabc\n0\n");

        assert!(output.contains("'abc' is not an amount."));
    }

    #[test]
    fn registration_opens_first_account() {
        let registry = InMemoryRegistry::new(BankConfig::default().account_policy());
        let script = "2\n11122233396\nMaria Silva\n14/03/1990\nFlower St, 42 - Downtown - Springfield/SP\n0\n";
        let output = run_script(registry, script);

        assert!(output.contains("Customer registered. Account 1 is ready; pick [1] to log in."));
    }

    #[test]
    fn rejected_withdrawal_prints_the_reason() {
        let script = "1\n11122233396\n1\n100.00\n2\n500.01\n0\n";
        let output = run_script(registry_with_customer(), script);

        assert!(output.contains("Operation failed: Amount exceeds the per-withdrawal limit."));
    }

    #[test]
    fn statement_shows_recent_activity_and_balance() {
        let script = "1\n11122233396\n1\n100.00\n2\n40.00\n3\n0\n";
        let output = run_script(registry_with_customer(), script);

        assert!(output.contains("Statement for account 1 (branch 0001)"));
        assert!(output.contains("Holder: Maria Silva"));
        assert!(output.contains("Deposit"));
        assert!(output.contains("Withdrawal"));
        assert!(output.contains("Balance inquiry"));
        assert!(output.contains("R$ 60.00"));
    }

    #[test]
    fn switch_with_single_account_stays_put() {
        let output = run_script(registry_with_customer(), "1\n11122233396\n4\n0\n");

        assert!(output.contains("This is your only account. Staying on account 1."));
    }
}
