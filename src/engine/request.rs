use crate::domain::{Customer, IdentityCode, Money};

/// Typed requests crossing the shell/engine boundary.
///
/// Amounts arrive pre-parsed; locale handling (comma vs point) is the
/// shell's concern and never reaches the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Login { identity: IdentityCode },
    SelectAccount { ordinal: usize },
    Deposit { amount: Money },
    Withdraw { amount: Money },
    Statement,
    SwitchAccount,
    CreateCustomer { customer: Customer },
    CreateAccount { identity: IdentityCode },
    Logout,
}
