use crate::domain::{AccountId, IdentityCode};

/// Login and account-selection state.
///
/// The variants carry exactly the data valid in each state, so a
/// half-initialised session (an account without a customer, a choice
/// without candidates) cannot be represented.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Session {
    #[default]
    LoggedOut,
    AwaitingAccountChoice {
        identity: IdentityCode,
        candidates: Vec<AccountId>,
    },
    LoggedIn {
        identity: IdentityCode,
        account: AccountId,
    },
}

impl Session {
    /// The account operations apply to, if one is active
    pub fn active_account(&self) -> Option<AccountId> {
        match self {
            Self::LoggedIn { account, .. } => Some(*account),
            _ => None,
        }
    }

    /// The identity this session belongs to, unless logged out
    pub fn identity(&self) -> Option<&IdentityCode> {
        match self {
            Self::LoggedOut => None,
            Self::AwaitingAccountChoice { identity, .. } => Some(identity),
            Self::LoggedIn { identity, .. } => Some(identity),
        }
    }

    pub fn is_logged_in(&self) -> bool {
        matches!(self, Self::LoggedIn { .. })
    }
}
