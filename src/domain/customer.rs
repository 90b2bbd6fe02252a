use std::fmt;

use chrono::NaiveDate;

use super::error::DomainError;

/// National identity code keying the customer registry.
///
/// Stored in canonical form: exactly 11 ASCII digits. Parsing strips
/// the punctuation people habitually type, so "111.222.333-96" and
/// "11122233396" name the same customer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IdentityCode(String);

impl IdentityCode {
    /// Parse from user input, tolerating dots, dashes and spaces
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let digits: String = raw
            .chars()
            .filter(|c| !matches!(c, '.' | '-' | ' '))
            .collect();

        if digits.len() != 11 || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(DomainError::MalformedIdentity);
        }

        Ok(Self(digits))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IdentityCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Registered customer with private fields enforcing invariants
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    identity: IdentityCode,
    name: String,
    birth_date: NaiveDate,
    address: String,
}

impl Customer {
    pub fn new(identity: IdentityCode, name: String, birth_date: NaiveDate, address: String) -> Self {
        Self {
            identity,
            name,
            birth_date,
            address,
        }
    }

    pub fn identity(&self) -> &IdentityCode {
        &self.identity
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    pub fn address(&self) -> &str {
        &self.address
    }
}
