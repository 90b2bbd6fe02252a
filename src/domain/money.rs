use std::fmt;
use std::ops::{Add, Sub};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::error::DomainError;

/// Fixed-point monetary value using i64 (multiply by 100)
/// Represents amounts with 2 decimal places of precision
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct Money(i64);

impl Money {
    const SCALE: i64 = 100;

    /// Create from raw cents value (for internal use)
    pub fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Get raw cents value
    pub fn cents(&self) -> i64 {
        self.0
    }

    /// Zero value
    pub fn zero() -> Self {
        Self(0)
    }

    /// Parse from decimal string (e.g., "150.50")
    pub fn from_decimal_str(s: &str) -> Result<Self, DomainError> {
        let s = s.trim();

        // Handle negative sign
        let (is_negative, s) = if let Some(stripped) = s.strip_prefix('-') {
            (true, stripped)
        } else {
            (false, s)
        };

        // Split on decimal point
        let parts: Vec<&str> = s.split('.').collect();

        let (integer_part, decimal_part) = match parts.len() {
            1 => (parts[0], ""),
            2 => (parts[0], parts[1]),
            _ => return Err(DomainError::InvalidAmount),
        };

        // Validate decimal places (max 2)
        if decimal_part.len() > 2 {
            return Err(DomainError::InvalidAmount);
        }

        // Parse integer part
        let integer: i64 = integer_part
            .parse()
            .map_err(|_| DomainError::InvalidAmount)?;

        // Parse decimal part and pad to 2 digits
        let decimal_str = format!("{:0<2}", decimal_part);
        let decimal: i64 = decimal_str
            .parse()
            .map_err(|_| DomainError::InvalidAmount)?;

        // Combine: integer * 100 + cents
        let scaled = integer
            .checked_mul(Self::SCALE)
            .and_then(|v| v.checked_add(decimal))
            .ok_or(DomainError::Overflow)?;

        let result = if is_negative { -scaled } else { scaled };

        Ok(Self(result))
    }

    /// Convert to decimal string with 2 decimal places
    pub fn to_decimal_string(&self) -> String {
        let abs_value = self.0.abs();
        let integer_part = abs_value / Self::SCALE;
        let decimal_part = abs_value % Self::SCALE;

        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{}.{:02}", sign, integer_part, decimal_part)
    }

    /// Checked addition, returns None on overflow
    pub fn checked_add(&self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Checked subtraction, returns None on underflow
    pub fn checked_sub(&self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_decimal_string())
    }
}

impl Serialize for Money {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_decimal_string())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Money::from_decimal_str(&s).map_err(serde::de::Error::custom)
    }
}
