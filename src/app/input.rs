//! Parsing helpers for raw menu input.
//!
//! People type amounts the way their keyboard suggests: with commas,
//! with stray spaces, sometimes with nothing useful at all. These
//! helpers normalize what can be normalized and reject the rest, so
//! the shell can re-prompt instead of crashing or silently accepting
//! garbage.

use chrono::NaiveDate;

use crate::domain::{DomainError, Money};

/// Strips whitespace and turns decimal commas into points.
///
/// "1 234,56" becomes "1234.56". Anything else is left alone; the
/// actual validation happens when the result is parsed.
pub fn normalize_decimal(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect()
}

/// Parses a user-typed amount into [`Money`].
///
/// Accepts both `150.00` and `150,00`. Rejects empty input, multiple
/// separators and non-digit noise. Sign and zero checks are left to
/// the operations themselves.
pub fn parse_amount(raw: &str) -> Result<Money, DomainError> {
    Money::from_decimal_str(&normalize_decimal(raw))
}

/// Parses a menu ordinal such as an account choice.
pub fn parse_ordinal(raw: &str) -> Option<usize> {
    raw.trim().parse().ok()
}

/// Parses a birth date in `dd/mm/yyyy` form.
pub fn parse_birth_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%d/%m/%Y").ok()
}
