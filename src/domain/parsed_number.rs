// ============================================================================
// Parsed Number
// Lexical decomposition of a candidate value
// ============================================================================

use rust_decimal::Decimal;
use std::fmt;

/// Explicit sign token of a value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Sign {
    /// No sign character
    #[default]
    None,
    /// Leading `+`
    Plus,
    /// Leading `-`
    Minus,
}

impl Sign {
    /// Number of characters the sign occupies in the value (0 or 1)
    #[inline]
    pub const fn len(self) -> usize {
        match self {
            Sign::None => 0,
            Sign::Plus | Sign::Minus => 1,
        }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Sign::None)
    }

    pub(crate) fn from_token(token: &str) -> Self {
        match token {
            "+" => Sign::Plus,
            "-" => Sign::Minus,
            _ => Sign::None,
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sign::None => Ok(()),
            Sign::Plus => write!(f, "+"),
            Sign::Minus => write!(f, "-"),
        }
    }
}

/// A value split into sign, integer digits and fractional digits.
///
/// Borrows from the input and only lives for the duration of a check.
/// The digit slices contain ASCII `0-9` only; `fractional_digits` is empty
/// when the value has no fractional part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedNumber<'a> {
    sign: Sign,
    integer_digits: &'a str,
    fractional_digits: &'a str,
}

impl<'a> ParsedNumber<'a> {
    pub(crate) fn new(sign: Sign, integer_digits: &'a str, fractional_digits: &'a str) -> Self {
        Self {
            sign,
            integer_digits,
            fractional_digits,
        }
    }

    #[inline]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    #[inline]
    pub fn integer_digits(&self) -> &'a str {
        self.integer_digits
    }

    #[inline]
    pub fn fractional_digits(&self) -> &'a str {
        self.fractional_digits
    }

    /// Length of the sign token plus the integer digit run.
    #[inline]
    pub fn integer_len(&self) -> usize {
        self.sign.len() + self.integer_digits.len()
    }

    /// Length of the fractional digit run (0 without a fractional part).
    #[inline]
    pub fn fractional_len(&self) -> usize {
        self.fractional_digits.len()
    }

    /// Characters counted against precision: sign, integer and fractional
    /// digits, excluding the separator.
    #[inline]
    pub fn significant_len(&self) -> usize {
        self.integer_len() + self.fractional_len()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Minus
    }

    /// Convert to `rust_decimal::Decimal`.
    ///
    /// Returns `None` when the value does not fit into `Decimal`
    /// (more than 28 significant digits).
    pub fn to_decimal(&self) -> Option<Decimal> {
        let mut normalized = String::with_capacity(self.significant_len() + 1);
        if self.is_negative() {
            normalized.push('-');
        }
        normalized.push_str(self.integer_digits);
        if !self.fractional_digits.is_empty() {
            normalized.push('.');
            normalized.push_str(self.fractional_digits);
        }
        Decimal::from_str_exact(&normalized).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_len() {
        assert_eq!(Sign::None.len(), 0);
        assert_eq!(Sign::Plus.len(), 1);
        assert_eq!(Sign::Minus.len(), 1);
        assert!(Sign::None.is_empty());
        assert!(!Sign::Minus.is_empty());
    }

    #[test]
    fn test_sign_from_token() {
        assert_eq!(Sign::from_token(""), Sign::None);
        assert_eq!(Sign::from_token("+"), Sign::Plus);
        assert_eq!(Sign::from_token("-"), Sign::Minus);
    }

    #[test]
    fn test_lengths_include_sign() {
        let parsed = ParsedNumber::new(Sign::Plus, "1", "23");
        assert_eq!(parsed.integer_len(), 2);
        assert_eq!(parsed.fractional_len(), 2);
        assert_eq!(parsed.significant_len(), 4);

        let unsigned = ParsedNumber::new(Sign::None, "0", "");
        assert_eq!(unsigned.integer_len(), 1);
        assert_eq!(unsigned.fractional_len(), 0);
    }

    #[test]
    fn test_to_decimal() {
        let parsed = ParsedNumber::new(Sign::Minus, "1", "25");
        assert_eq!(parsed.to_decimal(), Some(Decimal::new(-125, 2)));

        let plus = ParsedNumber::new(Sign::Plus, "007", "");
        assert_eq!(plus.to_decimal(), Some(Decimal::from(7)));
    }

    #[test]
    fn test_to_decimal_out_of_range() {
        let huge = "9".repeat(40);
        let parsed = ParsedNumber::new(Sign::None, &huge, "");
        assert_eq!(parsed.to_decimal(), None);
    }
}
