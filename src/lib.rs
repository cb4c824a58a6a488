// ============================================================================
// Number Validator Library
// Validation of fixed-format decimal numbers N(m.k)
// ============================================================================

//! # Number Validator
//!
//! Validates textual decimal numbers against the `N(m.k)` format used in
//! electronic tax document inventories.
//!
//! ## Format
//!
//! - `m` (**precision**): maximum count of characters in the number,
//!   including the sign, the integer part and the fractional part, but not
//!   the separator
//! - `k` (**scale**): maximum count of fractional digits; `N(m)` when zero
//! - Separator is `.` or `,`; digits are ASCII `0-9`
//! - Optionally, negative values can be rejected altogether
//!
//! ## Example
//!
//! ```rust
//! use number_validator::prelude::*;
//!
//! // N(4.2), positive values only
//! let validator = NumberValidator::new(4, 2, true)?;
//!
//! assert!(validator.is_valid_number(Some("+1.23")));
//! assert!(validator.is_valid_number(Some("0,5")));
//! assert!(!validator.is_valid_number(Some("1.234")));
//! assert!(!validator.is_valid_number(Some("-1.23")));
//!
//! // Rejection reasons
//! assert_eq!(validator.check("1..23"), Err(Rejection::Malformed));
//!
//! // Notation
//! let config: ValidatorConfig = "N(15.2)".parse()?;
//! assert_eq!(config.to_string(), "N(15.2)");
//! # Ok::<(), ConfigurationError>(())
//! ```

pub mod domain;
pub mod interfaces;
pub mod numeric;
pub mod validator;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{ParsedNumber, Sign, ValidatorConfig};
    pub use crate::interfaces::Validator;
    pub use crate::numeric::{ConfigurationError, Rejection};
    pub use crate::validator::NumberValidator;
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_end_to_end_validation() {
        let config: ValidatorConfig = "N(6.2)".parse().unwrap();
        let validator = NumberValidator::from(config);

        assert!(validator.is_valid_number(Some("-123.45")));
        assert!(!validator.is_valid_number(Some("-12345.6")));
        assert_eq!(
            validator.parse_decimal("-123,45"),
            Some(Decimal::new(-12345, 2))
        );

        let rejection = validator.check("12345.67").unwrap_err();
        assert_eq!(
            rejection.to_string(),
            "value has 7 significant characters, precision allows 6"
        );
    }

    #[test]
    fn test_presets_through_validator() {
        let integer = NumberValidator::from_config(ValidatorConfig::integer(3).unwrap());
        assert!(integer.is_valid_number(Some("-99")));
        assert!(!integer.is_valid_number(Some("9.9")));

        let non_negative =
            NumberValidator::from_config(ValidatorConfig::non_negative(3, 1).unwrap());
        assert!(non_negative.is_valid_number(Some("+9.9")));
        assert!(!non_negative.is_valid_number(Some("-9.9")));
    }

    #[test]
    fn test_configuration_error_is_std_error() {
        let error: Box<dyn std::error::Error> =
            Box::new(NumberValidator::new(0, 0, false).unwrap_err());
        assert_eq!(
            error.to_string(),
            "precision must be a positive number (got 0)"
        );
    }
}
