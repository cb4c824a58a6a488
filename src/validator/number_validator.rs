// ============================================================================
// Number Validator
// Checks values against an N(m.k) number format
// ============================================================================

use crate::domain::{ParsedNumber, ValidatorConfig};
use crate::interfaces::Validator;
use crate::numeric::{self, CheckResult, ConfigResult, Rejection};
use rust_decimal::Decimal;

/// Validator for decimal numbers with limited precision and scale.
///
/// A value is accepted when it reads `sign? digits ([.,] digits)?` (ASCII
/// digits only, nothing else around it) and
/// - sign + integer digits + fractional digits <= precision,
/// - fractional digits <= scale,
/// - it carries no `-` sign if the validator only accepts positives.
///
/// The validator is immutable after construction and can be shared between
/// threads freely.
///
/// # Example
/// ```rust
/// use number_validator::prelude::*;
///
/// let validator = NumberValidator::new(4, 2, true)?;
/// assert!(validator.is_valid_number(Some("+1.23")));
/// assert!(!validator.is_valid_number(Some("-1.23")));
/// assert!(!validator.is_valid_number(None));
/// # Ok::<(), ConfigurationError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberValidator {
    config: ValidatorConfig,
}

impl NumberValidator {
    /// Create a validator.
    ///
    /// # Errors
    /// - `NonPositivePrecision` if `precision <= 0`
    /// - `ScaleOutOfRange` if `scale < 0` or `scale >= precision`
    pub fn new(precision: i32, scale: i32, only_positive: bool) -> ConfigResult<Self> {
        match ValidatorConfig::new(precision, scale, only_positive) {
            Ok(config) => Ok(Self::from_config(config)),
            Err(error) => {
                tracing::debug!(
                    precision,
                    scale,
                    only_positive,
                    %error,
                    "invalid validator configuration"
                );
                Err(error)
            },
        }
    }

    /// Integer validator (`scale = 0`) accepting both signs
    pub fn with_precision(precision: i32) -> ConfigResult<Self> {
        Self::new(precision, 0, false)
    }

    /// Create a validator from an already checked configuration
    pub fn from_config(config: ValidatorConfig) -> Self {
        numeric::warm_up();
        Self { config }
    }

    /// Create a validator from `N(m)` / `N(m.k)` notation
    pub fn from_notation(notation: &str) -> ConfigResult<Self> {
        notation.parse().map(Self::from_config)
    }

    #[inline]
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Check whether `value` conforms to the configured format.
    ///
    /// `None` and the empty string are never valid.
    pub fn is_valid_number(&self, value: Option<&str>) -> bool {
        value.is_some_and(|value| self.check(value).is_ok())
    }

    /// Check `value` and report why it was rejected.
    ///
    /// Checks run in order: emptiness, grammar, precision, scale, sign; the
    /// first failing one is reported.
    pub fn check<'a>(&self, value: &'a str) -> CheckResult<ParsedNumber<'a>> {
        let result = self.evaluate(value);
        match &result {
            Ok(_) => tracing::trace!(value, format = %self.config, "value accepted"),
            Err(rejection) => {
                tracing::debug!(value, format = %self.config, %rejection, "value rejected")
            },
        }
        result
    }

    /// Validate `value` and convert it to a `Decimal`.
    ///
    /// Returns `None` for rejected values and for values beyond the range of
    /// `Decimal`.
    pub fn parse_decimal(&self, value: &str) -> Option<Decimal> {
        self.check(value).ok()?.to_decimal()
    }

    fn evaluate<'a>(&self, value: &'a str) -> CheckResult<ParsedNumber<'a>> {
        if value.is_empty() {
            return Err(Rejection::Empty);
        }

        let parsed = numeric::parse_number(value).ok_or(Rejection::Malformed)?;

        let precision = self.config.precision();
        let scale = self.config.scale();

        if parsed.significant_len() > precision as usize {
            return Err(Rejection::PrecisionExceeded {
                digits: parsed.significant_len(),
                precision,
            });
        }
        if parsed.fractional_len() > scale as usize {
            return Err(Rejection::ScaleExceeded {
                fractional_digits: parsed.fractional_len(),
                scale,
            });
        }
        if self.config.only_positive() && parsed.is_negative() {
            return Err(Rejection::NegativeNotAllowed);
        }

        Ok(parsed)
    }
}

impl From<ValidatorConfig> for NumberValidator {
    fn from(config: ValidatorConfig) -> Self {
        Self::from_config(config)
    }
}

impl Validator<str> for NumberValidator {
    type Error = Rejection;

    fn validate(&self, data: &str) -> Result<(), Self::Error> {
        self.check(data).map(|_| ())
    }
}
