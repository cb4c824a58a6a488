// ============================================================================
// Validation Errors
// Error types for validator configuration and rejected values
// ============================================================================

use std::fmt;

/// Errors raised while building a validator configuration.
///
/// These are fatal to the construction attempt: the caller has to supply a
/// corrected precision/scale pair and try again.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ConfigurationError {
    /// Precision is zero or negative
    NonPositivePrecision { precision: i32 },
    /// Scale is negative or not strictly below precision
    ScaleOutOfRange { scale: i32, precision: i32 },
    /// Format notation could not be parsed (expected `N(m)` or `N(m.k)`)
    InvalidNotation(String),
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigurationError::NonPositivePrecision { precision } => write!(
                f,
                "precision must be a positive number (got {})",
                precision
            ),
            ConfigurationError::ScaleOutOfRange { scale, precision } => write!(
                f,
                "scale must be a non-negative number less than precision (got scale {}, precision {})",
                scale, precision
            ),
            ConfigurationError::InvalidNotation(notation) => {
                write!(f, "invalid number format notation: {:?}", notation)
            },
        }
    }
}

impl std::error::Error for ConfigurationError {}

/// Result type alias for configuration operations
pub type ConfigResult<T> = Result<T, ConfigurationError>;

/// Reason a value was rejected by a validator.
///
/// Rejection is an expected outcome, not a failure of the validator itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// Value is empty
    Empty,
    /// Value does not follow `sign? digits ([.,] digits)?`
    Malformed,
    /// Sign, integer and fractional digits together exceed precision
    PrecisionExceeded { digits: usize, precision: u32 },
    /// Too many fractional digits
    ScaleExceeded { fractional_digits: usize, scale: u32 },
    /// Negative value given to a validator that only accepts positives
    NegativeNotAllowed,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::Empty => write!(f, "value is empty"),
            Rejection::Malformed => write!(f, "value is not a decimal number"),
            Rejection::PrecisionExceeded { digits, precision } => write!(
                f,
                "value has {} significant characters, precision allows {}",
                digits, precision
            ),
            Rejection::ScaleExceeded {
                fractional_digits,
                scale,
            } => write!(
                f,
                "value has {} fractional digits, scale allows {}",
                fractional_digits, scale
            ),
            Rejection::NegativeNotAllowed => write!(f, "negative values are not allowed"),
        }
    }
}

impl std::error::Error for Rejection {}

/// Result type alias for value checks
pub type CheckResult<T> = Result<T, Rejection>;
