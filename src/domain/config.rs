// ============================================================================
// Validator Configuration
// Precision, scale and sign policy for N(m.k) number formats
// ============================================================================

use crate::numeric::{ConfigResult, ConfigurationError};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Immutable configuration of a number validator.
///
/// Describes the format `N(m.k)`: `m` (precision) is the maximum count of
/// characters in the number, counting the sign of a signed value, the
/// integer digits and the fractional digits but not the separator; `k`
/// (scale) is the maximum count of fractional digits.
///
/// Invariant: `precision > 0` and `0 <= scale < precision`. It is checked
/// when the value is built and can not be broken afterwards since the
/// fields are private and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawValidatorConfig"))]
pub struct ValidatorConfig {
    precision: u32,
    scale: u32,
    only_positive: bool,
}

impl ValidatorConfig {
    /// Create a configuration, checking the precision/scale invariant.
    ///
    /// # Errors
    /// - `NonPositivePrecision` if `precision <= 0`
    /// - `ScaleOutOfRange` if `scale < 0` or `scale >= precision`
    pub fn new(precision: i32, scale: i32, only_positive: bool) -> ConfigResult<Self> {
        if precision <= 0 {
            return Err(ConfigurationError::NonPositivePrecision { precision });
        }
        if scale < 0 || scale >= precision {
            return Err(ConfigurationError::ScaleOutOfRange { scale, precision });
        }

        Ok(Self {
            precision: precision as u32,
            scale: scale as u32,
            only_positive,
        })
    }

    #[inline]
    pub const fn precision(&self) -> u32 {
        self.precision
    }

    #[inline]
    pub const fn scale(&self) -> u32 {
        self.scale
    }

    #[inline]
    pub const fn only_positive(&self) -> bool {
        self.only_positive
    }

    /// Parse a configuration from JSON, e.g. `{"precision": 5, "scale": 2}`.
    ///
    /// Missing `scale` and `only_positive` default to `0` and `false`.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl ValidatorConfig {
    /// Integer format `N(m)`: scale 0, signs allowed
    pub fn integer(precision: i32) -> ConfigResult<Self> {
        Self::new(precision, 0, false)
    }

    /// Format `N(m.k)` rejecting negative values
    pub fn non_negative(precision: i32, scale: i32) -> ConfigResult<Self> {
        Self::new(precision, scale, true)
    }
}

// ============================================================================
// N(m.k) Notation
// ============================================================================

impl fmt::Display for ValidatorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.scale == 0 {
            write!(f, "N({})", self.precision)
        } else {
            write!(f, "N({}.{})", self.precision, self.scale)
        }
    }
}

impl FromStr for ValidatorConfig {
    type Err = ConfigurationError;

    /// Parse `N(m)`, `N(m.k)` or `N(m,k)`.
    ///
    /// The resulting configuration accepts signed values.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigurationError::InvalidNotation(s.to_string());

        let inner = s
            .strip_prefix(['N', 'n'])
            .and_then(|rest| rest.strip_prefix('('))
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(invalid)?;

        let (precision, scale) = match inner.split_once(['.', ',']) {
            Some((precision, scale)) => (precision, Some(scale)),
            None => (inner, None),
        };

        let precision = parse_limit(precision).ok_or_else(invalid)?;
        let scale = match scale {
            Some(scale) => parse_limit(scale).ok_or_else(invalid)?,
            None => 0,
        };

        Self::new(precision, scale, false)
    }
}

fn parse_limit(digits: &str) -> Option<i32> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

// ============================================================================
// Deserialization
// ============================================================================

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawValidatorConfig {
    precision: i32,
    #[serde(default)]
    scale: i32,
    #[serde(default)]
    only_positive: bool,
}

#[cfg(feature = "serde")]
impl TryFrom<RawValidatorConfig> for ValidatorConfig {
    type Error = ConfigurationError;

    fn try_from(raw: RawValidatorConfig) -> Result<Self, Self::Error> {
        Self::new(raw.precision, raw.scale, raw.only_positive)
    }
}
