// ============================================================================
// Numeric Module
// Number grammar and validation error types
// ============================================================================
//
// This module provides:
// - parse_number: lexer splitting a value into sign and digit runs
// - ConfigurationError: invalid precision/scale at construction time
// - Rejection: reason a value failed validation
//
// Design principles:
// - ASCII digits only, no whitespace, no exponent
// - Grammar compiled once and shared
// - Configuration errors are returned, rejections are values

mod errors;
mod pattern;

pub use errors::{CheckResult, ConfigResult, ConfigurationError, Rejection};
pub use pattern::{parse_number, NUMBER_PATTERN_SOURCE};

pub(crate) use pattern::warm_up;
