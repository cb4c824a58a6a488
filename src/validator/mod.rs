// ============================================================================
// Validator Module
// Contains the number format validator
// ============================================================================

mod number_validator;

pub use number_validator::NumberValidator;
