// ============================================================================
// Domain Models Module
// Validator configuration and parsed values
// ============================================================================

pub mod config;
pub mod parsed_number;

pub use config::ValidatorConfig;
pub use parsed_number::{ParsedNumber, Sign};
