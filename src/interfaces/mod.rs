// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod validator;

pub use validator::Validator;
