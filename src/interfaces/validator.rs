// ============================================================================
// Validator Interface
// Defines the contract for value validators
// ============================================================================

/// A validator checking values of type `T`.
///
/// Rejection is reported through `Self::Error`; a validator must never
/// panic on malformed input.
pub trait Validator<T: ?Sized>: Send + Sync {
    /// Reason a value was rejected
    type Error;

    /// Check a value
    fn validate(&self, data: &T) -> Result<(), Self::Error>;

    /// Convenience wrapper returning whether `data` passed
    fn is_valid(&self, data: &T) -> bool {
        self.validate(data).is_ok()
    }
}
