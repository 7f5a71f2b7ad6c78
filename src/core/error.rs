use thiserror::Error;

/// Errors raised when the validator is used against its contract.
///
/// These are never the outcome of validating a well-typed value: a value
/// that simply is not a fiscal code or VAT number yields
/// [`ValidationOutcome::Invalid`](super::ValidationOutcome::Invalid) instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum FiscalDataError {
    /// The value or constraint handed to the validator has the wrong type.
    #[error("expected argument of type \"{expected}\", \"{given}\" given")]
    UnexpectedType {
        /// Type the validator can handle (e.g. "string").
        expected: String,
        /// Type that was actually supplied (e.g. "array").
        given: String,
    },
}

impl FiscalDataError {
    /// Create an [`UnexpectedType`](Self::UnexpectedType) error.
    pub fn unexpected_type(expected: impl Into<String>, given: impl Into<String>) -> Self {
        Self::UnexpectedType {
            expected: expected.into(),
            given: given.into(),
        }
    }
}
