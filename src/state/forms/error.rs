//! Form error types

use thiserror::Error;

/// Errors raised while addressing form fields
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("unknown form field: {0}")]
    UnknownField(String),
}

/// Reasons a submission is refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// At least one field is still empty
    #[error("Please fill in all the fields.")]
    Incomplete,
    /// Every field is filled but at least one error flag is set
    #[error("Please correct the errors in the form.")]
    Invalid,
}
