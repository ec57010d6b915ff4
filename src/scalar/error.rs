use crate::LiteralKind;
use thiserror::Error as ThisError;

/// Rejection raised by one of the scalar operations.
///
/// These are validation errors, the surrounding engine is expected to attach
/// them to the offending field, argument or variable and keep evaluating the
/// rest of the request.
#[derive(Debug, ThisError)]
pub enum HashidScalarError {
    #[error("Expected an integer, got '{0}'")]
    NotAnInteger(String),
    #[error("Expected String, got {kind} ({value})")]
    InvalidLiteralKind { kind: LiteralKind, value: String },
    #[error("Could not parse ID from value '{0}'")]
    UndecodableToken(String),
}
