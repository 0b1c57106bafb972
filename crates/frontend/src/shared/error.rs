use contracts::ValidationError;
use thiserror::Error;

/// The backend command itself failed; the message is passed through unchanged
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("command `{command}` failed: {message}")]
pub struct TransportError {
    pub command: String,
    pub message: String,
}

impl TransportError {
    pub fn new(command: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            message: message.into(),
        }
    }
}

/// Failure of a typed command call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// Arguments or result did not match the transfer contract
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl CommandError {
    pub fn is_validation(&self) -> bool {
        matches!(self, CommandError::Validation(_))
    }
}

/// Record the outcome of a store operation in its `error` field
pub fn settle<T>(
    error: &mut Option<String>,
    result: Result<T, CommandError>,
) -> Result<T, CommandError> {
    match &result {
        Ok(_) => *error = None,
        Err(e) => *error = Some(e.to_string()),
    }
    result
}
