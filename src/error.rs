//! Error type returned by the settings setters.

use thiserror::Error;

/// A rejected candidate value. The message is meant for the operator as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Error! {message}")]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The message without the `Error!` prefix
    pub fn message(&self) -> &str {
        &self.message
    }
}
