use thiserror::Error;

use super::validator::ValidationError;

/// Errors produced while turning a tool call into a Blink request or while
/// interpreting the response.
#[derive(Debug, Error)]
pub enum ActionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Remote error: {message}")]
    Remote {
        status: Option<u16>,
        message: String,
    },

    #[error("Unknown action: {0}")]
    UnknownAction(String),
}

impl ActionError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    pub fn remote(status: Option<u16>, message: impl Into<String>) -> Self {
        Self::Remote {
            status,
            message: message.into(),
        }
    }

    pub fn unknown_action(name: impl Into<String>) -> Self {
        Self::UnknownAction(name.into())
    }
}

pub type ActionResult<T> = Result<T, ActionError>;
