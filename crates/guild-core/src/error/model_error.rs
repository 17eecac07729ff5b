//! Model errors - validation failures raised before a request leaves the process

use thiserror::Error;

/// Validation errors for outbound requests and configuration values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("Message requires at least one of: content, embed, ark, image")]
    EmptyMessage,

    #[error("Mute requires either an end timestamp or a duration in seconds")]
    MissingMuteDuration,

    #[error("Role {role_id} requires a channel to be specified")]
    ChannelRequired { role_id: String },

    #[error("Unknown intent: {0}")]
    UnknownIntent(String),

    #[error("Schedule must end after it starts")]
    InvalidScheduleWindow,

    #[error("Validation error: {0}")]
    Validation(String),
}

impl ModelError {
    /// Check if this error was caused by caller input
    #[must_use]
    pub fn is_validation(&self) -> bool {
        !matches!(self, Self::UnknownIntent(_))
    }
}

/// Result type alias for model operations
pub type ModelResult<T> = Result<T, ModelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ModelError::EmptyMessage.to_string(),
            "Message requires at least one of: content, embed, ark, image"
        );
        assert_eq!(
            ModelError::ChannelRequired { role_id: "5".to_string() }.to_string(),
            "Role 5 requires a channel to be specified"
        );
        assert_eq!(
            ModelError::UnknownIntent("typing".to_string()).to_string(),
            "Unknown intent: typing"
        );
    }

    #[test]
    fn test_is_validation() {
        assert!(ModelError::EmptyMessage.is_validation());
        assert!(ModelError::MissingMuteDuration.is_validation());
        assert!(!ModelError::UnknownIntent("x".to_string()).is_validation());
    }
}
