//! State management-specific error types.

/// Errors that can occur during state operations.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// A submission is still waiting for its reply
    #[error("An address submission is already in progress")]
    SubmissionInFlight,

    /// No network channel attached to state
    #[error("Network event sender not set")]
    NetworkSenderNotSet,

    /// Network channel closed
    #[error("Failed to send network event: {0}")]
    SendFailed(String),
}
