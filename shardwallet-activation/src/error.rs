//! Error types for the activation pipeline.

use thiserror::Error;

/// Result type for activation operations.
pub type ActivationResult<T> = Result<T, ActivationError>;

/// Errors that can occur during wallet activation.
///
/// Every wait has its own timeout kind so the caller can tell which phase
/// exhausted its budget without inspecting transport detail; raw status
/// codes never leave the backend exchange layer except inside `Backend`.
#[derive(Debug, Error)]
pub enum ActivationError {
    /// The bootstrap code was rejected as invalid or expired (403-class).
    /// The one user-correctable failure: re-entering the code may succeed.
    #[error("bootstrap code rejected")]
    IncorrectCode,

    /// The backend answered with a non-success status.
    #[error("backend error (status {status}): {message}")]
    Backend { status: u16, message: String },

    /// The backend answered 2xx but the body could not be interpreted.
    #[error("malformed backend response: {0}")]
    MalformedResponse(String),

    /// Transport-level HTTP failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The key-share module did not acknowledge the join request within
    /// the join deadline.
    #[error("join-wallet request timed out")]
    JoinWalletTimeout,

    /// The local key share never reached ready status within the poll
    /// budget.
    #[error("key share did not become ready in time")]
    KeyReadinessTimeout,

    /// The verification transaction never became ready to sign within the
    /// poll budget.
    #[error("verification transaction did not become ready in time")]
    TransactionReadinessTimeout,

    /// The co-signature did not complete within the signing deadline.
    #[error("transaction signing timed out")]
    SigningTimeout,

    /// The key-share module reported a failure.
    #[error("key-share module error: {0}")]
    Connector(String),

    /// The attempt was cancelled by the caller.
    #[error("activation cancelled")]
    Cancelled,
}

impl ActivationError {
    /// Returns true if this error is a locally detected timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(
            self,
            ActivationError::JoinWalletTimeout
                | ActivationError::KeyReadinessTimeout
                | ActivationError::TransactionReadinessTimeout
                | ActivationError::SigningTimeout
        )
    }

    /// Returns true if retrying with corrected user input may succeed.
    pub fn is_user_correctable(&self) -> bool {
        matches!(self, ActivationError::IncorrectCode)
    }
}
