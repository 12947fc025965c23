//! Setup-step progress model.
//!
//! The orchestrator emits one step at the *start* of each pipeline phase,
//! strictly in the order of [`SetupStep::SUCCESS_ORDER`]. A failing attempt
//! terminates the stream with a single [`SetupStep::Failed`]; a successful
//! attempt ends the stream after [`SetupStep::VerifyingAccessToken`] and
//! reports the wallet details through the outcome channel instead of a
//! synthetic final step.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One phase of the activation pipeline, as surfaced to the UI layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum SetupStep {
    /// Exchanging the one-time bootstrap code for a session credential.
    SubmittingCode,
    /// Binding the key-share module to the new device identity.
    InitializingKeyModule,
    /// Asking to join the existing wallet's key-share set.
    RequestingJoin,
    /// Submitting the recovery-phrase proof for the new device.
    AuthorizingDevice,
    /// Waiting for the local key share to reach ready status.
    WaitingForKeyReady,
    /// Asking the backend to issue the verification transaction.
    InitializingTransaction,
    /// Waiting for the verification transaction to become signable.
    WaitingForTransactionReady,
    /// Co-signing the verification transaction with the local share.
    SigningTransaction,
    /// Reporting the co-signature back to the backend.
    ConfirmingTransaction,
    /// Final credential exchange for the activated wallet.
    VerifyingAccessToken,
    /// Terminal failure, with a diagnostic log reference when the
    /// key-share module provided one.
    Failed { log_ref: Option<String> },
}

impl SetupStep {
    /// The exact forward order of a fully successful run.
    pub const SUCCESS_ORDER: [SetupStep; 10] = [
        SetupStep::SubmittingCode,
        SetupStep::InitializingKeyModule,
        SetupStep::RequestingJoin,
        SetupStep::AuthorizingDevice,
        SetupStep::WaitingForKeyReady,
        SetupStep::InitializingTransaction,
        SetupStep::WaitingForTransactionReady,
        SetupStep::SigningTransaction,
        SetupStep::ConfirmingTransaction,
        SetupStep::VerifyingAccessToken,
    ];

    /// Position of this step in the success order, if it has one.
    pub fn index(&self) -> Option<usize> {
        Self::SUCCESS_ORDER.iter().position(|s| s == self)
    }

    /// Returns true if no further step can follow this one.
    pub fn is_terminal(&self) -> bool {
        matches!(self, SetupStep::Failed { .. })
    }
}

impl fmt::Display for SetupStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SetupStep::SubmittingCode => "submitting code",
            SetupStep::InitializingKeyModule => "initializing key module",
            SetupStep::RequestingJoin => "requesting to join wallet",
            SetupStep::AuthorizingDevice => "authorizing new device",
            SetupStep::WaitingForKeyReady => "waiting for key share",
            SetupStep::InitializingTransaction => "initializing transaction",
            SetupStep::WaitingForTransactionReady => "waiting for transaction",
            SetupStep::SigningTransaction => "signing transaction",
            SetupStep::ConfirmingTransaction => "confirming transaction",
            SetupStep::VerifyingAccessToken => "verifying access token",
            SetupStep::Failed { .. } => "failed",
        };
        write!(f, "{name}")
    }
}
