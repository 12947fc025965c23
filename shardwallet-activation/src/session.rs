//! Per-attempt session state.

use shardwallet_types::{AccessToken, DeviceId, RecoveryPhrase};

/// Cross-step state for one activation attempt.
///
/// Exclusively owned by a single pipeline run and dropped in full on both
/// success and failure; the secret fields zeroize themselves on drop. A
/// retry starts from a fresh session; no partial session is ever reused.
#[derive(Debug)]
pub struct ActivationSession {
    device_id: DeviceId,
    access_token: AccessToken,
    recovery_phrase: RecoveryPhrase,
}

impl ActivationSession {
    /// Opens a session once the bootstrap exchange has issued the device
    /// identity and session credential.
    pub fn new(
        device_id: DeviceId,
        access_token: AccessToken,
        recovery_phrase: RecoveryPhrase,
    ) -> Self {
        Self {
            device_id,
            access_token,
            recovery_phrase,
        }
    }

    /// The device identifier for this attempt.
    pub fn device_id(&self) -> &DeviceId {
        &self.device_id
    }

    /// The session credential attached to every exchange in this attempt.
    pub fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    /// The recovery-phrase proof submitted during device authorization.
    pub fn recovery_phrase(&self) -> &RecoveryPhrase {
        &self.recovery_phrase
    }
}
