//! Credential material issued during and after activation.
//!
//! Tokens are held only in memory by this layer; persistence of the final
//! `WalletDetails` is the caller's responsibility (keychain/storage
//! services outside this workspace).

use crate::ids::DeviceId;
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Short-lived bearer credential for one activation session.
///
/// Attached as `Authorization: Bearer <token>` to every authenticated
/// exchange in the same session. Zeroized on drop.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
#[serde(transparent)]
pub struct AccessToken(String);

impl AccessToken {
    /// Wraps a backend-issued access token.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the raw token for header construction.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("AccessToken").field(&"[REDACTED]").finish()
    }
}

/// Long-lived credential pair issued once the wallet is activated.
///
/// The refresh token renews the session; the bootstrap token authorizes
/// future device additions. Zeroized on drop.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct TokenSet {
    refresh_token: String,
    bootstrap_token: String,
}

impl TokenSet {
    /// Creates a token set from backend-issued values.
    #[must_use]
    pub fn new(refresh_token: impl Into<String>, bootstrap_token: impl Into<String>) -> Self {
        Self {
            refresh_token: refresh_token.into(),
            bootstrap_token: bootstrap_token.into(),
        }
    }

    /// Returns the refresh token.
    #[must_use]
    pub fn refresh_token(&self) -> &str {
        &self.refresh_token
    }

    /// Returns the bootstrap token.
    #[must_use]
    pub fn bootstrap_token(&self) -> &str {
        &self.bootstrap_token
    }
}

impl std::fmt::Debug for TokenSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenSet")
            .field("refresh_token", &"[REDACTED]")
            .field("bootstrap_token", &"[REDACTED]")
            .finish()
    }
}

/// The result of a fully successful activation.
///
/// Produced exactly once per successful pipeline run and handed to the
/// caller for persistence. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletDetails {
    device_id: DeviceId,
    tokens: TokenSet,
}

impl WalletDetails {
    /// Assembles the activation result.
    #[must_use]
    pub fn new(device_id: DeviceId, tokens: TokenSet) -> Self {
        Self { device_id, tokens }
    }

    /// Returns the device identifier bound to the new key share.
    #[must_use]
    pub fn device_id(&self) -> &DeviceId {
        &self.device_id
    }

    /// Returns the long-lived credential pair.
    #[must_use]
    pub fn tokens(&self) -> &TokenSet {
        &self.tokens
    }
}
