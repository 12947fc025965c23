//! Key-share connector contract.
//!
//! The connector wraps the vendor MPC key-management module and owns the
//! local key-share lifecycle for one activation attempt. The engine treats
//! it as an opaque capability provider: only this contract is specified,
//! never the module internals.
//!
//! The connector is an injected dependency of the orchestrator rather than
//! a process-wide builder singleton, so test doubles and independent
//! concurrent sessions stay possible.

use crate::error::ActivationResult;
use async_trait::async_trait;
use shardwallet_types::{AccessToken, DeviceId, JoinRequestId, TransactionId};

/// Lifecycle of the local key share during one activation attempt.
///
/// ```text
/// Idle ──engage──► Joining ──ack──► KeyPending ──ready──► KeyReady
///                                                            │
///                       Signed ◄──completed── Signing ◄──sign┘
///
/// Any non-terminal state ──error──► Failed
/// ```
///
/// `Signed` and `Failed` are terminal; both still require the explicit
/// [`KeyShareConnector::stop_join`] release before the connector can serve
/// a new attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShareState {
    /// No attempt in progress.
    #[default]
    Idle,
    /// Join request sent to the wallet's key-share set.
    Joining,
    /// Join acknowledged; local share material not yet ready.
    KeyPending,
    /// Local share is ready to sign.
    KeyReady,
    /// Co-signature in progress.
    Signing,
    /// Co-signature completed.
    Signed,
    /// The attempt failed.
    Failed,
}

impl ShareState {
    /// Returns true if no more transitions are possible.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Signed | Self::Failed)
    }

    /// Returns true if an attempt is in flight.
    pub fn is_active(self) -> bool {
        matches!(
            self,
            Self::Joining | Self::KeyPending | Self::KeyReady | Self::Signing
        )
    }

    /// Next state when a join is initiated.
    pub fn on_join(self) -> Option<Self> {
        match self {
            Self::Idle => Some(Self::Joining),
            _ => None,
        }
    }

    /// Next state when the join request is acknowledged.
    pub fn on_join_ack(self) -> Option<Self> {
        match self {
            Self::Joining => Some(Self::KeyPending),
            _ => None,
        }
    }

    /// Next state when the local share reports ready.
    pub fn on_key_ready(self) -> Option<Self> {
        match self {
            Self::KeyPending => Some(Self::KeyReady),
            _ => None,
        }
    }

    /// Next state when signing starts.
    pub fn on_sign(self) -> Option<Self> {
        match self {
            Self::KeyReady => Some(Self::Signing),
            _ => None,
        }
    }

    /// Next state when the signature completes.
    pub fn on_signed(self) -> Option<Self> {
        match self {
            Self::Signing => Some(Self::Signed),
            _ => None,
        }
    }

    /// Marks the attempt failed. Terminal states are left unchanged.
    pub fn on_failure(self) -> Self {
        if self.is_terminal() { self } else { Self::Failed }
    }

    /// State after the explicit release call.
    pub fn on_stop(self) -> Self {
        Self::Idle
    }
}

/// Identity the key-share module is bound to for one attempt.
#[derive(Debug, Clone)]
pub struct ShareContext {
    /// Device identifier issued by the bootstrap exchange.
    pub device_id: DeviceId,
    /// Session credential issued by the bootstrap exchange.
    pub access_token: AccessToken,
}

/// Abstraction over the vendor MPC key-management module.
///
/// Contract obligations for implementors:
/// - [`stop_join`](Self::stop_join) is idempotent and always safe to call;
///   the orchestrator invokes it on every exit path once the module has
///   been engaged.
/// - At most one join attempt may be in flight per device identity; the
///   orchestrator serializes attempts, implementations need not lock.
#[async_trait]
pub trait KeyShareConnector: Send + Sync {
    /// Binds the module to the new device identity for one attempt.
    async fn initialize(&self, ctx: &ShareContext) -> ActivationResult<()>;

    /// Initiates a join against the existing wallet's key-share set and
    /// returns the module-issued join request id. The orchestrator bounds
    /// this call with the configured join deadline.
    async fn request_join(&self) -> ActivationResult<JoinRequestId>;

    /// Probes whether the local key share has reached ready status.
    /// Called repeatedly by the orchestrator's bounded poll.
    async fn key_share_ready(&self) -> ActivationResult<bool>;

    /// Co-signs the verification transaction with the local share.
    /// The orchestrator bounds this call with the signing deadline.
    async fn sign_transaction(&self, tx: &TransactionId) -> ActivationResult<()>;

    /// Releases module-internal join state. Idempotent; a no-op when no
    /// join is in progress.
    async fn stop_join(&self) -> ActivationResult<()>;

    /// Diagnostic log reference for support escalation. Failure path only.
    async fn logs_url(&self) -> Option<String>;
}
