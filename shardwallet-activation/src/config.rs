//! Configuration for the activation pipeline.

use crate::poll::PollPolicy;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Backend endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL for the activation API (e.g. `https://api.shardwallet.io`).
    pub base_url: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.shardwallet.io".to_string(),
        }
    }
}

/// Deadlines and poll budgets for one activation attempt.
#[derive(Debug, Clone)]
pub struct ActivationConfig {
    /// Backend endpoints.
    pub backend: BackendConfig,
    /// Deadline for the key-share module to acknowledge a join request.
    pub join_deadline: Duration,
    /// Deadline for the co-signature to complete.
    pub signing_deadline: Duration,
    /// Poll budget for local key-share readiness.
    pub key_ready: PollPolicy,
    /// Poll budget for verification-transaction readiness.
    pub transaction_ready: PollPolicy,
}

impl Default for ActivationConfig {
    fn default() -> Self {
        Self {
            backend: BackendConfig::default(),
            join_deadline: Duration::from_secs(30),
            signing_deadline: Duration::from_secs(20),
            key_ready: PollPolicy::default(),
            transaction_ready: PollPolicy::default(),
        }
    }
}
