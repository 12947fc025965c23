//! Bounded polling with capped exponential backoff.
//!
//! Two phases of the pipeline wait for an external state to settle (the
//! local key share, the verification transaction). Both use the same
//! shape: probe, back off, probe again, give up after a fixed attempt
//! budget. The budget and delays are configuration, not constants, so
//! callers and tests can tighten them.

use crate::error::ActivationResult;
use std::time::Duration;

/// Attempt budget and backoff schedule for one settle-wait.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollPolicy {
    /// Maximum number of probes before giving up.
    pub max_attempts: u32,
    /// Delay after the first unsuccessful probe.
    pub initial_delay: Duration,
    /// Ceiling for the doubling backoff.
    pub max_delay: Duration,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 30,
            initial_delay: Duration::from_millis(500),
            max_delay: Duration::from_secs(8),
        }
    }
}

impl PollPolicy {
    /// Delay to sleep after attempt `attempt` (0-based), doubling from
    /// `initial_delay` and capped at `max_delay`.
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let doubled = self
            .initial_delay
            .saturating_mul(2u32.saturating_pow(attempt));
        doubled.min(self.max_delay)
    }
}

/// Runs `probe` up to the policy's attempt budget, sleeping the backoff
/// delay between attempts.
///
/// Returns `Ok(Some(value))` on the first probe that yields a value,
/// `Ok(None)` when the budget is exhausted (the caller maps this to the
/// wait-specific timeout kind), or the probe's error unchanged.
pub async fn poll_until<T, F, Fut>(policy: &PollPolicy, mut probe: F) -> ActivationResult<Option<T>>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = ActivationResult<Option<T>>>,
{
    for attempt in 0..policy.max_attempts {
        if let Some(value) = probe().await? {
            return Ok(Some(value));
        }
        // No sleep after the final attempt.
        if attempt + 1 < policy.max_attempts {
            tokio::time::sleep(policy.delay_for(attempt)).await;
        }
    }
    Ok(None)
}
