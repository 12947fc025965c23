//! Core type definitions for the Shardwallet activation engine.
//!
//! This crate defines the fundamental types shared across the wallet core:
//! - Backend-issued identifiers (device, join request, verification transaction)
//! - Credential material (access token, long-lived token set, wallet details)
//! - The recovery phrase secret
//!
//! Everything protocol-specific (setup steps, exchange payloads, the
//! connector contract) belongs in `shardwallet-activation`, not here.

mod ids;
mod phrase;
mod tokens;

pub use ids::{DeviceId, JoinRequestId, TransactionId};
pub use phrase::{PhraseError, RecoveryPhrase};
pub use tokens::{AccessToken, TokenSet, WalletDetails};
