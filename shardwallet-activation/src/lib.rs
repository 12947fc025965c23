//! New-device MPC wallet activation engine.
//!
//! Activating a wallet on a new device is a client-orchestrated bootstrap
//! sequence: a one-time code is exchanged for a session credential, the
//! device requests to join the wallet's key-share set, the backend
//! authorizes the new share against the recovery phrase, and the device
//! proves possession of its share by co-signing a verification transaction.
//! On success the backend issues the wallet's long-lived credentials.
//!
//! The engine is split along its seams:
//! - [`step`]: the ordered progress model consumed by the UI layer
//! - [`error`]: the closed error taxonomy for the whole pipeline
//! - [`connector`]: the key-share module contract and its state machine
//! - [`backend`]: the activation API exchanges
//! - [`poll`]: bounded backoff polling for settle-waits
//! - [`service`]: the orchestrator tying the phases together

pub mod backend;
pub mod config;
pub mod connector;
pub mod error;
pub mod poll;
pub mod service;
pub mod session;
pub mod step;

pub use backend::{ActivationBackend, BootstrapGrant, HttpActivationBackend};
pub use config::{ActivationConfig, BackendConfig};
pub use connector::{KeyShareConnector, ShareContext, ShareState};
pub use error::{ActivationError, ActivationResult};
pub use poll::PollPolicy;
pub use service::{Activation, ActivationService};
pub use step::SetupStep;
