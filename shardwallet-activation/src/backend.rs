//! Activation API exchanges.
//!
//! Each exchange is one atomic request/response round-trip; there is no
//! retry at this layer. Every authenticated call attaches the session
//! credential as `Authorization: Bearer <token>`.
//!
//! Transport status codes are mapped to the closed error taxonomy here and
//! never escape: a 403-class answer to the bootstrap exchange becomes
//! [`ActivationError::IncorrectCode`], any other non-2xx becomes
//! [`ActivationError::Backend`], and an undecodable 2xx body becomes
//! [`ActivationError::MalformedResponse`].

use crate::config::BackendConfig;
use crate::error::{ActivationError, ActivationResult};
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};
use shardwallet_types::{AccessToken, DeviceId, JoinRequestId, RecoveryPhrase, TokenSet, TransactionId};
use tracing::debug;

/// Result of the bootstrap-code exchange: the session credential and the
/// device identity every later call is made under.
#[derive(Debug, Clone)]
pub struct BootstrapGrant {
    /// Short-lived session credential.
    pub access_token: AccessToken,
    /// Stable device identifier for the new key share.
    pub device_id: DeviceId,
}

/// The activation API surface, one method per backend exchange.
#[async_trait]
pub trait ActivationBackend: Send + Sync {
    /// Converts a one-time bootstrap code into a session grant.
    async fn submit_code(&self, code: &str) -> ActivationResult<BootstrapGrant>;

    /// Authorizes the new device's key share against the wallet's key set
    /// using the recovery-phrase proof and the join request id.
    async fn authorize_device(
        &self,
        token: &AccessToken,
        device_id: &DeviceId,
        join_request_id: &JoinRequestId,
        phrase: &RecoveryPhrase,
    ) -> ActivationResult<()>;

    /// Asks the backend to issue the verification transaction for the new
    /// key material.
    async fn init_transaction(
        &self,
        token: &AccessToken,
        device_id: &DeviceId,
    ) -> ActivationResult<TransactionId>;

    /// Probes whether the verification transaction is ready to sign.
    /// Called repeatedly by the orchestrator's bounded poll.
    async fn transaction_ready(
        &self,
        token: &AccessToken,
        tx: &TransactionId,
    ) -> ActivationResult<bool>;

    /// Reports the co-signed transaction for backend validation.
    async fn confirm_transaction(
        &self,
        token: &AccessToken,
        tx: &TransactionId,
    ) -> ActivationResult<()>;

    /// Final exchange: validates the session and issues the wallet's
    /// long-lived credentials.
    async fn verify_access_token(&self, token: &AccessToken) -> ActivationResult<TokenSet>;
}

// ── Wire types (private to this module) ──────────────────────────

#[derive(Debug, Serialize)]
struct SubmitCodeRequest<'a> {
    code: &'a str,
}

#[derive(Debug, Deserialize)]
struct SubmitCodeResponse {
    access_token: String,
    device_id: String,
}

#[derive(Debug, Serialize)]
struct AuthorizeDeviceRequest<'a> {
    device_id: &'a str,
    join_request_id: &'a str,
    recovery_phrase: &'a str,
}

#[derive(Debug, Serialize)]
struct InitTransactionRequest<'a> {
    device_id: &'a str,
}

#[derive(Debug, Deserialize)]
struct InitTransactionResponse {
    transaction_id: String,
}

#[derive(Debug, Deserialize)]
struct TransactionStatusResponse {
    status: TransactionStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
enum TransactionStatus {
    Pending,
    Ready,
}

#[derive(Debug, Deserialize)]
struct VerifyTokenResponse {
    refresh_token: String,
    bootstrap_token: String,
}

// ── HTTP implementation ──────────────────────────────────────────

/// `ActivationBackend` over HTTPS.
#[derive(Debug, Clone)]
pub struct HttpActivationBackend {
    client: Client,
    config: BackendConfig,
}

impl HttpActivationBackend {
    /// Creates a backend client for the configured API host.
    pub fn new(config: BackendConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.config.base_url.trim_end_matches('/'))
    }

    /// Decodes a 2xx JSON body, mapping decode failures to
    /// `MalformedResponse` so transport detail stays contained here.
    async fn decode<T: serde::de::DeserializeOwned>(response: Response) -> ActivationResult<T> {
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ActivationError::MalformedResponse(e.to_string()))
    }

    /// Maps a non-success response to the taxonomy. `code_exchange` marks
    /// the bootstrap call, where 403-class means the code itself was bad.
    async fn check(response: Response, code_exchange: bool) -> ActivationResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        if code_exchange && status == StatusCode::FORBIDDEN {
            return Err(ActivationError::IncorrectCode);
        }
        let message = response.text().await.unwrap_or_default();
        Err(ActivationError::Backend {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl ActivationBackend for HttpActivationBackend {
    async fn submit_code(&self, code: &str) -> ActivationResult<BootstrapGrant> {
        debug!("submitting bootstrap code");
        let response = self
            .client
            .post(self.url("/api/v1/activation/bootstrap-code"))
            .json(&SubmitCodeRequest { code })
            .send()
            .await?;
        let response = Self::check(response, true).await?;
        let body: SubmitCodeResponse = Self::decode(response).await?;
        Ok(BootstrapGrant {
            access_token: AccessToken::new(body.access_token),
            device_id: DeviceId::new(body.device_id),
        })
    }

    async fn authorize_device(
        &self,
        token: &AccessToken,
        device_id: &DeviceId,
        join_request_id: &JoinRequestId,
        phrase: &RecoveryPhrase,
    ) -> ActivationResult<()> {
        debug!(device_id = %device_id, "authorizing new device");
        let response = self
            .client
            .post(self.url("/api/v1/activation/devices/authorize"))
            .bearer_auth(token.as_str())
            .json(&AuthorizeDeviceRequest {
                device_id: device_id.as_str(),
                join_request_id: join_request_id.as_str(),
                recovery_phrase: phrase.as_str(),
            })
            .send()
            .await?;
        Self::check(response, false).await?;
        Ok(())
    }

    async fn init_transaction(
        &self,
        token: &AccessToken,
        device_id: &DeviceId,
    ) -> ActivationResult<TransactionId> {
        debug!(device_id = %device_id, "initializing verification transaction");
        let response = self
            .client
            .post(self.url("/api/v1/activation/transactions"))
            .bearer_auth(token.as_str())
            .json(&InitTransactionRequest {
                device_id: device_id.as_str(),
            })
            .send()
            .await?;
        let response = Self::check(response, false).await?;
        let body: InitTransactionResponse = Self::decode(response).await?;
        Ok(TransactionId::new(body.transaction_id))
    }

    async fn transaction_ready(
        &self,
        token: &AccessToken,
        tx: &TransactionId,
    ) -> ActivationResult<bool> {
        let response = self
            .client
            .get(self.url(&format!("/api/v1/activation/transactions/{tx}/status")))
            .bearer_auth(token.as_str())
            .send()
            .await?;
        let response = Self::check(response, false).await?;
        let body: TransactionStatusResponse = Self::decode(response).await?;
        Ok(body.status == TransactionStatus::Ready)
    }

    async fn confirm_transaction(
        &self,
        token: &AccessToken,
        tx: &TransactionId,
    ) -> ActivationResult<()> {
        debug!(tx = %tx, "confirming signed transaction");
        let response = self
            .client
            .post(self.url(&format!("/api/v1/activation/transactions/{tx}/confirm")))
            .bearer_auth(token.as_str())
            .send()
            .await?;
        Self::check(response, false).await?;
        Ok(())
    }

    async fn verify_access_token(&self, token: &AccessToken) -> ActivationResult<TokenSet> {
        debug!("verifying access token");
        let response = self
            .client
            .post(self.url("/api/v1/activation/tokens/verify"))
            .bearer_auth(token.as_str())
            .send()
            .await?;
        let response = Self::check(response, false).await?;
        let body: VerifyTokenResponse = Self::decode(response).await?;
        Ok(TokenSet::new(body.refresh_token, body.bootstrap_token))
    }
}
