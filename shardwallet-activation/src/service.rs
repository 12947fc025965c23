//! Activation orchestrator.
//!
//! Runs the full activation sequence as a single cancellable asynchronous
//! task and surfaces progress as a lazy, single-consumer, forward-only
//! stream of [`SetupStep`] values. The final wallet credentials travel on
//! a dedicated outcome channel as an explicit
//! `Result<WalletDetails, ActivationError>`, so success is never implied
//! by stream termination alone.

use crate::backend::ActivationBackend;
use crate::config::ActivationConfig;
use crate::connector::{KeyShareConnector, ShareContext};
use crate::error::{ActivationError, ActivationResult};
use crate::poll::poll_until;
use crate::session::ActivationSession;
use crate::step::SetupStep;
use shardwallet_types::{RecoveryPhrase, WalletDetails};
use std::sync::Arc;
use tokio::sync::{Mutex, mpsc, oneshot};
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Step-channel capacity. The pipeline emits at most eleven steps, so the
/// sender never blocks even if the consumer stops draining.
const STEP_CHANNEL_CAPACITY: usize = 16;

/// Handle to one in-flight activation attempt.
pub struct Activation {
    steps: mpsc::Receiver<SetupStep>,
    outcome: oneshot::Receiver<ActivationResult<WalletDetails>>,
    cancel: CancellationToken,
}

impl Activation {
    /// Receives the next setup step, or `None` once the stream has
    /// terminated. Steps arrive strictly in pipeline order; each marks the
    /// start of its phase, not its completion.
    pub async fn next_step(&mut self) -> Option<SetupStep> {
        self.steps.recv().await
    }

    /// Requests cooperative cancellation. The attempt still runs its
    /// connector cleanup before reporting `ActivationError::Cancelled`.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Waits for the attempt's terminal result.
    pub async fn outcome(self) -> ActivationResult<WalletDetails> {
        match self.outcome.await {
            Ok(result) => result,
            // The attempt task never drops the sender without reporting,
            // so a closed channel means the runtime tore it down.
            Err(_) => Err(ActivationError::Cancelled),
        }
    }
}

/// Sequences the activation phases against the injected backend and
/// key-share connector.
pub struct ActivationService {
    backend: Arc<dyn ActivationBackend>,
    connector: Arc<dyn KeyShareConnector>,
    config: ActivationConfig,
    /// Serializes attempts: only one join may be in flight per device
    /// identity against the shared key-share module.
    attempt_lock: Arc<Mutex<()>>,
}

impl ActivationService {
    /// Creates a service over the given collaborators.
    pub fn new(
        backend: Arc<dyn ActivationBackend>,
        connector: Arc<dyn KeyShareConnector>,
        config: ActivationConfig,
    ) -> Self {
        Self {
            backend,
            connector,
            config,
            attempt_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Starts one activation attempt and returns its handle.
    ///
    /// The attempt is not restartable; a retry is a fresh call with a
    /// fresh session.
    pub fn activate(&self, code: String, phrase: RecoveryPhrase) -> Activation {
        let (step_tx, step_rx) = mpsc::channel(STEP_CHANNEL_CAPACITY);
        let (outcome_tx, outcome_rx) = oneshot::channel();
        let cancel = CancellationToken::new();

        let attempt = Attempt {
            backend: Arc::clone(&self.backend),
            connector: Arc::clone(&self.connector),
            config: self.config.clone(),
            steps: step_tx,
            cancel: cancel.clone(),
        };
        let lock = Arc::clone(&self.attempt_lock);

        tokio::spawn(async move {
            let _permit = lock.lock().await;
            info!("activation attempt started");
            let result = attempt.run(code, phrase).await;
            match &result {
                Ok(details) => info!(device_id = %details.device_id(), "activation completed"),
                Err(e) => warn!(error = %e, "activation failed"),
            }
            let _ = outcome_tx.send(result);
        });

        Activation {
            steps: step_rx,
            outcome: outcome_rx,
            cancel,
        }
    }
}

/// One pipeline run. Owns the step sender and the cancellation token for
/// the lifetime of the attempt.
struct Attempt {
    backend: Arc<dyn ActivationBackend>,
    connector: Arc<dyn KeyShareConnector>,
    config: ActivationConfig,
    steps: mpsc::Sender<SetupStep>,
    cancel: CancellationToken,
}

impl Attempt {
    async fn run(&self, code: String, phrase: RecoveryPhrase) -> ActivationResult<WalletDetails> {
        let result = self.pipeline(&code, phrase).await;
        if let Err(e) = &result
            && !matches!(e, ActivationError::Cancelled)
        {
            let log_ref = self.connector.logs_url().await;
            warn!(error = %e, log_ref = ?log_ref, "emitting terminal failure step");
            self.emit(SetupStep::Failed { log_ref }).await;
        }
        result
    }

    async fn pipeline(
        &self,
        code: &str,
        phrase: RecoveryPhrase,
    ) -> ActivationResult<WalletDetails> {
        self.emit(SetupStep::SubmittingCode).await;
        let grant = self.guard(self.backend.submit_code(code)).await?;
        let session = ActivationSession::new(grant.device_id, grant.access_token, phrase);

        self.emit(SetupStep::InitializingKeyModule).await;
        let ctx = ShareContext {
            device_id: session.device_id().clone(),
            access_token: session.access_token().clone(),
        };
        self.guard(self.connector.initialize(&ctx)).await?;

        // The module holds join state from here on: exactly one stop_join
        // on every exit path, at this single release site.
        let result = self.engaged_phases(&session).await;
        if let Err(e) = self.connector.stop_join().await {
            warn!(error = %e, "stop_join failed during release");
        }
        result
    }

    /// Phases that run while the key-share module holds join state.
    async fn engaged_phases(
        &self,
        session: &ActivationSession,
    ) -> ActivationResult<WalletDetails> {
        let backend = &self.backend;
        let connector = &self.connector;
        let token = session.access_token().clone();

        self.emit(SetupStep::RequestingJoin).await;
        let join_id = self
            .guard(async {
                timeout(self.config.join_deadline, connector.request_join())
                    .await
                    .map_err(|_| ActivationError::JoinWalletTimeout)?
            })
            .await?;

        self.emit(SetupStep::AuthorizingDevice).await;
        self.guard(backend.authorize_device(
            &token,
            session.device_id(),
            &join_id,
            session.recovery_phrase(),
        ))
        .await?;

        self.emit(SetupStep::WaitingForKeyReady).await;
        let device_id = session.device_id().clone();
        self.guard(poll_until(&self.config.key_ready, || async move {
            connector
                .key_share_ready()
                .await
                .map(|ready| ready.then_some(()))
        }))
        .await?
        .ok_or(ActivationError::KeyReadinessTimeout)?;

        self.emit(SetupStep::InitializingTransaction).await;
        let tx = self
            .guard(backend.init_transaction(&token, &device_id))
            .await?;

        self.emit(SetupStep::WaitingForTransactionReady).await;
        let token_ref = &token;
        let tx_ref = &tx;
        self.guard(poll_until(&self.config.transaction_ready, || async move {
            backend
                .transaction_ready(token_ref, tx_ref)
                .await
                .map(|ready| ready.then_some(()))
        }))
        .await?
        .ok_or(ActivationError::TransactionReadinessTimeout)?;

        self.emit(SetupStep::SigningTransaction).await;
        self.guard(async {
            timeout(self.config.signing_deadline, connector.sign_transaction(&tx))
                .await
                .map_err(|_| ActivationError::SigningTimeout)?
        })
        .await?;

        self.emit(SetupStep::ConfirmingTransaction).await;
        self.guard(backend.confirm_transaction(&token, &tx)).await?;

        self.emit(SetupStep::VerifyingAccessToken).await;
        let tokens = self.guard(backend.verify_access_token(&token)).await?;

        Ok(WalletDetails::new(device_id, tokens))
    }

    /// Emits a progress step. A consumer that stopped draining does not
    /// stall the pipeline: the channel capacity exceeds the step count.
    async fn emit(&self, step: SetupStep) {
        let _ = self.steps.send(step).await;
    }

    /// Races an operation against cooperative cancellation.
    async fn guard<T>(
        &self,
        op: impl Future<Output = ActivationResult<T>>,
    ) -> ActivationResult<T> {
        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => Err(ActivationError::Cancelled),
            result = op => result,
        }
    }
}
