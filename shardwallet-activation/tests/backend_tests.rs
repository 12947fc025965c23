use shardwallet_activation::backend::{ActivationBackend, HttpActivationBackend};
use shardwallet_activation::{ActivationError, BackendConfig};
use shardwallet_types::{AccessToken, DeviceId, RecoveryPhrase, TransactionId};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TWELVE: &str = "abandon ability able about above absent absorb abstract absurd abuse access accident";

fn backend_for(server: &MockServer) -> HttpActivationBackend {
    HttpActivationBackend::new(BackendConfig {
        base_url: server.uri(),
    })
}

// ── Bootstrap-code exchange ─────────────────────────────────────

#[tokio::test]
async fn submit_code_returns_grant() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/activation/bootstrap-code"))
        .and(body_json(serde_json::json!({ "code": "123456" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "at-1",
            "device_id": "dev-1",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let backend = backend_for(&server);
    let grant = backend.submit_code("123456").await.unwrap();
    assert_eq!(grant.access_token.as_str(), "at-1");
    assert_eq!(grant.device_id.as_str(), "dev-1");
}

#[tokio::test]
async fn submit_code_403_maps_to_incorrect_code() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/activation/bootstrap-code"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let backend = backend_for(&server);
    let err = backend.submit_code("000000").await.unwrap_err();
    assert!(matches!(err, ActivationError::IncorrectCode));
    assert!(err.is_user_correctable());
}

#[tokio::test]
async fn submit_code_500_maps_to_backend_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/activation/bootstrap-code"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream down"))
        .mount(&server)
        .await;

    let backend = backend_for(&server);
    let err = backend.submit_code("123456").await.unwrap_err();
    match err {
        ActivationError::Backend { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "upstream down");
        }
        other => panic!("expected Backend error, got {other:?}"),
    }
}

#[tokio::test]
async fn submit_code_undecodable_body_maps_to_malformed_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/activation/bootstrap-code"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let backend = backend_for(&server);
    let err = backend.submit_code("123456").await.unwrap_err();
    assert!(matches!(err, ActivationError::MalformedResponse(_)));
}

// ── Authenticated exchanges ─────────────────────────────────────

#[tokio::test]
async fn authorize_device_sends_bearer_and_proof() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/activation/devices/authorize"))
        .and(header("authorization", "Bearer at-1"))
        .and(body_json(serde_json::json!({
            "device_id": "dev-1",
            "join_request_id": "join-1",
            "recovery_phrase": TWELVE,
        })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let backend = backend_for(&server);
    backend
        .authorize_device(
            &AccessToken::new("at-1"),
            &DeviceId::new("dev-1"),
            &"join-1".into(),
            &RecoveryPhrase::parse(TWELVE).unwrap(),
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn authorize_device_non_403_is_not_incorrect_code() {
    // 403 special-casing applies only to the bootstrap exchange.
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/activation/devices/authorize"))
        .respond_with(ResponseTemplate::new(403).set_body_string("phrase mismatch"))
        .mount(&server)
        .await;

    let backend = backend_for(&server);
    let err = backend
        .authorize_device(
            &AccessToken::new("at-1"),
            &DeviceId::new("dev-1"),
            &"join-1".into(),
            &RecoveryPhrase::parse(TWELVE).unwrap(),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ActivationError::Backend { status: 403, .. }));
}

#[tokio::test]
async fn init_transaction_returns_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/activation/transactions"))
        .and(header("authorization", "Bearer at-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "transaction_id": "tx-9",
        })))
        .mount(&server)
        .await;

    let backend = backend_for(&server);
    let tx = backend
        .init_transaction(&AccessToken::new("at-1"), &DeviceId::new("dev-1"))
        .await
        .unwrap();
    assert_eq!(tx, TransactionId::new("tx-9"));
}

#[tokio::test]
async fn transaction_ready_decodes_both_states() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/activation/transactions/tx-1/status"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "status": "pending" })),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/activation/transactions/tx-2/status"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "status": "ready" })),
        )
        .mount(&server)
        .await;

    let backend = backend_for(&server);
    let token = AccessToken::new("at-1");
    assert!(
        !backend
            .transaction_ready(&token, &TransactionId::new("tx-1"))
            .await
            .unwrap()
    );
    assert!(
        backend
            .transaction_ready(&token, &TransactionId::new("tx-2"))
            .await
            .unwrap()
    );
}

#[tokio::test]
async fn confirm_transaction_posts_to_confirm_path() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/activation/transactions/tx-1/confirm"))
        .and(header("authorization", "Bearer at-1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let backend = backend_for(&server);
    backend
        .confirm_transaction(&AccessToken::new("at-1"), &TransactionId::new("tx-1"))
        .await
        .unwrap();
}

#[tokio::test]
async fn verify_access_token_returns_token_set() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/activation/tokens/verify"))
        .and(header("authorization", "Bearer at-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "refresh_token": "rt-1",
            "bootstrap_token": "bt-1",
        })))
        .mount(&server)
        .await;

    let backend = backend_for(&server);
    let tokens = backend
        .verify_access_token(&AccessToken::new("at-1"))
        .await
        .unwrap();
    assert_eq!(tokens.refresh_token(), "rt-1");
    assert_eq!(tokens.bootstrap_token(), "bt-1");
}
