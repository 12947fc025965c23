use shardwallet_types::{AccessToken, DeviceId, TokenSet, WalletDetails};

// ── AccessToken ─────────────────────────────────────────────────

#[test]
fn access_token_exposes_raw_value() {
    let token = AccessToken::new("at-secret");
    assert_eq!(token.as_str(), "at-secret");
}

#[test]
fn access_token_debug_is_redacted() {
    let token = AccessToken::new("at-secret");
    let debug = format!("{token:?}");
    assert!(!debug.contains("at-secret"));
    assert!(debug.contains("REDACTED"));
}

#[test]
fn access_token_serde_transparent() {
    let token = AccessToken::new("at-1");
    let json = serde_json::to_string(&token).unwrap();
    assert_eq!(json, "\"at-1\"");
}

// ── TokenSet ────────────────────────────────────────────────────

#[test]
fn token_set_accessors() {
    let tokens = TokenSet::new("rt-1", "bt-1");
    assert_eq!(tokens.refresh_token(), "rt-1");
    assert_eq!(tokens.bootstrap_token(), "bt-1");
}

#[test]
fn token_set_debug_is_redacted() {
    let tokens = TokenSet::new("rt-secret", "bt-secret");
    let debug = format!("{tokens:?}");
    assert!(!debug.contains("rt-secret"));
    assert!(!debug.contains("bt-secret"));
}

// ── WalletDetails ───────────────────────────────────────────────

#[test]
fn wallet_details_carries_device_and_tokens() {
    let details = WalletDetails::new(DeviceId::new("dev-1"), TokenSet::new("rt", "bt"));
    assert_eq!(details.device_id().as_str(), "dev-1");
    assert_eq!(details.tokens().refresh_token(), "rt");
    assert_eq!(details.tokens().bootstrap_token(), "bt");
}
