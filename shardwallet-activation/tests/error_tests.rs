use shardwallet_activation::ActivationError;

// ── Classification ──────────────────────────────────────────────

#[test]
fn timeout_kinds_are_timeouts() {
    assert!(ActivationError::JoinWalletTimeout.is_timeout());
    assert!(ActivationError::KeyReadinessTimeout.is_timeout());
    assert!(ActivationError::TransactionReadinessTimeout.is_timeout());
    assert!(ActivationError::SigningTimeout.is_timeout());
}

#[test]
fn non_timeouts_are_not_timeouts() {
    assert!(!ActivationError::IncorrectCode.is_timeout());
    assert!(
        !ActivationError::Backend {
            status: 500,
            message: "boom".into()
        }
        .is_timeout()
    );
    assert!(!ActivationError::Cancelled.is_timeout());
    assert!(!ActivationError::Connector("module".into()).is_timeout());
}

#[test]
fn only_incorrect_code_is_user_correctable() {
    assert!(ActivationError::IncorrectCode.is_user_correctable());
    assert!(!ActivationError::JoinWalletTimeout.is_user_correctable());
    assert!(
        !ActivationError::Backend {
            status: 403,
            message: String::new()
        }
        .is_user_correctable()
    );
}

// ── Display ─────────────────────────────────────────────────────

#[test]
fn backend_error_includes_status() {
    let e = ActivationError::Backend {
        status: 502,
        message: "bad gateway".into(),
    };
    let text = e.to_string();
    assert!(text.contains("502"));
    assert!(text.contains("bad gateway"));
}

#[test]
fn timeout_messages_name_the_phase() {
    assert!(
        ActivationError::KeyReadinessTimeout
            .to_string()
            .contains("key share")
    );
    assert!(
        ActivationError::SigningTimeout
            .to_string()
            .contains("signing")
    );
}
