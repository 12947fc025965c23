use shardwallet_activation::ShareState;

// ── Classification ──────────────────────────────────────────────

#[test]
fn terminal_states() {
    assert!(ShareState::Signed.is_terminal());
    assert!(ShareState::Failed.is_terminal());

    assert!(!ShareState::Idle.is_terminal());
    assert!(!ShareState::Joining.is_terminal());
    assert!(!ShareState::KeyPending.is_terminal());
    assert!(!ShareState::KeyReady.is_terminal());
    assert!(!ShareState::Signing.is_terminal());
}

#[test]
fn active_states() {
    assert!(ShareState::Joining.is_active());
    assert!(ShareState::KeyPending.is_active());
    assert!(ShareState::KeyReady.is_active());
    assert!(ShareState::Signing.is_active());

    assert!(!ShareState::Idle.is_active());
    assert!(!ShareState::Signed.is_active());
    assert!(!ShareState::Failed.is_active());
}

#[test]
fn default_is_idle() {
    assert_eq!(ShareState::default(), ShareState::Idle);
}

// ── Happy-path transitions ──────────────────────────────────────

#[test]
fn full_signing_walk() {
    let s = ShareState::Idle;
    let s = s.on_join().unwrap();
    assert_eq!(s, ShareState::Joining);
    let s = s.on_join_ack().unwrap();
    assert_eq!(s, ShareState::KeyPending);
    let s = s.on_key_ready().unwrap();
    assert_eq!(s, ShareState::KeyReady);
    let s = s.on_sign().unwrap();
    assert_eq!(s, ShareState::Signing);
    let s = s.on_signed().unwrap();
    assert_eq!(s, ShareState::Signed);
}

#[test]
fn transitions_reject_wrong_source_state() {
    assert!(ShareState::Joining.on_join().is_none());
    assert!(ShareState::Idle.on_join_ack().is_none());
    assert!(ShareState::KeyReady.on_key_ready().is_none());
    assert!(ShareState::KeyPending.on_sign().is_none());
    assert!(ShareState::Signed.on_signed().is_none());
}

// ── Failure & release ───────────────────────────────────────────

#[test]
fn any_active_state_can_fail() {
    assert_eq!(ShareState::Joining.on_failure(), ShareState::Failed);
    assert_eq!(ShareState::KeyPending.on_failure(), ShareState::Failed);
    assert_eq!(ShareState::Signing.on_failure(), ShareState::Failed);
    assert_eq!(ShareState::Idle.on_failure(), ShareState::Failed);
}

#[test]
fn terminal_states_do_not_refail() {
    assert_eq!(ShareState::Signed.on_failure(), ShareState::Signed);
    assert_eq!(ShareState::Failed.on_failure(), ShareState::Failed);
}

#[test]
fn stop_returns_to_idle_from_any_state_and_is_idempotent() {
    assert_eq!(ShareState::Signed.on_stop(), ShareState::Idle);
    assert_eq!(ShareState::Failed.on_stop(), ShareState::Idle);
    assert_eq!(ShareState::Joining.on_stop(), ShareState::Idle);
    // Stopping an already-idle connector is a no-op.
    assert_eq!(ShareState::Idle.on_stop(), ShareState::Idle);
    assert_eq!(ShareState::Idle.on_stop().on_stop(), ShareState::Idle);
}
