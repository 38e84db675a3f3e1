use super::*;

// =============================================================
// dashboard_allowed
// =============================================================

#[test]
fn dashboard_blocked_when_signed_out() {
    let owner = Owner::new();
    owner.with(|| {
        let session = RwSignal::new(SessionState::default());
        assert_eq!(dashboard_allowed(session), Some(false));
    });
}

#[test]
fn dashboard_follows_session_changes() {
    let owner = Owner::new();
    owner.with(|| {
        let session = RwSignal::new(SessionState::default());
        session.update(|s| s.login("test@example.com"));
        assert_eq!(dashboard_allowed(session), Some(true));

        session.update(SessionState::logout);
        assert_eq!(dashboard_allowed(session), Some(false));
    });
}
