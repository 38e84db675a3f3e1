use super::*;

#[test]
fn welcome_message_includes_user() {
    assert_eq!(welcome_message(Some("test@example.com")), "Welcome, test@example.com!");
}

#[test]
fn welcome_message_without_user_is_generic() {
    assert_eq!(welcome_message(None), "Welcome!");
}

#[test]
fn welcome_message_follows_session() {
    let mut session = SessionState::default();
    session.login("test@example.com");
    assert_eq!(welcome_message(session.user()), "Welcome, test@example.com!");
    session.logout();
    assert_eq!(welcome_message(session.user()), "Welcome!");
}

// =============================================================
// log_out
// =============================================================

#[test]
fn log_out_clears_session_and_targets_login() {
    let owner = Owner::new();
    owner.with(|| {
        let session = RwSignal::new(SessionState::default());
        session.update(|s| s.login("test@example.com"));

        assert_eq!(log_out(session), AppRoute::Login);
        assert_eq!(session.get_untracked(), SessionState::default());
        assert_eq!(
            session.with_untracked(|s| crate::routes::guard(s, AppRoute::Dashboard)),
            crate::routes::NavigationDecision::RedirectTo(AppRoute::Login)
        );
    });
}

// =============================================================
// DashboardView markup
// =============================================================

#[cfg(feature = "ssr")]
mod render {
    use super::*;

    fn render(session: SessionState) -> String {
        let owner = Owner::new();
        owner.with(|| {
            let session = RwSignal::new(session);
            view! { <DashboardView session=session on_logout=|| {}/> }.to_html()
        })
    }

    #[test]
    fn greets_signed_in_user() {
        let mut session = SessionState::default();
        session.login("test@example.com");
        let html = render(session);
        assert!(html.contains("Welcome, test@example.com!"), "{html}");
        assert!(html.contains("<h1>"), "{html}");
    }

    #[test]
    fn renders_logout_button() {
        let html = render(SessionState::default());
        assert!(html.contains(r#"class="btn dashboard-page__logout""#), "{html}");
        assert!(html.contains("Logout"), "{html}");
    }
}
