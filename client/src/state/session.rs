//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app shell creates one `RwSignal<SessionState>` at startup and provides
//! it through context. The route guard and both pages read it; only a
//! successful login and the dashboard logout button write it.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Who is signed in, if anyone.
///
/// The authenticated flag is derived from `user`, so the two can never
/// disagree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    user: Option<String>,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    /// Mark `email` as signed in. Callers must only do this after the auth
    /// service accepted the credentials.
    pub fn login(&mut self, email: impl Into<String>) {
        let email = email.into();
        log::info!("session opened for {email}");
        self.user = Some(email);
    }

    /// Return to the signed-out initial state.
    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            log::info!("session closed for {user}");
        }
    }
}
