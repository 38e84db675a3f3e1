//! Login-form state machine.
//!
//! SYSTEM CONTEXT
//! ==============
//! `pages::login::LoginPage` keeps one `RwSignal<LoginForm>` and forwards DOM
//! events to these methods. Keeping the transitions here lets the whole
//! submit cycle run headlessly in tests.
//!
//! DESIGN
//! ======
//! Submission is gated only on both fields being non-empty. Blur validation
//! produces advisory messages and never blocks a submit. Overlapping submits
//! are refused by [`LoginForm::begin_submit`] itself rather than relying on
//! the disabled button alone.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use crate::net::auth::{AuthError, AuthResult, Credentials};
use crate::routes::AppRoute;
use crate::state::session::SessionState;
use crate::util::validation::{validate_email, validate_password_strength};

/// Message shown when the auth service fails outright.
pub const UNEXPECTED_FAILURE_MESSAGE: &str = "Login failed unexpectedly. Please try again.";

pub const SUBMIT_LABEL: &str = "Log in";
pub const SUBMIT_LABEL_IN_FLIGHT: &str = "Logging in...";

/// Local state of the login page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub in_flight: bool,
    /// Email format error or login failure, shown as `.error-message`.
    pub error: Option<String>,
    /// First password-strength warning, shown as `.warning-message`.
    pub warning: Option<String>,
}

/// Where a settled submit leaves the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Credentials accepted; the session now belongs to `email`.
    Authenticated { email: String },
    /// Credentials rejected or the check failed; the form shows `message`.
    Rejected { message: String },
}

impl SubmitOutcome {
    /// Classify the auth service's answer for `credentials`.
    ///
    /// Independent of any form so the session can still be opened after the
    /// login page is gone.
    pub fn from_result(credentials: Credentials, result: Result<AuthResult, AuthError>) -> Self {
        match result {
            Ok(AuthResult::Success { .. }) => Self::Authenticated { email: credentials.email },
            Ok(AuthResult::Failure { message }) => Self::Rejected { message },
            Err(err) => {
                log::warn!("login check failed: {err}");
                Self::Rejected { message: UNEXPECTED_FAILURE_MESSAGE.to_owned() }
            }
        }
    }
}

impl LoginForm {
    /// Both fields are filled and no request is outstanding.
    pub fn can_submit(&self) -> bool {
        !self.in_flight && !self.email.is_empty() && !self.password.is_empty()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.in_flight { SUBMIT_LABEL_IN_FLIGHT } else { SUBMIT_LABEL }
    }

    /// Email field lost focus.
    pub fn blur_email(&mut self) {
        self.error = validate_email(&self.email).err().map(|e| e.to_string());
    }

    /// Password field lost focus.
    pub fn blur_password(&mut self) {
        self.warning = validate_password_strength(&self.password)
            .first()
            .map(|w| w.message().to_owned());
    }

    /// Start a submit. Returns the credentials to check, or `None` when the
    /// form is not submittable (empty field or a request already running).
    pub fn begin_submit(&mut self) -> Option<Credentials> {
        if !self.can_submit() {
            return None;
        }
        self.in_flight = true;
        self.error = None;
        Some(Credentials { email: self.email.clone(), password: self.password.clone() })
    }

    /// Apply the auth service's answer for `credentials`.
    pub fn finish_submit(
        &mut self,
        credentials: Credentials,
        result: Result<AuthResult, AuthError>,
    ) -> SubmitOutcome {
        let outcome = SubmitOutcome::from_result(credentials, result);
        self.apply_outcome(&outcome);
        outcome
    }

    /// Leave the in-flight state and show or clear the failure message.
    pub fn apply_outcome(&mut self, outcome: &SubmitOutcome) {
        self.in_flight = false;
        self.error = match outcome {
            SubmitOutcome::Authenticated { .. } => None,
            SubmitOutcome::Rejected { message } => Some(message.clone()),
        };
    }
}

/// Open the session for an accepted submit and return the route to navigate
/// to, if any.
///
/// The session is mutated before the route is returned so the guard sees the
/// new state when the caller navigates.
pub fn open_session(session: &mut SessionState, outcome: SubmitOutcome) -> Option<AppRoute> {
    match outcome {
        SubmitOutcome::Authenticated { email } => {
            session.login(email);
            Some(AppRoute::Dashboard)
        }
        SubmitOutcome::Rejected { message } => {
            log::info!("login rejected: {message}");
            None
        }
    }
}
