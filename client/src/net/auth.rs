//! Credential check behind the login form.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only "network" boundary in the app. The login page awaits
//! exactly one [`AuthService::login`] call per submit and maps the outcome to
//! session and navigation changes.
//!
//! ERROR HANDLING
//! ==============
//! A rejected credential pair is a normal [`AuthResult::Failure`], not an
//! error. [`AuthError`] is reserved for the transport failing outright; the
//! login page converts it into a generic message instead of letting it escape.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::future::Future;
use std::time::Duration;

/// Demo account accepted by [`MockAuthService`].
pub const TEST_ACCOUNT_EMAIL: &str = "test@example.com";
/// Password for [`TEST_ACCOUNT_EMAIL`].
pub const TEST_ACCOUNT_PASSWORD: &str = "Password123";
/// Failure message shown verbatim on the login page.
pub const CREDENTIAL_MISMATCH_MESSAGE: &str = "Login email and password do not match";

const DEFAULT_TOKEN: &str = "mock-jwt-token";
const DEFAULT_DELAY_MS: u64 = 500;

/// Email and password captured from the login form for one submit.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Outcome of one login attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthResult {
    Success { token: String },
    Failure { message: String },
}

impl AuthResult {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// The credential check could not complete at all.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("auth service unavailable: {0}")]
    Unavailable(String),
}

/// Something that can check a credential pair.
pub trait AuthService {
    /// Resolve once with the result for `email` / `password`.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError`] only when the check itself failed; rejected
    /// credentials resolve to `Ok(AuthResult::Failure { .. })`.
    fn login(&self, email: &str, password: &str) -> impl Future<Output = Result<AuthResult, AuthError>>;
}

/// Settings for [`MockAuthService`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthConfig {
    pub account_email: String,
    pub account_password: String,
    /// Token handed back on success.
    pub token: String,
    /// Simulated network latency. Only awaited in the browser (`hydrate`);
    /// SSR and native test builds have no timer and resolve immediately.
    pub delay: Duration,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            account_email: TEST_ACCOUNT_EMAIL.to_owned(),
            account_password: TEST_ACCOUNT_PASSWORD.to_owned(),
            token: DEFAULT_TOKEN.to_owned(),
            delay: Duration::from_millis(DEFAULT_DELAY_MS),
        }
    }
}

/// Single-account stand-in for a remote credential authority.
#[derive(Clone, Debug, Default)]
pub struct MockAuthService {
    config: AuthConfig,
}

impl MockAuthService {
    #[must_use]
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    fn check(&self, email: &str, password: &str) -> AuthResult {
        if email == self.config.account_email && password == self.config.account_password {
            AuthResult::Success { token: self.config.token.clone() }
        } else {
            AuthResult::Failure { message: CREDENTIAL_MISMATCH_MESSAGE.to_owned() }
        }
    }
}

impl AuthService for MockAuthService {
    async fn login(&self, email: &str, password: &str) -> Result<AuthResult, AuthError> {
        simulate_latency(self.config.delay).await;
        let result = self.check(email, password);
        log::debug!("mock auth resolved for {email}: success={}", result.is_success());
        Ok(result)
    }
}

/// Wait out the configured delay in the browser. Native builds (SSR and
/// tests) resolve immediately since there is no browser timer to drive.
async fn simulate_latency(delay: Duration) {
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::future::sleep(delay).await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = delay;
    }
}
