//! Login page with email + password form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds DOM events to `LoginForm` transitions, awaits the auth service on
//! submit, and hands the result to [`complete_submit`] so the session is
//! updated before navigating to the dashboard.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::net::auth::{AuthError, AuthResult, AuthService, Credentials, MockAuthService};
use crate::routes::AppRoute;
use crate::state::login::{LoginForm, SubmitOutcome, open_session};
use crate::state::session::SessionState;
use crate::util::navigate::use_route_navigate;

/// Apply a resolved login to the page's signals and return where to go next.
///
/// The session is updated even when the form signal has been disposed (the
/// page unmounted while the request was pending); a submitted login is never
/// dropped.
pub fn complete_submit(
    form: RwSignal<LoginForm>,
    session: RwSignal<SessionState>,
    credentials: Credentials,
    result: Result<AuthResult, AuthError>,
) -> Option<AppRoute> {
    let outcome = SubmitOutcome::from_result(credentials, result);
    if form.try_update(|f| f.apply_outcome(&outcome)).is_none() {
        log::debug!("login form unmounted before the auth result arrived");
    }
    session.try_update(|s| open_session(s, outcome)).flatten()
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let service = expect_context::<MockAuthService>();
    let navigate = use_route_navigate();
    let form = RwSignal::new(LoginForm::default());

    let on_submit = move || {
        let Some(credentials) = form.try_update(LoginForm::begin_submit).flatten() else {
            return;
        };
        log::info!("login attempt for {}", credentials.email);

        let service = service.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = service.login(&credentials.email, &credentials.password).await;
            if let Some(route) = complete_submit(form, session, credentials, result) {
                navigate(route);
            }
        });
    };

    view! { <LoginCard form=form on_submit=on_submit/> }
}

/// Login form markup bound to `form`. `on_submit` runs on form submission.
#[component]
pub fn LoginCard<F>(form: RwSignal<LoginForm>, on_submit: F) -> impl IntoView
where
    F: Fn() + 'static,
{
    view! {
        <div class="login-page">
            <div class="login-card">
                <h2>"Log in (test)"</h2>
                <form
                    class="login-form"
                    on:submit=move |ev: leptos::ev::SubmitEvent| {
                        ev.prevent_default();
                        on_submit();
                    }
                >
                    <label class="login-label">
                        "Email"
                        <input
                            class="login-input"
                            type="email"
                            placeholder="you@example.com"
                            autocomplete="username"
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.email = value);
                            }
                            on:blur=move |_| form.update(LoginForm::blur_email)
                        />
                    </label>
                    <Show when=move || form.with(|f| f.error.is_some())>
                        <p class="error-message">{move || form.with(|f| f.error.clone().unwrap_or_default())}</p>
                    </Show>
                    <label class="login-label">
                        "Password"
                        <input
                            class="login-input"
                            type="password"
                            autocomplete="current-password"
                            prop:value=move || form.with(|f| f.password.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.password = value);
                            }
                            on:blur=move |_| form.update(LoginForm::blur_password)
                        />
                    </label>
                    <Show when=move || form.with(|f| f.warning.is_some())>
                        <p class="warning-message">
                            {move || form.with(|f| f.warning.clone().unwrap_or_default())}
                        </p>
                    </Show>
                    <button class="login-button" type="submit" disabled=move || !form.with(LoginForm::can_submit)>
                        {move || form.with(LoginForm::submit_label)}
                    </button>
                </form>
            </div>
        </div>
    }
}
