//! Dashboard page greeting the signed-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. The route guard keeps signed-out
//! sessions away; logout clears the session and returns to `/login`.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::routes::AppRoute;
use crate::state::session::SessionState;
use crate::util::navigate::use_route_navigate;

/// Heading text for the dashboard.
pub fn welcome_message(user: Option<&str>) -> String {
    match user {
        Some(user) => format!("Welcome, {user}!"),
        None => "Welcome!".to_owned(),
    }
}

/// Close the session and return the route to show next.
pub fn log_out(session: RwSignal<SessionState>) -> AppRoute {
    session.update(SessionState::logout);
    AppRoute::Login
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_route_navigate();

    let on_logout = move || navigate(log_out(session));

    view! { <DashboardView session=session on_logout=on_logout/> }
}

/// Dashboard markup for `session`. `on_logout` runs when Logout is clicked.
#[component]
pub fn DashboardView<F>(session: RwSignal<SessionState>, on_logout: F) -> impl IntoView
where
    F: Fn() + 'static,
{
    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>{move || session.with(|s| welcome_message(s.user()))}</h1>
                <button class="btn dashboard-page__logout" type="button" on:click=move |_| on_logout()>
                    "Logout"
                </button>
            </header>
        </div>
    }
}
