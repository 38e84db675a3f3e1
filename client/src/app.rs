//! Root application component with routing and context providers.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ProtectedRoute, Redirect, Route, Router, Routes},
};

use crate::net::auth::MockAuthService;
use crate::pages::{dashboard::DashboardPage, login::LoginPage};
use crate::routes::{AppRoute, NavigationDecision, guard};
use crate::state::session::SessionState;

/// `ProtectedRoute` condition for the dashboard: the guard's verdict for the
/// current session. Always known, so never `None`.
pub fn dashboard_allowed(session: RwSignal<SessionState>) -> Option<bool> {
    Some(session.with(|s| guard(s, AppRoute::Dashboard)) == NavigationDecision::Allow)
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Creates the session for this app run, provides it and the auth service
/// through context, and declares the guarded route table.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    provide_context(session);
    provide_context(MockAuthService::default());

    let dashboard_condition = move || dashboard_allowed(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/loginboard.css"/>
        <Title text="Loginboard"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=|| view! { <Redirect path=AppRoute::Login.path()/> }/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <ProtectedRoute
                    path=StaticSegment("dashboard")
                    view=DashboardPage
                    condition=dashboard_condition
                    redirect_path=|| AppRoute::Login.path()
                />
            </Routes>
        </Router>
    }
}
