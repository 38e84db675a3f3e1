//! Guard-aware programmatic navigation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages navigate after mutating the session (login success, logout). Routing
//! through [`resolve_navigation`] here keeps those jumps under the same guard
//! as URL-driven navigation.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::routes::{AppRoute, resolve_navigation};
use crate::state::session::SessionState;

/// Navigate to an [`AppRoute`], redirecting as the guard decides.
///
/// Must be called inside the `<Router>` with a session in context.
pub fn use_route_navigate() -> impl Fn(AppRoute) + Clone + 'static {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    move |route: AppRoute| {
        let target = session
            .with_untracked(|s| resolve_navigation(s, route.path()))
            .unwrap_or(AppRoute::Login);
        navigate(target.path(), NavigateOptions::default());
    }
}
