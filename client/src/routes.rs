//! Route table and navigation guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! `app::App` declares the Leptos routes from [`AppRoute`] and wraps the
//! protected ones in a guard built on [`guard`]. Pages navigate through
//! [`resolve_navigation`] so the same decision applies to programmatic
//! navigation as to URL changes.
//!
//! DESIGN
//! ======
//! The guard holds no state of its own. It is a pure function of the session
//! and the target route, so it can be tested without a router instance.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::state::session::SessionState;

/// Every route the app knows about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Root,
    Login,
    Dashboard,
}

impl AppRoute {
    pub const ALL: [Self; 3] = [Self::Root, Self::Login, Self::Dashboard];

    pub fn path(self) -> &'static str {
        match self {
            Self::Root => "/",
            Self::Login => "/login",
            Self::Dashboard => "/dashboard",
        }
    }

    /// Whether entering this route needs a signed-in session.
    pub fn requires_auth(self) -> bool {
        matches!(self, Self::Dashboard)
    }

    /// Unconditional redirect declared on the route itself.
    pub fn static_redirect(self) -> Option<Self> {
        match self {
            Self::Root => Some(Self::Login),
            Self::Login | Self::Dashboard => None,
        }
    }

    /// Match a location path. A single trailing slash and any query string
    /// or fragment are ignored.
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = match path.strip_suffix('/') {
            Some(rest) if !rest.is_empty() => rest,
            _ => path,
        };
        Self::ALL.into_iter().find(|route| route.path() == trimmed)
    }
}

/// What the router should do with a navigation attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavigationDecision {
    Allow,
    RedirectTo(AppRoute),
}

/// Decide whether `target` may be entered with the given session.
pub fn guard(session: &SessionState, target: AppRoute) -> NavigationDecision {
    if target.requires_auth() && !session.is_authenticated() {
        NavigationDecision::RedirectTo(AppRoute::Login)
    } else {
        NavigationDecision::Allow
    }
}

/// Resolve a navigation to `path` into the route that ends up displayed.
///
/// Applies the route's static redirect first, then the guard. Returns `None`
/// for unknown paths.
pub fn resolve_navigation(session: &SessionState, path: &str) -> Option<AppRoute> {
    let mut target = AppRoute::from_path(path)?;
    if let Some(redirect) = target.static_redirect() {
        target = redirect;
    }
    match guard(session, target) {
        NavigationDecision::Allow => Some(target),
        NavigationDecision::RedirectTo(route) => {
            log::info!("guard redirected {} to {}", target.path(), route.path());
            Some(route)
        }
    }
}
