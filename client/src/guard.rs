//! Route guard
//!
//! Decides whether a navigation target renders or redirects, based solely
//! on the session state. Mirrors the app's routing table: public views
//! render for everyone, protected views require an authenticated session.

use crate::session::SessionState;

/// Views reachable without a session.
pub const PUBLIC_ROUTES: &[&str] = &[
    "/",
    "/sign-up",
    "/challenges",
    "/community",
    "/education",
    "/issue-report",
    "/marketplace",
    "/terms",
    "/privacy",
];

/// Views that require an authenticated session.
pub const PROTECTED_ROUTES: &[&str] = &[
    "/dashboard",
    "/activity-log",
    "/impact-dashboard",
    "/profile",
];

/// Outcome of a navigation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// Render the requested view.
    Render,
    /// Authentication is still being resolved; show the loading view.
    Loading,
    /// Navigate elsewhere instead.
    Redirect(&'static str),
}

/// Decide what happens when the user navigates to `path`.
pub fn decide(state: &SessionState, path: &str) -> RouteDecision {
    if PUBLIC_ROUTES.contains(&path) {
        return RouteDecision::Render;
    }

    if PROTECTED_ROUTES.contains(&path) {
        if state.is_loading {
            return RouteDecision::Loading;
        }
        if !state.is_authenticated {
            return RouteDecision::Redirect("/sign-up");
        }
        return RouteDecision::Render;
    }

    // Unknown paths fall back to the landing view.
    RouteDecision::Redirect("/")
}
