//! Route gate.
//!
//! A pure decision layer: given the current session snapshot and a
//! navigation target, decide whether the target may render or where to
//! redirect. Holds no state of its own and must be re-evaluated on every
//! navigation and every session change.

use crate::session::Session;

/// A navigable target in the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,
    Onboarding,
    Dashboard,
    ArticleDetail { id: String },
    GroupDetail { id: String },
    Sources,
    Keywords,
    Admin,
}

impl Route {
    /// Whether the target sits behind the session gate. Only the auth
    /// entry points are public.
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Route::Login | Route::Register)
    }

    /// The onboarding entry point must stay reachable for accounts that
    /// have not completed onboarding yet.
    pub fn skips_onboarding_check(&self) -> bool {
        matches!(self, Route::Onboarding)
    }

    /// Resolves a path to a route. Unmatched paths fall back to the
    /// dashboard, mirroring the router's wildcard redirect.
    pub fn parse(path: &str) -> Route {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            ["login"] => Route::Login,
            ["register"] => Route::Register,
            ["onboarding"] => Route::Onboarding,
            ["dashboard"] => Route::Dashboard,
            ["dashboard", "group", id] => Route::GroupDetail {
                id: (*id).to_string(),
            },
            ["dashboard", id] => Route::ArticleDetail {
                id: (*id).to_string(),
            },
            ["sources"] => Route::Sources,
            ["keywords"] => Route::Keywords,
            ["admin"] => Route::Admin,
            _ => Route::Dashboard,
        }
    }

    /// The canonical path for this route.
    pub fn path(&self) -> String {
        match self {
            Route::Login => "/login".to_string(),
            Route::Register => "/register".to_string(),
            Route::Onboarding => "/onboarding".to_string(),
            Route::Dashboard => "/dashboard".to_string(),
            Route::ArticleDetail { id } => format!("/dashboard/{id}"),
            Route::GroupDetail { id } => format!("/dashboard/group/{id}"),
            Route::Sources => "/sources".to_string(),
            Route::Keywords => "/keywords".to_string(),
            Route::Admin => "/admin".to_string(),
        }
    }
}

/// Outcome of gating one navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// Hydration has not finished; render a placeholder, decide nothing.
    Loading,
    /// No session; send the user to the login entry point.
    RedirectLogin,
    /// Session present but onboarding incomplete; send to onboarding.
    RedirectOnboarding,
    /// The target may render.
    Allow,
}

/// Decides whether `route` is servable for `session`.
///
/// Precedence: public targets always render; then loading suspends the
/// decision; then a missing user redirects to login; then an incomplete
/// onboarding redirects to onboarding unless the target is the onboarding
/// entry point itself.
pub fn decide(session: &Session, route: &Route) -> RouteDecision {
    if !route.requires_auth() {
        return RouteDecision::Allow;
    }
    if session.is_loading {
        return RouteDecision::Loading;
    }
    if session.user.is_none() {
        return RouteDecision::RedirectLogin;
    }
    if !route.skips_onboarding_check() && !session.onboarded {
        return RouteDecision::RedirectOnboarding;
    }
    RouteDecision::Allow
}
