//! Navigation guard for protected routes.
//!
//! The decision is a synchronous read of the session's authenticated flag:
//! no waiting on the reconciling fetch and no memory of the requested path.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use super::AppRoute;
use crate::state::session::SessionStore;

/// Outcome of the before-enter check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Proceed,
    Redirect(AppRoute),
}

impl GuardDecision {
    pub fn is_proceed(&self) -> bool {
        matches!(self, Self::Proceed)
    }
}

/// Decide whether navigation into `route` may continue.
pub fn before_enter(route: &AppRoute, authenticated: bool) -> GuardDecision {
    if !route.is_protected() || authenticated {
        GuardDecision::Proceed
    } else {
        GuardDecision::Redirect(AppRoute::Home)
    }
}

/// The route whose view actually gets instantiated for a navigation.
pub fn resolve(route: AppRoute, authenticated: bool) -> AppRoute {
    match before_enter(&route, authenticated) {
        GuardDecision::Proceed => route,
        GuardDecision::Redirect(to) => to,
    }
}

/// Guard hook used by the router: reads the store's derived flag.
pub fn check(session: &SessionStore, route: &AppRoute) -> GuardDecision {
    before_enter(route, session.is_authenticated())
}

/// `ProtectedRoute` condition for `route`, evaluated on every navigation.
///
/// Always `Some`: the hint is read synchronously, so the router never has
/// to wait on a pending decision.
pub fn route_condition(
    session: SessionStore,
    route: AppRoute,
) -> impl Fn() -> Option<bool> + Clone + Send + Sync + 'static {
    move || Some(check(&session, &route).is_proceed())
}

/// `ProtectedRoute` redirect for a refused navigation into `route`.
pub fn redirect_href(route: AppRoute) -> impl Fn() -> String + Clone + Send + Sync + 'static {
    move || match before_enter(&route, false) {
        GuardDecision::Redirect(to) => to.href(),
        GuardDecision::Proceed => route.href(),
    }
}
