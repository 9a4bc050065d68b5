//! Access guard for public-only routes.
//!
//! DESIGN
//! ======
//! The permit/deny decision is a pure function of the authentication fact;
//! the redirect side effect lives only in [`check_public_route`]. Route
//! pre-activation and route-matching checks both go through the same
//! function, so the decision logic cannot diverge between the two.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use super::{AuthGateway, Navigator};

/// Where authenticated callers are sent when denied a public-only route.
pub const DENY_REDIRECT: &str = "/";

/// Outcome of a guard evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// The caller may enter the route.
    Allow,
    /// Entry is denied; the caller is redirected instead.
    Deny { redirect_to: &'static str },
}

/// Decide whether a public-only route (e.g. the login page) may be entered.
pub fn decide_public_route(is_authenticated: bool) -> GuardDecision {
    if is_authenticated {
        GuardDecision::Deny {
            redirect_to: DENY_REDIRECT,
        }
    } else {
        GuardDecision::Allow
    }
}

/// Evaluate the public-route guard against the auth service and apply the
/// decision: on deny, trigger exactly one redirect and report `false`.
///
/// A failed authentication check counts as "not authenticated" — showing the
/// login page is the safe fallback when the auth service is unreachable.
pub async fn check_public_route<A: AuthGateway, N: Navigator>(auth: &A, nav: &N) -> bool {
    let is_authenticated = match auth.check_authentication().await {
        Ok(value) => value,
        Err(_) => false,
    };
    match decide_public_route(is_authenticated) {
        GuardDecision::Allow => true,
        GuardDecision::Deny { redirect_to } => {
            nav.navigate(redirect_to);
            false
        }
    }
}
