//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the public-route guard and the authenticated hero routes to
//! coordinate login redirects. Established by a successful login; queried on
//! demand; there is no explicit logout flow.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the session fact and the opaque user value
/// returned by login.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    /// Whether the current session is authenticated.
    pub authenticated: bool,
    /// Session user from the last successful login, if any.
    pub user: Option<User>,
    /// True until the initial authentication check resolves.
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        // Starts loading so authenticated routes do not redirect before the
        // bootstrap check has resolved.
        AuthState {
            authenticated: false,
            user: None,
            loading: true,
        }
    }
}

impl AuthState {
    /// Record the result of the bootstrap authentication check.
    pub fn resolve_check(&mut self, authenticated: bool) {
        self.authenticated = authenticated;
        self.loading = false;
    }

    /// Record a successful login.
    pub fn establish(&mut self, user: User) {
        self.authenticated = true;
        self.user = Some(user);
        self.loading = false;
    }
}
