//! Navigation guard: the pre-transition login gate.
//!
//! The guard is a pure function of two injected values, the destination path
//! and an [`AuthContext`]. It never touches storage itself; callers derive the
//! context from a `SessionStore` right before asking.
//!
//! Rules, first match wins:
//! 1. unauthenticated and not heading to login: redirect to login
//! 2. authenticated and heading to login: redirect to the landing page
//! 3. anything else: proceed
//!
//! Unknown paths fall under rule 1 like any protected route.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use super::routes::{LANDING_PATH, LOGIN_PATH};

/// Authentication facts the guard is allowed to see.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AuthContext {
    pub authenticated: bool,
}

impl AuthContext {
    pub const ANONYMOUS: Self = Self { authenticated: false };
    pub const AUTHENTICATED: Self = Self { authenticated: true };
}

/// Outcome of one guard evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigation {
    Proceed,
    Redirect(&'static str),
}

impl Navigation {
    pub fn is_proceed(self) -> bool {
        matches!(self, Self::Proceed)
    }
}

/// Guard configured with the login and landing paths.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationGuard {
    pub login_path: &'static str,
    pub landing_path: &'static str,
}

impl Default for NavigationGuard {
    fn default() -> Self {
        Self { login_path: LOGIN_PATH, landing_path: LANDING_PATH }
    }
}

impl NavigationGuard {
    /// Decide what happens to a transition towards `destination`.
    pub fn check(&self, destination: &str, auth: AuthContext) -> Navigation {
        let to_login = destination == self.login_path;
        match (auth.authenticated, to_login) {
            (false, false) => Navigation::Redirect(self.login_path),
            (true, true) => Navigation::Redirect(self.landing_path),
            _ => Navigation::Proceed,
        }
    }
}

/// Evaluate the default guard (`/` login, `/AdminDashboard` landing).
pub fn evaluate(destination: &str, auth: AuthContext) -> Navigation {
    NavigationGuard::default().check(destination, auth)
}
