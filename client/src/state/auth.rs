//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by the route guard adapter and the user menu. `loading` stays true
//! until the browser has checked local storage after hydration, so the server
//! render and the first client render agree.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::nav::guard::AuthContext;
use crate::util::session::{self, SessionStore};

/// Whether a session marker is present, and whether we have looked yet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub loading: bool,
    pub authenticated: bool,
}

impl AuthState {
    /// Initial state before storage has been read.
    pub fn pending() -> Self {
        Self { loading: true, authenticated: false }
    }

    pub fn resolved(ctx: AuthContext) -> Self {
        Self { loading: false, authenticated: ctx.authenticated }
    }

    /// Read the marker from `store` and resolve.
    pub fn from_store<S: SessionStore + ?Sized>(store: &S) -> Self {
        Self::resolved(session::auth_context(store))
    }

    /// Context handed to the navigation guard. `None` while loading.
    pub fn context(&self) -> Option<AuthContext> {
        (!self.loading).then_some(AuthContext { authenticated: self.authenticated })
    }
}
