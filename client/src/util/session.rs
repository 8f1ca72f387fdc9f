//! Session marker persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login page writes the marker, the user menu clears it, and the route
//! guard adapter only asks whether it exists. Nothing here inspects the value.
//!
//! TRADE-OFFS
//! ==========
//! Browser storage is best-effort: SSR builds and storage failures read as
//! "no marker", which lands the user on the login view instead of crashing
//! hydration.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::nav::guard::AuthContext;

/// Well-known local storage key holding the session marker.
pub const SESSION_KEY: &str = "token";

/// Key-value store owning the session marker.
pub trait SessionStore {
    fn read_marker(&self) -> Option<String>;
    fn write_marker(&self, value: &str);
    fn clear_marker(&self);

    /// Existence check. An empty stored value still counts as present.
    fn has_marker(&self) -> bool {
        self.read_marker().is_some()
    }
}

/// Derive the guard's auth context from a store.
pub fn auth_context<S: SessionStore + ?Sized>(store: &S) -> AuthContext {
    AuthContext { authenticated: store.has_marker() }
}

/// `localStorage`-backed store used in the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSession;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl SessionStore for BrowserSession {
    fn read_marker(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(SESSION_KEY).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn write_marker(&self, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                if storage.set_item(SESSION_KEY, value).is_err() {
                    log::warn!("session: could not persist marker");
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = value;
        }
    }

    fn clear_marker(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                if storage.remove_item(SESSION_KEY).is_err() {
                    log::warn!("session: could not clear marker");
                }
            }
        }
    }
}

/// In-process store for tests and server rendering.
#[derive(Clone, Debug, Default)]
pub struct MemorySession {
    marker: Rc<RefCell<Option<String>>>,
}

impl MemorySession {
    pub fn with_marker(value: &str) -> Self {
        Self { marker: Rc::new(RefCell::new(Some(value.to_owned()))) }
    }
}

impl SessionStore for MemorySession {
    fn read_marker(&self) -> Option<String> {
        self.marker.borrow().clone()
    }

    fn write_marker(&self, value: &str) {
        *self.marker.borrow_mut() = Some(value.to_owned());
    }

    fn clear_marker(&self) {
        self.marker.borrow_mut().take();
    }
}
