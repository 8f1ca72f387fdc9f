use super::*;

// =============================================================
// MemorySession
// =============================================================

#[test]
fn empty_store_has_no_marker() {
    let store = MemorySession::default();
    assert!(!store.has_marker());
    assert_eq!(store.read_marker(), None);
}

#[test]
fn write_then_clear() {
    let store = MemorySession::default();
    store.write_marker("abc");
    assert_eq!(store.read_marker().as_deref(), Some("abc"));
    store.clear_marker();
    assert!(!store.has_marker());
}

#[test]
fn empty_value_counts_as_present() {
    let store = MemorySession::with_marker("");
    assert!(store.has_marker());
}

#[test]
fn clones_share_the_marker() {
    let store = MemorySession::default();
    let other = store.clone();
    store.write_marker("t");
    assert!(other.has_marker());
}

#[test]
fn auth_context_reflects_presence() {
    let store = MemorySession::default();
    assert_eq!(auth_context(&store), AuthContext::ANONYMOUS);
    store.write_marker("jwt");
    assert_eq!(auth_context(&store), AuthContext::AUTHENTICATED);
}

#[test]
fn auth_context_works_through_trait_object() {
    let store: Box<dyn SessionStore> = Box::new(MemorySession::with_marker("x"));
    assert!(auth_context(store.as_ref()).authenticated);
}

// =============================================================
// BrowserSession outside the browser
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_session_is_empty_without_hydrate() {
    let store = BrowserSession;
    store.write_marker("ignored");
    assert!(!store.has_marker());
    store.clear_marker();
    assert_eq!(auth_context(&store), AuthContext::ANONYMOUS);
}

#[test]
fn clearing_an_empty_store_is_harmless() {
    let store = MemorySession::default();
    store.clear_marker();
    store.clear_marker();
    assert!(!store.has_marker());
}
