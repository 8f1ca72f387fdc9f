#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn preference_defaults_to_light_off_browser() {
    assert!(!read_preference());
}

#[test]
fn toggle_returns_the_flipped_value() {
    assert!(toggle(false));
    assert!(!toggle(true));
}

#[test]
fn apply_is_callable_without_a_document() {
    apply(true);
    apply(false);
}
