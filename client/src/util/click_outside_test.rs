use super::*;
use std::cell::Cell;
use std::rc::Rc;

// =============================================================
// OutsideClick
// =============================================================

#[test]
fn inside_click_does_not_fire() {
    let hits = Cell::new(0);
    let mut outside = OutsideClick::new(|| hits.set(hits.get() + 1));
    assert!(!outside.dispatch(true));
    assert_eq!(hits.get(), 0);
}

#[test]
fn outside_click_fires_each_time() {
    let hits = Cell::new(0);
    let mut outside = OutsideClick::new(|| hits.set(hits.get() + 1));
    assert!(outside.dispatch(false));
    assert!(outside.dispatch(false));
    assert!(!outside.dispatch(true));
    assert_eq!(hits.get(), 2);
}

// =============================================================
// Subscription
// =============================================================

fn counting_subscription() -> (Subscription, Rc<Cell<u32>>) {
    let detached = Rc::new(Cell::new(0));
    let counter = detached.clone();
    let sub = Subscription::new(move || counter.set(counter.get() + 1));
    (sub, detached)
}

#[test]
fn drop_detaches_once() {
    let (sub, detached) = counting_subscription();
    assert!(sub.is_active());
    drop(sub);
    assert_eq!(detached.get(), 1);
}

#[test]
fn unsubscribe_detaches_once() {
    let (sub, detached) = counting_subscription();
    sub.unsubscribe();
    assert_eq!(detached.get(), 1);
}

#[test]
fn detach_does_not_run_while_alive() {
    let (sub, detached) = counting_subscription();
    assert_eq!(detached.get(), 0);
    assert!(format!("{sub:?}").contains("active: true"));
    drop(sub);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn hook_is_noop_outside_browser() {
    let owner = Owner::new();
    owner.with(|| {
        let node = NodeRef::<leptos::html::Div>::new();
        use_click_outside(node, || panic!("must not fire"));
    });
}
