//! Outside-click detection for dismissible menus and popovers.
//!
//! SYSTEM CONTEXT
//! ==============
//! A menu binds its root element and a dismiss handler. A capture-phase
//! `click` listener on `document` fires the handler whenever the click target
//! is neither the element nor one of its descendants.
//!
//! DESIGN
//! ======
//! The listener is a scoped resource: attaching returns a [`Subscription`]
//! whose detach action runs exactly once, on `unsubscribe()` or on drop. The
//! Leptos hook ties that drop to component teardown.

#[cfg(test)]
#[path = "click_outside_test.rs"]
mod click_outside_test;

use leptos::prelude::*;

/// Handler wrapper applying the containment rule.
pub struct OutsideClick<H> {
    handler: H,
}

impl<H: FnMut()> OutsideClick<H> {
    pub fn new(handler: H) -> Self {
        Self { handler }
    }

    /// Route one click. `target_inside` is true when the target is the bound
    /// element or a descendant. Returns whether the handler ran.
    pub fn dispatch(&mut self, target_inside: bool) -> bool {
        if target_inside {
            return false;
        }
        (self.handler)();
        true
    }
}

/// Live listener registration. Dropping it detaches the listener.
pub struct Subscription {
    detach: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(detach: impl FnOnce() + 'static) -> Self {
        Self { detach: Some(Box::new(detach)) }
    }

    pub fn is_active(&self) -> bool {
        self.detach.is_some()
    }

    /// Detach now instead of waiting for drop.
    pub fn unsubscribe(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("active", &self.is_active()).finish()
    }
}

/// Attach a document-level capture listener that calls `handler` for clicks
/// outside `target`. Released when the owning component is cleaned up.
///
/// No-op outside the hydrated browser.
pub fn use_click_outside<H>(target: NodeRef<leptos::html::Div>, handler: H)
where
    H: Fn() + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        if let Some(subscription) = subscribe_document(target, handler) {
            let subscription = SendWrapper::new(subscription);
            on_cleanup(move || drop(subscription));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (target, handler);
    }
}

#[cfg(feature = "hydrate")]
fn subscribe_document<H>(target: NodeRef<leptos::html::Div>, handler: H) -> Option<Subscription>
where
    H: Fn() + 'static,
{
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let document = web_sys::window().and_then(|w| w.document())?;
    let mut outside = OutsideClick::new(handler);
    let callback = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        // Unmounted element: nothing to dismiss.
        let Some(el) = target.get_untracked() else {
            return;
        };
        let inside = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Node>().ok())
            .is_some_and(|node| el.contains(Some(&node)));
        outside.dispatch(inside);
    });

    let options = web_sys::AddEventListenerOptions::new();
    options.set_capture(true);
    document
        .add_event_listener_with_callback_and_add_event_listener_options(
            "click",
            callback.as_ref().unchecked_ref(),
            &options,
        )
        .ok()?;

    Some(Subscription::new(move || {
        let _ = document.remove_event_listener_with_callback_and_bool(
            "click",
            callback.as_ref().unchecked_ref(),
            true,
        );
        drop(callback);
    }))
}
