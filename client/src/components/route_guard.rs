//! Leptos adapter that runs the navigation guard before a route renders.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route view (and the not-found fallback) is wrapped in `RouteGuard`.
//! It re-evaluates on each location or auth change, renders its children only
//! when the guard says proceed, and replaces the history entry on redirect so
//! the back button does not bounce through the gate.

#[cfg(test)]
#[path = "route_guard_test.rs"]
mod route_guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::nav::guard::{self, Navigation};
use crate::state::auth::AuthState;

/// Guard outcome for `path`, or `None` while the session marker is unread.
fn decide(state: AuthState, path: &str) -> Option<Navigation> {
    let ctx = state.context()?;
    Some(guard::evaluate(path, ctx))
}

/// Only a resolved `Proceed` renders the wrapped view.
fn should_render(decision: Option<Navigation>) -> bool {
    decision == Some(Navigation::Proceed)
}

/// Redirects replace the gated history entry.
fn redirect_options() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

#[component]
pub fn RouteGuard(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let pathname = use_location().pathname;
    let navigate = use_navigate();

    let decision = Memo::new(move |_| decide(auth.get(), &pathname.get()));

    Effect::new(move || {
        if let Some(Navigation::Redirect(target)) = decision.get() {
            #[cfg(feature = "hydrate")]
            log::debug!("guard: {} -> {target}", pathname.get_untracked());
            navigate(target, redirect_options());
        }
    });

    view! {
        <Show
            when=move || should_render(decision.get())
            fallback=|| view! { <div class="route-guard__pending" aria-busy="true"></div> }
        >
            {children()}
        </Show>
    }
}
