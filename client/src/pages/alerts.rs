//! Active alerts view.

use leptos::prelude::*;

#[component]
pub fn AlertsPage() -> impl IntoView {
    view! {
        <section class="page alerts-page">
            <h2 class="page__title">"Alertas"</h2>
            <ul class="alerts-page__list"></ul>
            <p class="page__empty">"Sin alertas activas."</p>
        </section>
    }
}
