//! Fallback for paths outside the route table.

use leptos::prelude::*;

use crate::nav::routes::LANDING_PATH;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="page not-found-page">
            <h2 class="page__title">"Página no encontrada"</h2>
            <a href=LANDING_PATH>"Volver al panel"</a>
        </section>
    }
}
