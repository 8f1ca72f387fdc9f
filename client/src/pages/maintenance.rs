//! Maintenance schedule view.

use leptos::prelude::*;

#[component]
pub fn MaintenancePage() -> impl IntoView {
    view! {
        <section class="page maintenance-page">
            <h2 class="page__title">"Mantenimiento"</h2>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Unidad"</th>
                        <th>"Servicio"</th>
                        <th>"Programado"</th>
                        <th>"Estado"</th>
                    </tr>
                </thead>
                <tbody></tbody>
            </table>
            <p class="page__empty">"No hay servicios programados."</p>
        </section>
    }
}
