//! Reports: fleet distribution per company.

use leptos::prelude::*;

use crate::pages::companies::request_companies;
use crate::pages::devices::request_devices;
use crate::state::fleet::FleetState;

#[component]
pub fn ReportsPage() -> impl IntoView {
    let fleet = expect_context::<RwSignal<FleetState>>();
    Effect::new(move || {
        request_companies(fleet);
        request_devices(fleet);
    });

    let rows = move || {
        fleet
            .get()
            .devices_per_company()
            .into_iter()
            .map(|(name, count)| (name.to_owned(), count))
            .collect::<Vec<_>>()
    };

    view! {
        <section class="page reports-page">
            <h2 class="page__title">"Reportes"</h2>
            <h3 class="page__subtitle">"Dispositivos por empresa"</h3>
            <Show
                when=move || !fleet.get().companies.loading && !fleet.get().devices.loading
                fallback=|| view! { <p class="page__loading">"Generando reporte..."</p> }
            >
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Empresa"</th>
                            <th>"Dispositivos"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            rows()
                                .into_iter()
                                .map(|(name, count)| {
                                    view! {
                                        <tr>
                                            <td>{name}</td>
                                            <td>{count}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </Show>
        </section>
    }
}
