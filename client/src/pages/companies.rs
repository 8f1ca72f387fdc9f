//! Companies (tenants) list.

use leptos::prelude::*;

use crate::state::fleet::FleetState;

/// Kick off a companies fetch into `fleet`. Browser only.
pub(crate) fn request_companies(fleet: RwSignal<FleetState>) {
    fleet.update(|f| f.companies.begin());
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_companies().await;
        if let Err(e) = &result {
            log::warn!("companies: {e}");
        }
        fleet.update(|f| f.companies.finish(result));
    });
}

#[component]
pub fn CompaniesPage() -> impl IntoView {
    let fleet = expect_context::<RwSignal<FleetState>>();
    Effect::new(move || request_companies(fleet));

    view! {
        <section class="page companies-page">
            <h2 class="page__title">"Empresas"</h2>
            <Show when=move || fleet.get().companies.error.is_some()>
                <p class="page__error">{move || fleet.get().companies.error.unwrap_or_default()}</p>
            </Show>
            <Show
                when=move || !fleet.get().companies.loading
                fallback=|| view! { <p class="page__loading">"Cargando empresas..."</p> }
            >
                <Show
                    when=move || !fleet.get().companies.items.is_empty()
                    fallback=|| view! { <p class="page__empty">"No hay empresas registradas."</p> }
                >
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"ID"</th>
                                <th>"Nombre"</th>
                                <th>"Identificador"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                fleet
                                    .get()
                                    .companies
                                    .items
                                    .into_iter()
                                    .map(|c| {
                                        view! {
                                            <tr>
                                                <td>{c.id}</td>
                                                <td>{c.name}</td>
                                                <td class="data-table__mono">{c.slug}</td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </tbody>
                    </table>
                </Show>
            </Show>
        </section>
    }
}
