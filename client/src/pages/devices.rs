//! Devices list with a free-text filter.

use leptos::prelude::*;

use crate::pages::companies::request_companies;
use crate::state::fleet::FleetState;

/// Kick off a devices fetch into `fleet`. Browser only.
pub(crate) fn request_devices(fleet: RwSignal<FleetState>) {
    fleet.update(|f| f.devices.begin());
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::util::session::{BrowserSession, SessionStore};

        let token = BrowserSession.read_marker().unwrap_or_default();
        let result = crate::net::api::fetch_devices(&token).await;
        if let Err(e) = &result {
            log::warn!("devices: {e}");
        }
        fleet.update(|f| f.devices.finish(result));
    });
}

#[component]
pub fn DevicesPage() -> impl IntoView {
    let fleet = expect_context::<RwSignal<FleetState>>();
    let query = RwSignal::new(String::new());

    // Company names label each row.
    Effect::new(move || {
        request_devices(fleet);
        request_companies(fleet);
    });

    let rows = move || {
        let state = fleet.get();
        let q = query.get();
        state
            .filter_devices(&q)
            .into_iter()
            .map(|d| {
                let company = state.company_name(d.tenant_id).unwrap_or("—").to_owned();
                (d.id, d.name.clone(), d.external_id.clone(), company)
            })
            .collect::<Vec<_>>()
    };

    view! {
        <section class="page devices-page">
            <h2 class="page__title">"Dispositivos"</h2>
            <input
                class="page__search"
                type="search"
                placeholder="Buscar por nombre o IMEI"
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />
            <Show when=move || fleet.get().devices.error.is_some()>
                <p class="page__error">{move || fleet.get().devices.error.unwrap_or_default()}</p>
            </Show>
            <Show
                when=move || !fleet.get().devices.loading
                fallback=|| view! { <p class="page__loading">"Cargando dispositivos..."</p> }
            >
                <Show
                    when=move || !rows().is_empty()
                    fallback=|| view! { <p class="page__empty">"Sin dispositivos."</p> }
                >
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"ID"</th>
                                <th>"Nombre"</th>
                                <th>"IMEI / ID externo"</th>
                                <th>"Empresa"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                rows()
                                    .into_iter()
                                    .map(|(id, name, external_id, company)| {
                                        view! {
                                            <tr>
                                                <td>{id}</td>
                                                <td>{name}</td>
                                                <td class="data-table__mono">{external_id}</td>
                                                <td>{company}</td>
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
