//! Authenticated landing page: fleet summary and section shortcuts.

#[cfg(test)]
#[path = "admin_dashboard_test.rs"]
mod admin_dashboard_test;

use leptos::prelude::*;

use crate::nav::routes::{RouteEntry, ViewId, navigation_entries};
use crate::pages::companies::request_companies;
use crate::pages::devices::request_devices;
use crate::state::fleet::FleetState;

/// Sections linked from the dashboard body (every sidebar entry but itself).
fn quick_links() -> impl Iterator<Item = &'static RouteEntry> {
    navigation_entries().filter(|entry| entry.view != ViewId::AdminDashboard)
}

fn count_label(loading: bool, count: usize) -> String {
    if loading { "…".to_owned() } else { count.to_string() }
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let fleet = expect_context::<RwSignal<FleetState>>();
    Effect::new(move || {
        request_companies(fleet);
        request_devices(fleet);
    });

    view! {
        <section class="page dashboard-page">
            <h2 class="page__title">"Panel de administración"</h2>
            <div class="dashboard-page__cards">
                <div class="stat-card">
                    <span class="stat-card__label">"Empresas"</span>
                    <span class="stat-card__value">
                        {move || {
                            let f = fleet.get();
                            count_label(f.companies.loading, f.companies.items.len())
                        }}
                    </span>
                </div>
                <div class="stat-card">
                    <span class="stat-card__label">"Dispositivos"</span>
                    <span class="stat-card__value">
                        {move || {
                            let f = fleet.get();
                            count_label(f.devices.loading, f.devices.items.len())
                        }}
                    </span>
                </div>
            </div>
            <nav class="dashboard-page__links">
                {quick_links()
                    .map(|entry| {
                        view! {
                            <a class="dashboard-page__link" href=entry.path>
                                {entry.label}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
        </section>
    }
}
