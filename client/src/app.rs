//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::admin_layout::AdminLayout;
use crate::components::route_guard::RouteGuard;
use crate::nav::routes::ViewId;
use crate::pages::{
    admin_dashboard::AdminDashboardPage, alerts::AlertsPage, companies::CompaniesPage, devices::DevicesPage,
    login::LoginPage, maintenance::MaintenancePage, not_found::NotFoundPage, reports::ReportsPage,
};
use crate::state::{auth::AuthState, fleet::FleetState, ui::UiState};
use crate::util::session::BrowserSession;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides shared state contexts and sets up client-side routing. Every
/// route, including the not-found fallback, renders through `RouteGuard`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::pending());
    let ui = RwSignal::new(UiState::default());
    let fleet = RwSignal::new(FleetState::default());

    provide_context(auth);
    provide_context(ui);
    provide_context(fleet);

    // Browser-only: effects never run during SSR, so the server always
    // renders the pending state and hydration matches it.
    Effect::new(move || {
        auth.set(AuthState::from_store(&BrowserSession));
        let dark = crate::util::dark_mode::read_preference();
        crate::util::dark_mode::apply(dark);
        ui.update(|u| u.dark_mode = dark);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/fleetdesk.css"/>
        <Title text="Quantum Fleet"/>

        <Router>
            <Routes fallback=|| view! { <RouteGuard><NotFoundPage/></RouteGuard> }>
                <Route
                    path=StaticSegment(ViewId::Login.segment())
                    view=|| view! { <RouteGuard><LoginPage/></RouteGuard> }
                />
                <Route
                    path=StaticSegment(ViewId::AdminDashboard.segment())
                    view=|| view! { <RouteGuard><AdminLayout><AdminDashboardPage/></AdminLayout></RouteGuard> }
                />
                <Route
                    path=StaticSegment(ViewId::Companies.segment())
                    view=|| view! { <RouteGuard><AdminLayout><CompaniesPage/></AdminLayout></RouteGuard> }
                />
                <Route
                    path=StaticSegment(ViewId::Maintenance.segment())
                    view=|| view! { <RouteGuard><AdminLayout><MaintenancePage/></AdminLayout></RouteGuard> }
                />
                <Route
                    path=StaticSegment(ViewId::Devices.segment())
                    view=|| view! { <RouteGuard><AdminLayout><DevicesPage/></AdminLayout></RouteGuard> }
                />
                <Route
                    path=StaticSegment(ViewId::Reports.segment())
                    view=|| view! { <RouteGuard><AdminLayout><ReportsPage/></AdminLayout></RouteGuard> }
                />
                <Route
                    path=StaticSegment(ViewId::Alerts.segment())
                    view=|| view! { <RouteGuard><AdminLayout><AlertsPage/></AdminLayout></RouteGuard> }
                />
            </Routes>
        </Router>
    }
}
