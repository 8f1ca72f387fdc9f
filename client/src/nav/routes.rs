//! Static route table for the admin dashboard.
//!
//! DESIGN
//! ======
//! `ViewId::segment` is what the Leptos router matches on; `RouteEntry::path`
//! is what the guard and links compare against. The table is ordered and the
//! sidebar follows declaration order.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Path of the login view. Unauthenticated users are sent here.
pub const LOGIN_PATH: &str = "/";

/// Path authenticated users land on after login.
pub const LANDING_PATH: &str = "/AdminDashboard";

/// Identifies which page component renders a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewId {
    Login,
    AdminDashboard,
    Companies,
    Maintenance,
    Devices,
    Reports,
    Alerts,
}

impl ViewId {
    /// Router segment without the leading slash (`""` for the root).
    pub const fn segment(self) -> &'static str {
        match self {
            Self::Login => "",
            Self::AdminDashboard => "AdminDashboard",
            Self::Companies => "empresas",
            Self::Maintenance => "mantenimiento",
            Self::Devices => "dispositivos",
            Self::Reports => "reportes",
            Self::Alerts => "alertas",
        }
    }
}

/// One `(path, view)` mapping plus its sidebar label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    /// Absolute path, always `/` followed by the view's segment.
    pub path: &'static str,
    pub view: ViewId,
    pub label: &'static str,
}

pub const ROUTES: &[RouteEntry] = &[
    RouteEntry { path: LOGIN_PATH, view: ViewId::Login, label: "Ingresar" },
    RouteEntry { path: LANDING_PATH, view: ViewId::AdminDashboard, label: "Panel" },
    RouteEntry { path: "/empresas", view: ViewId::Companies, label: "Empresas" },
    RouteEntry { path: "/mantenimiento", view: ViewId::Maintenance, label: "Mantenimiento" },
    RouteEntry { path: "/dispositivos", view: ViewId::Devices, label: "Dispositivos" },
    RouteEntry { path: "/reportes", view: ViewId::Reports, label: "Reportes" },
    RouteEntry { path: "/alertas", view: ViewId::Alerts, label: "Alertas" },
];

/// Find the entry whose path matches `path` exactly.
pub fn lookup(path: &str) -> Option<&'static RouteEntry> {
    ROUTES.iter().find(|entry| entry.path == path)
}

/// Entry for a given view. Every `ViewId` has exactly one entry.
pub fn entry_for(view: ViewId) -> Option<&'static RouteEntry> {
    ROUTES.iter().find(|entry| entry.view == view)
}

/// Routes shown in the sidebar: everything but the login view, in order.
pub fn navigation_entries() -> impl Iterator<Item = &'static RouteEntry> {
    ROUTES.iter().filter(|entry| entry.view != ViewId::Login)
}
