//! Sidebar + header chrome shared by every authenticated page.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::user_menu::UserMenu;
use crate::nav::routes::{lookup, navigation_entries};
use crate::state::ui::UiState;

#[component]
pub fn AdminLayout(children: Children) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let pathname = use_location().pathname;

    let title = move || lookup(&pathname.get()).map_or("", |entry| entry.label);

    view! {
        <div class="admin-layout" class:admin-layout--collapsed=move || ui.get().sidebar_collapsed>
            <aside class="admin-layout__sidebar">
                <div class="admin-layout__brand">"Quantum Fleet"</div>
                <nav class="admin-layout__nav">
                    {navigation_entries()
                        .map(|entry| {
                            let path = entry.path;
                            view! {
                                <a
                                    href=path
                                    class="admin-layout__link"
                                    class:admin-layout__link--active=move || pathname.get() == path
                                >
                                    {entry.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
            </aside>
            <div class="admin-layout__main">
                <header class="admin-layout__header toolbar">
                    <button
                        class="btn toolbar__sidebar-toggle"
                        on:click=move |_| ui.update(UiState::toggle_sidebar)
                        title="Mostrar/ocultar menú"
                    >
                        "☰"
                    </button>
                    <span class="toolbar__title">{title}</span>
                    <span class="toolbar__spacer"></span>
                    <button
                        class="btn toolbar__dark-toggle"
                        on:click=move |_| {
                            let current = ui.get().dark_mode;
                            let next = crate::util::dark_mode::toggle(current);
                            ui.update(|u| u.dark_mode = next);
                        }
                        title="Modo oscuro"
                    >
                        {move || if ui.get().dark_mode { "☀" } else { "☾" }}
                    </button>
                    <UserMenu/>
                </header>
                <main class="admin-layout__content">{children()}</main>
            </div>
        </div>
    }
}
