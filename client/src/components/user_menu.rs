//! Header user menu, dismissed by clicking anywhere outside it.

use leptos::prelude::*;

use crate::nav::guard::AuthContext;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::click_outside::use_click_outside;
use crate::util::session::{BrowserSession, SessionStore};

#[component]
pub fn UserMenu() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let menu_ref = NodeRef::<leptos::html::Div>::new();

    use_click_outside(menu_ref, move || {
        if ui.get_untracked().user_menu_open {
            ui.update(|u| {
                u.dismiss_user_menu();
            });
        }
    });

    // Clearing the marker is enough: the route guard sees the auth change and
    // sends the user back to the login view.
    let on_logout = move |_| {
        BrowserSession.clear_marker();
        ui.update(|u| {
            u.dismiss_user_menu();
        });
        auth.set(AuthState::resolved(AuthContext::ANONYMOUS));
    };

    view! {
        <div class="user-menu" node_ref=menu_ref>
            <button
                class="btn user-menu__toggle"
                aria-haspopup="menu"
                aria-expanded=move || ui.get().user_menu_open.to_string()
                on:click=move |_| ui.update(UiState::toggle_user_menu)
                title="Cuenta"
            >
                "Administrador ▾"
            </button>
            <Show when=move || ui.get().user_menu_open>
                <div class="user-menu__dropdown" role="menu">
                    <button class="user-menu__item" role="menuitem" on:click=on_logout>
                        "Cerrar sesión"
                    </button>
                </div>
            </Show>
        </div>
    }
}
