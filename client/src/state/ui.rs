//! Local UI chrome state (theme, sidebar, user menu).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of domain state (`auth`, `fleet`)
//! so layout controls can evolve independently of fetched data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
    pub sidebar_collapsed: bool,
    pub user_menu_open: bool,
}

impl UiState {
    pub fn toggle_user_menu(&mut self) {
        self.user_menu_open = !self.user_menu_open;
    }

    /// Close the user menu. Returns whether it was open.
    pub fn dismiss_user_menu(&mut self) -> bool {
        std::mem::replace(&mut self.user_menu_open, false)
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
    }
}
