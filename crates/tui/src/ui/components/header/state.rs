use rat_focus::FocusFlag;
use ratatui::layout::Rect;
use safra_types::PageId;

use crate::pages::PageRegistry;
use crate::ui::components::common::TextInputState;

pub const MAX_SEARCH_RESULTS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserMenuAction {
    Profile,
    Settings,
    Logout,
}

impl UserMenuAction {
    pub const ALL: [UserMenuAction; 3] = [Self::Profile, Self::Settings, Self::Logout];

    pub fn label(self) -> &'static str {
        match self {
            Self::Profile => "Meu Perfil",
            Self::Settings => "Configurações",
            Self::Logout => "Sair",
        }
    }
}

/// Rects recorded while rendering, for mouse hit-testing.
#[derive(Debug, Clone, Default)]
pub struct HeaderAreas {
    pub menu_button: Option<Rect>,
    pub search: Rect,
    pub theme_button: Rect,
    pub bell: Rect,
    pub user_button: Rect,
    pub results: Vec<Rect>,
    pub notifications: Option<Rect>,
    pub user_menu: Option<Rect>,
    pub user_menu_rows: Vec<Rect>,
}

#[derive(Debug, Clone)]
pub struct HeaderState {
    pub search: TextInputState,
    pub search_focus: FocusFlag,
    pub results: Vec<PageId>,
    pub notifications_open: bool,
    pub user_menu_open: bool,
    pub menu_cursor: usize,
    pub areas: HeaderAreas,
}

impl Default for HeaderState {
    fn default() -> Self {
        Self {
            search: TextInputState::new(),
            search_focus: FocusFlag::named("header.search"),
            results: Vec::new(),
            notifications_open: false,
            user_menu_open: false,
            menu_cursor: 0,
            areas: HeaderAreas::default(),
        }
    }
}

impl HeaderState {
    pub fn is_search_focused(&self) -> bool {
        self.search_focus.get()
    }

    /// Re-runs the title search for the current query.
    pub fn refresh_results(&mut self, pages: &PageRegistry) {
        self.results = pages.search(self.search.input());
        self.results.truncate(MAX_SEARCH_RESULTS);
    }

    pub fn clear_search(&mut self) {
        self.search.clear();
        self.results.clear();
    }

    pub fn toggle_notifications(&mut self) {
        self.notifications_open = !self.notifications_open;
        self.user_menu_open = false;
    }

    pub fn toggle_user_menu(&mut self) {
        self.user_menu_open = !self.user_menu_open;
        self.notifications_open = false;
        self.menu_cursor = 0;
    }

    pub fn has_popover(&self) -> bool {
        self.notifications_open || self.user_menu_open || !self.results.is_empty()
    }

    pub fn close_popovers(&mut self) {
        self.notifications_open = false;
        self.user_menu_open = false;
        self.results.clear();
    }

    pub fn move_menu_cursor(&mut self, forward: bool) {
        let len = UserMenuAction::ALL.len();
        self.menu_cursor = if forward { (self.menu_cursor + 1) % len } else { (self.menu_cursor + len - 1) % len };
    }

    pub fn reset(&mut self) {
        self.clear_search();
        self.close_popovers();
        self.search_focus.set(false);
        self.areas = HeaderAreas::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn popovers_are_mutually_exclusive() {
        let mut state = HeaderState::default();
        state.toggle_notifications();
        assert!(state.notifications_open);
        state.toggle_user_menu();
        assert!(state.user_menu_open);
        assert!(!state.notifications_open);
        state.close_popovers();
        assert!(!state.has_popover());
    }

    #[test]
    fn menu_cursor_wraps() {
        let mut state = HeaderState::default();
        state.move_menu_cursor(false);
        assert_eq!(UserMenuAction::ALL[state.menu_cursor], UserMenuAction::Logout);
        state.move_menu_cursor(true);
        assert_eq!(UserMenuAction::ALL[state.menu_cursor], UserMenuAction::Profile);
    }
}
