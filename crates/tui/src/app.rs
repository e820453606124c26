//! Application state for the Safra dashboard TUI.
//!
//! `App` owns every piece of mutable state: the session gate, the navigation
//! state machine, the theme and the per-component states. Components read
//! and mutate it through `&mut App` and hand side effects back as
//! [`Effect`]s, which the runtime feeds into [`App::apply`].

use std::sync::Arc;

use safra_fixtures::DataSource;
use safra_navigation::{NavigationState, Viewport};
use safra_types::{Effect, Msg, PageId, Screen};
use safra_util::{ShellConfig, StaticCredentials};
use tracing::{debug, info, warn};

use crate::auth::{AuthGate, SessionGate};
use crate::pages::{PageEntry, PageRegistry};
use crate::ui::components::header::HeaderState;
use crate::ui::components::login::LoginState;
use crate::ui::components::registration::RegistrationState;
use crate::ui::components::sidebar::SidebarState;
use crate::ui::components::ticker::TickerState;
use crate::ui::theme::ThemeProvider;

/// Read-only context shared by all components.
#[derive(Debug)]
pub struct SharedCtx {
    /// Fixture supplier
    pub data: Arc<dyn DataSource>,
    /// Pages registered from the navigation catalog
    pub pages: PageRegistry,
    /// Terminal width at which the desktop presentation starts
    pub breakpoint: u16,
}

impl SharedCtx {
    pub fn new(data: Arc<dyn DataSource>, breakpoint: u16) -> Self {
        let pages = PageRegistry::from_catalog(&data.fixtures().navigation);
        Self { data, pages, breakpoint }
    }
}

#[derive(Debug)]
pub struct App {
    pub ctx: SharedCtx,
    pub theme: ThemeProvider,
    pub auth: Box<dyn AuthGate>,
    pub screen: Screen,
    /// Sidebar state machine of the current session
    pub navigation: NavigationState,
    pub login: LoginState,
    pub registration: RegistrationState,
    pub sidebar: SidebarState,
    pub header: HeaderState,
    pub ticker: TickerState,
}

impl App {
    pub fn new(data: Arc<dyn DataSource>, config: &ShellConfig) -> Self {
        Self::with_auth(data, config, Box::new(SessionGate::new(Box::new(StaticCredentials::default()))))
    }

    pub fn with_auth(data: Arc<dyn DataSource>, config: &ShellConfig, auth: Box<dyn AuthGate>) -> Self {
        let ctx = SharedCtx::new(data, config.breakpoint);
        debug!(pages = ctx.pages.len(), breakpoint = ctx.breakpoint, "app initialised");
        Self {
            ctx,
            theme: ThemeProvider::new(config.theme),
            auth,
            screen: Screen::Login,
            navigation: NavigationState::new(Viewport::Desktop),
            login: LoginState::default(),
            registration: RegistrationState::default(),
            sidebar: SidebarState::default(),
            header: HeaderState::default(),
            ticker: TickerState::default(),
        }
    }

    /// Applies a runtime message to app-wide state.
    pub fn update(&mut self, msg: &Msg) -> Vec<Effect> {
        match msg {
            Msg::Tick => {}
            Msg::Resize(width, _) => {
                let viewport = Viewport::from_width(*width, self.ctx.breakpoint);
                if viewport != self.navigation.viewport() {
                    self.navigation.on_viewport_change(viewport.is_desktop());
                }
            }
            Msg::CommitDeferredNavigation => {
                self.navigation.commit_pending();
            }
        }
        Vec::new()
    }

    /// Executes the effects that only touch application state. Returns
    /// `false` for effects the runtime has to handle itself.
    pub fn apply(&mut self, effect: &Effect) -> bool {
        match effect {
            Effect::SwitchTo(screen) => self.switch_to(*screen),
            Effect::Logout => self.logout(),
            Effect::ToggleTheme => {
                let mode = self.theme.toggle();
                info!(%mode, "theme changed");
            }
            Effect::ScheduleNavigationCommit | Effect::Quit => return false,
        }
        true
    }

    pub fn current_page(&self) -> &PageEntry {
        self.ctx.pages.resolve(self.navigation.current_page())
    }

    pub fn submit_login(&mut self) -> Vec<Effect> {
        let email = self.login.email.input().to_string();
        let password = self.login.password.input().to_string();
        match self.auth.login(&email, &password) {
            Ok(()) => {
                self.login.reset();
                vec![Effect::SwitchTo(Screen::Shell)]
            }
            Err(error) => {
                self.login.error = Some(error.to_string());
                Vec::new()
            }
        }
    }

    pub fn submit_registration(&mut self) {
        if self.registration.submit() {
            info!(email = self.registration.email.input(), "registration simulated");
        }
    }

    pub fn switch_to(&mut self, screen: Screen) {
        if screen == Screen::Shell && !self.auth.is_authenticated() {
            warn!("shell requested without a session; staying on {:?}", self.screen);
            return;
        }
        match screen {
            Screen::Login => self.login.error = None,
            Screen::Registration => self.registration.reset(),
            Screen::Shell => {
                self.navigation.reset();
                self.focus_sidebar();
            }
        }
        debug!(from = ?self.screen, to = ?screen, "screen changed");
        self.screen = screen;
    }

    /// Ends the session and resets every piece of session state.
    pub fn logout(&mut self) {
        self.auth.logout();
        self.navigation.reset();
        self.sidebar.reset();
        self.header.reset();
        self.ticker.reset();
        self.login.reset();
        self.screen = Screen::Login;
    }

    /// Navigates from the header (search result or user menu).
    pub fn open_page(&mut self, page: PageId) {
        self.navigation.jump_to(page);
        self.header.close_popovers();
        self.header.clear_search();
        self.focus_sidebar();
    }

    pub fn focus_sidebar(&mut self) {
        self.header.search_focus.set(false);
        self.sidebar.container_focus.set(true);
    }

    pub fn focus_search(&mut self) {
        self.sidebar.container_focus.set(false);
        self.header.search_focus.set(true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use safra_fixtures::StaticDataSource;
    use safra_types::ThemeMode;

    fn app() -> App {
        let data = StaticDataSource::embedded().expect("embedded fixtures");
        App::new(Arc::new(data), &ShellConfig::default())
    }

    fn signed_in() -> App {
        let mut app = app();
        app.login.email.set_input("admin@locks.com.br");
        app.login.password.set_input("password");
        for effect in app.submit_login() {
            app.apply(&effect);
        }
        app
    }

    #[test]
    fn shell_requires_a_session() {
        let mut app = app();
        app.switch_to(Screen::Shell);
        assert_eq!(app.screen, Screen::Login);
    }

    #[test]
    fn wrong_password_shows_message() {
        let mut app = app();
        app.login.email.set_input("admin@locks.com.br");
        app.login.password.set_input("errada");
        assert!(app.submit_login().is_empty());
        assert_eq!(app.login.error.as_deref(), Some("E-mail ou senha inválidos."));
        assert_eq!(app.screen, Screen::Login);
    }

    #[test]
    fn empty_login_asks_for_both_fields() {
        let mut app = app();
        app.submit_login();
        assert_eq!(app.login.error.as_deref(), Some("Por favor, preencha e-mail e senha."));
    }

    #[test]
    fn valid_login_enters_shell_on_overview() {
        let app = signed_in();
        assert_eq!(app.screen, Screen::Shell);
        assert!(app.auth.is_authenticated());
        assert_eq!(app.current_page().id, PageId::overview());
        assert!(app.sidebar.is_focused());
        assert!(app.login.password.is_empty());
    }

    #[test]
    fn logout_resets_session_state() {
        let mut app = signed_in();
        app.navigation.toggle_desktop_pin();
        app.navigation.jump_to(PageId::settings());
        app.header.toggle_notifications();
        app.apply(&Effect::Logout);

        assert_eq!(app.screen, Screen::Login);
        assert!(!app.auth.is_authenticated());
        assert!(!app.navigation.pinned_expanded());
        assert_eq!(app.navigation.current_page(), &PageId::overview());
        assert!(!app.header.notifications_open);
    }

    #[test]
    fn resize_switches_presentation_and_closes_drawer() {
        let mut app = signed_in();
        app.update(&Msg::Resize(80, 30));
        assert!(app.navigation.viewport().is_mobile());
        app.navigation.toggle_mobile_drawer();
        assert!(app.navigation.mobile_drawer_open());

        app.update(&Msg::Resize(140, 30));
        assert!(app.navigation.viewport().is_desktop());
        assert!(!app.navigation.mobile_drawer_open());
    }

    #[test]
    fn deferred_commit_arrives_as_message() {
        let mut app = signed_in();
        let data = Arc::clone(&app.ctx.data);
        let trading = data.fixtures().navigation.item("trading").expect("trading group");
        app.navigation.select_item(trading);
        assert!(app.navigation.pinned_expanded());
        assert_eq!(app.navigation.open_group_id(), None);

        app.update(&Msg::CommitDeferredNavigation);
        assert_eq!(app.navigation.open_group_id(), Some("trading"));
    }

    #[test]
    fn open_page_clears_search_and_popovers() {
        let mut app = signed_in();
        app.focus_search();
        app.header.search.set_input("milho");
        let pages = &app.ctx.pages;
        app.header.refresh_results(pages);
        let first = app.header.results.first().cloned().expect("a match");

        app.open_page(first.clone());
        assert_eq!(app.navigation.current_page(), &first);
        assert!(app.header.search.is_empty());
        assert!(!app.header.has_popover());
        assert!(app.sidebar.is_focused());
    }

    #[test]
    fn theme_toggle_is_app_side_effect() {
        let mut app = app();
        assert!(app.apply(&Effect::ToggleTheme));
        assert_eq!(app.theme.mode(), ThemeMode::Dark);
        assert!(!app.apply(&Effect::ScheduleNavigationCommit));
    }

    #[test]
    fn registration_screen_starts_blank() {
        let mut app = app();
        app.registration.name.set_input("Ana");
        app.apply(&Effect::SwitchTo(Screen::Registration));
        assert_eq!(app.screen, Screen::Registration);
        assert!(app.registration.name.is_empty());
    }
}
