use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{prelude::*, widgets::Block};
use safra_types::{Effect, Msg, Screen};

use super::components::{
    Component, HeaderComponent, LoginComponent, PageHostComponent, RegistrationComponent, SidebarComponent, TickerComponent,
};
use super::layout::{ShellAreas, ShellLayout};
use super::theme::theme_helpers as th;
use super::utils::contains;
use crate::app::App;

/// Root component. Routes input by screen and, inside the shell, by region;
/// renders the shell in paint order (content, overlay, sidebar, popovers).
#[derive(Debug, Default)]
pub struct MainView {
    login: LoginComponent,
    registration: RegistrationComponent,
    sidebar: SidebarComponent,
    header: HeaderComponent,
    ticker: TickerComponent,
    pages: PageHostComponent,
    /// Regions of the last rendered shell frame
    areas: ShellAreas,
    /// Terminal area of the last frame or resize
    frame: Rect,
    /// Last pointer cell reported by the terminal
    pointer: Option<(u16, u16)>,
}

impl MainView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn areas(&self) -> &ShellAreas {
        &self.areas
    }

    /// Re-derives hover from the last pointer position. Hover changes are
    /// ignored while pinned or on mobile, so a pointer that left in either
    /// state is only noticed once the sidebar is unpinned on desktop again.
    fn sync_hover(&self, app: &mut App) {
        if !app.navigation.viewport().is_desktop() || app.navigation.pinned_expanded() {
            return;
        }
        let sidebar = ShellLayout::compute(self.frame, &app.navigation).sidebar;
        let inside = self
            .pointer
            .is_some_and(|(x, y)| sidebar.is_some_and(|area| contains(area, x, y)));
        if inside != app.navigation.hovering() {
            app.navigation.set_hover(inside);
        }
    }

    fn handle_shell_key(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('b') => {
                    if app.navigation.viewport().is_desktop() {
                        app.navigation.toggle_desktop_pin();
                    } else {
                        app.navigation.toggle_mobile_drawer();
                    }
                }
                KeyCode::Char('n') => app.header.toggle_notifications(),
                KeyCode::Char('u') => app.header.toggle_user_menu(),
                _ => {}
            }
            return Vec::new();
        }

        if app.header.user_menu_open {
            return self.header.handle_key_events(app, key);
        }

        match key.code {
            KeyCode::Esc if app.header.notifications_open => {
                app.header.notifications_open = false;
                Vec::new()
            }
            KeyCode::Esc if !app.header.is_search_focused() && app.navigation.mobile_drawer_open() => {
                app.navigation.toggle_mobile_drawer();
                Vec::new()
            }
            KeyCode::Tab | KeyCode::BackTab => {
                if app.header.is_search_focused() {
                    app.focus_sidebar();
                } else {
                    app.focus_search();
                }
                Vec::new()
            }
            KeyCode::Char('/') if !app.header.is_search_focused() => {
                app.focus_search();
                Vec::new()
            }
            _ if app.header.is_search_focused() => self.header.handle_key_events(app, key),
            _ if self.areas.sidebar.is_some() => self.sidebar.handle_key_events(app, key),
            _ => Vec::new(),
        }
    }

    fn handle_shell_mouse(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        let (x, y) = (mouse.column, mouse.row);
        self.pointer = Some((x, y));
        match mouse.kind {
            MouseEventKind::Moved => {
                if app.navigation.viewport().is_desktop() {
                    let inside = self.areas.sidebar.is_some_and(|area| contains(area, x, y));
                    if inside != app.navigation.hovering() {
                        app.navigation.set_hover(inside);
                    }
                }
                app.ticker.paused = contains(self.areas.ticker, x, y);
                Vec::new()
            }
            MouseEventKind::Down(MouseButton::Left) => {
                let on_popover = HeaderComponent::popover_contains(app, x, y);
                let on_header = contains(self.areas.header, x, y);
                if app.header.has_popover() && !on_popover && !on_header {
                    app.header.close_popovers();
                }
                if on_popover || on_header {
                    return self.header.handle_mouse_events(app, mouse);
                }
                if self.areas.overlay.is_some_and(|area| contains(area, x, y)) {
                    app.navigation.toggle_mobile_drawer();
                    return Vec::new();
                }
                if self.areas.sidebar.is_some_and(|area| contains(area, x, y)) {
                    app.focus_sidebar();
                    return self.sidebar.handle_mouse_events(app, mouse);
                }
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    fn render_shell(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let areas = ShellLayout::compute(area, &app.navigation);
        self.areas = areas;
        self.frame = area;

        frame.render_widget(Block::default().style(th::background_style(app.theme.theme())), area);
        self.pages.render(frame, areas.content, app);
        self.ticker.render(frame, areas.ticker, app);
        self.header.render(frame, areas.header, app);

        if let Some(overlay) = areas.overlay {
            frame.render_widget(Block::default().style(app.theme.theme().modal_background_style()), overlay);
        }
        if let Some(sidebar) = areas.sidebar {
            self.sidebar.render(frame, sidebar, app);
        }
        self.header.render_popovers(frame, area, app);
    }
}

impl Component for MainView {
    fn handle_message(&mut self, app: &mut App, msg: &Msg) -> Vec<Effect> {
        let mut effects = app.update(msg);
        if app.screen == Screen::Shell {
            if let Msg::Resize(width, height) = *msg {
                self.frame = Rect::new(0, 0, width, height);
                self.sync_hover(app);
            }
            effects.extend(self.ticker.handle_message(app, msg));
        }
        effects
    }

    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('q') => return vec![Effect::Quit],
                KeyCode::Char('t') => return vec![Effect::ToggleTheme],
                _ => {}
            }
        }
        match app.screen {
            Screen::Login => self.login.handle_key_events(app, key),
            Screen::Registration => self.registration.handle_key_events(app, key),
            Screen::Shell => {
                let effects = self.handle_shell_key(app, key);
                self.sync_hover(app);
                effects
            }
        }
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        match app.screen {
            Screen::Login => self.login.handle_mouse_events(app, mouse),
            Screen::Registration => self.registration.handle_mouse_events(app, mouse),
            Screen::Shell => {
                let effects = self.handle_shell_mouse(app, mouse);
                self.sync_hover(app);
                effects
            }
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        match app.screen {
            Screen::Login => self.login.render(frame, area, app),
            Screen::Registration => self.registration.render(frame, area, app),
            Screen::Shell => self.render_shell(frame, area, app),
        }
    }
}
