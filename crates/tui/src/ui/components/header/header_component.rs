use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Position, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use safra_types::{Effect, PageId, ThemeMode};
use tracing::debug;
use unicode_width::UnicodeWidthStr;

use super::state::UserMenuAction;
use crate::app::App;
use crate::ui::components::Component;
use crate::ui::icons;
use crate::ui::theme::{Theme, theme_helpers as th};
use crate::ui::utils::{contains, find_target_index_by_mouse_position, popover_below};
use safra_util::text::truncate_to_width;

/// Below this width the search box is hidden.
const SEARCH_MIN_WIDTH: u16 = 70;
const SEARCH_WIDTH: u16 = 28;
/// At or above this width the user button shows the full name.
const USER_NAME_MIN_WIDTH: u16 = 110;
const NOTIFICATIONS_WIDTH: u16 = 44;
const USER_MENU_WIDTH: u16 = 22;

/// Top bar of the shell: page title, search, theme toggle, notifications and
/// the user menu. Popovers are drawn separately by [`Self::render_popovers`]
/// so they overlay the content.
#[derive(Debug, Default)]
pub struct HeaderComponent;

impl HeaderComponent {
    fn user_label(app: &App, width: u16) -> String {
        let user = &app.ctx.data.fixtures().user;
        if width >= USER_NAME_MIN_WIDTH {
            format!("({}) {} ▾", user.initials(), user.name)
        } else {
            format!("({}) ▾", user.initials())
        }
    }

    fn activate_menu(app: &mut App, action: UserMenuAction) -> Vec<Effect> {
        app.header.user_menu_open = false;
        match action {
            UserMenuAction::Profile => {
                debug!("profile page is not available");
                Vec::new()
            }
            UserMenuAction::Settings => {
                app.open_page(PageId::settings());
                Vec::new()
            }
            UserMenuAction::Logout => vec![Effect::Logout],
        }
    }

    fn handle_search_key(app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Enter => {
                if let Some(page) = app.header.results.first().cloned() {
                    app.open_page(page);
                }
            }
            KeyCode::Esc => {
                app.header.clear_search();
                app.focus_sidebar();
            }
            code => {
                if app.header.search.handle_key(code) {
                    let pages = &app.ctx.pages;
                    app.header.refresh_results(pages);
                }
            }
        }
        Vec::new()
    }

    fn handle_menu_key(app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Down => app.header.move_menu_cursor(true),
            KeyCode::Up => app.header.move_menu_cursor(false),
            KeyCode::Enter => {
                let action = UserMenuAction::ALL[app.header.menu_cursor];
                return Self::activate_menu(app, action);
            }
            KeyCode::Esc => app.header.user_menu_open = false,
            _ => {}
        }
        Vec::new()
    }

    /// Search results, notifications and the user menu, anchored to the
    /// header controls recorded by the last `render`.
    pub fn render_popovers(&mut self, frame: &mut Frame, bounds: Rect, app: &mut App) {
        let theme = app.theme.theme();
        let header = &mut app.header;
        header.areas.notifications = None;
        header.areas.user_menu = None;
        header.areas.user_menu_rows.clear();
        header.areas.results.clear();

        if !header.results.is_empty() {
            let height = header.results.len() as u16 + 2;
            let area = popover_below(header.areas.search, header.areas.search.width, height, bounds);
            frame.render_widget(Clear, area);
            let block = th::block(theme, None, true);
            let inner = block.inner(area);
            frame.render_widget(block, area);
            for (offset, page) in header.results.iter().enumerate() {
                let row = Rect::new(inner.x, inner.y + offset as u16, inner.width, 1);
                if row.y >= inner.bottom() {
                    break;
                }
                let title = app.ctx.pages.resolve(page).title.as_str();
                let text = truncate_to_width(title, usize::from(inner.width));
                let style = if offset == 0 { theme.selection_style() } else { theme.text_primary_style() };
                frame.render_widget(Paragraph::new(text).style(style), row);
                header.areas.results.push(row);
            }
        }

        if header.notifications_open {
            let notifications = &app.ctx.data.fixtures().notifications;
            let body_rows = if notifications.is_empty() { 1 } else { notifications.len() as u16 * 2 };
            let area = popover_below(header.areas.bell, NOTIFICATIONS_WIDTH, body_rows + 4, bounds);
            frame.render_widget(Clear, area);
            let block = th::block(theme, Some(" Notificações "), true);
            let inner = block.inner(area);
            frame.render_widget(block, area);

            let mut lines: Vec<Line> = Vec::new();
            if notifications.is_empty() {
                lines.push(Line::styled("Nenhuma notificação nova.", theme.text_muted_style()));
            }
            for notification in notifications {
                let message = truncate_to_width(&notification.message, usize::from(inner.width));
                lines.push(Line::styled(message, theme.text_primary_style()));
                lines.push(Line::styled(notification.time.clone(), theme.text_muted_style()));
            }
            lines.push(Line::default());
            lines.push(Line::styled("Ver todas", th::link_style(theme, false)).centered());
            frame.render_widget(Paragraph::new(lines), inner);
            header.areas.notifications = Some(area);
        }

        if header.user_menu_open {
            let height = UserMenuAction::ALL.len() as u16 + 2;
            let area = popover_below(header.areas.user_button, USER_MENU_WIDTH, height, bounds);
            frame.render_widget(Clear, area);
            let block = th::block(theme, None, true);
            let inner = block.inner(area);
            frame.render_widget(block, area);
            for (index, action) in UserMenuAction::ALL.into_iter().enumerate() {
                let row = Rect::new(inner.x, inner.y + index as u16, inner.width, 1);
                if row.y >= inner.bottom() {
                    break;
                }
                let mut style = match action {
                    UserMenuAction::Logout => theme.status_error(),
                    _ => theme.text_primary_style(),
                };
                if index == header.menu_cursor {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                frame.render_widget(Paragraph::new(format!(" {}", action.label())).style(style), row);
                header.areas.user_menu_rows.push(row);
            }
            header.areas.user_menu = Some(area);
        }
    }

    /// True when (`x`, `y`) hits an open popover.
    pub fn popover_contains(app: &App, x: u16, y: u16) -> bool {
        let areas = &app.header.areas;
        areas.notifications.is_some_and(|area| contains(area, x, y))
            || areas.user_menu.is_some_and(|area| contains(area, x, y))
            || areas.results.iter().any(|row| contains(*row, x, y))
    }
}

impl Component for HeaderComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        if app.header.user_menu_open {
            return Self::handle_menu_key(app, key);
        }
        if app.header.is_search_focused() {
            return Self::handle_search_key(app, key);
        }
        Vec::new()
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        let (x, y) = (mouse.column, mouse.row);
        let areas = app.header.areas.clone();

        if let Some(menu) = areas.user_menu
            && let Some(index) = find_target_index_by_mouse_position(&menu, &areas.user_menu_rows, x, y)
        {
            return Self::activate_menu(app, UserMenuAction::ALL[index]);
        }
        if let Some(index) = areas.results.iter().position(|row| contains(*row, x, y)) {
            if let Some(page) = app.header.results.get(index).cloned() {
                app.open_page(page);
            }
            return Vec::new();
        }
        if areas.menu_button.is_some_and(|button| contains(button, x, y)) {
            app.navigation.toggle_mobile_drawer();
            return Vec::new();
        }
        if contains(areas.search, x, y) {
            app.focus_search();
            return Vec::new();
        }
        if contains(areas.theme_button, x, y) {
            return vec![Effect::ToggleTheme];
        }
        if contains(areas.bell, x, y) {
            app.header.toggle_notifications();
            return Vec::new();
        }
        if contains(areas.user_button, x, y) {
            app.header.toggle_user_menu();
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = app.theme.theme();
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(theme.border_style(false))
            .style(th::panel_style(theme));
        let inner = block.inner(area);
        frame.render_widget(block, area);
        if inner.height == 0 {
            return;
        }
        let row = Rect::new(inner.x + 1, inner.y + inner.height / 2, inner.width.saturating_sub(2), 1);

        let mobile = app.navigation.viewport().is_mobile();
        let show_search = area.width >= SEARCH_MIN_WIDTH;
        let user_label = Self::user_label(app, area.width);
        let user_width = user_label.width() as u16 + 1;

        let layout = Layout::horizontal([
            Constraint::Length(if mobile { 3 } else { 0 }),
            Constraint::Min(8),
            Constraint::Length(if show_search { SEARCH_WIDTH } else { 0 }),
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Length(user_width),
        ])
        .spacing(1)
        .split(row);

        let title = app.current_page().title.as_str();
        let title = truncate_to_width(title, usize::from(layout[1].width));
        frame.render_widget(Paragraph::new(title).style(theme.accent_emphasis_style()), layout[1]);

        if mobile {
            frame.render_widget(Paragraph::new(icons::MENU).style(theme.text_secondary_style()), layout[0]);
        }

        let search_focused = app.header.is_search_focused();
        if show_search {
            let search_area = layout[2];
            let border = if search_focused { theme.roles().focus } else { theme.roles().text_muted };
            let text = if app.header.search.is_empty() {
                Span::styled("Pesquisar...", theme.text_muted_style())
            } else {
                Span::styled(app.header.search.input().to_string(), theme.text_primary_style())
            };
            let line = Line::from(vec![Span::styled(format!("{} ", icons::SEARCH), ratatui::style::Style::default().fg(border)), text]);
            frame.render_widget(Paragraph::new(line).style(th::input_style(theme, search_focused)), search_area);
            if search_focused {
                let column = 2 + app.header.search.cursor_column();
                let x = (search_area.x + column).min(search_area.right().saturating_sub(1));
                frame.set_cursor_position(Position::new(x, search_area.y));
            }
        }

        let theme_glyph = match app.theme.mode() {
            ThemeMode::Light => icons::MOON,
            ThemeMode::Dark => icons::SUN,
        };
        frame.render_widget(Paragraph::new(theme_glyph).centered().style(theme.text_secondary_style()), layout[3]);

        let mut bell = vec![Span::styled(icons::BELL, theme.text_secondary_style())];
        if !app.ctx.data.fixtures().notifications.is_empty() {
            bell.push(Span::styled("•", theme.status_error()));
        }
        frame.render_widget(Paragraph::new(Line::from(bell)).centered(), layout[4]);

        let user_style = if app.header.user_menu_open {
            theme.accent_secondary_style()
        } else {
            theme.text_secondary_style()
        };
        frame.render_widget(Paragraph::new(user_label).style(user_style), layout[5]);

        let areas = &mut app.header.areas;
        areas.menu_button = mobile.then_some(layout[0]);
        areas.search = if show_search { layout[2] } else { Rect::default() };
        areas.theme_button = layout[3];
        areas.bell = layout[4];
        areas.user_button = layout[5];
    }
}
