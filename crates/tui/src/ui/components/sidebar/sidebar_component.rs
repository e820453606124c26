use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use safra_navigation::Transition;
use safra_types::{Effect, IconHandle, NavigationItem};
use unicode_width::UnicodeWidthStr;

use super::state::{SidebarRow, SidebarTarget};
use crate::app::App;
use crate::ui::components::Component;
use crate::ui::icons::{self, glyph};
use crate::ui::theme::Theme;
use safra_util::text::truncate_to_width;

/// Collapsible navigation sidebar.
///
/// Renders the navigation catalog against the session's `NavigationState`
/// and turns clicks and key presses into navigation transitions. Group
/// selection on the collapsed rail returns `Effect::ScheduleNavigationCommit`
/// so the runtime can finish the transition on the next turn.
#[derive(Debug, Default)]
pub struct SidebarComponent;

impl SidebarComponent {
    /// Applies the transition bound to `target`.
    pub fn activate(app: &mut App, target: SidebarTarget) -> Vec<Effect> {
        let data = Arc::clone(&app.ctx.data);
        let catalog = &data.fixtures().navigation;
        let transition = match target {
            SidebarTarget::TogglePin => app.navigation.toggle_desktop_pin(),
            SidebarTarget::CloseDrawer => app.navigation.toggle_mobile_drawer(),
            SidebarTarget::Item(index) => match catalog.items().get(index) {
                Some(item) => app.navigation.select_item(item),
                None => Transition::Ignored,
            },
            SidebarTarget::SubItem { parent, child } => {
                let page = catalog
                    .items()
                    .get(parent)
                    .and_then(|item| item.children().get(child))
                    .and_then(NavigationItem::target_page);
                match page {
                    Some(page) => app.navigation.select_sub_item(page),
                    None => Transition::Ignored,
                }
            }
            SidebarTarget::Logout => return vec![Effect::Logout],
        };
        match transition {
            Transition::Deferred => vec![Effect::ScheduleNavigationCommit],
            Transition::Committed | Transition::Ignored => Vec::new(),
        }
    }

    /// Opens (`open = true`) or closes the group under the cursor. Closing
    /// from a child row closes its parent and moves the cursor onto it.
    fn fold_group(app: &mut App, open: bool) -> Vec<Effect> {
        let index = match app.sidebar.cursor_target() {
            Some(SidebarTarget::Item(index)) => index,
            Some(SidebarTarget::SubItem { parent, .. }) if !open => parent,
            _ => return Vec::new(),
        };
        let data = Arc::clone(&app.ctx.data);
        let Some(item) = data.fixtures().navigation.items().get(index).filter(|item| item.is_group()) else {
            return Vec::new();
        };
        if app.navigation.is_group_open(item) == open {
            return Vec::new();
        }
        app.sidebar.focus_target(SidebarTarget::Item(index));
        Self::activate(app, SidebarTarget::Item(index))
    }

    fn row_line<'a>(app: &'a App, row: &SidebarRow, width: u16, cursor: bool) -> Line<'a> {
        let theme = app.theme.theme();
        let roles = theme.roles();
        let nav = &app.navigation;
        let expanded = nav.effective_expanded();
        let catalog = &app.ctx.data.fixtures().navigation;
        let base = theme.sidebar_style();

        let mut line = match row.target {
            SidebarTarget::TogglePin => Line::from(format!(" {} ", icons::MENU)),
            SidebarTarget::CloseDrawer => Line::from(format!(" {} ", icons::CLOSE)),
            SidebarTarget::Item(index) => {
                let Some(item) = catalog.items().get(index) else {
                    return Line::default();
                };
                let style = if nav.is_active_leaf(item) {
                    base.bg(roles.sidebar_active_bg).add_modifier(Modifier::BOLD)
                } else if expanded && nav.is_active_parent(item) {
                    base.bg(roles.sidebar_parent_bg)
                } else {
                    base
                };
                let chevron = match (item.is_group() && expanded, nav.is_group_open(item)) {
                    (false, _) => None,
                    (true, true) => Some(icons::CHEVRON_OPEN),
                    (true, false) => Some(icons::CHEVRON_CLOSED),
                };
                Self::entry_line(item.icon(), item.label(), chevron, width, expanded, 2).style(style)
            }
            SidebarTarget::SubItem { parent, child } => {
                let Some(item) = catalog.items().get(parent).and_then(|group| group.children().get(child)) else {
                    return Line::default();
                };
                let style = if nav.is_active_leaf(item) {
                    base.add_modifier(Modifier::BOLD).fg(roles.accent_subtle)
                } else {
                    base
                };
                Self::entry_line(item.icon(), item.label(), None, width, expanded, 5).style(style)
            }
            SidebarTarget::Logout => Self::entry_line(IconHandle::LogOut, "Sair", None, width, expanded, 2).style(base),
        };
        if cursor {
            line = line.patch_style(Style::default().add_modifier(Modifier::REVERSED));
        }
        line
    }

    /// `indent` spaces, glyph, label and an optional right-aligned chevron.
    /// Collapsed rows show the glyph alone, centered.
    fn entry_line(icon: IconHandle, label: &str, chevron: Option<&'static str>, width: u16, expanded: bool, indent: usize) -> Line<'static> {
        let width = usize::from(width);
        if !expanded {
            return Line::from(glyph(icon)).centered();
        }
        let prefix = format!("{}{}  ", " ".repeat(indent), glyph(icon));
        let reserved = prefix.width() + if chevron.is_some() { 3 } else { 1 };
        let label = truncate_to_width(label, width.saturating_sub(reserved));
        let mut spans = vec![Span::raw(prefix.clone()), Span::raw(label.clone())];
        if let Some(chevron) = chevron {
            let used = prefix.width() + label.width();
            let gap = width.saturating_sub(used + 2);
            spans.push(Span::raw(" ".repeat(gap)));
            spans.push(Span::raw(chevron));
        }
        Line::from(spans)
    }
}

impl Component for SidebarComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Down => {
                app.sidebar.move_cursor(true);
                Vec::new()
            }
            KeyCode::Up => {
                app.sidebar.move_cursor(false);
                Vec::new()
            }
            KeyCode::Enter | KeyCode::Char(' ') => match app.sidebar.cursor_target() {
                Some(target) => Self::activate(app, target),
                None => Vec::new(),
            },
            KeyCode::Right => Self::fold_group(app, true),
            KeyCode::Left => Self::fold_group(app, false),
            _ => Vec::new(),
        }
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        match app.sidebar.target_at(mouse.column, mouse.row) {
            Some(target) => Self::activate(app, target),
            None => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let data = Arc::clone(&app.ctx.data);
        app.sidebar.layout(area, &data.fixtures().navigation, &app.navigation);

        let theme = app.theme.theme();
        let expanded = app.navigation.effective_expanded();
        frame.render_widget(Clear, area);
        let block = Block::default()
            .borders(Borders::RIGHT)
            .border_style(Style::default().fg(theme.roles().sidebar_parent_bg))
            .style(theme.sidebar_style());
        let inner_width = block.inner(area).width;
        frame.render_widget(block, area);

        if expanded && area.width > 10 {
            let logo = Line::from(vec![
                Span::styled("◆ ", theme.accent_secondary_style()),
                Span::styled("SAFRA", Style::default().add_modifier(Modifier::BOLD)),
            ]);
            frame.render_widget(Paragraph::new(logo), Rect::new(area.x + 2, area.y + 1, 8.min(area.width - 2), 1));
        }

        if let Some(logout) = app.sidebar.rows.iter().find(|row| row.target == SidebarTarget::Logout)
            && logout.area.y > area.y
        {
            let separator = "─".repeat(usize::from(inner_width));
            let rule = Rect::new(area.x, logout.area.y - 1, inner_width, 1);
            frame.render_widget(Paragraph::new(separator).style(theme.sidebar_style()), rule);
        }

        let focused = app.sidebar.is_focused();
        for (index, row) in app.sidebar.rows.iter().enumerate() {
            let cursor = focused && index == app.sidebar.cursor;
            let mut row_area = row.area;
            if matches!(row.target, SidebarTarget::Item(_) | SidebarTarget::SubItem { .. } | SidebarTarget::Logout) {
                row_area.width = inner_width;
            }
            let line = Self::row_line(app, row, row_area.width, cursor);
            frame.render_widget(Paragraph::new(line), row_area);
        }
    }
}
