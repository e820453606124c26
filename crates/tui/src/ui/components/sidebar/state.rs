use rat_focus::FocusFlag;
use ratatui::layout::Rect;
use safra_navigation::NavigationState;
use safra_types::NavigationCatalog;

use crate::ui::utils::find_target_index_by_mouse_position;

/// Sidebar width when pinned, hovered, or shown as the mobile drawer.
pub const EXPANDED_WIDTH: u16 = 28;
/// Icon-only rail width.
pub const COLLAPSED_WIDTH: u16 = 7;

/// Logo row plus padding above the first item.
const HEADER_HEIGHT: u16 = 3;

/// What a sidebar row does when activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarTarget {
    /// Pin button (desktop)
    TogglePin,
    /// Close button (mobile drawer)
    CloseDrawer,
    /// Top-level catalog item by index
    Item(usize),
    /// Child `child` of the group at catalog index `parent`
    SubItem { parent: usize, child: usize },
    Logout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarRow {
    pub area: Rect,
    pub target: SidebarTarget,
}

/// Presentation state of the sidebar: keyboard cursor and the geometry of
/// the last frame, used for hover and click hit-testing.
#[derive(Debug, Clone)]
pub struct SidebarState {
    pub container_focus: FocusFlag,
    pub cursor: usize,
    pub last_area: Rect,
    pub rows: Vec<SidebarRow>,
}

impl Default for SidebarState {
    fn default() -> Self {
        Self {
            container_focus: FocusFlag::named("sidebar"),
            cursor: 0,
            last_area: Rect::default(),
            rows: Vec::new(),
        }
    }
}

impl SidebarState {
    pub fn is_focused(&self) -> bool {
        self.container_focus.get()
    }

    /// Recomputes the row geometry for `area`.
    pub fn layout(&mut self, area: Rect, catalog: &NavigationCatalog, nav: &NavigationState) {
        self.last_area = area;
        self.rows = layout_rows(area, catalog, nav);
        if self.cursor >= self.rows.len() {
            self.cursor = self.rows.len().saturating_sub(1);
        }
    }

    pub fn move_cursor(&mut self, forward: bool) {
        let len = self.rows.len();
        if len == 0 {
            return;
        }
        self.cursor = if forward { (self.cursor + 1) % len } else { (self.cursor + len - 1) % len };
    }

    pub fn cursor_target(&self) -> Option<SidebarTarget> {
        self.rows.get(self.cursor).map(|row| row.target)
    }

    /// Moves the keyboard cursor onto the row bound to `target`, if shown.
    pub fn focus_target(&mut self, target: SidebarTarget) {
        if let Some(index) = self.rows.iter().position(|row| row.target == target) {
            self.cursor = index;
        }
    }

    /// Row under the pointer; also moves the keyboard cursor there.
    pub fn target_at(&mut self, x: u16, y: u16) -> Option<SidebarTarget> {
        let areas: Vec<Rect> = self.rows.iter().map(|row| row.area).collect();
        let index = find_target_index_by_mouse_position(&self.last_area, &areas, x, y)?;
        self.cursor = index;
        Some(self.rows[index].target)
    }

    pub fn reset(&mut self) {
        self.cursor = 0;
        self.rows.clear();
        self.last_area = Rect::default();
        self.container_focus.set(false);
    }
}

/// Lays out the sidebar rows top to bottom: the pin/close button, one row
/// per catalog item, the children of the open group when expanded, and the
/// logout row pinned to the bottom. Rows that do not fit are dropped.
pub fn layout_rows(area: Rect, catalog: &NavigationCatalog, nav: &NavigationState) -> Vec<SidebarRow> {
    let mut rows = Vec::new();
    if area.width == 0 || area.height < 2 {
        return rows;
    }
    let expanded = nav.effective_expanded();

    let button_width = 3.min(area.width);
    let button_x = if expanded {
        area.right().saturating_sub(button_width + 1).max(area.x)
    } else {
        area.x + (area.width - button_width) / 2
    };
    let button = if nav.viewport().is_mobile() {
        SidebarTarget::CloseDrawer
    } else {
        SidebarTarget::TogglePin
    };
    rows.push(SidebarRow {
        area: Rect::new(button_x, area.y + 1, button_width, 1),
        target: button,
    });

    let logout_y = area.bottom().saturating_sub(2);
    // one separator row sits between the last item and logout
    let items_end = logout_y.saturating_sub(1);
    let full_row = |y: u16, target: SidebarTarget| SidebarRow {
        area: Rect::new(area.x, y, area.width, 1),
        target,
    };

    let mut y = area.y + HEADER_HEIGHT;
    'items: for (parent, item) in catalog.items().iter().enumerate() {
        if y >= items_end {
            break;
        }
        rows.push(full_row(y, SidebarTarget::Item(parent)));
        y += 1;
        if expanded && nav.is_group_open(item) {
            for child in 0..item.children().len() {
                if y >= items_end {
                    break 'items;
                }
                rows.push(full_row(y, SidebarTarget::SubItem { parent, child }));
                y += 1;
            }
        }
    }

    if logout_y > area.y + HEADER_HEIGHT {
        rows.push(full_row(logout_y, SidebarTarget::Logout));
    }
    rows
}
