//! Shell layout: sidebar column, header, ticker and the content region.
//!
//! On desktop the content is offset by the *pinned* sidebar width. A sidebar
//! expanded by hover is drawn on top of the content instead of pushing it.
//! On mobile the sidebar leaves the flow and only appears as a drawer above
//! a dismissible overlay.
use ratatui::prelude::*;
use safra_navigation::NavigationState;

use crate::ui::components::sidebar::{COLLAPSED_WIDTH, EXPANDED_WIDTH};

pub const HEADER_HEIGHT: u16 = 3;
pub const TICKER_HEIGHT: u16 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShellAreas {
    /// Where the sidebar is drawn; `None` on mobile with the drawer closed
    pub sidebar: Option<Rect>,
    pub header: Rect,
    pub ticker: Rect,
    pub content: Rect,
    /// Clickable backdrop behind the open mobile drawer
    pub overlay: Option<Rect>,
}

pub(crate) struct ShellLayout;

impl ShellLayout {
    /// Width of the sidebar column that content is laid out against.
    pub fn flow_width(nav: &NavigationState) -> u16 {
        if nav.viewport().is_mobile() {
            0
        } else if nav.pinned_expanded() {
            EXPANDED_WIDTH
        } else {
            COLLAPSED_WIDTH
        }
    }

    /// Width the sidebar is drawn with.
    pub fn sidebar_width(nav: &NavigationState) -> u16 {
        if nav.effective_expanded() { EXPANDED_WIDTH } else { COLLAPSED_WIDTH }
    }

    pub fn compute(size: Rect, nav: &NavigationState) -> ShellAreas {
        let flow = Self::flow_width(nav).min(size.width);
        let [_, main] = Layout::horizontal([Constraint::Length(flow), Constraint::Min(0)]).areas(size);
        let [header, ticker, content] = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(TICKER_HEIGHT),
            Constraint::Min(0),
        ])
        .areas(main);

        let mut areas = ShellAreas {
            sidebar: None,
            header,
            ticker,
            content,
            overlay: None,
        };

        let width = Self::sidebar_width(nav).min(size.width);
        if nav.viewport().is_desktop() {
            areas.sidebar = Some(Rect { width, ..size });
        } else if nav.mobile_drawer_open() {
            let drawer = Rect { width, ..size };
            areas.sidebar = Some(drawer);
            areas.overlay = Some(Rect {
                x: size.x + width,
                width: size.width - width,
                ..size
            });
        }
        areas
    }
}
