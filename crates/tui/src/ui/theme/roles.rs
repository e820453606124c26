use std::fmt::Debug;

use ratatui::style::{Color, Modifier, Style};
use safra_types::Trend;

/// Semantic color roles used throughout the UI.
#[derive(Debug, Clone)]
pub struct ThemeRoles {
    pub background: Color,
    pub surface: Color,
    pub surface_muted: Color,
    pub border: Color,
    pub divider: Color,

    pub text: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    /// Brand green: headings, KPI values, primary buttons.
    pub accent_primary: Color,
    /// Brand yellow: card icons, links, focus rings.
    pub accent_secondary: Color,
    pub accent_subtle: Color,
    pub accent_info: Color,

    pub success: Color,
    pub error: Color,
    pub neutral: Color,

    pub selection_bg: Color,
    pub selection_fg: Color,
    pub focus: Color,

    /// Backdrop drawn behind the mobile drawer and popovers.
    pub modal_bg: Color,

    pub sidebar_bg: Color,
    pub sidebar_fg: Color,
    pub sidebar_active_bg: Color,
    pub sidebar_parent_bg: Color,
}

/// Theme trait exposes semantic roles and common style builders.
pub trait Theme: Send + Sync + Debug {
    fn roles(&self) -> &ThemeRoles;

    // Text styles
    fn text_primary_style(&self) -> Style {
        Style::default().fg(self.roles().text)
    }
    fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.roles().text_secondary)
    }
    fn text_muted_style(&self) -> Style {
        Style::default().fg(self.roles().text_muted)
    }

    // Borders and focus
    fn border_style(&self, focused: bool) -> Style {
        let color = if focused { self.roles().focus } else { self.roles().border };
        Style::default().fg(color)
    }

    fn selection_style(&self) -> Style {
        Style::default().fg(self.roles().selection_fg).bg(self.roles().selection_bg)
    }

    fn modal_background_style(&self) -> Style {
        Style::default().bg(self.roles().modal_bg)
    }

    fn status_success(&self) -> Style {
        Style::default().fg(self.roles().success)
    }
    fn status_error(&self) -> Style {
        Style::default().fg(self.roles().error)
    }

    /// Colour for a quote or KPI delta: green up, red down, grey stable.
    fn trend_style(&self, trend: Trend) -> Style {
        let color = match trend {
            Trend::Up => self.roles().success,
            Trend::Down => self.roles().error,
            Trend::Stable => self.roles().neutral,
        };
        Style::default().fg(color)
    }

    // Accents
    fn accent_primary_style(&self) -> Style {
        Style::default().fg(self.roles().accent_primary)
    }
    fn accent_emphasis_style(&self) -> Style {
        Style::default().fg(self.roles().accent_primary).add_modifier(Modifier::BOLD)
    }
    fn accent_secondary_style(&self) -> Style {
        Style::default().fg(self.roles().accent_secondary)
    }

    fn sidebar_style(&self) -> Style {
        Style::default().bg(self.roles().sidebar_bg).fg(self.roles().sidebar_fg)
    }
}
