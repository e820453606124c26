use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph},
};

use super::roles::{Theme, ThemeRoles};

/// Build a standard Block with theme surfaces and borders.
pub fn block<'a, T: Theme + ?Sized>(theme: &T, title: Option<&'a str>, focused: bool) -> Block<'a> {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border_style(focused))
        .style(panel_style(theme));
    if let Some(t) = title {
        block = block.title(Span::styled(t, theme.text_primary_style().add_modifier(Modifier::BOLD)));
    }
    block
}

/// Dashboard card: rounded block whose title is prefixed by a yellow glyph.
pub fn card<'a, T: Theme + ?Sized>(theme: &T, glyph: &'a str, title: &'a str) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border_style(false))
        .style(panel_style(theme))
        .padding(Padding::horizontal(1))
        .title(Line::from(vec![
            Span::styled(format!(" {glyph} "), theme.accent_secondary_style()),
            Span::styled(format!("{title} "), theme.text_primary_style().add_modifier(Modifier::BOLD)),
        ]))
}

/// Style for panel-like containers (set background on widget using `.style`).
pub fn panel_style<T: Theme + ?Sized>(theme: &T) -> Style {
    let ThemeRoles { surface, text, .. } = *theme.roles();
    Style::default().bg(surface).fg(text)
}

/// Root background behind cards.
pub fn background_style<T: Theme + ?Sized>(theme: &T) -> Style {
    let ThemeRoles { background, text, .. } = *theme.roles();
    Style::default().bg(background).fg(text)
}

/// Style for input fields; caller sets the block border based on focus.
pub fn input_style<T: Theme + ?Sized>(theme: &T, focused: bool) -> Style {
    let ThemeRoles { surface, text, .. } = *theme.roles();
    let style = Style::default().bg(surface).fg(text);
    if focused { style.add_modifier(Modifier::BOLD) } else { style }
}

/// Primary button style (filled brand green).
pub fn button_primary_style<T: Theme + ?Sized>(theme: &T, focused: bool) -> Style {
    let ThemeRoles {
        accent_primary,
        accent_secondary,
        ..
    } = *theme.roles();
    let style = Style::default()
        .bg(accent_primary)
        .fg(ratatui::style::Color::White)
        .add_modifier(Modifier::BOLD);
    if focused { style.bg(accent_secondary) } else { style }
}

/// Secondary button style (muted fill, brand green text).
pub fn button_secondary_style<T: Theme + ?Sized>(theme: &T, selected: bool) -> Style {
    let ThemeRoles {
        accent_primary,
        surface_muted,
        selection_bg,
        ..
    } = *theme.roles();
    let style = Style::default().fg(accent_primary);
    if selected { style.bg(selection_bg) } else { style.bg(surface_muted) }
}

/// Underlined link text, yellow when focused.
pub fn link_style<T: Theme + ?Sized>(theme: &T, focused: bool) -> Style {
    let color = if focused {
        theme.roles().accent_secondary
    } else {
        theme.roles().accent_primary
    };
    Style::default().fg(color).add_modifier(Modifier::UNDERLINED)
}

/// Banner style for form errors and confirmations.
pub fn banner_style<T: Theme + ?Sized>(theme: &T, success: bool) -> Style {
    let base = if success { theme.status_success() } else { theme.status_error() };
    base.add_modifier(Modifier::BOLD)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonType {
    Primary,
    Secondary,
}

/// Renders a filled single-line button; the label is bracketed while focused.
pub fn render_button<T: Theme + ?Sized>(frame: &mut Frame, area: Rect, label: &str, theme: &T, focused: bool, kind: ButtonType) {
    let style = match kind {
        ButtonType::Primary => button_primary_style(theme, focused),
        ButtonType::Secondary => button_secondary_style(theme, focused),
    };
    let text = if focused { format!("▸ {label} ◂") } else { label.to_string() };
    frame.render_widget(Paragraph::new(text).centered().style(style), area);
}
