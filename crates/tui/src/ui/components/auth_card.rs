//! Frame shared by the login and registration screens.

use chrono::{Datelike, Local};
use ratatui::{
    Frame,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap},
};

use crate::ui::theme::{Theme, theme_helpers as th};
use crate::ui::utils::centered_rect;

pub const CARD_WIDTH: u16 = 56;

/// Fills `area` with the page background and draws a centered card with the
/// logo, `title` and `subtitle`. Returns the area below the subtitle.
pub fn render_card(frame: &mut Frame, area: Rect, theme: &dyn Theme, height: u16, title: &str, subtitle: &str) -> Rect {
    frame.render_widget(Block::default().style(th::background_style(theme)), area);
    let card = centered_rect(CARD_WIDTH, height, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border_style(false))
        .padding(Padding::horizontal(2))
        .style(th::panel_style(theme));
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let heading = vec![
        Line::from(vec![
            Span::styled("◆ ", theme.accent_secondary_style()),
            Span::styled("SAFRA", theme.accent_emphasis_style()),
        ])
        .centered(),
        Line::default(),
        Line::styled(title.to_string(), theme.accent_emphasis_style().add_modifier(Modifier::UNDERLINED)).centered(),
        Line::styled(subtitle.to_string(), theme.text_secondary_style()).centered(),
    ];
    let heading_height = (heading.len() as u16).min(inner.height);
    frame.render_widget(Paragraph::new(heading), Rect { height: heading_height, ..inner });

    Rect {
        y: inner.y + heading_height,
        height: inner.height - heading_height,
        ..inner
    }
}

/// Error (red) or confirmation (green) message; nothing when `message` is None.
pub fn render_banner(frame: &mut Frame, area: Rect, theme: &dyn Theme, message: Option<&str>, success: bool) {
    if let Some(message) = message {
        let paragraph = Paragraph::new(message.to_string())
            .style(th::banner_style(theme, success))
            .wrap(Wrap { trim: true })
            .centered();
        frame.render_widget(paragraph, area);
    }
}

pub fn render_footer(frame: &mut Frame, area: Rect, theme: &dyn Theme) {
    let year = Local::now().year();
    let text = format!("© {year} Locks Agropecuária. Todos os direitos reservados.");
    frame.render_widget(Paragraph::new(text).style(theme.text_muted_style()).centered(), area);
}
