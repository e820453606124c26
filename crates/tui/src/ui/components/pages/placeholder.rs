use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::Line,
    widgets::{Block, Paragraph, Wrap},
};

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::icons::glyph;
use crate::ui::theme::theme_helpers::{self as th, ButtonType, render_button};

pub fn placeholder_message(title: &str) -> String {
    format!("Esta seção está em desenvolvimento. Conteúdo e funcionalidades específicas para \"{title}\" serão adicionados aqui.")
}

/// Card shown for every page that has no dedicated content yet.
#[derive(Debug, Default)]
pub struct PlaceholderComponent;

impl Component for PlaceholderComponent {
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let theme = app.theme.theme();
        let page = app.ctx.pages.resolve(app.navigation.current_page());
        frame.render_widget(Block::default().style(th::background_style(theme)), rect);

        let outer = Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).split(rect);
        let card_area = Layout::horizontal([Constraint::Length(1), Constraint::Min(0), Constraint::Length(1)]).split(outer[1])[1];
        let title = format!("Página: {}", page.title);
        let card = th::card(theme, glyph(page.icon), &title);
        let inner = card.inner(card_area);
        frame.render_widget(card, card_area);

        let rows = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1), // glyph
            Constraint::Length(1),
            Constraint::Length(1), // title
            Constraint::Length(1),
            Constraint::Length(3), // message
            Constraint::Length(1),
            Constraint::Length(1), // button
            Constraint::Min(0),
        ])
        .split(inner);

        frame.render_widget(
            Paragraph::new(Line::styled(format!("{0} {0} {0}", glyph(page.icon)), theme.accent_secondary_style()).centered()),
            rows[1],
        );
        frame.render_widget(
            Paragraph::new(
                Line::styled(page.title.clone(), theme.text_primary_style().add_modifier(Modifier::BOLD)).centered(),
            ),
            rows[3],
        );
        frame.render_widget(
            Paragraph::new(placeholder_message(&page.title))
                .style(theme.text_secondary_style())
                .wrap(Wrap { trim: true })
                .centered(),
            rows[5],
        );
        let button = Layout::horizontal([Constraint::Min(0), Constraint::Length(14), Constraint::Min(0)]).split(rows[7])[1];
        render_button(frame, button, "Saber Mais", theme, false, ButtonType::Primary);
    }
}
