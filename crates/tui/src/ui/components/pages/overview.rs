//! Overview dashboard: KPI cards, sales split, profit trend, quotes and
//! quick actions. Every number comes straight from the fixtures.

use chrono::{Local, NaiveDate};
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Cell, Paragraph, Row, Table},
};
use safra_types::{CommodityQuote, IconHandle, KpiCard, ProfitPoint, QuickAction, SalesSlice};
use safra_util::text::{format_brl, group_thousands, short_date, truncate_to_width};

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::icons::glyph;
use crate::ui::theme::{
    Theme,
    brand::SERIES_COLORS,
    theme_helpers::{self as th, ButtonType, render_button},
};

const KPI_HEIGHT: u16 = 5;
/// Below this width the KPI cards wrap into two rows.
const KPI_WRAP_WIDTH: u16 = 96;
const LEGEND_BAR_WIDTH: usize = 12;

pub fn last_update_label(date: NaiveDate) -> String {
    format!("Última atualização: {}", short_date(date))
}

#[derive(Debug, Default)]
pub struct OverviewComponent;

impl Component for OverviewComponent {
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let theme = app.theme.theme();
        let fixtures = app.ctx.data.fixtures();
        frame.render_widget(Block::default().style(th::background_style(theme)), rect);

        let kpi_rows = if rect.width < KPI_WRAP_WIDTH && fixtures.kpis.len() > 2 { 2 } else { 1 };
        let sections = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(KPI_HEIGHT * kpi_rows),
            Constraint::Min(8),
            Constraint::Min(8),
        ])
        .horizontal_margin(1)
        .split(rect);

        render_title(frame, sections[0], theme);
        render_kpis(frame, sections[1], theme, &fixtures.kpis, kpi_rows);

        let charts = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .spacing(1)
            .split(sections[2]);
        render_sales(frame, charts[0], theme, &fixtures.sales_by_product);
        render_profit(frame, charts[1], theme, &fixtures.profit_trend);

        let bottom = Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
            .spacing(1)
            .split(sections[3]);
        render_quotes(frame, bottom[0], theme, &fixtures.commodity_quotes);
        render_quick_actions(frame, bottom[1], theme, &fixtures.quick_actions);
    }
}

fn render_title(frame: &mut Frame, area: Rect, theme: &dyn Theme) {
    let [text, buttons] = Layout::horizontal([Constraint::Min(0), Constraint::Length(24)]).areas(area);
    let lines = vec![
        Line::styled("Visão Geral do Desempenho", theme.text_primary_style().add_modifier(Modifier::BOLD)),
        Line::styled(last_update_label(Local::now().date_naive()), theme.text_muted_style()),
    ];
    frame.render_widget(Paragraph::new(lines), text);

    let first_row = Rect { height: 1, ..buttons };
    let [date, export] = Layout::horizontal([Constraint::Length(10), Constraint::Length(12)])
        .flex(Flex::End)
        .spacing(1)
        .areas(first_row);
    render_button(frame, date, "Data", theme, false, ButtonType::Secondary);
    render_button(frame, export, "Exportar", theme, false, ButtonType::Primary);
}

fn render_kpis(frame: &mut Frame, area: Rect, theme: &dyn Theme, kpis: &[KpiCard], rows: u16) {
    if kpis.is_empty() {
        return;
    }
    let per_row = kpis.len().div_ceil(rows as usize);
    let row_areas = Layout::vertical(vec![Constraint::Length(KPI_HEIGHT); rows as usize]).split(area);
    for (row_area, chunk) in row_areas.iter().zip(kpis.chunks(per_row)) {
        let cells = Layout::horizontal(vec![Constraint::Ratio(1, per_row as u32); per_row])
            .spacing(1)
            .split(*row_area);
        for (cell, kpi) in cells.iter().zip(chunk) {
            render_kpi(frame, *cell, theme, kpi);
        }
    }
}

fn render_kpi(frame: &mut Frame, area: Rect, theme: &dyn Theme, kpi: &KpiCard) {
    let block = th::block(theme, None, false);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    let width = inner.width as usize;
    let lines = vec![
        Line::from(vec![
            Span::styled(format!("{} ", glyph(kpi.icon)), theme.accent_secondary_style()),
            Span::styled(truncate_to_width(&kpi.title, width.saturating_sub(2)), theme.text_secondary_style()),
        ]),
        Line::styled(kpi.value.clone(), theme.text_primary_style().add_modifier(Modifier::BOLD)),
        Line::styled(format!("{} {}", kpi.trend.symbol(), kpi.delta), theme.trend_style(kpi.trend)),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

/// Share of each product in the total, as a legend with proportional bars.
pub(crate) fn sales_lines(slices: &[SalesSlice], theme: &dyn Theme) -> Vec<Line<'static>> {
    let total: u64 = slices.iter().map(|slice| slice.value).sum();
    let name_width = slices.iter().map(|slice| slice.name.chars().count()).max().unwrap_or(0);
    slices
        .iter()
        .enumerate()
        .map(|(index, slice)| {
            let color = SERIES_COLORS[index % SERIES_COLORS.len()];
            let share = if total == 0 { 0.0 } else { slice.value as f64 / total as f64 };
            let filled = (share * LEGEND_BAR_WIDTH as f64).round() as usize;
            Line::from(vec![
                Span::styled("■ ", Style::new().fg(color)),
                Span::styled(format!("{:<name_width$}  ", slice.name), theme.text_primary_style()),
                Span::styled("█".repeat(filled), Style::new().fg(color)),
                Span::styled("░".repeat(LEGEND_BAR_WIDTH - filled), theme.text_muted_style()),
                Span::styled(format!(" {:>3.0}%  ", share * 100.0), theme.text_secondary_style()),
                Span::styled(format_brl(slice.value), theme.text_primary_style().add_modifier(Modifier::BOLD)),
            ])
        })
        .collect()
}

fn render_sales(frame: &mut Frame, area: Rect, theme: &dyn Theme, slices: &[SalesSlice]) {
    let card = th::card(theme, glyph(IconHandle::PieChart), "Vendas por Produto");
    let inner = card.inner(area);
    frame.render_widget(card, area);
    frame.render_widget(Paragraph::new(sales_lines(slices, theme)), inner);
}

/// Abbreviated bar value, "95k" for 95 000.
fn thousands_label(value: u64) -> String {
    format!("{}k", group_thousands(value / 1000))
}

fn render_profit(frame: &mut Frame, area: Rect, theme: &dyn Theme, points: &[ProfitPoint]) {
    let card = th::card(theme, glyph(IconHandle::BarChart), "Tendência de Lucratividade");
    let inner = card.inner(area);
    frame.render_widget(card, area);
    if points.is_empty() {
        return;
    }
    let bars: Vec<Bar> = points
        .iter()
        .map(|point| {
            Bar::default()
                .value(point.profit)
                .text_value(thousands_label(point.profit))
                .label(Line::from(point.month.clone()))
        })
        .collect();
    let slots = points.len() as u16;
    let bar_width = (inner.width.saturating_sub(slots) / slots).clamp(1, 8);
    let chart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1)
        .bar_style(theme.accent_primary_style())
        .value_style(theme.accent_primary_style().add_modifier(Modifier::REVERSED | Modifier::BOLD))
        .label_style(theme.text_secondary_style());
    frame.render_widget(chart, inner);
}

fn render_quotes(frame: &mut Frame, area: Rect, theme: &dyn Theme, quotes: &[CommodityQuote]) {
    let card = th::card(theme, glyph(IconHandle::DollarSign), "Cotações Atuais");
    let header = Row::new(["Produto", "Preço", "Variação"])
        .style(theme.text_secondary_style().add_modifier(Modifier::BOLD))
        .bottom_margin(1);
    let rows = quotes.iter().map(|quote| {
        Row::new(vec![
            Cell::from(quote.name.clone()).style(theme.text_primary_style()),
            Cell::from(quote.price.clone()).style(theme.text_primary_style().add_modifier(Modifier::BOLD)),
            Cell::from(format!("{} {}", quote.change, quote.trend.symbol())).style(theme.trend_style(quote.trend)),
        ])
    });
    let table = Table::new(rows, [Constraint::Percentage(50), Constraint::Percentage(25), Constraint::Percentage(25)])
        .header(header)
        .block(card);
    frame.render_widget(table, area);
}

fn render_quick_actions(frame: &mut Frame, area: Rect, theme: &dyn Theme, actions: &[QuickAction]) {
    let card = th::card(theme, glyph(IconHandle::Briefcase), "Ações Rápidas");
    let inner = card.inner(area);
    frame.render_widget(card, area);
    if actions.is_empty() {
        return;
    }
    let grid_rows = actions.len().div_ceil(2);
    let rows = Layout::vertical(vec![Constraint::Length(2); grid_rows]).split(inner);
    for (row, pair) in rows.iter().zip(actions.chunks(2)) {
        let [left, right] = Layout::horizontal([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
            .spacing(1)
            .areas(Rect { height: 1, ..*row });
        for (slot, action) in [left, right].into_iter().zip(pair) {
            let label = format!("{} {}", glyph(action.icon), action.label);
            render_button(frame, slot, &label, theme, false, ButtonType::Secondary);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::brand::SafraLightTheme;

    #[test]
    fn last_update_uses_brazilian_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).expect("date");
        assert_eq!(last_update_label(date), "Última atualização: 07/03/2024");
    }

    #[test]
    fn sales_legend_shows_share_and_value() {
        let theme = SafraLightTheme::new();
        let slices = vec![
            SalesSlice { name: "Soja".into(), value: 300_000 },
            SalesSlice { name: "Boi".into(), value: 100_000 },
        ];
        let lines = sales_lines(&slices, &theme);
        let text: Vec<String> = lines
            .iter()
            .map(|line| line.spans.iter().map(|span| span.content.as_ref()).collect())
            .collect();
        assert!(text[0].contains("75%"));
        assert!(text[0].ends_with("R$ 300.000"));
        assert!(text[1].contains(" 25%"));
    }

    #[test]
    fn bar_labels_abbreviate_thousands() {
        assert_eq!(thousands_label(95_000), "95k");
        assert_eq!(thousands_label(1_250_000), "1.250k");
    }
}
