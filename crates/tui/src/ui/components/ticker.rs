//! Scrolling price ticker below the header.
//!
//! One cycle is every quote laid out once; the visible window reads the
//! cycle twice in a row so the strip wraps without a gap. Each tick moves
//! the window one column to the left unless the pointer is over the strip.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use safra_types::{Effect, Msg, TickerQuote};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::theme::Theme;

const SEPARATOR: &str = "   •   ";

#[derive(Debug, Clone, Default)]
pub struct TickerState {
    /// Columns scrolled into the current cycle
    pub offset: usize,
    /// Pointer is over the strip
    pub paused: bool,
    pub last_area: Rect,
}

impl TickerState {
    /// Moves one column unless paused. `cycle_width` is the width of one
    /// pass over all quotes.
    pub fn advance(&mut self, cycle_width: usize) {
        if self.paused || cycle_width == 0 {
            return;
        }
        self.offset = (self.offset + 1) % cycle_width;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Styled spans for one pass over `quotes`.
pub fn cycle_spans(quotes: &[TickerQuote], theme: &dyn Theme) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(quotes.len() * 5);
    for quote in quotes {
        spans.push(Span::styled(
            format!("{}: ", quote.name),
            theme.text_secondary_style().add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(quote.price.clone(), theme.text_primary_style().add_modifier(Modifier::BOLD)));
        if let Some(unit) = &quote.unit {
            spans.push(Span::styled(format!(" {unit}"), theme.text_muted_style()));
        }
        spans.push(Span::styled(
            format!("  {} {}", quote.trend.symbol(), quote.change),
            theme.trend_style(quote.trend),
        ));
        spans.push(Span::styled(SEPARATOR, theme.text_muted_style()));
    }
    spans
}

pub fn cycle_width(spans: &[Span]) -> usize {
    spans.iter().map(|span| span.content.width()).sum()
}

/// `width` columns of the looping strip starting `offset` columns into it.
pub fn window(spans: &[Span<'static>], offset: usize, width: usize) -> Line<'static> {
    let total = cycle_width(spans);
    if total == 0 || width == 0 {
        return Line::default();
    }
    let mut skip = offset % total;
    let mut remaining = width;
    let mut out: Vec<Span<'static>> = Vec::new();
    // the cycle is walked as many times as needed to fill wide terminals
    for span in spans.iter().cycle() {
        if remaining == 0 {
            break;
        }
        let mut text = String::new();
        for c in span.content.chars() {
            let w = c.width().unwrap_or(0);
            if skip > 0 {
                skip = skip.saturating_sub(w);
                continue;
            }
            if w > remaining {
                remaining = 0;
                break;
            }
            text.push(c);
            remaining -= w;
            if remaining == 0 {
                break;
            }
        }
        if !text.is_empty() {
            out.push(Span::styled(text, span.style));
        }
    }
    Line::from(out)
}

#[derive(Debug, Default)]
pub struct TickerComponent;

impl Component for TickerComponent {
    fn handle_message(&mut self, app: &mut App, msg: &Msg) -> Vec<Effect> {
        if *msg == Msg::Tick {
            let spans = cycle_spans(&app.ctx.data.fixtures().ticker, app.theme.theme());
            app.ticker.advance(cycle_width(&spans));
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = app.theme.theme();
        let spans = cycle_spans(&app.ctx.data.fixtures().ticker, theme);
        let line = window(&spans, app.ticker.offset, usize::from(area.width));
        let background = Style::default().bg(theme.roles().surface_muted);
        frame.render_widget(Paragraph::new(line).style(background), area);
        app.ticker.last_area = area;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans() -> Vec<Span<'static>> {
        vec![Span::raw("ab"), Span::raw("cd")]
    }

    fn text(line: &Line) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn window_wraps_around_the_cycle() {
        assert_eq!(text(&window(&spans(), 0, 4)), "abcd");
        assert_eq!(text(&window(&spans(), 3, 4)), "dabc");
        assert_eq!(text(&window(&spans(), 5, 2)), "bc");
    }

    #[test]
    fn window_repeats_for_wide_areas() {
        assert_eq!(text(&window(&spans(), 1, 9)), "bcdabcdab");
    }

    #[test]
    fn paused_ticker_does_not_move() {
        let mut state = TickerState::default();
        state.advance(10);
        assert_eq!(state.offset, 1);
        state.paused = true;
        state.advance(10);
        assert_eq!(state.offset, 1);
        state.paused = false;
        state.offset = 9;
        state.advance(10);
        assert_eq!(state.offset, 0);
    }
}
