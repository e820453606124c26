//! UTF-8 safe single-line text input used by the forms and the search box.

use ratatui::{
    Frame,
    layout::{Position, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};
use unicode_width::UnicodeWidthStr;

use crate::ui::theme::{Theme, theme_helpers as th};

const MASK: char = '•';

#[derive(Clone, Debug, Default)]
pub struct TextInputState {
    /// The underlying text buffer
    input: String,
    /// Cursor byte index into `input` (always on a UTF-8 boundary)
    cursor: usize,
    /// Render every character as a bullet
    masked: bool,
}

impl TextInputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn masked() -> Self {
        Self {
            masked: true,
            ..Self::default()
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }
    pub fn cursor(&self) -> usize {
        self.cursor
    }
    pub fn is_empty(&self) -> bool {
        self.input.is_empty()
    }

    pub fn set_input<S: Into<String>>(&mut self, s: S) {
        self.input = s.into();
        self.cursor = self.input.len();
    }

    pub fn clear(&mut self) {
        self.input.clear();
        self.cursor = 0;
    }

    /// Move cursor one Unicode scalar to the left.
    pub fn move_left(&mut self) {
        if let Some(prev) = self.input[..self.cursor].chars().next_back() {
            self.cursor -= prev.len_utf8();
        }
    }

    /// Move cursor one Unicode scalar to the right.
    pub fn move_right(&mut self) {
        if let Some(next) = self.input[self.cursor..].chars().next() {
            self.cursor += next.len_utf8();
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.input.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Backspace the char immediately before the cursor.
    pub fn backspace(&mut self) {
        if let Some(prev) = self.input[..self.cursor].chars().next_back() {
            let start = self.cursor - prev.len_utf8();
            self.input.drain(start..self.cursor);
            self.cursor = start;
        }
    }

    /// Text as shown on screen (bullets when masked).
    pub fn display_text(&self) -> String {
        if self.masked {
            self.input.chars().map(|_| MASK).collect()
        } else {
            self.input.clone()
        }
    }

    /// Display column of the cursor relative to the start of the text.
    pub fn cursor_column(&self) -> u16 {
        let before = &self.input[..self.cursor];
        let width = if self.masked { before.chars().count() } else { before.width() };
        u16::try_from(width).unwrap_or(u16::MAX)
    }

    /// Handles an editing key. Returns true when the text changed.
    pub fn handle_key(&mut self, code: crossterm::event::KeyCode) -> bool {
        use crossterm::event::KeyCode;
        match code {
            KeyCode::Char(c) => {
                self.insert_char(c);
                true
            }
            KeyCode::Backspace => {
                let before = self.input.len();
                self.backspace();
                before != self.input.len()
            }
            KeyCode::Left => {
                self.move_left();
                false
            }
            KeyCode::Right => {
                self.move_right();
                false
            }
            KeyCode::Home => {
                self.cursor = 0;
                false
            }
            KeyCode::End => {
                self.cursor = self.input.len();
                false
            }
            _ => false,
        }
    }
}

/// Draws a bordered field with `label` as the block title and `placeholder`
/// in muted text while empty. Places the terminal cursor when focused.
pub fn render_text_field(
    frame: &mut Frame,
    area: Rect,
    theme: &dyn Theme,
    label: &str,
    placeholder: &str,
    state: &TextInputState,
    focused: bool,
) {
    let block = th::block(theme, Some(label), focused);
    let inner = block.inner(area);
    let line = if state.is_empty() {
        Line::from(Span::styled(placeholder.to_string(), theme.text_muted_style()))
    } else {
        Line::from(Span::styled(state.display_text(), th::input_style(theme, focused)))
    };
    frame.render_widget(Paragraph::new(line).block(block), area);
    if focused && inner.width > 0 {
        let column = state.cursor_column().min(inner.width.saturating_sub(1));
        frame.set_cursor_position(Position::new(inner.x + column, inner.y));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;

    #[test]
    fn utf8_move_insert_backspace() {
        let mut st = TextInputState::new();
        st.set_input("Algodão");
        st.move_left();
        st.backspace();
        assert_eq!(st.input(), "Algodo");
        st.insert_char('ã');
        assert_eq!(st.input(), "Algodão");
        assert_eq!(st.cursor_column(), 6);
    }

    #[test]
    fn masked_input_hides_characters() {
        let mut st = TextInputState::masked();
        for c in "senha".chars() {
            assert!(st.handle_key(KeyCode::Char(c)));
        }
        assert_eq!(st.input(), "senha");
        assert_eq!(st.display_text(), "•••••");
        assert!(!st.handle_key(KeyCode::Left));
        assert!(st.handle_key(KeyCode::Backspace));
        assert_eq!(st.input(), "sena");
    }

    #[test]
    fn backspace_at_start_is_a_noop() {
        let mut st = TextInputState::new();
        st.set_input("ab");
        st.handle_key(KeyCode::Home);
        assert!(!st.handle_key(KeyCode::Backspace));
        assert_eq!(st.input(), "ab");
    }
}
