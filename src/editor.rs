//! ## Line editor
//!
//! A small grapheme-aware editing buffer for frontends that have no native
//! text field. It holds only real typed text - the ghost suggestion is
//! recomputed by [`SuggestionField`][crate::SuggestionField] at render time
//! and never enters the buffer until the user submits.
//!
//! ```
//! # use ghostfield::editor::*;
//! let mut edit = LineEdit::default();
//! edit.event(Action::InsertText("hello world"));
//! assert_eq!(edit.view(), "hello world");
//! ```

use unicode_segmentation::UnicodeSegmentation;

/// Editing buffer with a grapheme-aware cursor
///
/// Create with the [`Default`] impl, feed with [`event`][LineEdit::event],
/// read back with [`view`][LineEdit::view] and
/// [`cursor_pos`][LineEdit::cursor_pos].
#[derive(Debug, Default)]
pub struct LineEdit {
    /// Cursor position in bytes, always on a grapheme boundary
    byte_cursor: usize,

    /// Cursor position in graphemes, tracks `byte_cursor`
    grapheme_cursor: usize,

    /// The typed text
    buffer: String,
}

impl LineEdit {
    fn set_byte_cursor(&mut self, pos: usize) {
        self.byte_cursor = pos;
        self.grapheme_cursor = self.buffer[..pos].graphemes(true).count();
    }

    /// cursor position in graphemes
    pub fn cursor_pos(&self) -> usize {
        self.grapheme_cursor
    }

    /// current buffer contents
    pub fn view(&self) -> &str {
        &self.buffer
    }

    /// replace the buffer, cursor moves to the end
    pub fn set_text(&mut self, text: String) {
        self.buffer = text;
        self.set_byte_cursor(self.buffer.len());
    }

    /// clear the buffer
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.byte_cursor = 0;
        self.grapheme_cursor = 0;
    }

    /// consume new event
    pub fn event(&mut self, event: Action) {
        match event {
            Action::InsertChar(chr) => {
                if self.byte_cursor == self.buffer.len() {
                    self.buffer.push(chr);
                } else {
                    self.buffer.insert(self.byte_cursor, chr);
                }
                self.byte_cursor += chr.len_utf8();
                self.grapheme_cursor += 1;
            }
            Action::InsertText(string) => {
                if self.byte_cursor == self.buffer.len() {
                    self.buffer.push_str(string);
                } else {
                    self.buffer.insert_str(self.byte_cursor, string);
                }
                self.byte_cursor += string.len();
                self.grapheme_cursor += string.graphemes(true).count();
            }
            Action::Move(mov) => {
                let new_cursor = self.new_cursor(mov);
                self.set_byte_cursor(new_cursor);
            }
            Action::Kill(mov) => {
                let to = self.new_cursor(mov);
                let range = match to.cmp(&self.byte_cursor) {
                    std::cmp::Ordering::Less => to..self.byte_cursor,
                    std::cmp::Ordering::Equal => return,
                    std::cmp::Ordering::Greater => self.byte_cursor..to,
                };
                let start = range.start;
                self.buffer.replace_range(range, "");
                self.set_byte_cursor(start);
            }
        }
    }

    fn new_cursor(&self, mov: Move) -> usize {
        match mov {
            Move::BwChar => self
                .buffer
                .grapheme_indices(true)
                .take_while(|(ix, _)| *ix < self.byte_cursor)
                .last()
                .map_or(0, |(ix, _)| ix),
            Move::FwChar => self
                .buffer
                .grapheme_indices(true)
                .find(|(ix, _)| *ix > self.byte_cursor)
                .map_or(self.buffer.len(), |(ix, _)| ix),
            Move::BwWord => self
                .buffer
                .unicode_word_indices()
                .take_while(|(ix, _)| *ix < self.byte_cursor)
                .last()
                .map_or(0, |(ix, _)| ix),
            Move::FwWord => self
                .buffer
                .unicode_word_indices()
                .map(|(ix, word)| ix + word.len())
                .find(|ix| *ix > self.byte_cursor)
                .unwrap_or(self.buffer.len()),
            Move::StartOfLine => 0,
            Move::EndOfLine => self.buffer.len(),
        }
    }
}

/// Move cursor relative to current position
#[derive(Debug, Clone, Copy)]
pub enum Move {
    /// back by one unicode grapheme
    BwChar,
    /// back by one unicode word
    BwWord,
    /// forward by one unicode grapheme
    FwChar,
    /// forward to the end of the current or next unicode word
    FwWord,
    /// to the start of the line
    StartOfLine,
    /// to the end of the line
    EndOfLine,
}

#[derive(Debug, Clone)]
/// Next action to perform
pub enum Action<'a> {
    /// Insert character at cursor position
    InsertChar(char),
    /// Insert String at cursor position
    InsertText(&'a str),
    /// move cursor
    Move(Move),
    /// remove everything between old and new cursor positions
    Kill(Move),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_view() {
        let mut line = LineEdit::default();
        for c in "hello".chars() {
            line.event(Action::InsertChar(c));
        }
        assert_eq!(line.view(), "hello");
        assert_eq!(line.cursor_pos(), 5);
    }

    #[test]
    fn unicode_insert_delete() {
        let mut line = LineEdit::default();
        for c in "превед".chars() {
            line.event(Action::InsertChar(c));
            line.event(Action::Move(Move::BwChar));
        }
        assert_eq!(line.view(), "деверп");

        line.event(Action::Move(Move::EndOfLine));
        line.event(Action::Move(Move::BwChar));
        line.event(Action::Kill(Move::BwChar));
        assert_eq!(line.view(), "девеп");
    }

    #[test]
    fn kill_to_line_edges() {
        let mut line = LineEdit::default();
        line.event(Action::InsertText("one two three"));
        line.event(Action::Move(Move::BwWord));
        line.event(Action::Kill(Move::EndOfLine));
        assert_eq!(line.view(), "one two ");
        line.event(Action::Kill(Move::StartOfLine));
        assert_eq!(line.view(), "");
        assert_eq!(line.cursor_pos(), 0);
    }

    #[test]
    fn kill_at_boundary_is_noop() {
        let mut line = LineEdit::default();
        line.event(Action::InsertText("ab"));
        line.event(Action::Kill(Move::FwChar));
        assert_eq!(line.view(), "ab");
        line.event(Action::Move(Move::StartOfLine));
        line.event(Action::Kill(Move::BwChar));
        assert_eq!(line.view(), "ab");
    }

    #[test]
    fn insert_mid_buffer() {
        let mut line = LineEdit::default();
        line.event(Action::InsertText("hd"));
        line.event(Action::Move(Move::BwChar));
        line.event(Action::InsertText("ello worl"));
        assert_eq!(line.view(), "hello world");
        assert_eq!(line.cursor_pos(), 10);
    }

    #[test]
    fn set_text_parks_cursor_at_end() {
        let mut line = LineEdit::default();
        line.event(Action::InsertText("sn"));
        line.set_text("snake".to_string());
        assert_eq!(line.view(), "snake");
        assert_eq!(line.cursor_pos(), 5);

        line.clear();
        assert_eq!(line.view(), "");
        assert_eq!(line.cursor_pos(), 0);
    }
}
