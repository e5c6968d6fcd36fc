//! Tui frontend
//!
//! This module contains a widget that renders a [`SuggestionField`] into a
//! tui frame with a crossterm event loop. The ghost suggestion is drawn as
//! a dimmed span right after the typed text - terminal cells can't stack,
//! so "behind the field" becomes "after the cursor" at the same position,
//! and the rendered line still reads `input + suggestion`.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};

use tui::{
    backend::Backend,
    layout::Rect,
    style::{Color, Style},
    text::{Span, Spans},
    widgets::Paragraph,
    Frame,
};

use crate::editor::{Action, LineEdit, Move};
use crate::field::SuggestionField;

/// Keystroke     | Action
/// ---------     | ------
/// Ctrl-A, Home  | Move cursor to the beginning of the line
/// Ctrl-E, End   | Move cursor to the end of the line
/// Ctrl-B, Left  | Move cursor one grapheme to the left
/// Ctrl-F, Right | Move cursor one grapheme to the right
/// Ctrl-H, Backspace | Delete the grapheme to the left of the cursor
/// Delete        | Delete the grapheme to the right of the cursor
/// Ctrl-K        | Delete from cursor to end of line
/// Ctrl-W        | Delete word leading up to cursor
/// Alt-b, Alt-Left | Move the cursor backwards one word
/// Alt-f, Alt-Right | Move the cursor forwards one word
///
/// Enter is not translated here - it submits the suggestion and is handled
/// by [`FieldView::read`] directly.
pub fn keycode_to_action(key: KeyEvent) -> Option<Action<'static>> {
    match key.code {
        KeyCode::Backspace => Some(Action::Kill(Move::BwChar)),
        KeyCode::Left => {
            if key.modifiers.contains(KeyModifiers::ALT) {
                Some(Action::Move(Move::BwWord))
            } else {
                Some(Action::Move(Move::BwChar))
            }
        }
        KeyCode::Right => {
            if key.modifiers.contains(KeyModifiers::ALT) {
                Some(Action::Move(Move::FwWord))
            } else {
                Some(Action::Move(Move::FwChar))
            }
        }
        KeyCode::Home => Some(Action::Move(Move::StartOfLine)),
        KeyCode::End => Some(Action::Move(Move::EndOfLine)),
        KeyCode::Delete => Some(Action::Kill(Move::FwChar)),
        KeyCode::Char(c) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                match c {
                    'a' => Some(Action::Move(Move::StartOfLine)),
                    'b' => Some(Action::Move(Move::BwChar)),
                    'e' => Some(Action::Move(Move::EndOfLine)),
                    'f' => Some(Action::Move(Move::FwChar)),
                    'h' => Some(Action::Kill(Move::BwChar)),
                    'k' => Some(Action::Kill(Move::EndOfLine)),
                    'w' => Some(Action::Kill(Move::BwWord)),
                    _ => None,
                }
            } else if key.modifiers.contains(KeyModifiers::ALT) {
                match c {
                    'b' => Some(Action::Move(Move::BwWord)),
                    'f' => Some(Action::Move(Move::FwWord)),
                    _ => None,
                }
            } else {
                Some(Action::InsertChar(c))
            }
        }
        _ => None,
    }
}

#[derive(Debug)]
/// A [`SuggestionField`] wired to a line editor, ready to render
///
/// The view owns the editing buffer; focus stays with the host event loop
/// and is passed into [`render`][FieldView::render] every frame.
pub struct FieldView {
    /// line edit instance holding the live text
    pub editor: LineEdit,
    /// resolver configuration
    pub field: SuggestionField,
}

impl FieldView {
    /// wrap a field configuration into a renderable view
    pub fn new(field: SuggestionField) -> Self {
        Self {
            editor: LineEdit::default(),
            field,
        }
    }

    /// the committed text, without the ghost suggestion
    pub fn text(&self) -> &str {
        self.editor.view()
    }

    /// read one terminal event, handle it or return it
    ///
    /// Edit keys update the buffer. Enter commits the current suggestion
    /// into the buffer and is returned to the host along with anything else
    /// the view does not consume, so the host can still react to the
    /// submitted line.
    pub fn read(&mut self) -> crossterm::Result<Option<Event>> {
        let evt = event::read()?;
        if let Event::Key(key) = &evt {
            if key.code == KeyCode::Enter {
                self.submit();
                return Ok(Some(evt));
            }
        }
        if self.handle(&evt) {
            Ok(None)
        } else {
            Ok(Some(evt))
        }
    }

    /// apply an already-read event to the editing buffer
    ///
    /// Returns true when the event was consumed. Enter is never consumed
    /// here so hosts driving their own event loop decide when to
    /// [`submit`][FieldView::submit].
    pub fn handle(&mut self, evt: &Event) -> bool {
        let key = match evt {
            Event::Key(key) => *key,
            _ => return false,
        };
        match keycode_to_action(key) {
            Some(action) => {
                self.editor.event(action);
                true
            }
            None => false,
        }
    }

    /// commit the current suggestion into the buffer
    ///
    /// Appends one resolved suffix, cursor moves to the end. Typing never
    /// calls this - only an explicit submit does.
    pub fn submit(&mut self) {
        let mut text = self.editor.view().to_string();
        self.field.submit(&mut text);
        self.editor.set_text(text);
    }

    /// render the field into a rectangle, one line tall
    ///
    /// `focused` is owned by the host: when set, the ghost suffix is drawn
    /// dimmed after the typed text and the terminal cursor is placed at the
    /// end of the typed portion; when clear, only the typed text shows.
    /// An empty buffer renders the placeholder dimmed in either state.
    pub fn render<B: Backend>(&self, f: &mut Frame<B>, rect: Rect, focused: bool) {
        let ghost_style = Style::default().fg(Color::DarkGray);
        let view = self.editor.view();

        let line = if view.is_empty() {
            Spans::from(Span::styled(self.field.placeholder(), ghost_style))
        } else if focused {
            Spans::from(vec![
                Span::raw(view),
                Span::styled(self.field.suggestion(view), ghost_style),
            ])
        } else {
            Spans::from(Span::raw(view))
        };
        f.render_widget(Paragraph::new(line), rect);

        if focused {
            f.set_cursor(rect.x + self.editor.cursor_pos() as u16, rect.y);
        }
    }
}
