//! # NoteEditor Component
//!
//! The note surface. Owns the text buffer and applies the interceptor's
//! decision for every keystroke.
//!
//! ## Responsibilities
//!
//! - Route each typed character through `core::interceptor`
//! - Apply the decision: insert the substituted glyph, swallow suppressed
//!   keystrokes, or run default handling (self-insert / cursor movement)
//! - Handle editing keys (backspace, delete, enter, home/end, paste)
//! - Report the full buffer content upward after every content change
//!
//! ## State Management
//!
//! The buffer is internal state. The remap flag is a prop from the
//! application state. Cursor position and scroll state are encapsulated
//! in `CursorState`.

mod cursor;
mod text_wrap;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::{Block, Paragraph};

use crate::core::interceptor::{ArrowKey, Decision, KeyInput, intercept};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

use cursor::CursorState;
use text_wrap::{
    inner_width, next_char_boundary, prev_char_boundary, visible_lines, wrap_line_count,
    wrap_options,
};

/// High-level events emitted by the NoteEditor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorEvent {
    /// The buffer content changed; carries the full current text.
    ContentChanged(String),
}

/// Multi-line note editor with live QWERTY→Shan substitution.
///
/// # Props
///
/// - `remap_enabled`: Whether substitution is active (from App state)
///
/// # State
///
/// - `buffer`: Current note text
/// - `cursor`: Cursor position, scroll offset, and cached viewport (see `CursorState`)
pub struct NoteEditor {
    /// Text buffer (Internal State)
    pub buffer: String,
    /// Whether QWERTY→Shan substitution is active (Prop)
    pub remap_enabled: bool,
    /// Cursor and scroll tracking
    cursor: CursorState,
}

impl NoteEditor {
    pub fn new(remap_enabled: bool) -> Self {
        Self {
            buffer: String::new(),
            remap_enabled,
            cursor: CursorState::new(),
        }
    }

    /// Splice a string into the buffer at the cursor.
    fn insert_str(&mut self, s: &str) {
        self.buffer.insert_str(self.cursor.pos, s);
        self.cursor.pos += s.len();
    }

    /// Default handling for a forwarded key: printable characters
    /// self-insert, arrows move the cursor.
    fn forward_to_default(&mut self, input: &KeyInput) -> Option<EditorEvent> {
        match input {
            KeyInput::Char(c) => {
                if c.is_control() {
                    return None;
                }
                self.buffer.insert(self.cursor.pos, *c);
                self.cursor.pos += c.len_utf8();
                Some(EditorEvent::ContentChanged(self.buffer.clone()))
            }
            KeyInput::Arrow(arrow) => {
                self.move_cursor(*arrow);
                None
            }
        }
    }

    fn move_cursor(&mut self, arrow: ArrowKey) {
        match arrow {
            ArrowKey::Left => {
                if self.cursor.pos > 0 {
                    self.cursor.pos = prev_char_boundary(&self.buffer, self.cursor.pos);
                }
            }
            ArrowKey::Right => {
                if self.cursor.pos < self.buffer.len() {
                    self.cursor.pos = next_char_boundary(&self.buffer, self.cursor.pos);
                }
            }
            ArrowKey::Up => {
                self.cursor
                    .move_vertically(&self.buffer, -1, self.cursor.last_content_width);
            }
            ArrowKey::Down => {
                self.cursor
                    .move_vertically(&self.buffer, 1, self.cursor.last_content_width);
            }
        }
    }

    /// Get the visible text based on current scroll offset.
    /// When scroll_offset > 0, only returns the visible lines.
    fn get_visible_text(&self, content_width: u16) -> String {
        if self.cursor.scroll_offset == 0 {
            return self.buffer.clone();
        }

        let width = inner_width(content_width);
        if width == 0 {
            return String::new();
        }

        let lines = textwrap::wrap(&self.buffer, wrap_options(width));

        let start = self.cursor.scroll_offset as usize;
        let end = (start + self.cursor.last_visible_lines as usize).min(lines.len());

        lines[start..end].join("\n")
    }

    /// Render scrollbar when content exceeds the viewport
    fn render_scrollbar(&self, frame: &mut Frame, area: Rect) {
        use ratatui::widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState};

        let width = inner_width(area.width);
        let viewport = visible_lines(area.height);
        let total_lines = wrap_line_count(&self.buffer, width);

        if total_lines <= viewport {
            return;
        }

        // ScrollbarState content_length is max scrollable position, not total items
        let max_scroll = total_lines.saturating_sub(viewport);

        let mut scrollbar_state = ScrollbarState::default()
            .content_length(max_scroll as usize)
            .position(self.cursor.scroll_offset as usize);

        let scrollbar_area = Rect {
            x: area.x + area.width.saturating_sub(1),
            y: area.y + 1,
            width: 1,
            height: area.height.saturating_sub(2),
        };

        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            scrollbar_area,
            &mut scrollbar_state,
        );
    }
}

impl Component for NoteEditor {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.cursor.last_content_width = area.width;
        self.cursor
            .update_scroll_offset(&self.buffer, area.width, area.height);

        let title = if self.remap_enabled {
            "Note (Shan)"
        } else {
            "Note (Latin)"
        };
        let visible_text = self.get_visible_text(area.width);

        let block = Block::bordered()
            .border_type(ratatui::widgets::BorderType::Rounded)
            .title(title);

        let note = Paragraph::new(visible_text)
            .block(block)
            .style(ratatui::style::Style::default().fg(ratatui::style::Color::Green));

        frame.render_widget(note, area);
        self.render_scrollbar(frame, area);

        let (cursor_x, cursor_y) = self.cursor.screen_pos(&self.buffer, area);
        frame.set_cursor_position((cursor_x, cursor_y));
    }
}

impl EventHandler for NoteEditor {
    type Event = EditorEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::Key(input) => {
                if !self.remap_enabled {
                    return self.forward_to_default(input);
                }
                match intercept(input) {
                    Decision::Insert(s) => {
                        self.insert_str(&s);
                        Some(EditorEvent::ContentChanged(self.buffer.clone()))
                    }
                    // Suppressed slot: keystroke consumed, nothing inserted
                    Decision::Suppress => None,
                    Decision::Forward => self.forward_to_default(input),
                }
            }
            TuiEvent::Paste(text) => {
                self.insert_str(text);
                Some(EditorEvent::ContentChanged(self.buffer.clone()))
            }
            TuiEvent::Enter => {
                self.buffer.insert(self.cursor.pos, '\n');
                self.cursor.pos += 1;
                Some(EditorEvent::ContentChanged(self.buffer.clone()))
            }
            TuiEvent::Backspace => {
                if self.cursor.pos > 0 {
                    let prev = prev_char_boundary(&self.buffer, self.cursor.pos);
                    self.buffer.drain(prev..self.cursor.pos);
                    self.cursor.pos = prev;
                    Some(EditorEvent::ContentChanged(self.buffer.clone()))
                } else {
                    None
                }
            }
            TuiEvent::Delete => {
                if self.cursor.pos < self.buffer.len() {
                    let next = next_char_boundary(&self.buffer, self.cursor.pos);
                    self.buffer.drain(self.cursor.pos..next);
                    Some(EditorEvent::ContentChanged(self.buffer.clone()))
                } else {
                    None
                }
            }
            TuiEvent::Home => {
                self.cursor.pos = self.buffer[..self.cursor.pos]
                    .rfind('\n')
                    .map(|i| i + 1)
                    .unwrap_or(0);
                None
            }
            TuiEvent::End => {
                self.cursor.pos = self.buffer[self.cursor.pos..]
                    .find('\n')
                    .map(|i| self.cursor.pos + i)
                    .unwrap_or(self.buffer.len());
                None
            }
            _ => None,
        }
    }
}
