//! # TitleBar Component
//!
//! Top status bar showing application state.
//!
//! ## Responsibilities
//!
//! - Display the remap state (Shan or Latin input)
//! - Display the session-opened timestamp
//! - Display status messages (e.g., "Shan remap off", "12 chars")
//!
//! TitleBar is purely presentational — it receives all data as props and has
//! no internal state. The props come from different owners (`remap_enabled`
//! and `status_message` from core App state, `opened_at` formatted by the
//! caller), but the TitleBar doesn't care where they come from.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

/// Top status bar component.
///
/// # Props
///
/// All fields are "props" (configuration from parent):
/// - `remap_enabled`: Whether QWERTY→Shan substitution is active
/// - `status_message`: Transient status (e.g., "Shan remap off")
/// - `opened_at`: Pre-formatted session start time (e.g., "14:02")
pub struct TitleBar {
    pub remap_enabled: bool,
    pub status_message: String,
    pub opened_at: String,
}

impl TitleBar {
    pub fn new(remap_enabled: bool, status_message: String, opened_at: String) -> Self {
        Self {
            remap_enabled,
            status_message,
            opened_at,
        }
    }
}

impl Component for TitleBar {
    /// Render the title bar as a single line with conditional formatting.
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let input_label = if self.remap_enabled { "Shan" } else { "Latin" };
        let title_text = if self.status_message.is_empty() {
            format!("Shan Note ({input_label}) | opened {}", self.opened_at)
        } else {
            format!(
                "Shan Note ({input_label}) | opened {} | {}",
                self.opened_at, self.status_message
            )
        };

        frame.render_widget(Span::raw(title_text), area);
    }
}
