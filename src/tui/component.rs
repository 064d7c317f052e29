use ratatui::Frame;
use ratatui::layout::Rect;

use crate::tui::event::TuiEvent;

/// A drawable piece of the UI.
///
/// Data flows in as props (struct fields set by the parent before the draw
/// pass); internal presentation state such as the editor's scroll offset is
/// updated during `render`, which is why it takes `&mut self` — the same
/// shape as ratatui's `StatefulWidget`.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that consumes terminal events and may emit a higher-level
/// event for the main loop to act on (e.g. the editor emitting
/// `ContentChanged` after an insertion).
pub trait EventHandler {
    /// The type of high-level event this component emits.
    type Event;

    /// Handle one `TuiEvent`. Returns `None` when the event was ignored or
    /// consumed without anything the parent needs to know about.
    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event>;
}
