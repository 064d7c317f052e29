use crossterm::event::{self, Event, KeyCode, KeyModifiers};

use crate::core::interceptor::{ArrowKey, KeyInput};

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    // Core actions (passed to core::update)
    Quit,
    ToggleRemap, // Ctrl+T flips QWERTY→Shan substitution

    // Events routed through the interceptor / editor
    Key(KeyInput),
    Paste(String), // Bracketed paste - inserted verbatim, no remapping
    Enter,
    Backspace,
    Delete,
    Home,
    End,
    Resize,
}

/// Poll for an event with the given timeout.
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    if event::poll(timeout).unwrap() {
        match event::read().unwrap() {
            Event::Key(key_event) => {
                // Debug: log all key events to see what the terminal sends
                log::debug!(
                    "Key event: {:?} with modifiers {:?}",
                    key_event.code,
                    key_event.modifiers
                );
                match (key_event.modifiers, key_event.code) {
                    (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::Quit),
                    (KeyModifiers::CONTROL, KeyCode::Char('t')) => Some(TuiEvent::ToggleRemap),
                    // Arrow keys pass through whatever modifiers are held
                    (_, KeyCode::Left) => Some(TuiEvent::Key(KeyInput::Arrow(ArrowKey::Left))),
                    (_, KeyCode::Right) => Some(TuiEvent::Key(KeyInput::Arrow(ArrowKey::Right))),
                    (_, KeyCode::Up) => Some(TuiEvent::Key(KeyInput::Arrow(ArrowKey::Up))),
                    (_, KeyCode::Down) => Some(TuiEvent::Key(KeyInput::Arrow(ArrowKey::Down))),
                    // Regular key handling — Char carries shift already applied
                    (_, KeyCode::Char(c)) => Some(TuiEvent::Key(KeyInput::Char(c))),
                    (_, KeyCode::Enter) => Some(TuiEvent::Enter),
                    (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
                    (_, KeyCode::Delete) => Some(TuiEvent::Delete),
                    (_, KeyCode::Home) => Some(TuiEvent::Home),
                    (_, KeyCode::End) => Some(TuiEvent::End),
                    _ => None,
                }
            }
            Event::Paste(data) => Some(TuiEvent::Paste(data)),
            Event::Resize(_, _) => Some(TuiEvent::Resize),
            _ => None,
        }
    } else {
        None
    }
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}
