//! # Actions
//!
//! Everything that can happen in Shan Note becomes an `Action`.
//! The editor buffer changed? That's `Action::NoteChanged(text)`.
//! User hit Ctrl+T? That's `Action::ToggleRemap`.
//!
//! The `update()` function takes the current state and an action and
//! mutates the state. No side effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State (+ Effect)
//! ```
//!
//! This makes everything testable: apply an action, assert on the state.

use crate::core::state::App;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The editor buffer changed; carries the full current text.
    NoteChanged(String),
    /// Toggle QWERTY→Shan substitution on or off.
    ToggleRemap,
    /// User asked to exit.
    Quit,
}

/// Side effects the caller must perform after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::NoteChanged(text) => {
            app.status_message = format!("{} chars", text.chars().count());
            app.note_text = text;
            Effect::None
        }
        Action::ToggleRemap => {
            app.remap_enabled = !app.remap_enabled;
            app.status_message = if app.remap_enabled {
                String::from("Shan remap on")
            } else {
                String::from("Shan remap off")
            };
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
