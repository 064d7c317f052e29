//! # Application State
//!
//! Core business state for Shan Note. This module contains domain data only -
//! no TUI-specific types. Presentation state (cursor, scroll) lives in the
//! `tui` module, which owns the live text buffer and reports its content
//! back here through `Action::NoteChanged`.
//!
//! ```text
//! App
//! ├── note_text: String        // observed copy of the editor buffer
//! ├── remap_enabled: bool      // QWERTY→Shan substitution on/off
//! ├── status_message: String   // title bar text
//! └── opened_at: DateTime      // when this session started
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use chrono::{DateTime, Local};

use crate::core::config::ResolvedConfig;

pub struct App {
    /// The note content as last reported by the editor. The editor owns the
    /// live buffer; this is the application's observed copy.
    pub note_text: String,
    pub remap_enabled: bool,
    pub status_message: String,
    pub opened_at: DateTime<Local>,
}

impl App {
    pub fn new(remap_enabled: bool) -> Self {
        Self {
            note_text: String::new(),
            remap_enabled,
            status_message: String::from("Welcome to Shan Note"),
            opened_at: Local::now(),
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(config.remap_enabled)
    }
}
