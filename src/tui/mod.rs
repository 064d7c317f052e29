//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI, and
//! translates keyboard events into the core's `KeyInput`/`Action` values.
//!
//! This is the only module that knows about ratatui and crossterm. The
//! mapping and classification logic lives in `core` and never sees a
//! terminal type.
//!
//! ## Event loop
//!
//! Everything runs synchronously on one thread: poll for a terminal event
//! (sleeping up to 500ms), drain all pending events, dispatch each one, and
//! redraw only when something happened. Keystrokes are handled one at a
//! time in arrival order, so the buffer never needs locking.

pub mod component;
pub mod components;
pub mod event;
mod ui;

use log::info;
use std::io::stdout;

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{EditorEvent, NoteEditor};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub editor: NoteEditor,
}

impl TuiState {
    pub fn new(remap_enabled: bool) -> Self {
        Self {
            editor: NoteEditor::new(remap_enabled),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,                        // Show cursor for editing
            SetCursorStyle::SteadyBlock, // Non-blinking: avoids blink timer reset from redraws
        )?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            DisableBracketedPaste,
            Hide // Hide cursor on exit
        );
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new(app.remap_enabled);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let mut needs_redraw = true; // Force first frame

    'outer: loop {
        // Sync editor props with App state
        tui.editor.remap_enabled = app.remap_enabled;

        // Only draw when something changed
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        // Process first event + drain ALL pending events before next draw
        let first_event = poll_event_timeout(std::time::Duration::from_millis(500));
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            match event {
                // Resize just needs a redraw (already flagged above)
                TuiEvent::Resize => {}
                TuiEvent::Quit => {
                    if update(&mut app, Action::Quit) == Effect::Quit {
                        break 'outer;
                    }
                }
                TuiEvent::ToggleRemap => {
                    update(&mut app, Action::ToggleRemap);
                    tui.editor.remap_enabled = app.remap_enabled;
                }
                // Everything else goes to the editor; content changes flow
                // back into the app's observed state
                _ => {
                    if let Some(EditorEvent::ContentChanged(text)) =
                        tui.editor.handle_event(&event)
                    {
                        update(&mut app, Action::NoteChanged(text));
                    }
                }
            }
        }
    }

    info!(
        "Shan Note exiting ({} chars in buffer)",
        app.note_text.chars().count()
    );

    ratatui::restore();
    Ok(())
}
