//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as props:
//! - `TitleBar`: Top status bar showing remap state and status
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `NoteEditor`: The note surface — owns the text buffer and applies
//!   the interceptor's per-keystroke decisions
//!
//! ## Design Philosophy
//!
//! Each component file contains everything related to that component:
//! state types, event types, rendering logic, event handling, and tests.
//! External data arrives as "props" (struct fields set by the parent), not
//! by reaching into global state, which keeps dependencies explicit and
//! components testable.
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (top status bar)
//! └── editor/          (note surface with QWERTY→Shan substitution)
//! ```

mod title_bar;
pub use title_bar::TitleBar;

pub mod editor;
pub use editor::{EditorEvent, NoteEditor};
