//! # Core Application Logic
//!
//! This module contains Shan Note's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • keymap (table)       │
//!                    │  • interceptor (pure)   │
//!                    │  • State / Action       │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`keymap`]: The static QWERTY→Shan substitution table
//! - [`interceptor`]: Pure per-keystroke classifier
//! - [`state`]: The `App` struct — all application state in one place
//! - [`action`]: The `Action` enum — everything that can happen in the app
//! - [`config`]: TOML config file loading and resolution

pub mod action;
pub mod config;
pub mod interceptor;
pub mod keymap;
pub mod state;
