//! # Prism UI
//!
//! The iced front end, following the Elm architecture (TEA):
//! - **Model**: [`App`], every piece of UI state in one struct
//! - **Message**: events that can occur
//! - **Update**: `(state, message) -> new state` plus async tasks
//! - **View**: `state -> UI elements`, one-way binding from tab state
//!   to the rendered tab row, editor, and structure tree

pub mod app;
pub mod highlighter;
pub mod theme;

pub use app::{App, Flags, run};
