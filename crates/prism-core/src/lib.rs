//! # Prism Core
//!
//! Headless JSON editor logic: everything the UI calls into that does
//! not need a window.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌────────────────────────────────────────────────────┐
//! │                     prism-ui                       │
//! └───────┬──────────┬──────────────┬──────────────────┘
//!         │          │              │
//!   ┌─────┴────┐ ┌───┴────┐ ┌──────┴──────┐ ┌──────────┐
//!   │ document │ │  tree  │ │   locate    │ │ settings │
//!   │ fmt/min/ │ │ Value→ │ │ path→(line, │ │ last     │
//!   │ validate │ │ nodes  │ │  col) span  │ │ folder   │
//!   └──────────┘ └────────┘ └─────────────┘ └──────────┘
//! ```
//!
//! The editor's source of truth is always the raw text buffer held by
//! the UI. These modules derive structure from it transiently and never
//! keep state of their own.

pub mod document;
pub mod locate;
pub mod settings;
pub mod tree;

pub use document::{DocumentError, format, minify, parse, validate};
pub use locate::{KeySpan, locate};
pub use settings::{Settings, SettingsError};
pub use tree::TreeNode;
