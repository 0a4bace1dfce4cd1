//! Project dashboard module.
//!
//! This module provides:
//! - `model`: Project records with status/format metadata
//! - `board`: ProjectBoard with dashboard CRUD, search, and filters
//! - `wasm`: WASM bindings for browser usage (JsProjectBoard)

pub mod board;
pub mod model;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use board::ProjectBoard;
pub use model::{AdFormat, Project, ProjectStatus};

#[cfg(feature = "wasm")]
pub use wasm::JsProjectBoard;
