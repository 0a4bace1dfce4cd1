//! Storyboard editor state module.
//!
//! This module provides:
//! - `model`: Frame records, shot/style enums, partial updates
//! - `selection`: focused frame + multi-select set
//! - `store`: StoryboardStore with ordering, bulk mutation, and snapshots
//! - `view`: zoom and playback state
//! - `timeline`: duration-label math for the scrubber
//! - `wasm`: WASM bindings for browser usage (JsStoryboardStore)

pub mod model;
pub mod selection;
pub mod store;
pub mod timeline;
pub mod view;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use model::{Frame, FramePatch, LockKind, ShotType, VisualStyle};
pub use selection::Selection;
pub use store::{StoryboardSnapshot, StoryboardStore};
pub use view::EditorView;

#[cfg(feature = "wasm")]
pub use wasm::JsStoryboardStore;
