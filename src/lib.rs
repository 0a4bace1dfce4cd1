//! Reelboard - State engine for an AI video-ad creation studio.
//!
//! This crate owns every piece of editor state the studio UI renders:
//! the project dashboard, the script-to-storyboard screen, and the
//! storyboard editor with drag-reorder, multi-select, zoom, and a
//! timeline scrubber. The view layer stays dumb — it forwards intents
//! (clicks, drags, key-downs) into the stores here and re-renders from
//! the frozen snapshots they hand back:
//!
//! - **Explicit ownership**: state lives in [`StoryboardStore`] and
//!   [`ProjectBoard`], not scattered through UI components
//! - **Snapshot contract**: every mutation invalidates a cached
//!   snapshot; previously returned snapshots are never touched
//! - **No I/O**: everything is synchronous, in-memory mock state — the
//!   "AI" suggestions are placeholders by design
//!
//! # Example
//!
//! ```rust
//! use reelboard::{FramePatch, StoryboardStore, VisualStyle};
//!
//! let mut store = StoryboardStore::with_starter_frames();
//!
//! // Drag the closing card to the front, keep the clock consistent.
//! store.reorder("5", 0).unwrap();
//! store.retime();
//!
//! // Multi-select two frames and restyle them in one pass.
//! store.toggle_multi_select("1", true);
//! store.toggle_multi_select("2", true);
//! store.bulk_update_selected(&FramePatch::new().with_visual_style(VisualStyle::Bold));
//!
//! // The view layer re-renders by diffing frozen snapshots.
//! let snapshot = store.snapshot();
//! assert_eq!(snapshot.frames.len(), 5);
//! assert_eq!(snapshot.frames[0].scene, "Call to Action");
//! ```

pub mod error;

// Storyboard editor state
pub mod storyboard;

// Keyboard shortcut dispatch
pub mod shortcuts;

// Project dashboard
pub mod project;

// Script-to-storyboard placeholder analysis
pub mod script;

// Re-exports for convenience
pub use error::{BoardError, BoardResult};
pub use project::{AdFormat, Project, ProjectBoard, ProjectStatus};
pub use script::{analyze, frames_from_suggestions, SceneSuggestion};
pub use shortcuts::{
    resolve, Dispatch, Key, KeyEvent, Resolved, ShortcutAction, ShortcutDispatcher,
};
pub use storyboard::{
    EditorView, Frame, FramePatch, LockKind, Selection, ShotType, StoryboardSnapshot,
    StoryboardStore, VisualStyle,
};

#[cfg(feature = "wasm")]
pub use project::wasm::JsProjectBoard;

#[cfg(feature = "wasm")]
pub use storyboard::wasm::JsStoryboardStore;
