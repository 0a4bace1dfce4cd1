//! Editor view state: zoom level and timeline playback.
//!
//! Pure presentation state with no durable effects — the playback flag
//! only drives the animated playhead, and zoom only scales the frame
//! grid.

use serde::{Deserialize, Serialize};

/// Smallest zoom percentage the editor offers.
pub const ZOOM_MIN: u16 = 50;
/// Largest zoom percentage the editor offers.
pub const ZOOM_MAX: u16 = 200;
/// Zoom step per keyboard/toolbar increment.
pub const ZOOM_STEP: u16 = 25;
/// Default zoom percentage.
pub const ZOOM_DEFAULT: u16 = 100;

/// Zoom and playback state for the storyboard editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorView {
    /// Zoom percentage, stepped by [`ZOOM_STEP`] within [`ZOOM_MIN`]..=[`ZOOM_MAX`].
    pub zoom: u16,
    /// Whether the timeline playhead is running.
    pub playing: bool,
}

impl Default for EditorView {
    fn default() -> Self {
        Self {
            zoom: ZOOM_DEFAULT,
            playing: false,
        }
    }
}

impl EditorView {
    /// Creates the default view state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Steps the zoom up, saturating at [`ZOOM_MAX`].
    pub fn zoom_in(&mut self) -> u16 {
        self.zoom = (self.zoom + ZOOM_STEP).min(ZOOM_MAX);
        self.zoom
    }

    /// Steps the zoom down, saturating at [`ZOOM_MIN`].
    pub fn zoom_out(&mut self) -> u16 {
        self.zoom = self.zoom.saturating_sub(ZOOM_STEP).max(ZOOM_MIN);
        self.zoom
    }

    /// Flips the playback flag and returns the new value.
    pub fn toggle_playback(&mut self) -> bool {
        self.playing = !self.playing;
        self.playing
    }

    /// Stops playback (Escape, panel close).
    pub fn stop_playback(&mut self) {
        self.playing = false;
    }
}

// =============================================================================
// TESTS
// =============================================================================
