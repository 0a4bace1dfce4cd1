//! WASM bindings for the storyboard editor.
//!
//! This module provides JavaScript-friendly wrappers around the
//! StoryboardStore, plus keyboard resolution, for use in browser
//! environments.

use std::collections::HashSet;

use js_sys::Array;
use serde::Serialize;
use serde_wasm_bindgen::{from_value, Serializer};
use wasm_bindgen::prelude::*;

use crate::error::BoardError;
use crate::shortcuts::{resolve, Key, KeyEvent};
use crate::storyboard::model::{Frame, FramePatch, LockKind};
use crate::storyboard::store::StoryboardStore;
use crate::storyboard::timeline;

/// Serialize a value to JsValue with HashMaps/HashSets as plain JS
/// containers (not Map/Set).
fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, serde_wasm_bindgen::Error> {
    value.serialize(&Serializer::new().serialize_maps_as_objects(true))
}

/// Collects a JS string array into an id set.
fn id_set(ids: Array) -> HashSet<String> {
    ids.iter().filter_map(|v| v.as_string()).collect()
}

fn parse_lock(kind: &str) -> Result<LockKind, JsValue> {
    LockKind::from_name(kind)
        .ok_or_else(|| JsValue::from_str(&format!("Unknown lock kind: {}", kind)))
}

// =============================================================================
// ERROR CONVERSION
// =============================================================================

/// Helper macro for Result conversion
macro_rules! js_result {
    ($expr:expr) => {
        $expr.map_err(|e: BoardError| JsValue::from_str(&e.to_string()))
    };
}

// =============================================================================
// STORYBOARD STORE WRAPPER
// =============================================================================

/// JavaScript-friendly wrapper around StoryboardStore.
///
/// The editor UI drives all storyboard mutations through this wrapper
/// and re-renders from `snapshot()`.
#[wasm_bindgen]
pub struct JsStoryboardStore {
    inner: StoryboardStore,
}

#[wasm_bindgen]
impl JsStoryboardStore {
    // =========================================================================
    // LIFECYCLE
    // =========================================================================

    /// Creates an empty storyboard store.
    ///
    /// # Example (JavaScript)
    /// ```js
    /// const store = new JsStoryboardStore();
    /// ```
    #[wasm_bindgen(constructor)]
    pub fn new() -> JsStoryboardStore {
        JsStoryboardStore {
            inner: StoryboardStore::new(),
        }
    }

    /// Creates a store seeded with the mock starter storyboard.
    #[wasm_bindgen(js_name = withStarterFrames)]
    pub fn with_starter_frames() -> JsStoryboardStore {
        JsStoryboardStore {
            inner: StoryboardStore::with_starter_frames(),
        }
    }

    // =========================================================================
    // STATE ACCESS
    // =========================================================================

    /// Returns a frozen snapshot of the whole editor state.
    ///
    /// # Example (JavaScript)
    /// ```js
    /// const snapshot = store.snapshot();
    /// render(snapshot.frames, snapshot.selected, snapshot.view);
    /// ```
    #[wasm_bindgen]
    pub fn snapshot(&mut self) -> Result<JsValue, JsValue> {
        Ok(to_js_value(&self.inner.snapshot())?)
    }

    /// Total run length label for the timeline header, e.g. "0:30".
    #[wasm_bindgen(js_name = totalDuration)]
    pub fn total_duration(&self) -> String {
        timeline::total_duration(self.inner.frames())
    }

    /// Equal-width scrubber segments in display order.
    #[wasm_bindgen]
    pub fn segments(&self) -> Result<JsValue, JsValue> {
        Ok(to_js_value(&timeline::segments(self.inner.frames()))?)
    }

    // =========================================================================
    // COLLECTION OPERATIONS
    // =========================================================================

    /// Appends a default frame and returns its identifier.
    #[wasm_bindgen(js_name = addFrame)]
    pub fn add_frame(&mut self) -> String {
        self.inner.add_frame()
    }

    /// Appends a fully specified frame.
    #[wasm_bindgen(js_name = appendFrame)]
    pub fn append_frame(&mut self, frame: JsValue) -> Result<(), JsValue> {
        let frame: Frame = from_value(frame)?;
        js_result!(self.inner.append(frame))
    }

    /// Inserts a frame immediately after `sourceId`.
    #[wasm_bindgen(js_name = insertAfter)]
    pub fn insert_after(&mut self, source_id: &str, frame: JsValue) -> Result<(), JsValue> {
        let frame: Frame = from_value(frame)?;
        js_result!(self.inner.insert_after(source_id, frame))
    }

    /// Removes one frame.
    #[wasm_bindgen(js_name = removeFrame)]
    pub fn remove_frame(&mut self, id: &str) -> Result<(), JsValue> {
        js_result!(self.inner.remove(id))
    }

    /// Removes every listed frame; unknown ids are ignored.
    #[wasm_bindgen(js_name = removeFrames)]
    pub fn remove_frames(&mut self, ids: Array) {
        self.inner.remove_many(id_set(ids));
    }

    /// Moves a frame to a target index (clamped to the board).
    #[wasm_bindgen(js_name = reorderFrame)]
    pub fn reorder_frame(&mut self, id: &str, target_index: usize) -> Result<(), JsValue> {
        js_result!(self.inner.reorder(id, target_index))
    }

    /// Duplicates a frame in place and returns the new identifier.
    #[wasm_bindgen(js_name = duplicateFrame)]
    pub fn duplicate_frame(&mut self, id: &str) -> Result<String, JsValue> {
        js_result!(self.inner.duplicate(id))
    }

    /// Rebuilds timestamps and duration labels after a reorder.
    #[wasm_bindgen]
    pub fn retime(&mut self) {
        self.inner.retime();
    }

    // =========================================================================
    // FIELD EDITS
    // =========================================================================

    /// Applies a partial update to one frame (the side-panel "Save").
    #[wasm_bindgen(js_name = applyPatch)]
    pub fn apply_patch(&mut self, id: &str, patch: JsValue) -> Result<(), JsValue> {
        let patch: FramePatch = from_value(patch)?;
        js_result!(self.inner.apply_patch(id, &patch))
    }

    /// Sets the scene title on one frame.
    #[wasm_bindgen(js_name = setFrameScene)]
    pub fn set_frame_scene(&mut self, id: &str, scene: &str) -> Result<(), JsValue> {
        js_result!(self.inner.set_frame_scene(id, scene))
    }

    /// Sets the description on one frame.
    #[wasm_bindgen(js_name = setFrameDescription)]
    pub fn set_frame_description(&mut self, id: &str, description: &str) -> Result<(), JsValue> {
        js_result!(self.inner.set_frame_description(id, description))
    }

    /// Sets the narration text on one frame.
    #[wasm_bindgen(js_name = setFrameScriptText)]
    pub fn set_frame_script_text(&mut self, id: &str, text: &str) -> Result<(), JsValue> {
        js_result!(self.inner.set_frame_script_text(id, text))
    }

    // =========================================================================
    // BULK MUTATION
    // =========================================================================

    /// Applies a patch to every listed frame in one pass.
    #[wasm_bindgen(js_name = bulkUpdate)]
    pub fn bulk_update(&mut self, ids: Array, patch: JsValue) -> Result<(), JsValue> {
        let patch: FramePatch = from_value(patch)?;
        self.inner.bulk_update(&id_set(ids), &patch);
        Ok(())
    }

    /// Applies a patch to the current multi-select set.
    #[wasm_bindgen(js_name = bulkUpdateSelected)]
    pub fn bulk_update_selected(&mut self, patch: JsValue) -> Result<(), JsValue> {
        let patch: FramePatch = from_value(patch)?;
        self.inner.bulk_update_selected(&patch);
        Ok(())
    }

    /// Duplicates every listed frame to the end of the board and
    /// returns the new identifiers.
    #[wasm_bindgen(js_name = bulkDuplicate)]
    pub fn bulk_duplicate(&mut self, ids: Array) -> Array {
        self.inner
            .bulk_duplicate(&id_set(ids))
            .into_iter()
            .map(JsValue::from)
            .collect()
    }

    /// Duplicates the current multi-select set.
    #[wasm_bindgen(js_name = bulkDuplicateSelected)]
    pub fn bulk_duplicate_selected(&mut self) -> Array {
        self.inner
            .bulk_duplicate_selected()
            .into_iter()
            .map(JsValue::from)
            .collect()
    }

    /// Deletes every listed frame in one pass.
    #[wasm_bindgen(js_name = bulkDelete)]
    pub fn bulk_delete(&mut self, ids: Array) {
        self.inner.bulk_delete(&id_set(ids));
    }

    /// Deletes the current multi-select set.
    #[wasm_bindgen(js_name = bulkDeleteSelected)]
    pub fn bulk_delete_selected(&mut self) {
        self.inner.bulk_delete_selected();
    }

    /// Uniform group toggle of one lock ("character" | "brand" | "visual")
    /// over the listed frames. Returns the value now shared by the group.
    #[wasm_bindgen(js_name = toggleLock)]
    pub fn toggle_lock(&mut self, kind: &str, ids: Array) -> Result<bool, JsValue> {
        let kind = parse_lock(kind)?;
        Ok(self.inner.toggle_lock_across_selection(kind, &id_set(ids)))
    }

    /// Group lock toggle over the current multi-select set.
    #[wasm_bindgen(js_name = toggleLockSelected)]
    pub fn toggle_lock_selected(&mut self, kind: &str) -> Result<bool, JsValue> {
        let kind = parse_lock(kind)?;
        Ok(self.inner.toggle_lock_selected(kind))
    }

    // =========================================================================
    // SELECTION
    // =========================================================================

    /// Sets or clears the focused frame.
    #[wasm_bindgen(js_name = focusFrame)]
    pub fn focus_frame(&mut self, id: Option<String>) {
        self.inner.focus(id.as_deref());
    }

    /// Adds or removes one frame from the multi-select set.
    #[wasm_bindgen(js_name = toggleMultiSelect)]
    pub fn toggle_multi_select(&mut self, id: &str, included: bool) {
        self.inner.toggle_multi_select(id, included);
    }

    /// Multi-selects every frame.
    #[wasm_bindgen(js_name = selectAll)]
    pub fn select_all(&mut self) {
        self.inner.select_all();
    }

    /// Empties the multi-select set.
    #[wasm_bindgen(js_name = clearSelection)]
    pub fn clear_selection(&mut self) {
        self.inner.clear_selection();
    }

    /// Full-board select ⇄ clear toggle (Cmd/Ctrl+A).
    #[wasm_bindgen(js_name = selectAllToggle)]
    pub fn select_all_toggle(&mut self) {
        self.inner.select_all_toggle();
    }

    /// Moves focus to the next frame, wrapping at the end.
    #[wasm_bindgen(js_name = focusNext)]
    pub fn focus_next(&mut self) {
        self.inner.focus_next();
    }

    /// Moves focus to the previous frame, wrapping at the start.
    #[wasm_bindgen(js_name = focusPrevious)]
    pub fn focus_previous(&mut self) {
        self.inner.focus_previous();
    }

    // =========================================================================
    // VIEW STATE
    // =========================================================================

    /// Steps the zoom up and returns the new percentage.
    #[wasm_bindgen(js_name = zoomIn)]
    pub fn zoom_in(&mut self) -> u16 {
        self.inner.zoom_in()
    }

    /// Steps the zoom down and returns the new percentage.
    #[wasm_bindgen(js_name = zoomOut)]
    pub fn zoom_out(&mut self) -> u16 {
        self.inner.zoom_out()
    }

    /// Flips timeline playback and returns the new flag.
    #[wasm_bindgen(js_name = togglePlayback)]
    pub fn toggle_playback(&mut self) -> bool {
        self.inner.toggle_playback()
    }

    /// Escape: clears selection, closes the panel, stops playback.
    #[wasm_bindgen]
    pub fn escape(&mut self) {
        self.inner.escape();
    }
}

impl Default for JsStoryboardStore {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// KEYBOARD
// =============================================================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ResolvedShortcut {
    action: &'static str,
    prevent_default: bool,
}

/// Resolves a DOM key-down event to an editor action.
///
/// Returns `{ action, preventDefault }` or null when the combination is
/// unbound or suppressed (text field focused, no command modifier).
///
/// # Example (JavaScript)
/// ```js
/// const hit = resolveShortcut(e.key, e.ctrlKey, e.metaKey, e.shiftKey, isTyping());
/// if (hit) {
///   if (hit.preventDefault) e.preventDefault();
///   run(hit.action);
/// }
/// ```
#[wasm_bindgen(js_name = resolveShortcut)]
pub fn resolve_shortcut(key: &str, ctrl: bool, meta: bool, shift: bool, typing: bool) -> JsValue {
    let Some(key) = Key::from_dom_key(key) else {
        return JsValue::NULL;
    };
    let event = KeyEvent {
        key,
        ctrl,
        meta,
        shift,
    };
    match resolve(&event, typing) {
        Some(resolved) => to_js_value(&ResolvedShortcut {
            action: resolved.action.name(),
            prevent_default: resolved.prevent_default,
        })
        .unwrap_or(JsValue::NULL),
        None => JsValue::NULL,
    }
}
