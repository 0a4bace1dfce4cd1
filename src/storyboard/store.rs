//! StoryboardStore: the owned state behind the storyboard editor.
//!
//! The store holds the ordered frame collection, the selection, and the
//! editor view state, and exposes every mutation the view layer can
//! trigger. All operations are synchronous and in-memory; each one
//! either succeeds and invalidates the cached snapshot, or fails with a
//! [`BoardError`] leaving the state untouched.
//!
//! Views never see the live state: [`StoryboardStore::snapshot`] hands
//! out frozen copies, and the store re-clones from an internal cache
//! until the next mutation (the same caching discipline as a hydrated
//! document state).

use std::collections::HashSet;

use paste::paste;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{BoardError, BoardResult};
use crate::storyboard::model::{Frame, FramePatch, LockKind, ShotType, VisualStyle};
use crate::storyboard::selection::Selection;
use crate::storyboard::timeline;
use crate::storyboard::view::EditorView;

// =============================================================================
// FIELD SETTER MACRO
// =============================================================================

/// Generates per-field setters over one frame. All setters follow the
/// same path: look up the frame, write the field, invalidate the cache.
macro_rules! frame_field_setters {
    ($($field:ident: $ty:ty),* $(,)?) => {
        paste! {
            $(
                #[doc = concat!("Sets the `", stringify!($field), "` field on the frame with `id`.")]
                pub fn [<set_frame_ $field>](
                    &mut self,
                    id: &str,
                    value: impl Into<$ty>,
                ) -> BoardResult<()> {
                    self.update_frame(id, |frame| frame.$field = value.into())
                }
            )*
        }
    };
}

// =============================================================================
// SNAPSHOT
// =============================================================================

/// Frozen copy of the editor state handed to the view layer.
///
/// A snapshot is detached from the store: later mutations never touch
/// snapshots already returned, so views may diff consecutive snapshots
/// to decide what to re-render.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoryboardSnapshot {
    /// Frames in display order.
    pub frames: Vec<Frame>,
    /// Identifier of the focused frame, if any.
    pub focused: Option<String>,
    /// Multi-selected identifiers.
    pub selected: HashSet<String>,
    /// Zoom/playback state.
    pub view: EditorView,
}

// =============================================================================
// STORYBOARD STORE
// =============================================================================

/// Ordered frame collection + selection + view state.
///
/// The order of the internal vector is the sole source of truth for the
/// timeline: frame N is the (N-1)-th element. After every operation the
/// collection holds no duplicate identifiers.
pub struct StoryboardStore {
    frames: Vec<Frame>,
    selection: Selection,
    view: EditorView,
    /// Cached snapshot — invalidated by every mutation.
    cached: Option<StoryboardSnapshot>,
}

impl StoryboardStore {
    // =========================================================================
    // INITIALIZATION
    // =========================================================================

    /// Creates an empty store. An empty board is a valid board.
    pub fn new() -> Self {
        Self {
            frames: Vec::new(),
            selection: Selection::new(),
            view: EditorView::new(),
            cached: None,
        }
    }

    /// Creates a store seeded with the mock starter storyboard.
    pub fn with_starter_frames() -> Self {
        let mut store = Self::new();
        store.frames = crate::storyboard::model::starter_frames();
        store
    }

    /// Creates a store from an existing frame list.
    ///
    /// Fails with [`BoardError::DuplicateFrame`] if two frames share an
    /// identifier.
    pub fn from_frames(frames: Vec<Frame>) -> BoardResult<Self> {
        let mut seen = HashSet::new();
        for frame in &frames {
            if !seen.insert(frame.id.clone()) {
                return Err(BoardError::duplicate_frame(&frame.id));
            }
        }
        let mut store = Self::new();
        store.frames = frames;
        Ok(store)
    }

    // =========================================================================
    // READ ACCESS
    // =========================================================================

    /// Frames in display order.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Number of frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// True if the board holds no frames.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Looks up a frame by identifier.
    pub fn get(&self, id: &str) -> Option<&Frame> {
        self.frames.iter().find(|f| f.id == id)
    }

    /// Identifier of the focused frame, if any.
    pub fn focused(&self) -> Option<&str> {
        self.selection.focused.as_deref()
    }

    /// The multi-select set.
    pub fn selected(&self) -> &HashSet<String> {
        &self.selection.selected
    }

    /// Current zoom/playback state.
    pub fn view(&self) -> EditorView {
        self.view
    }

    /// Returns a frozen snapshot of the whole editor state.
    ///
    /// Between mutations this clones an internal cache instead of
    /// rebuilding.
    pub fn snapshot(&mut self) -> StoryboardSnapshot {
        if let Some(ref cached) = self.cached {
            return cached.clone();
        }
        let snap = StoryboardSnapshot {
            frames: self.frames.clone(),
            focused: self.selection.focused.clone(),
            selected: self.selection.selected.clone(),
            view: self.view,
        };
        self.cached = Some(snap.clone());
        snap
    }

    fn touch(&mut self) {
        self.cached = None;
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.frames.iter().position(|f| f.id == id)
    }

    // =========================================================================
    // COLLECTION OPERATIONS
    // =========================================================================

    /// Appends a frame at the end of the board.
    pub fn append(&mut self, frame: Frame) -> BoardResult<()> {
        if self.position(&frame.id).is_some() {
            return Err(BoardError::duplicate_frame(&frame.id));
        }
        self.frames.push(frame);
        self.touch();
        Ok(())
    }

    /// The "Add New Scene" affordance: appends a default frame under a
    /// fresh identifier and returns the identifier.
    pub fn add_frame(&mut self) -> String {
        let frame = Frame::create();
        let id = frame.id.clone();
        self.frames.push(frame);
        self.touch();
        id
    }

    /// Inserts a frame immediately after the frame with `source_id`.
    pub fn insert_after(&mut self, source_id: &str, frame: Frame) -> BoardResult<()> {
        if self.position(&frame.id).is_some() {
            return Err(BoardError::duplicate_frame(&frame.id));
        }
        let pos = self
            .position(source_id)
            .ok_or_else(|| BoardError::frame_not_found(source_id))?;
        self.frames.insert(pos + 1, frame);
        self.touch();
        Ok(())
    }

    /// Removes the frame with `id`.
    ///
    /// The removed identifier also leaves focus and the multi-select
    /// set, so no selection reference dangles.
    pub fn remove(&mut self, id: &str) -> BoardResult<()> {
        let pos = self
            .position(id)
            .ok_or_else(|| BoardError::frame_not_found(id))?;
        self.frames.remove(pos);
        self.selection.forget(id);
        self.touch();
        Ok(())
    }

    /// Removes every frame whose identifier is in `ids`.
    ///
    /// Identifiers not present are ignored; the relative order of the
    /// surviving frames is preserved.
    pub fn remove_many<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let targets: HashSet<String> = ids.into_iter().map(|s| s.as_ref().to_owned()).collect();
        let mut removed = Vec::new();
        self.frames.retain(|f| {
            if targets.contains(&f.id) {
                removed.push(f.id.clone());
                false
            } else {
                true
            }
        });
        for id in &removed {
            self.selection.forget(id);
        }
        self.touch();
    }

    /// Moves the frame with `id` to `target_index`.
    ///
    /// Out-of-range indices are clamped to the nearest valid position —
    /// a drag past either end of the board is a move to that end, never
    /// an error. All other frames keep their relative order.
    pub fn reorder(&mut self, id: &str, target_index: usize) -> BoardResult<()> {
        let pos = self
            .position(id)
            .ok_or_else(|| BoardError::frame_not_found(id))?;
        let target = target_index.min(self.frames.len() - 1);
        let frame = self.frames.remove(pos);
        self.frames.insert(target, frame);
        self.touch();
        Ok(())
    }

    /// Clones the frame with `id` into the slot right after it.
    ///
    /// The copy gets a fresh identifier and a decorated title. Returns
    /// the new identifier.
    pub fn duplicate(&mut self, id: &str) -> BoardResult<String> {
        let pos = self
            .position(id)
            .ok_or_else(|| BoardError::frame_not_found(id))?;
        let copy = self.frames[pos].duplicate_as(Uuid::new_v4().to_string());
        let new_id = copy.id.clone();
        self.frames.insert(pos + 1, copy);
        self.touch();
        Ok(new_id)
    }

    // =========================================================================
    // FIELD EDITS
    // =========================================================================

    /// Applies a closure to the frame with `id`.
    ///
    /// The closure must leave the identifier alone; it is immutable for
    /// the life of the frame.
    pub fn update_frame<F>(&mut self, id: &str, f: F) -> BoardResult<()>
    where
        F: FnOnce(&mut Frame),
    {
        let pos = self
            .position(id)
            .ok_or_else(|| BoardError::frame_not_found(id))?;
        f(&mut self.frames[pos]);
        self.touch();
        Ok(())
    }

    /// Applies a partial update to one frame (the side-panel "Save").
    pub fn apply_patch(&mut self, id: &str, patch: &FramePatch) -> BoardResult<()> {
        self.update_frame(id, |frame| patch.apply(frame))
    }

    frame_field_setters! {
        scene: String,
        duration: String,
        timestamp: String,
        description: String,
        script_text: String,
        image_url: String,
        character_lock: bool,
        brand_lock: bool,
        visual_lock: bool,
    }

    /// Sets the shot type on the frame with `id`.
    pub fn set_frame_shot_type(&mut self, id: &str, shot_type: ShotType) -> BoardResult<()> {
        self.update_frame(id, |frame| frame.shot_type = shot_type)
    }

    /// Sets the visual style on the frame with `id`.
    pub fn set_frame_visual_style(&mut self, id: &str, style: VisualStyle) -> BoardResult<()> {
        self.update_frame(id, |frame| frame.visual_style = style)
    }

    // =========================================================================
    // BULK MUTATION
    // =========================================================================

    /// Applies `patch` to every frame whose identifier is in `ids`.
    ///
    /// One pass over the collection: frames outside `ids` are left
    /// untouched, identifiers with no matching frame are ignored, and
    /// no partially-patched state is ever observable.
    pub fn bulk_update(&mut self, ids: &HashSet<String>, patch: &FramePatch) {
        for frame in &mut self.frames {
            if ids.contains(&frame.id) {
                patch.apply(frame);
            }
        }
        self.touch();
    }

    /// Applies `patch` to the current multi-select set.
    pub fn bulk_update_selected(&mut self, patch: &FramePatch) {
        for frame in &mut self.frames {
            if self.selection.selected.contains(&frame.id) {
                patch.apply(frame);
            }
        }
        self.touch();
    }

    /// Duplicates every frame in `ids`, in collection order.
    ///
    /// All copies are appended at the end of the board in the
    /// originals' relative order; the originals are untouched. The
    /// multi-select set is cleared afterwards — copies are not
    /// auto-selected. Returns the new identifiers.
    pub fn bulk_duplicate(&mut self, ids: &HashSet<String>) -> Vec<String> {
        let copies: Vec<Frame> = self
            .frames
            .iter()
            .filter(|f| ids.contains(&f.id))
            .map(|f| f.duplicate_as(Uuid::new_v4().to_string()))
            .collect();
        let new_ids: Vec<String> = copies.iter().map(|c| c.id.clone()).collect();
        self.frames.extend(copies);
        self.selection.clear();
        self.touch();
        new_ids
    }

    /// Duplicates the current multi-select set.
    pub fn bulk_duplicate_selected(&mut self) -> Vec<String> {
        let ids = self.selection.selected.clone();
        self.bulk_duplicate(&ids)
    }

    /// Removes every frame in `ids` in one pass, pruning focus and the
    /// multi-select set of the removed identifiers.
    pub fn bulk_delete(&mut self, ids: &HashSet<String>) {
        self.remove_many(ids.iter().map(String::as_str));
    }

    /// Deletes the current multi-select set.
    pub fn bulk_delete_selected(&mut self) {
        let ids = self.selection.selected.clone();
        self.bulk_delete(&ids);
    }

    /// Uniform group toggle over one consistency lock.
    ///
    /// Reads the aggregate fresh on every call: if **all** targeted
    /// frames currently hold the lock, it is cleared on all of them;
    /// otherwise it is set on all of them. An empty target set is a
    /// silent no-op. Returns the value now shared by the targeted
    /// frames (false when nothing was targeted).
    pub fn toggle_lock_across_selection(&mut self, kind: LockKind, ids: &HashSet<String>) -> bool {
        let mut targeted = self.frames.iter().filter(|f| ids.contains(&f.id)).peekable();
        if targeted.peek().is_none() {
            return false;
        }
        let all_locked = targeted.all(|f| f.lock(kind));
        let value = !all_locked;
        for frame in &mut self.frames {
            if ids.contains(&frame.id) {
                frame.set_lock(kind, value);
            }
        }
        self.touch();
        value
    }

    /// Group lock toggle over the current multi-select set.
    pub fn toggle_lock_selected(&mut self, kind: LockKind) -> bool {
        let ids = self.selection.selected.clone();
        self.toggle_lock_across_selection(kind, &ids)
    }

    // =========================================================================
    // SELECTION
    // =========================================================================

    /// Sets or clears the focused frame.
    ///
    /// Identifiers are taken as given — a stale identifier is inert for
    /// navigation rather than an error.
    pub fn focus(&mut self, id: Option<&str>) {
        self.selection.focus(id);
        self.touch();
    }

    /// Adds or removes one identifier from the multi-select set.
    pub fn toggle_multi_select(&mut self, id: &str, included: bool) {
        self.selection.toggle(id, included);
        self.touch();
    }

    /// Multi-selects every frame on the board.
    pub fn select_all(&mut self) {
        let ids: Vec<String> = self.frames.iter().map(|f| f.id.clone()).collect();
        self.selection.select_all(ids);
        self.touch();
    }

    /// Empties the multi-select set.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
        self.touch();
    }

    /// Full-board select ⇄ clear toggle (Cmd/Ctrl+A).
    pub fn select_all_toggle(&mut self) {
        let ids: Vec<String> = self.frames.iter().map(|f| f.id.clone()).collect();
        self.selection.select_all_toggle(ids.iter().map(String::as_str));
        self.touch();
    }

    /// Moves focus to the next frame in board order, wrapping at the end.
    ///
    /// No-op when nothing is focused or the focused identifier has gone
    /// stale.
    pub fn focus_next(&mut self) {
        self.step_focus(1);
    }

    /// Moves focus to the previous frame, wrapping at the start.
    pub fn focus_previous(&mut self) {
        self.step_focus(-1);
    }

    fn step_focus(&mut self, delta: isize) {
        let Some(focused) = self.selection.focused.as_deref() else {
            return;
        };
        let Some(pos) = self.position(focused) else {
            return;
        };
        let len = self.frames.len() as isize;
        let next = (pos as isize + delta).rem_euclid(len) as usize;
        self.selection.focused = Some(self.frames[next].id.clone());
        self.touch();
    }

    // =========================================================================
    // VIEW STATE
    // =========================================================================

    /// Steps the zoom up and returns the new percentage.
    pub fn zoom_in(&mut self) -> u16 {
        let zoom = self.view.zoom_in();
        self.touch();
        zoom
    }

    /// Steps the zoom down and returns the new percentage.
    pub fn zoom_out(&mut self) -> u16 {
        let zoom = self.view.zoom_out();
        self.touch();
        zoom
    }

    /// Flips timeline playback and returns the new flag.
    pub fn toggle_playback(&mut self) -> bool {
        let playing = self.view.toggle_playback();
        self.touch();
        playing
    }

    /// Escape: clear the multi-select set, close the detail panel, and
    /// stop playback. Cancellation here is only state clearing — there
    /// is nothing else to release.
    pub fn escape(&mut self) {
        self.selection.clear();
        self.selection.focus(None);
        self.view.stop_playback();
        self.touch();
    }

    /// Rebuilds timestamps and duration labels to follow the current
    /// order.
    pub fn retime(&mut self) {
        timeline::retime(&mut self.frames);
        self.touch();
    }
}

impl Default for StoryboardStore {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storyboard::model::starter_frames;

    fn starter_store() -> StoryboardStore {
        StoryboardStore::with_starter_frames()
    }

    fn order(store: &StoryboardStore) -> Vec<&str> {
        store.frames().iter().map(|f| f.id.as_str()).collect()
    }

    #[test]
    fn test_append_rejects_duplicate_id() {
        let mut store = starter_store();
        let err = store.append(Frame::new("3")).unwrap_err();
        assert!(matches!(err, BoardError::DuplicateFrame(_)));
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn test_add_frame_always_available() {
        let mut store = StoryboardStore::new();
        assert!(store.is_empty());
        let id = store.add_frame();
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&id).unwrap().scene, "New Scene");
    }

    #[test]
    fn test_insert_after() {
        let mut store = starter_store();
        store.insert_after("2", Frame::new("x")).unwrap();
        assert_eq!(order(&store), vec!["1", "2", "x", "3", "4", "5"]);

        let err = store.insert_after("ghost", Frame::new("y")).unwrap_err();
        assert!(matches!(err, BoardError::FrameNotFound(_)));
    }

    #[test]
    fn test_remove_missing_id_is_reported_without_mutation() {
        let mut store = starter_store();
        let before = store.snapshot();
        assert!(store.remove("ghost").is_err());
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn test_remove_clears_focus_and_multi_select() {
        let mut store = starter_store();
        store.focus(Some("2"));
        store.toggle_multi_select("2", true);
        store.toggle_multi_select("3", true);

        store.remove("2").unwrap();

        assert_eq!(store.focused(), None);
        assert!(!store.selected().contains("2"));
        assert!(store.selected().contains("3"));
    }

    #[test]
    fn test_remove_many_ignores_absent_and_preserves_order() {
        let mut store = starter_store();
        store.remove_many(["2", "4", "ghost"]);
        assert_eq!(order(&store), vec!["1", "3", "5"]);

        // Calling again with the same ids changes nothing.
        store.remove_many(["2", "4", "ghost"]);
        assert_eq!(order(&store), vec!["1", "3", "5"]);
    }

    #[test]
    fn test_reorder_moves_and_shifts() {
        let mut store = starter_store();
        store.reorder("5", 0).unwrap();
        assert_eq!(order(&store), vec!["5", "1", "2", "3", "4"]);
    }

    #[test]
    fn test_reorder_clamps_out_of_range_index() {
        let mut store = starter_store();
        store.reorder("1", 99).unwrap();
        assert_eq!(order(&store), vec!["2", "3", "4", "5", "1"]);
    }

    #[test]
    fn test_reorder_round_trip_restores_position() {
        let mut store = starter_store();
        let original = order(&store)
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>();

        store.reorder("3", 0).unwrap();
        store.reorder("3", 4).unwrap();
        store.reorder("3", 2).unwrap();

        assert_eq!(order(&store), original);
    }

    #[test]
    fn test_duplicate_inserts_copy_after_source() {
        let mut store = starter_store();
        let new_id = store.duplicate("1").unwrap();

        assert_eq!(store.len(), 6);
        let copy = &store.frames()[1];
        let source = &store.frames()[0];
        assert_eq!(copy.id, new_id);
        assert_eq!(copy.scene, "Opening Hook (Copy)");
        assert_eq!(copy.description, source.description);
        assert_eq!(copy.shot_type, source.shot_type);

        assert!(store.duplicate("ghost").is_err());
    }

    #[test]
    fn test_field_setters() {
        let mut store = starter_store();
        store.set_frame_scene("1", "Cold Open").unwrap();
        store.set_frame_brand_lock("1", true).unwrap();
        store.set_frame_shot_type("1", ShotType::Graphic).unwrap();

        let frame = store.get("1").unwrap();
        assert_eq!(frame.scene, "Cold Open");
        assert!(frame.brand_lock);
        assert_eq!(frame.shot_type, ShotType::Graphic);

        assert!(store.set_frame_scene("ghost", "x").is_err());
    }

    #[test]
    fn test_bulk_update_touches_exactly_the_selected_frames() {
        let mut store = starter_store();
        let untouched: Vec<Frame> = store
            .frames()
            .iter()
            .filter(|f| f.id != "2" && f.id != "4")
            .cloned()
            .collect();

        let ids: HashSet<String> = ["2", "4", "ghost"].iter().map(|s| s.to_string()).collect();
        store.bulk_update(&ids, &FramePatch::new().with_visual_style(VisualStyle::Minimalist));

        assert_eq!(store.get("2").unwrap().visual_style, VisualStyle::Minimalist);
        assert_eq!(store.get("4").unwrap().visual_style, VisualStyle::Minimalist);
        let still: Vec<Frame> = store
            .frames()
            .iter()
            .filter(|f| f.id != "2" && f.id != "4")
            .cloned()
            .collect();
        assert_eq!(still, untouched);
    }

    #[test]
    fn test_bulk_duplicate_appends_in_order_and_clears_selection() {
        let mut store = starter_store();
        store.toggle_multi_select("4", true);
        store.toggle_multi_select("2", true);

        let new_ids = store.bulk_duplicate_selected();

        assert_eq!(new_ids.len(), 2);
        assert_eq!(store.len(), 7);
        // Copies land at the end in the originals' board order: 2 then 4.
        assert_eq!(store.frames()[5].scene, "Problem Setup (Copy)");
        assert_eq!(store.frames()[6].scene, "Benefits Demo (Copy)");
        // Originals untouched, copies not auto-selected.
        assert_eq!(store.get("2").unwrap().scene, "Problem Setup");
        assert!(store.selected().is_empty());
    }

    #[test]
    fn test_reorder_duplicate_bulk_delete_scenario() {
        // Start with 5 frames ordered 1..5.
        let mut store = starter_store();

        store.reorder("5", 0).unwrap();
        assert_eq!(order(&store), vec!["5", "1", "2", "3", "4"]);

        let copy_id = store.duplicate("1").unwrap();
        assert_eq!(store.len(), 6);
        assert_eq!(store.frames()[2].id, copy_id);

        let ids: HashSet<String> = ["2", "3"].iter().map(|s| s.to_string()).collect();
        store.bulk_delete(&ids);
        assert_eq!(
            order(&store),
            vec!["5", "1", copy_id.as_str(), "4"]
        );
    }

    #[test]
    fn test_toggle_lock_uniform_group_round_trips() {
        let mut store = starter_store();
        let ids: HashSet<String> = ["1", "3", "4"].iter().map(|s| s.to_string()).collect();

        // All start unlocked: first call locks the whole group.
        assert!(store.toggle_lock_across_selection(LockKind::Character, &ids));
        assert!(ids.iter().all(|id| store.get(id).unwrap().character_lock));

        // Second call unlocks the whole group — original values restored.
        assert!(!store.toggle_lock_across_selection(LockKind::Character, &ids));
        assert!(ids.iter().all(|id| !store.get(id).unwrap().character_lock));
    }

    #[test]
    fn test_toggle_lock_mixed_group_locks_all() {
        let mut store = starter_store();
        store.set_frame_brand_lock("1", true).unwrap();
        let ids: HashSet<String> = ["1", "3"].iter().map(|s| s.to_string()).collect();

        // Mixed state is "not all locked", so the toggle locks everything.
        assert!(store.toggle_lock_across_selection(LockKind::Brand, &ids));
        assert!(store.get("1").unwrap().brand_lock);
        assert!(store.get("3").unwrap().brand_lock);
    }

    #[test]
    fn test_toggle_lock_empty_target_is_noop() {
        let mut store = starter_store();
        let before = store.snapshot();
        assert!(!store.toggle_lock_across_selection(LockKind::Visual, &HashSet::new()));
        assert_eq!(store.snapshot().frames, before.frames);
    }

    #[test]
    fn test_select_all_toggle() {
        let mut store = starter_store();
        store.select_all_toggle();
        assert_eq!(store.selected().len(), 5);
        store.select_all_toggle();
        assert!(store.selected().is_empty());
    }

    #[test]
    fn test_focus_navigation_wraps_both_ways() {
        let mut store = starter_store();
        store.focus(Some("5"));
        store.focus_next();
        assert_eq!(store.focused(), Some("1"));

        store.focus_previous();
        assert_eq!(store.focused(), Some("5"));
    }

    #[test]
    fn test_focus_navigation_noop_without_focus() {
        let mut store = starter_store();
        store.focus_next();
        assert_eq!(store.focused(), None);

        // Stale focus is inert too.
        store.focus(Some("ghost"));
        store.focus_next();
        assert_eq!(store.focused(), Some("ghost"));
    }

    #[test]
    fn test_escape_clears_selection_panel_and_playback() {
        let mut store = starter_store();
        store.focus(Some("2"));
        store.toggle_multi_select("3", true);
        store.toggle_playback();

        store.escape();

        assert_eq!(store.focused(), None);
        assert!(store.selected().is_empty());
        assert!(!store.view().playing);
    }

    #[test]
    fn test_snapshots_are_frozen() {
        let mut store = starter_store();
        let before = store.snapshot();

        store.set_frame_scene("1", "Changed").unwrap();
        let after = store.snapshot();

        assert_eq!(before.frames[0].scene, "Opening Hook");
        assert_eq!(after.frames[0].scene, "Changed");
    }

    #[test]
    fn test_snapshot_cache_survives_reads() {
        let mut store = starter_store();
        let a = store.snapshot();
        let b = store.snapshot();
        assert_eq!(a, b);
    }

    // =========================================================================
    // PROPERTY TESTS
    // =========================================================================

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        #[derive(Debug, Clone)]
        enum Op {
            Append(u8),
            AddFrame,
            Remove(u8),
            Reorder(u8, u8),
            Duplicate(u8),
            Toggle(u8, bool),
            Focus(Option<u8>),
            DeleteSelected,
        }

        fn op_strategy() -> impl Strategy<Value = Op> {
            prop_oneof![
                any::<u8>().prop_map(Op::Append),
                Just(Op::AddFrame),
                any::<u8>().prop_map(Op::Remove),
                (any::<u8>(), any::<u8>()).prop_map(|(a, b)| Op::Reorder(a, b)),
                any::<u8>().prop_map(Op::Duplicate),
                (any::<u8>(), any::<bool>()).prop_map(|(a, b)| Op::Toggle(a, b)),
                proptest::option::of(any::<u8>()).prop_map(Op::Focus),
                Just(Op::DeleteSelected),
            ]
        }

        fn nth_id(store: &StoryboardStore, n: u8) -> Option<String> {
            if store.is_empty() {
                return None;
            }
            let idx = n as usize % store.len();
            Some(store.frames()[idx].id.clone())
        }

        fn apply(store: &mut StoryboardStore, op: Op) {
            match op {
                Op::Append(n) => {
                    // Deliberately collides sometimes to exercise the
                    // duplicate-id rejection path.
                    let _ = store.append(Frame::new(format!("p{}", n % 16)));
                }
                Op::AddFrame => {
                    store.add_frame();
                }
                Op::Remove(n) => {
                    if let Some(id) = nth_id(store, n) {
                        store.remove(&id).unwrap();
                    }
                }
                Op::Reorder(n, target) => {
                    if let Some(id) = nth_id(store, n) {
                        store.reorder(&id, target as usize).unwrap();
                    }
                }
                Op::Duplicate(n) => {
                    if let Some(id) = nth_id(store, n) {
                        store.duplicate(&id).unwrap();
                    }
                }
                Op::Toggle(n, included) => {
                    if let Some(id) = nth_id(store, n) {
                        store.toggle_multi_select(&id, included);
                    }
                }
                Op::Focus(n) => {
                    let id = n.and_then(|n| nth_id(store, n));
                    store.focus(id.as_deref());
                }
                Op::DeleteSelected => {
                    store.bulk_delete_selected();
                }
            }
        }

        proptest! {
            /// Under any operation sequence the board never holds two
            /// frames with the same identifier, and selection never
            /// keeps an identifier the board has dropped.
            #[test]
            fn identifiers_stay_unique_and_selection_stays_live(
                ops in proptest::collection::vec(op_strategy(), 0..64)
            ) {
                let mut store = StoryboardStore::with_starter_frames();
                for op in ops {
                    apply(&mut store, op);

                    let ids: HashSet<&str> =
                        store.frames().iter().map(|f| f.id.as_str()).collect();
                    prop_assert_eq!(ids.len(), store.len());

                    for selected in store.selected() {
                        prop_assert!(ids.contains(selected.as_str()));
                    }
                    if let Some(focused) = store.focused() {
                        prop_assert!(ids.contains(focused));
                    }
                }
            }
        }
    }
}
