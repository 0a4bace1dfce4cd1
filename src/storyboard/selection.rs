//! Selection state over the storyboard.
//!
//! Two independent pieces: the single focused frame (drives the side
//! panel and keyboard navigation) and the multi-select set (drives bulk
//! operations). Both hold identifiers only — a selection never owns a
//! frame, and stale identifiers are inert rather than errors.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Focused frame + multi-select set.
///
/// The focused frame need not be in the multi-select set, and vice
/// versa.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    /// Identifier of the frame open in the detail panel, if any.
    pub focused: Option<String>,
    /// Identifiers targeted by bulk operations.
    pub selected: HashSet<String>,
}

impl Selection {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets or clears the focused frame.
    pub fn focus(&mut self, id: Option<&str>) {
        self.focused = id.map(str::to_owned);
    }

    /// Adds `id` to the multi-select set if `included`, removes it otherwise.
    ///
    /// Tolerant of identifiers that are not (or no longer) in the
    /// collection.
    pub fn toggle(&mut self, id: &str, included: bool) {
        if included {
            self.selected.insert(id.to_owned());
        } else {
            self.selected.remove(id);
        }
    }

    /// Replaces the multi-select set with the given identifiers.
    pub fn select_all<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected = ids.into_iter().map(Into::into).collect();
    }

    /// Empties the multi-select set.
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Toggles between "everything selected" and "nothing selected".
    ///
    /// If the set already covers the whole collection it is cleared;
    /// otherwise it becomes the full collection.
    pub fn select_all_toggle<'a, I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        let all: HashSet<String> = ids.into_iter().map(str::to_owned).collect();
        if self.selected.len() == all.len() {
            self.selected.clear();
        } else {
            self.selected = all;
        }
    }

    /// True if `id` is in the multi-select set.
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    /// Number of multi-selected identifiers.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// True if nothing is multi-selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Drops `id` from both focus and the multi-select set.
    ///
    /// Called by the store whenever a frame leaves the collection so no
    /// dangling references survive a removal.
    pub fn forget(&mut self, id: &str) {
        if self.focused.as_deref() == Some(id) {
            self.focused = None;
        }
        self.selected.remove(id);
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_and_clear() {
        let mut sel = Selection::new();
        sel.focus(Some("a"));
        assert_eq!(sel.focused.as_deref(), Some("a"));
        sel.focus(None);
        assert_eq!(sel.focused, None);
    }

    #[test]
    fn test_toggle_is_stale_tolerant() {
        let mut sel = Selection::new();
        sel.toggle("ghost", false);
        assert!(sel.is_empty());
        sel.toggle("a", true);
        sel.toggle("a", true);
        assert_eq!(sel.len(), 1);
    }

    #[test]
    fn test_select_all_toggle_full_then_empty() {
        let mut sel = Selection::new();
        let ids = ["a", "b", "c"];

        sel.select_all_toggle(ids);
        assert_eq!(sel.len(), 3);

        sel.select_all_toggle(ids);
        assert!(sel.is_empty());
    }

    #[test]
    fn test_select_all_toggle_partial_selects_all() {
        let mut sel = Selection::new();
        sel.toggle("a", true);

        sel.select_all_toggle(["a", "b", "c"]);
        assert_eq!(sel.len(), 3);
    }

    #[test]
    fn test_forget_clears_focus_and_membership() {
        let mut sel = Selection::new();
        sel.focus(Some("a"));
        sel.toggle("a", true);
        sel.toggle("b", true);

        sel.forget("a");
        assert_eq!(sel.focused, None);
        assert!(!sel.is_selected("a"));
        assert!(sel.is_selected("b"));
    }

    #[test]
    fn test_forget_leaves_unrelated_focus() {
        let mut sel = Selection::new();
        sel.focus(Some("b"));
        sel.toggle("a", true);

        sel.forget("a");
        assert_eq!(sel.focused.as_deref(), Some("b"));
    }
}
