//! Script-to-storyboard analysis placeholder.
//!
//! There is no real script understanding here: suggestions come from a
//! fixed catalog, and confidences are hard-coded display values. The
//! only parsing is the `[SCENE …]` header convention the script editor
//! suggests in its placeholder text, used to name one suggestion per
//! scene the author already marked.

use serde::{Deserialize, Serialize};

use crate::error::{BoardError, BoardResult};
use crate::storyboard::model::Frame;
use crate::storyboard::timeline::{format_stamp, DEFAULT_SLOT_SECS};

/// One suggested storyboard scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneSuggestion {
    /// Suggested scene title.
    pub scene: String,
    /// Suggested visual treatment.
    pub suggestion: String,
    /// Match percentage shown on the suggestion card. Placeholder only.
    pub confidence: u8,
}

/// The fixed suggestion catalog.
const CATALOG: [(&str, &str, u8); 4] = [
    (
        "Opening Hook",
        "Close-up shot of product with dramatic lighting",
        95,
    ),
    (
        "Problem Statement",
        "Split screen showing before/after scenarios",
        88,
    ),
    (
        "Solution Demo",
        "Dynamic product showcase with smooth transitions",
        92,
    ),
    (
        "Call to Action",
        "Bold text overlay with branded background",
        90,
    ),
];

fn catalog_suggestions() -> Vec<SceneSuggestion> {
    CATALOG
        .iter()
        .map(|(scene, suggestion, confidence)| SceneSuggestion {
            scene: (*scene).to_string(),
            suggestion: (*suggestion).to_string(),
            confidence: *confidence,
        })
        .collect()
}

/// Extracts scene titles from `[SCENE N - TITLE]` header lines.
fn scene_headers(script: &str) -> Vec<String> {
    script
        .lines()
        .filter_map(|line| {
            let line = line.trim();
            let inner = line.strip_prefix('[')?.strip_suffix(']')?;
            let rest = inner.strip_prefix("SCENE")?.trim();
            let title = match rest.split_once('-') {
                Some((_, title)) => title.trim(),
                None => rest,
            };
            if title.is_empty() {
                None
            } else {
                Some(title_case(title))
            }
        })
        .collect()
}

fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let lower = word.to_lowercase();
            let mut chars = lower.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// "Generate Storyboard": produces scene suggestions for a script.
///
/// A blank script is rejected (the UI disables the button, but the
/// engine guards anyway). Scripts with `[SCENE …]` headers get one
/// suggestion per header, titled from the header; anything else gets
/// the catalog verbatim.
pub fn analyze(script: &str) -> BoardResult<Vec<SceneSuggestion>> {
    if script.trim().is_empty() {
        return Err(BoardError::EmptyScript);
    }

    let headers = scene_headers(script);
    if headers.is_empty() {
        return Ok(catalog_suggestions());
    }

    Ok(headers
        .into_iter()
        .enumerate()
        .map(|(i, scene)| {
            let (_, suggestion, confidence) = CATALOG[i % CATALOG.len()];
            SceneSuggestion {
                scene,
                suggestion: suggestion.to_string(),
                confidence,
            }
        })
        .collect())
}

/// "Create Storyboard from Suggestions": one frame per suggestion.
///
/// Frames get fresh identifiers and sequential default-length slots on
/// the clock.
pub fn frames_from_suggestions(suggestions: &[SceneSuggestion]) -> Vec<Frame> {
    suggestions
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let start = i as u32 * DEFAULT_SLOT_SECS;
            let end = start + DEFAULT_SLOT_SECS;
            Frame::create()
                .with_scene(&s.scene)
                .with_description(&s.suggestion)
                .with_timestamp(format_stamp(start))
                .with_duration(format!("{}-{}", format_stamp(start), format_stamp(end)))
        })
        .collect()
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storyboard::store::StoryboardStore;

    const MARKED_SCRIPT: &str = "\
[SCENE 1 - OPENING]
A busy professional struggles with morning routine, rushing to get ready.

[SCENE 2 - PROBLEM]
Coffee spills, clothes wrinkled, keys missing - chaos everywhere.

[SCENE 3 - SOLUTION]
Introduce your product/service as the solution.";

    #[test]
    fn test_blank_script_is_rejected() {
        assert!(matches!(analyze("   \n\t"), Err(BoardError::EmptyScript)));
    }

    #[test]
    fn test_unmarked_script_gets_the_catalog() {
        let suggestions = analyze("Sell the new blender. Make it shiny.").unwrap();
        assert_eq!(suggestions.len(), 4);
        assert_eq!(suggestions[0].scene, "Opening Hook");
        assert_eq!(suggestions[0].confidence, 95);
        assert_eq!(suggestions[3].scene, "Call to Action");
    }

    #[test]
    fn test_marked_script_names_suggestions_from_headers() {
        let suggestions = analyze(MARKED_SCRIPT).unwrap();
        assert_eq!(suggestions.len(), 3);
        assert_eq!(suggestions[0].scene, "Opening");
        assert_eq!(suggestions[1].scene, "Problem");
        assert_eq!(suggestions[2].scene, "Solution");
        // Suggestion bodies cycle through the catalog.
        assert_eq!(suggestions[1].confidence, 88);
    }

    #[test]
    fn test_header_without_title_is_skipped() {
        let suggestions = analyze("[SCENE 1 -  ]\nsome action").unwrap();
        // Falls back to the catalog when no header yields a title.
        assert_eq!(suggestions.len(), 4);
    }

    #[test]
    fn test_frames_from_suggestions_slots_sequentially() {
        let suggestions = analyze(MARKED_SCRIPT).unwrap();
        let frames = frames_from_suggestions(&suggestions);

        assert_eq!(frames.len(), 3);
        assert_eq!(frames[0].scene, "Opening");
        assert_eq!(frames[0].duration, "0:00-0:05");
        assert_eq!(frames[1].timestamp, "0:05");
        assert_eq!(frames[2].duration, "0:10-0:15");
        assert_ne!(frames[0].id, frames[1].id);
    }

    #[test]
    fn test_generated_frames_seed_a_store() {
        let suggestions = analyze("an unmarked script").unwrap();
        let frames = frames_from_suggestions(&suggestions);
        let store = StoryboardStore::from_frames(frames).unwrap();
        assert_eq!(store.len(), 4);
    }
}
