//! Timeline math over frame duration labels.
//!
//! Duration labels are display strings ("0:03-0:08"); this module
//! parses them, totals them for the timeline header, and rebuilds them
//! after the order changes. Unparseable labels fall back to a default
//! slot length instead of failing — a hand-edited label never breaks
//! the scrubber.

use serde::{Deserialize, Serialize};

use crate::storyboard::model::Frame;

/// Slot length assumed for frames whose duration label does not parse.
pub const DEFAULT_SLOT_SECS: u32 = 5;

/// Parses a "M:SS" stamp into seconds.
pub fn parse_stamp(stamp: &str) -> Option<u32> {
    let (minutes, seconds) = stamp.trim().split_once(':')?;
    let minutes: u32 = minutes.parse().ok()?;
    let seconds: u32 = seconds.parse().ok()?;
    if seconds >= 60 {
        return None;
    }
    Some(minutes * 60 + seconds)
}

/// Formats seconds as a "M:SS" stamp.
pub fn format_stamp(total_secs: u32) -> String {
    format!("{}:{:02}", total_secs / 60, total_secs % 60)
}

/// Parses a "M:SS-M:SS" range label into (start, end) seconds.
///
/// Returns None for malformed labels or ranges that run backwards.
pub fn parse_range(label: &str) -> Option<(u32, u32)> {
    let (start, end) = label.trim().split_once('-')?;
    let start = parse_stamp(start)?;
    let end = parse_stamp(end)?;
    if end < start {
        return None;
    }
    Some((start, end))
}

/// Seconds a frame occupies on the timeline.
pub fn frame_seconds(frame: &Frame) -> u32 {
    match parse_range(&frame.duration) {
        Some((start, end)) => end - start,
        None => DEFAULT_SLOT_SECS,
    }
}

/// Total run length of the storyboard in seconds.
pub fn total_seconds(frames: &[Frame]) -> u32 {
    frames.iter().map(frame_seconds).sum()
}

/// Total run length as a display stamp, e.g. "0:30".
pub fn total_duration(frames: &[Frame]) -> String {
    format_stamp(total_seconds(frames))
}

/// One scrubber segment: what the timeline strip renders per frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineSegment {
    /// Frame identifier (click target).
    pub id: String,
    /// 1-indexed display number.
    pub number: usize,
    /// Scene title overlay.
    pub title: String,
    /// Start stamp overlay.
    pub timestamp: String,
    /// Share of the track width, equal per frame.
    pub fraction: f32,
}

/// Builds equal-width scrubber segments in collection order.
pub fn segments(frames: &[Frame]) -> Vec<TimelineSegment> {
    if frames.is_empty() {
        return Vec::new();
    }
    let fraction = 1.0 / frames.len() as f32;
    frames
        .iter()
        .enumerate()
        .map(|(i, frame)| TimelineSegment {
            id: frame.id.clone(),
            number: i + 1,
            title: frame.scene.clone(),
            timestamp: frame.timestamp.clone(),
            fraction,
        })
        .collect()
}

/// Rewrites timestamps and duration labels from accumulated slot lengths.
///
/// Each frame keeps its own length; only its position on the clock
/// moves. Called after reorders and removals so labels follow the new
/// order.
pub fn retime(frames: &mut [Frame]) {
    let mut clock = 0u32;
    for frame in frames.iter_mut() {
        let secs = frame_seconds(frame);
        frame.timestamp = format_stamp(clock);
        frame.duration = format!("{}-{}", format_stamp(clock), format_stamp(clock + secs));
        clock += secs;
    }
}

// =============================================================================
// TESTS
// =============================================================================
