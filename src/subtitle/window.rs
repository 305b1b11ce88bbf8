//! Re-timing of subtitle cues into a segment's time window.

use crate::plan::TimeWindow;
use crate::subtitle::types::SubtitleCue;

/// Closed-interval intersection between a cue and `[start, end]`.
///
/// Partial overlap is enough; a cue does not need to be fully contained.
fn cue_overlaps(cue: &SubtitleCue, start: f64, end: f64) -> bool {
    (start <= cue.start && cue.start <= end) || (cue.start <= start && start <= cue.end)
}

/// Return the cues overlapping `window`, re-based to the window start and
/// renumbered 1-based.
///
/// A re-based start is clamped to zero; the end is not truncated to the
/// window length, so a cue that runs past the segment boundary keeps its full
/// span rather than being clipped mid-sentence. Relies on the track being
/// sorted by start time: iteration stops at the first cue starting at or
/// after the window end.
pub fn window_cues(track: &[SubtitleCue], window: TimeWindow) -> Vec<SubtitleCue> {
    let mut split = Vec::new();
    for cue in track {
        if cue_overlaps(cue, window.start, window.end) {
            split.push(SubtitleCue::new(
                split.len() + 1,
                (cue.start - window.start).max(0.0),
                cue.end - window.start,
                cue.text.clone(),
            ));
        } else if cue.start >= window.end {
            break;
        }
    }
    split
}
