//! Subtitle track data model.

/// One subtitle cue, with timing in seconds from the start of its track.
#[derive(Debug, Clone, PartialEq)]
pub struct SubtitleCue {
    /// 1-based position within the track.
    pub index: usize,
    /// Start time in seconds.
    pub start: f64,
    /// End time in seconds.
    pub end: f64,
    /// Cue text, possibly spanning multiple lines.
    pub text: String,
}

impl SubtitleCue {
    pub fn new(index: usize, start: f64, end: f64, text: impl Into<String>) -> Self {
        Self {
            index,
            start,
            end,
            text: text.into(),
        }
    }

    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}
