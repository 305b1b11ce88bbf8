//! Segment planning: cover a known total duration with fixed-length windows.

use crate::error::{Result, SplitError};

/// One planned output segment, in seconds from the start of the media.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeWindow {
    pub start: f64,
    pub end: f64,
}

impl TimeWindow {
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// Compute the ordered list of windows covering `[0, total]`.
///
/// Each window is `[cursor, min(cursor + segment_length, total)]` with the
/// cursor advancing by the requested length, so windows are contiguous and
/// the final window ends exactly at `total`. An exactly-dividing length does
/// not produce a trailing empty window.
pub fn plan_segments(total: f64, segment_length: f64) -> Result<Vec<TimeWindow>> {
    if !total.is_finite() || total < 0.0 {
        return Err(SplitError::InvalidParameter(format!(
            "total duration must be a non-negative number of seconds, got {total}"
        )));
    }
    if !segment_length.is_finite() || segment_length <= 0.0 {
        return Err(SplitError::InvalidParameter(format!(
            "segment length must be a positive number of seconds, got {segment_length}"
        )));
    }

    let mut windows = Vec::with_capacity((total / segment_length).ceil() as usize);
    let mut cursor = 0.0;
    while cursor < total {
        windows.push(TimeWindow {
            start: cursor,
            end: (cursor + segment_length).min(total),
        });
        cursor += segment_length;
    }
    Ok(windows)
}
