//! Progress and outcome types surfaced to the coordinating layer.

use serde::{Deserialize, Serialize};

/// Progress snapshot published before each segment and once on completion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitProgress {
    /// Seconds of the source processed so far, from 0 to the total duration.
    pub seconds_done: f64,
    /// 1-based index of the segment being produced.
    pub segment_index: usize,
    /// Total number of planned segments.
    pub segment_count: usize,
}

/// Terminal status of one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SplitOutcome {
    Completed,
    Canceled,
    Failed(String),
}

/// How the engine's segment loop ended, before conversion to an outcome.
///
/// Cancellation is a normal way for the loop to finish, not an error, so it
/// travels on the `Ok` side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Completed,
    Canceled,
}
