//! Error types for the splitting pipeline.

use thiserror::Error;

/// Errors produced while planning or running a split.
#[derive(Debug, Error)]
pub enum SplitError {
    /// A caller-supplied parameter was rejected before any work started.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The media duration could not be determined.
    #[error("media probe failed: {0}")]
    Probe(String),

    /// The external transcode step exited with an error.
    #[error("transcode step failed: {0}")]
    ExternalStep(String),

    /// The subtitle track could not be parsed.
    #[error("subtitle parsing error: {0}")]
    SubtitleParsing(String),

    /// A required external executable was not found.
    #[error("external tool not found: {0}")]
    ToolNotFound(String),

    /// IO error while writing segment outputs.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, SplitError>;
