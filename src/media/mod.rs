//! External media tooling: ffprobe/ffmpeg discovery and the per-segment
//! transcode step.

pub mod probe;
pub mod tools;
pub mod transcode;

pub use probe::probe_duration;
pub use tools::resolve_tool;
pub use transcode::{FfmpegTranscoder, SegmentTranscoder, StepStatus};
