//! clipsplit: batch splitting of a media file and its SRT subtitle track
//! into fixed-length segments.
//!
//! A run plans contiguous time windows over the media duration, then walks
//! them in order: for every window it writes the re-timed subtitle subset
//! and drives one external ffmpeg invocation. The run executes on the tokio
//! runtime; the embedding side observes it through an ordered event stream
//! and can cancel it at any time.
//!
//! # Example
//!
//! ```no_run
//! use clipsplit::{FfmpegTranscoder, SplitConfig, SplitEvent, spawn_split};
//!
//! # async fn demo() -> anyhow::Result<()> {
//! let config = SplitConfig {
//!     media_path: "movie.mp4".into(),
//!     subtitle_path: "movie.srt".into(),
//!     output_dir: "out".into(),
//!     segment_length: 300.0,
//!     total_duration: 5400.0,
//! };
//! let mut task = spawn_split(config, FfmpegTranscoder::discover()?);
//! while let Some(event) = task.next_event().await {
//!     match event {
//!         SplitEvent::Progress(p) => println!("{}s done", p.seconds_done),
//!         SplitEvent::Done(outcome) => println!("{outcome:?}"),
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod media;
pub mod plan;
pub mod progress;
pub mod subtitle;
pub mod task;
pub mod timecode;

pub use config::SplitConfig;
pub use engine::ClipSplitter;
pub use error::{Result, SplitError};
pub use media::{FfmpegTranscoder, SegmentTranscoder, StepStatus, probe_duration, resolve_tool};
pub use plan::{TimeWindow, plan_segments};
pub use progress::{RunStatus, SplitOutcome, SplitProgress};
pub use subtitle::SubtitleCue;
pub use task::{BackgroundTask, CancelFlag, SplitEvent, run_in_background};
pub use timecode::format_time;

/// Validate `config` and start a splitting run in the background.
///
/// The returned [`BackgroundTask`] yields progress events in order and ends
/// with exactly one terminal [`SplitEvent::Done`]. Validation errors surface
/// the same way, as a `Done(Failed(..))` before any output is produced.
pub fn spawn_split<T>(config: SplitConfig, transcoder: T) -> BackgroundTask
where
    T: SegmentTranscoder + 'static,
{
    run_in_background(move |ctx| async move {
        config.validate()?;
        ClipSplitter::new(config, transcoder).run(&ctx).await
    })
}
