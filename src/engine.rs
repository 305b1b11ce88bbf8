//! Batch segmentation engine.
//!
//! One run walks the segment plan in order and, for every window, writes the
//! re-timed subtitle subset and drives one external transcode step. All
//! UI-visible effects leave through the [`WorkerContext`]; the only way back
//! in is the cancellation flag.

use log::{info, warn};

use crate::config::SplitConfig;
use crate::error::{Result, SplitError};
use crate::media::transcode::{SegmentTranscoder, StepStatus};
use crate::plan::plan_segments;
use crate::progress::{RunStatus, SplitProgress};
use crate::subtitle::{compose, parse_srt_file, window_cues};
use crate::task::WorkerContext;
use crate::timecode::format_time;

/// Orchestrates one splitting run over a planned sequence of windows.
pub struct ClipSplitter<T: SegmentTranscoder> {
    config: SplitConfig,
    transcoder: T,
}

impl<T: SegmentTranscoder> ClipSplitter<T> {
    pub fn new(config: SplitConfig, transcoder: T) -> Self {
        Self { config, transcoder }
    }

    /// Run the segment loop to completion, cancellation or failure.
    ///
    /// Outputs already written for earlier segments, and any partial output
    /// of the segment in flight when cancellation or failure hits, are left
    /// on disk as-is.
    pub async fn run(&self, ctx: &WorkerContext) -> Result<RunStatus> {
        let windows = plan_segments(self.config.total_duration, self.config.segment_length)?;
        let segment_count = windows.len();

        let track = parse_srt_file(&self.config.subtitle_path)?;
        info!(
            "splitting {} into {segment_count} segments of {}s",
            self.config.media_path.display(),
            self.config.segment_length
        );

        let stem = self
            .config
            .media_path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| {
                SplitError::InvalidParameter(format!(
                    "media path has no usable file name: {}",
                    self.config.media_path.display()
                ))
            })?;
        let extension = self.config.media_path.extension().and_then(|e| e.to_str());

        for (i, window) in windows.iter().enumerate() {
            let segment_index = i + 1;

            if ctx.is_canceled() {
                warn!("run canceled before segment {segment_index}");
                return Ok(RunStatus::Canceled);
            }

            ctx.progress(SplitProgress {
                seconds_done: window.start,
                segment_index,
                segment_count,
            });

            let base = format!(
                "{stem}_{}-{}",
                format_time(window.start),
                format_time(window.end)
            );
            let media_name = match extension {
                Some(ext) => format!("{base}.{ext}"),
                None => base.clone(),
            };
            let media_out = self.config.output_dir.join(media_name);
            let subtitle_out = self.config.output_dir.join(format!("{base}.srt"));

            let windowed = window_cues(&track, *window);
            tokio::fs::write(&subtitle_out, compose(&windowed)).await?;
            info!(
                "segment {segment_index}/{segment_count}: wrote {} cue(s) to {}",
                windowed.len(),
                subtitle_out.display()
            );

            let status = self
                .transcoder
                .transcode(
                    &self.config.media_path,
                    *window,
                    &media_out,
                    ctx.cancel_flag(),
                )
                .await?;
            match status {
                StepStatus::Finished => {}
                StepStatus::Killed => {
                    warn!("run canceled during segment {segment_index}");
                    return Ok(RunStatus::Canceled);
                }
            }
        }

        ctx.progress(SplitProgress {
            seconds_done: self.config.total_duration,
            segment_index: segment_count,
            segment_count,
        });
        info!("all {segment_count} segments completed");
        Ok(RunStatus::Completed)
    }
}
