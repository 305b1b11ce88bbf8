//! External transcode step: one ffmpeg invocation per planned segment.

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info};
use tokio::io::AsyncReadExt;
use tokio::process::Command;
use tokio::time::sleep;

use crate::error::{Result, SplitError};
use crate::media::tools::resolve_tool;
use crate::plan::TimeWindow;
use crate::task::CancelFlag;

/// How often the running external process is polled. Cancellation is
/// observed with at most this much delay.
const POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Terminal state of one transcode step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    /// The external process exited successfully.
    Finished,
    /// The process was killed because cancellation was observed mid-step.
    Killed,
}

/// Produces one output media file for a `[start, end]` window of the source.
///
/// Implementations must observe `cancel` at least once per polling interval
/// and terminate the in-flight operation when it is set.
#[async_trait]
pub trait SegmentTranscoder: Send + Sync {
    async fn transcode(
        &self,
        source: &Path,
        window: TimeWindow,
        output: &Path,
        cancel: &CancelFlag,
    ) -> Result<StepStatus>;
}

/// The real transcoder, driving an external ffmpeg process.
pub struct FfmpegTranscoder {
    ffmpeg: PathBuf,
}

impl FfmpegTranscoder {
    pub fn new(ffmpeg: PathBuf) -> Self {
        Self { ffmpeg }
    }

    /// Locate ffmpeg in `PATH` (or `./bin`) and build a transcoder around it.
    pub fn discover() -> Result<Self> {
        Ok(Self::new(resolve_tool("ffmpeg")?))
    }
}

/// Last few non-empty stderr lines, for failure diagnostics.
fn stderr_tail(stderr: &[u8]) -> String {
    let text = String::from_utf8_lossy(stderr);
    let mut tail: Vec<&str> = text
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .rev()
        .take(4)
        .collect();
    tail.reverse();
    tail.join(" | ")
}

#[async_trait]
impl SegmentTranscoder for FfmpegTranscoder {
    async fn transcode(
        &self,
        source: &Path,
        window: TimeWindow,
        output: &Path,
        cancel: &CancelFlag,
    ) -> Result<StepStatus> {
        // Start and end travel as plain decimal second counts. `-loglevel
        // error` keeps the piped stderr small enough to read after exit.
        let mut child = Command::new(&self.ffmpeg)
            .arg("-y")
            .arg("-hide_banner")
            .arg("-loglevel")
            .arg("error")
            .arg("-i")
            .arg(source)
            .arg("-ss")
            .arg(window.start.to_string())
            .arg("-to")
            .arg(window.end.to_string())
            .arg(output)
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| SplitError::ExternalStep(format!("failed to start ffmpeg: {e}")))?;

        debug!(
            "transcoding {} [{} - {}] -> {}",
            source.display(),
            window.start,
            window.end,
            output.display()
        );

        loop {
            if let Some(status) = child
                .try_wait()
                .map_err(|e| SplitError::ExternalStep(format!("failed to poll ffmpeg: {e}")))?
            {
                if status.success() {
                    return Ok(StepStatus::Finished);
                }
                let mut stderr_content = Vec::new();
                if let Some(mut stderr) = child.stderr.take() {
                    let _ = stderr.read_to_end(&mut stderr_content).await;
                }
                return Err(SplitError::ExternalStep(format!(
                    "ffmpeg exited with {}: {}",
                    status,
                    stderr_tail(&stderr_content)
                )));
            }

            if cancel.is_canceled() {
                info!("cancellation observed, killing ffmpeg");
                let _ = child.start_kill();
                let _ = child.wait().await;
                return Ok(StepStatus::Killed);
            }

            sleep(POLL_INTERVAL).await;
        }
    }
}
