//! Media duration probing via ffprobe.

use std::path::Path;
use std::process::Stdio;

use log::debug;
use regex::Regex;
use tokio::process::Command;

use crate::error::{Result, SplitError};

/// Extract the `duration=<seconds>` field from ffprobe's format section.
fn parse_duration_output(output: &str) -> Result<f64> {
    let re = Regex::new(r"duration=(\d+(?:\.\d+)?)")
        .map_err(|e| SplitError::Probe(e.to_string()))?;
    let secs = re
        .captures(output)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .ok_or_else(|| SplitError::Probe("no duration field in ffprobe output".to_string()))?;

    if !secs.is_finite() || secs < 0.0 {
        return Err(SplitError::Probe(format!(
            "ffprobe reported an invalid duration: {secs}"
        )));
    }
    Ok(secs)
}

/// Determine the total duration of `media` in seconds.
pub async fn probe_duration(ffprobe: &Path, media: &Path) -> Result<f64> {
    let output = Command::new(ffprobe)
        .arg("-i")
        .arg(media)
        .arg("-show_format")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await
        .map_err(|e| SplitError::Probe(format!("failed to run ffprobe: {e}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(SplitError::Probe(format!(
            "ffprobe exited with {}: {}",
            output.status,
            stderr.trim()
        )));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let duration = parse_duration_output(&stdout)?;
    debug!("probed duration of {}: {duration}s", media.display());
    Ok(duration)
}
