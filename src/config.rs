//! Run configuration.

use std::path::PathBuf;

use crate::error::{Result, SplitError};

/// Inputs for one splitting run, as supplied by the coordinating layer.
#[derive(Debug, Clone)]
pub struct SplitConfig {
    /// Source media file.
    pub media_path: PathBuf,
    /// SRT subtitle track accompanying the media.
    pub subtitle_path: PathBuf,
    /// Existing, writable directory receiving all segment outputs.
    pub output_dir: PathBuf,
    /// Requested clip length in seconds.
    pub segment_length: f64,
    /// Total media duration in seconds, as reported by the probe step.
    pub total_duration: f64,
}

impl SplitConfig {
    /// Check the configuration before any segment is produced.
    pub fn validate(&self) -> Result<()> {
        if !self.media_path.is_file() {
            return Err(SplitError::InvalidParameter(format!(
                "media file not found: {}",
                self.media_path.display()
            )));
        }
        if !self.subtitle_path.is_file() {
            return Err(SplitError::InvalidParameter(format!(
                "subtitle file not found: {}",
                self.subtitle_path.display()
            )));
        }
        if !self.output_dir.is_dir() {
            return Err(SplitError::InvalidParameter(format!(
                "output directory not found: {}",
                self.output_dir.display()
            )));
        }
        if !self.segment_length.is_finite() || self.segment_length <= 0.0 {
            return Err(SplitError::InvalidParameter(format!(
                "segment length must be a positive number of seconds, got {}",
                self.segment_length
            )));
        }
        if !self.total_duration.is_finite() || self.total_duration < 0.0 {
            return Err(SplitError::InvalidParameter(format!(
                "total duration must be a non-negative number of seconds, got {}",
                self.total_duration
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::tempdir;

    fn valid_config(dir: &std::path::Path) -> SplitConfig {
        let media = dir.join("input.mp4");
        let subs = dir.join("input.srt");
        File::create(&media).unwrap();
        File::create(&subs).unwrap();
        SplitConfig {
            media_path: media,
            subtitle_path: subs,
            output_dir: dir.to_path_buf(),
            segment_length: 60.0,
            total_duration: 600.0,
        }
    }

    #[test]
    fn test_valid_config_passes() {
        let dir = tempdir().unwrap();
        assert!(valid_config(dir.path()).validate().is_ok());
    }

    #[test]
    fn test_missing_inputs_are_rejected() {
        let dir = tempdir().unwrap();
        let mut config = valid_config(dir.path());
        config.media_path = dir.path().join("missing.mp4");
        assert!(config.validate().is_err());

        let mut config = valid_config(dir.path());
        config.output_dir = dir.path().join("missing-dir");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_non_positive_length_is_rejected() {
        let dir = tempdir().unwrap();
        let mut config = valid_config(dir.path());
        config.segment_length = 0.0;
        let err = config.validate().unwrap_err();
        assert!(matches!(err, SplitError::InvalidParameter(_)));
    }
}
