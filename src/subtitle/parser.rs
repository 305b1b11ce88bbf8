//! Line-oriented SRT parser.

use std::path::Path;

use crate::error::{Result, SplitError};
use crate::subtitle::types::SubtitleCue;

/// Convert an SRT timestamp (`HH:MM:SS,mmm`, dot also accepted) to seconds.
fn srt_time_to_seconds(time: &str) -> Result<f64> {
    let normalized = time.trim().replace(',', ".");
    let parts: Vec<&str> = normalized.split(':').collect();
    if parts.len() != 3 {
        return Err(SplitError::SubtitleParsing(format!(
            "invalid SRT timestamp: {time}"
        )));
    }

    let hours: f64 = parts[0]
        .parse()
        .map_err(|_| SplitError::SubtitleParsing(format!("invalid hours field: {}", parts[0])))?;
    let minutes: f64 = parts[1]
        .parse()
        .map_err(|_| SplitError::SubtitleParsing(format!("invalid minutes field: {}", parts[1])))?;
    let seconds: f64 = parts[2]
        .parse()
        .map_err(|_| SplitError::SubtitleParsing(format!("invalid seconds field: {}", parts[2])))?;

    Ok(hours * 3600.0 + minutes * 60.0 + seconds)
}

/// Parse the `start --> end` timing line of a cue.
fn parse_time_range(line: &str) -> Result<(f64, f64)> {
    let parts: Vec<&str> = line.split("-->").collect();
    if parts.len() != 2 {
        return Err(SplitError::SubtitleParsing(format!(
            "invalid timing line: {line}"
        )));
    }
    let start = srt_time_to_seconds(parts[0])?;
    let end = srt_time_to_seconds(parts[1])?;
    Ok((start, end))
}

/// Parse SRT content into a list of cues, renumbered 1-based in track order.
///
/// Index lines in the input are skipped; cues keep their on-disk order, which
/// for a well-formed track is chronological by start time.
pub fn parse_srt(content: &str) -> Result<Vec<SubtitleCue>> {
    let content = content.trim_start_matches('\u{feff}');
    let lines: Vec<&str> = content.lines().collect();
    let mut cues = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        if lines[i].trim().is_empty() {
            i += 1;
            continue;
        }

        // Optional numeric index line before the timing line.
        if !lines[i].contains("-->") {
            let candidate = lines[i].trim();
            if candidate.parse::<usize>().is_err() {
                return Err(SplitError::SubtitleParsing(format!(
                    "expected a cue index or timing line, got: {candidate}"
                )));
            }
            i += 1;
            if i >= lines.len() {
                break;
            }
        }

        if !lines[i].contains("-->") {
            return Err(SplitError::SubtitleParsing(format!(
                "expected a timing line, got: {}",
                lines[i]
            )));
        }

        let (start, end) = parse_time_range(lines[i])?;
        i += 1;

        let mut text = String::new();
        while i < lines.len() && !lines[i].trim().is_empty() {
            if !text.is_empty() {
                text.push('\n');
            }
            text.push_str(lines[i].trim_end());
            i += 1;
        }

        if !text.is_empty() {
            cues.push(SubtitleCue::new(cues.len() + 1, start, end, text));
        }
    }

    Ok(cues)
}

/// Read and parse an SRT file.
pub fn parse_srt_file(path: &Path) -> Result<Vec<SubtitleCue>> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        SplitError::SubtitleParsing(format!("failed to read {}: {e}", path.display()))
    })?;
    parse_srt(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "1\n\
00:00:01,000 --> 00:00:03,000\n\
First line.\n\
\n\
2\n\
00:00:03,500 --> 00:00:05,000\n\
Second cue,\n\
second line of it.\n\
\n\
3\n\
00:01:05,250 --> 00:01:10,000\n\
Third cue.\n";

    #[test]
    fn test_srt_time_to_seconds() {
        assert_eq!(srt_time_to_seconds("00:00:01,000").unwrap(), 1.0);
        assert_eq!(srt_time_to_seconds("01:01:01,500").unwrap(), 3661.5);
        assert_eq!(srt_time_to_seconds("00:00:02.250").unwrap(), 2.25);
    }

    #[test]
    fn test_srt_time_rejects_garbage() {
        assert!(srt_time_to_seconds("1000").is_err());
        assert!(srt_time_to_seconds("aa:bb:cc,ddd").is_err());
    }

    #[test]
    fn test_parse_sample_track() {
        let cues = parse_srt(SAMPLE).unwrap();
        assert_eq!(cues.len(), 3);

        assert_eq!(cues[0].index, 1);
        assert_eq!(cues[0].start, 1.0);
        assert_eq!(cues[0].end, 3.0);
        assert_eq!(cues[0].text, "First line.");

        assert_eq!(cues[1].index, 2);
        assert_eq!(cues[1].text, "Second cue,\nsecond line of it.");

        assert_eq!(cues[2].start, 65.25);
        assert_eq!(cues[2].end, 70.0);
    }

    #[test]
    fn test_parse_tolerates_bom_and_missing_index() {
        let input = "\u{feff}00:00:01,000 --> 00:00:02,000\nNo index line.\n";
        let cues = parse_srt(input).unwrap();
        assert_eq!(cues.len(), 1);
        assert_eq!(cues[0].text, "No index line.");
    }

    #[test]
    fn test_parse_rejects_bad_timing_line() {
        let input = "1\nnot a timing line\ntext\n";
        assert!(parse_srt(input).is_err());
    }

    #[test]
    fn test_parse_rejects_garbage_before_timing_line() {
        let input = "garbage\n00:00:01,000 --> 00:00:02,000\ntext\n";
        let err = parse_srt(input).unwrap_err();
        assert!(err.to_string().contains("garbage"));
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(parse_srt("").unwrap().is_empty());
    }
}
