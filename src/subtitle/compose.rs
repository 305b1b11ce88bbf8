//! SRT serialization.

use crate::subtitle::types::SubtitleCue;

/// Render a second count as an SRT timestamp, `HH:MM:SS,mmm`.
fn seconds_to_srt_time(seconds: f64) -> String {
    let total_millis = (seconds.max(0.0) * 1000.0).round() as u64;
    let millis = total_millis % 1000;
    let total_secs = total_millis / 1000;
    let secs = total_secs % 60;
    let mins = (total_secs / 60) % 60;
    let hours = total_secs / 3600;
    format!("{hours:02}:{mins:02}:{secs:02},{millis:03}")
}

/// Serialize cues to SRT text, one block per cue in track order.
pub fn compose(cues: &[SubtitleCue]) -> String {
    let mut out = String::new();
    for cue in cues {
        out.push_str(&format!(
            "{}\n{} --> {}\n{}\n\n",
            cue.index,
            seconds_to_srt_time(cue.start),
            seconds_to_srt_time(cue.end),
            cue.text
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seconds_to_srt_time() {
        assert_eq!(seconds_to_srt_time(0.0), "00:00:00,000");
        assert_eq!(seconds_to_srt_time(3661.5), "01:01:01,500");
        assert_eq!(seconds_to_srt_time(65.25), "00:01:05,250");
    }

    #[test]
    fn test_compose_blocks() {
        let cues = vec![
            SubtitleCue::new(1, 0.0, 1.5, "Hello"),
            SubtitleCue::new(2, 2.0, 4.0, "Two\nlines"),
        ];
        let expected = "1\n00:00:00,000 --> 00:00:01,500\nHello\n\n\
2\n00:00:02,000 --> 00:00:04,000\nTwo\nlines\n\n";
        assert_eq!(compose(&cues), expected);
    }

    #[test]
    fn test_compose_empty_track() {
        assert_eq!(compose(&[]), "");
    }
}
