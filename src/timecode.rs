//! Fixed-width time labels used to name segment output files.

/// Render a second count as `{hh}h{mm}m{ss}s{mmm}ms`.
///
/// The label only contains digits and lowercase ASCII letters, so it is safe
/// to embed in a filename, and labels sharing the same hour count sort
/// lexicographically. Fractions below one millisecond are truncated, not
/// rounded. All four components are always present, even for zero.
pub fn format_time(seconds: f64) -> String {
    let total_millis = (seconds.max(0.0) * 1000.0) as u64;
    let millis = total_millis % 1000;
    let total_secs = total_millis / 1000;
    let secs = total_secs % 60;
    let mins = (total_secs / 60) % 60;
    let hours = total_secs / 3600;
    format!("{hours:02}h{mins:02}m{secs:02}s{millis:03}ms")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_keeps_all_components() {
        assert_eq!(format_time(0.0), "00h00m00s000ms");
    }

    #[test]
    fn test_decomposition() {
        assert_eq!(format_time(3661.5), "01h01m01s500ms");
        assert_eq!(format_time(59.999), "00h00m59s999ms");
        assert_eq!(format_time(3600.0), "01h00m00s000ms");
    }

    #[test]
    fn test_truncates_below_millisecond() {
        assert_eq!(format_time(1.0009), "00h00m01s000ms");
    }

    #[test]
    fn test_sortable_within_hour() {
        let a = format_time(61.0);
        let b = format_time(610.0);
        assert!(a < b);
    }
}
