/// Formats milliseconds as `MM:SS.CC`.
///
/// Minutes are not wrapped into hours: an hour reads `60:00.00` and anything
/// past 99 minutes simply grows a third digit. Centiseconds are truncated.
pub fn format_elapsed(ms: u64) -> String {
    let total_secs = ms / 1000;
    let m = total_secs / 60;
    let s = total_secs % 60;
    let cs = (ms % 1000) / 10;
    format!("{:02}:{:02}.{:02}", m, s, cs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_zero() {
        assert_eq!(format_elapsed(0), "00:00.00");
    }

    #[test]
    fn test_format_minutes_seconds_centis() {
        assert_eq!(format_elapsed(61_234), "01:01.23");
        assert_eq!(format_elapsed(4_200), "00:04.20");
        assert_eq!(format_elapsed(59_999), "00:59.99");
    }

    #[test]
    fn test_format_truncates_centiseconds() {
        assert_eq!(format_elapsed(9), "00:00.00");
        assert_eq!(format_elapsed(19), "00:00.01");
    }

    #[test]
    fn test_format_minutes_unbounded() {
        assert_eq!(format_elapsed(3_600_000), "60:00.00");
        assert_eq!(format_elapsed(100 * 60_000 + 5_000), "100:05.00");
    }
}
