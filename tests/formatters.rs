#[cfg(test)]
mod tests {
    use liftlog::libs::formatter::format_clock;

    #[test]
    fn test_format_clock_zero() {
        assert_eq!(format_clock(0), "0:00");
    }

    #[test]
    fn test_format_clock_under_a_minute() {
        assert_eq!(format_clock(5), "0:05");
        assert_eq!(format_clock(59), "0:59");
    }

    #[test]
    fn test_format_clock_minutes() {
        assert_eq!(format_clock(60), "1:00");
        assert_eq!(format_clock(65), "1:05");
        assert_eq!(format_clock(600), "10:00");
        assert_eq!(format_clock(3599), "59:59");
    }

    #[test]
    fn test_format_clock_hours() {
        assert_eq!(format_clock(3600), "1:00:00");
        assert_eq!(format_clock(3605), "1:00:05");
        assert_eq!(format_clock(7325), "2:02:05");
        assert_eq!(format_clock(36_000), "10:00:00");
    }

    #[test]
    fn test_format_clock_no_leading_zero_on_leading_unit() {
        // Only the trailing units are zero padded.
        assert_eq!(format_clock(61), "1:01");
        assert_eq!(format_clock(3661), "1:01:01");
    }
}
