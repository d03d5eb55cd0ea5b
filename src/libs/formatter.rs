//! Clock formatting for countdown displays.
//!
//! All displayed times share one rule: durations of an hour or more render
//! as `H:MM:SS`, shorter ones as `M:SS`. The leading unit carries no zero
//! padding, every following unit is two digits. `65` seconds is `"1:05"`,
//! `3605` is `"1:00:05"`, zero is `"0:00"`.

/// Formats a whole number of seconds as a countdown clock string.
pub fn format_clock(total_seconds: u64) -> String {
    if total_seconds >= 3600 {
        let hours = total_seconds / 3600;
        let minutes = (total_seconds % 3600) / 60;
        let seconds = total_seconds % 60;
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        let minutes = total_seconds / 60;
        let seconds = total_seconds % 60;
        format!("{}:{:02}", minutes, seconds)
    }
}
