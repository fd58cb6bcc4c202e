//! Progress formatting.

/// Format `seconds` as `m:ss`, flooring both parts.
///
/// Negative and non-finite inputs (an unknown duration) render as `0:00`.
pub fn format_time(seconds: f64) -> String {
    let secs = if seconds.is_finite() && seconds > 0.0 {
        seconds
    } else {
        0.0
    };
    let minutes = (secs / 60.0).floor() as u64;
    let rest = (secs % 60.0).floor() as u64;
    format!("{}:{:02}", minutes, rest)
}

/// What the progress row shows.
#[derive(Debug, Clone, PartialEq)]
pub struct Progress {
    pub elapsed: String,
    pub total: String,
    /// Position within the track in `[0, 1]`; `0` while the duration is unknown.
    pub ratio: f64,
}

impl Progress {
    pub fn new(current_time: f64, duration: f64) -> Self {
        let ratio = if duration.is_finite() && duration > 0.0 && current_time.is_finite() {
            (current_time / duration).clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self {
            elapsed: format_time(current_time),
            total: format_time(duration),
            ratio,
        }
    }
}
