/// Format a duration in seconds as a short human-readable string.
///
/// - under a minute: `"45s"`
/// - under an hour: `"1m 23s"`
/// - otherwise: `"1h 2m"` (seconds dropped)
///
/// Components are truncated, never rounded. Negative and non-finite inputs
/// render as `"0s"`.
pub fn format_duration(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.trunc() as u64
    } else {
        0
    };

    if total < 60 {
        return format!("{}s", total);
    }

    let minutes = total / 60;
    let secs = total % 60;
    if minutes < 60 {
        return format!("{}m {}s", minutes, secs);
    }

    format!("{}h {}m", minutes / 60, minutes % 60)
}
