use chrono::{DateTime, TimeZone, Utc};

/// Round to one decimal place (percentage precision used across the views).
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Human-readable recency label in `now`'s timezone: "Today at 14:32",
/// "Yesterday at 09:10", otherwise "Mar 5, 14:02".
pub fn format_activity<Tz: TimeZone>(timestamp: &DateTime<Utc>, now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let local = timestamp.with_timezone(&now.timezone());
    let date = local.date_naive();
    let today = now.date_naive();

    if date == today {
        format!("Today at {}", local.format("%H:%M"))
    } else if Some(date) == today.pred_opt() {
        format!("Yesterday at {}", local.format("%H:%M"))
    } else {
        local.format("%b %-d, %H:%M").to_string()
    }
}
