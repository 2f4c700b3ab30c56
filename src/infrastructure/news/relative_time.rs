use chrono::{DateTime, Utc};

/// Render a publication time the way finance news pages label it
/// ("5 minutes ago", "3 days ago", "last week", "2 months ago").
///
/// Publication times in the future are treated as just published.
pub fn render_relative_time(published: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = (now - published).max(chrono::Duration::zero());
    let minutes = elapsed.num_minutes();
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();

    if minutes < 60 {
        plural(minutes, "minute")
    } else if hours < 24 {
        plural(hours, "hour")
    } else if days < 7 {
        plural(days, "day")
    } else if days < 14 {
        "last week".to_string()
    } else if days < 30 {
        plural(days / 7, "week")
    } else if days < 60 {
        "last month".to_string()
    } else if days < 365 {
        plural(days / 30, "month")
    } else {
        plural(days / 365, "year")
    }
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", count, unit)
    }
}
