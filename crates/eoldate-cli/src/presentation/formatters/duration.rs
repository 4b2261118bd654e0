use chrono::Duration;

const SECONDS_PER_DAY: i64 = 86_400;

/// Compact span label: "<1d", "15d", "3m", "1y", "2y 2m".
///
/// Months are flat 30-day blocks and years are 12 of those, so 730 days is
/// "2y" and 800 days is "2y 2m". Negative spans read as "<1d".
pub fn format_duration(span: Duration) -> String {
    let days = span.num_seconds() / SECONDS_PER_DAY;
    let months = days / 30;
    let years = months / 12;

    if years > 0 {
        let remaining_months = months % 12;
        if remaining_months > 0 {
            return format!("{}y {}m", years, remaining_months);
        }
        return format!("{}y", years);
    }
    if months > 0 {
        return format!("{}m", months);
    }
    if days > 0 {
        return format!("{}d", days);
    }
    "<1d".to_string()
}
