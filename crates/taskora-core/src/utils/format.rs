/// Format a price for display: whole amounts drop the cents
pub fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("${}", price as i64)
    } else {
        format!("${:.2}", price)
    }
}

/// Format an estimated duration in hours: "1 hr", "2.5 hrs"
pub fn format_hours(hours: f64) -> String {
    let unit = if hours == 1.0 { "hr" } else { "hrs" };
    if hours.fract() == 0.0 {
        format!("{} {}", hours as i64, unit)
    } else {
        format!("{:.1} {}", hours, unit)
    }
}

/// Format a date string to a more readable format
pub fn format_date(date: &str) -> String {
    // Try to parse ISO format and convert to readable
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(date) {
        dt.format("%b %d, %Y").to_string()
    } else if date.len() >= 10 {
        // Fall back to the YYYY-MM-DD prefix
        date.chars().take(10).collect()
    } else {
        date.to_string()
    }
}
