//! Date helper functions

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Rendered for dates that cannot be parsed
pub const INVALID_DATE: &str = "Invalid Date";

/// Parse a front-matter date string in various formats
pub fn parse_date(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();

    let datetime_formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
    ];
    for fmt in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0);
        }
    }

    // RFC 3339 / ISO 8601 with an offset
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.naive_utc())
}

/// Format a date string in long US form
///
/// # Examples
/// ```ignore
/// format_date("2024-05-15") // -> "May 15, 2024"
/// ```
pub fn format_date(date: &str) -> String {
    match parse_date(date) {
        Some(dt) => full_date(&dt),
        None => INVALID_DATE.to_string(),
    }
}

/// Format a date string using a Moment.js-compatible format string
///
/// # Examples
/// ```ignore
/// format_date_with("2024-01-15", "YYYY/MM/DD") // -> "2024/01/15"
/// ```
pub fn format_date_with(date: &str, format: &str) -> String {
    match parse_date(date) {
        Some(dt) => dt.format(&moment_to_chrono_format(format)).to_string(),
        None => INVALID_DATE.to_string(),
    }
}

/// Format date in full format (like "January 1, 2024")
pub fn full_date(date: &NaiveDateTime) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Generate a <time> HTML element
pub fn time_tag(date: &str, format: &str) -> String {
    match parse_date(date) {
        Some(dt) => format!(
            r#"<time datetime="{}">{}</time>"#,
            dt.format("%Y-%m-%dT%H:%M:%S"),
            dt.format(&moment_to_chrono_format(format))
        ),
        None => format!("<time>{}</time>", INVALID_DATE),
    }
}

/// Convert Moment.js format to chrono format
fn moment_to_chrono_format(format: &str) -> String {
    // Longest token first within each family
    const TOKENS: [(&str, &str); 20] = [
        ("YYYY", "%Y"),
        ("YY", "%y"),
        ("MMMM", "%B"),
        ("MMM", "%b"),
        ("MM", "%m"),
        ("M", "%-m"),
        ("DDDD", "%j"),
        ("DD", "%d"),
        ("D", "%-d"),
        ("dddd", "%A"),
        ("ddd", "%a"),
        ("HH", "%H"),
        ("H", "%-H"),
        ("hh", "%I"),
        ("h", "%-I"),
        ("mm", "%M"),
        ("ss", "%S"),
        ("SSS", "%3f"),
        ("A", "%p"),
        ("%", "%%"),
    ];

    let mut result = String::with_capacity(format.len() * 2);
    let mut rest = format;

    'outer: while let Some(c) = rest.chars().next() {
        for (from, to) in TOKENS {
            if let Some(tail) = rest.strip_prefix(from) {
                result.push_str(to);
                rest = tail;
                continue 'outer;
            }
        }
        result.push(c);
        rest = &rest[c.len_utf8()..];
    }

    result
}
