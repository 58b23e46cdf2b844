use std::sync::LazyLock;

use regex::Regex;

const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];

static CAPACITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+(?:\.\d+)?)\s*(B|KB|MB|GB|TB)$").expect("capacity regex should compile")
});

/// Parse a configured capacity string like "2GB" or "1.5 MB" into bytes.
///
/// Unit multipliers are powers of 1024. Anything that does not match
/// `<number><unit>` yields 0, which callers treat as "no effective
/// threshold" rather than an error: a typo in the admin settings must not
/// crash a scheduled run.
pub fn parse_capacity(text: &str) -> u64 {
    let text = text.trim().to_uppercase();

    let Some(caps) = CAPACITY_RE.captures(&text) else {
        return 0;
    };

    let Ok(number) = caps[1].parse::<f64>() else {
        return 0;
    };

    let multiplier = match &caps[2] {
        "B" => 1u64,
        "KB" => 1024,
        "MB" => 1024 * 1024,
        "GB" => 1024 * 1024 * 1024,
        "TB" => 1024_u64.pow(4),
        _ => return 0,
    };

    (number * multiplier as f64).round() as u64
}

/// Format a byte count in human-readable form, rounded to at most two
/// decimal places ("1 KB", "1.5 MB", "0 B").
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut size = bytes as f64;
    let mut unit_idx = 0;

    while size >= 1024.0 && unit_idx < UNITS.len() - 1 {
        size /= 1024.0;
        unit_idx += 1;
    }

    let rounded = format!("{size:.2}");
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", trimmed, UNITS[unit_idx])
}
