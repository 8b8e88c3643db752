//! Display formatting helpers shared across views.

/// Format a risk score with one decimal place.
pub fn format_score(score: f64) -> String {
    format!("{:.1}", score)
}

/// Format a count with K/M suffix for large values.
pub fn format_count(num: u64) -> String {
    if num >= 1_000_000 {
        format!("{:.1}M", num as f64 / 1_000_000.0)
    } else if num >= 1_000 {
        format!("{:.1}K", num as f64 / 1_000.0)
    } else {
        num.to_string()
    }
}

/// Condense an ISO-8601 timestamp for table display.
///
/// Timestamps cross the wire as strings (`2026-08-29T13:45:12.123456`);
/// keep date plus hours and minutes, drop the rest.
pub fn format_timestamp(ts: &str) -> String {
    let cleaned = ts.replacen('T', " ", 1);
    match cleaned.char_indices().nth(16) {
        Some((idx, _)) => cleaned[..idx].to_string(),
        None => cleaned,
    }
}

/// Short date (`MM-DD`) for chart axis labels.
pub fn format_short_date(ts: &str) -> String {
    ts.get(5..10).unwrap_or(ts).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_one_decimal() {
        assert_eq!(format_score(32.0), "32.0");
        assert_eq!(format_score(7.25), "7.2");
    }

    #[test]
    fn count_suffixes() {
        assert_eq!(format_count(12), "12");
        assert_eq!(format_count(100), "100");
        assert_eq!(format_count(1_500), "1.5K");
        assert_eq!(format_count(2_000_000), "2.0M");
    }

    #[test]
    fn timestamp_condensed() {
        assert_eq!(
            format_timestamp("2026-08-29T13:45:12.123456"),
            "2026-08-29 13:45"
        );
        assert_eq!(format_timestamp("2026-08-29"), "2026-08-29");
    }

    #[test]
    fn short_date() {
        assert_eq!(format_short_date("2026-08-29T00:00:00"), "08-29");
        assert_eq!(format_short_date("bad"), "bad");
    }
}
