//! View Helpers
//!
//! Pure formatting and identifier helpers used across widgets.

use chrono::{DateTime, NaiveDate};

/// Format a stored timestamp for display
///
/// Accepts RFC 3339 timestamps or bare `YYYY-MM-DD` dates and renders a
/// short human date ("Jan 5, 2024"). An empty input stays empty, and
/// anything unparseable is returned unchanged rather than erroring; the
/// dashboard shows whatever the store held.
pub fn format_date(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return dt.format("%b %-d, %Y").to_string();
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return date.format("%b %-d, %Y").to_string();
    }

    value.to_string()
}

/// Generate an identifier for a client-side entry
///
/// Timestamp in base 36 plus a random base-36 suffix; sortable by creation
/// time and unique enough for list keys.
pub fn generate_entry_id() -> String {
    let millis = chrono::Utc::now().timestamp_millis().max(0) as u64;
    let suffix = (random_fraction() * 36_f64.powi(6)) as u64;
    entry_id_from(millis, suffix)
}

/// Compose an entry id from its parts
pub(crate) fn entry_id_from(millis: u64, suffix: u64) -> String {
    format!("{}-{}", to_base36(millis), to_base36(suffix))
}

fn to_base36(mut n: u64) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    if n == 0 {
        return "0".to_string();
    }

    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    out.reverse();
    String::from_utf8(out).expect("base36 digits are ascii")
}

/// Uniform random in [0, 1)
fn random_fraction() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Math::random()
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .subsec_nanos();
        (nanos % 1_000_000) as f64 / 1_000_000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_empty() {
        assert_eq!(format_date(""), "");
    }

    #[test]
    fn test_format_date_rfc3339() {
        assert_eq!(format_date("2024-01-05T00:00:00Z"), "Jan 5, 2024");
        assert_eq!(format_date("2023-11-28T18:30:00+01:00"), "Nov 28, 2023");
    }

    #[test]
    fn test_format_date_bare_date() {
        assert_eq!(format_date("2024-01-05"), "Jan 5, 2024");
    }

    #[test]
    fn test_format_date_garbage_passes_through() {
        assert_eq!(format_date("yesterday-ish"), "yesterday-ish");
    }

    #[test]
    fn test_to_base36() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(to_base36(36 * 36 + 1), "101");
    }

    #[test]
    fn test_entry_id_composition() {
        assert_eq!(entry_id_from(36, 35), "10-z");
    }

    #[test]
    fn test_generated_id_shape() {
        let id = generate_entry_id();
        let (stamp, suffix) = id.split_once('-').expect("id has two parts");
        assert!(!stamp.is_empty());
        assert!(!suffix.is_empty());
        assert!(id
            .chars()
            .all(|c| c == '-' || c.is_ascii_lowercase() || c.is_ascii_digit()));
    }
}
