//! Note key encoding and title derivation.
//!
//! A note's storage key is generated once at creation time:
//!
//! `<prefix>/<YYYYMMDD>_<HHMMSS>_<sanitized-title>.md`
//!
//! The timestamp component is fixed-width so lexicographic and chronological
//! key ordering coincide. Derivation is the lossy inverse, used only for
//! display.
//!
//! # Examples
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use ubinote_core::keys::{derive_title, generate_key};
//!
//! let ts = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
//! let key = generate_key("ubinote", "  Hello, World!! ", ts);
//! assert_eq!(key, "ubinote/20250102_030405_Hello_World.md");
//! assert_eq!(derive_title(&key), "Hello World");
//! ```

use chrono::{DateTime, Utc};

/// File extension shared by every note object. Objects under the prefix
/// without this suffix are ignored when listing.
pub const NOTE_EXTENSION: &str = ".md";

/// Timestamp layout baked into generated keys: 8-digit date, 6-digit time.
const KEY_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Sanitize a title for use in a storage key.
///
/// Strips every character outside `[A-Za-z0-9_\- ]`, collapses whitespace
/// runs to a single underscore, and trims edge whitespace.
pub fn sanitize_title(title: &str) -> String {
    let kept: String = title
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | ' '))
        .collect();
    kept.split_whitespace().collect::<Vec<_>>().join("_")
}

/// Generate a storage key for a new note.
///
/// The timestamp is passed in rather than read from the clock so the
/// function stays pure; callers supply `Utc::now()`. Key collisions at
/// second granularity with an identical sanitized title are possible and
/// resolve last-writer-wins at the backend.
pub fn generate_key(prefix: &str, title: &str, timestamp: DateTime<Utc>) -> String {
    format!(
        "{}/{}_{}{}",
        prefix.trim_matches('/'),
        timestamp.format(KEY_TIMESTAMP_FORMAT),
        sanitize_title(title),
        NOTE_EXTENSION
    )
}

/// Derive a display title from a storage key.
///
/// Best-effort and lossy: takes the final path segment, strips the note
/// extension, and drops a leading `<8 digits>_<6 digits>_` timestamp pair
/// when present before mapping underscores back to spaces. A title that
/// naturally starts with two numeric tokens of exactly that shape is
/// indistinguishable from a generated timestamp and loses them on display.
pub fn derive_title(key: &str) -> String {
    let filename = key.rsplit('/').next().unwrap_or(key);
    let stem = filename.strip_suffix(NOTE_EXTENSION).unwrap_or(filename);

    let parts: Vec<&str> = stem.split('_').collect();
    if parts.len() >= 3 && is_digits(parts[0], 8) && is_digits(parts[1], 6) {
        parts[2..].join(" ")
    } else {
        parts.join(" ")
    }
}

fn is_digits(s: &str, len: usize) -> bool {
    s.len() == len && s.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 9, 8, 14, 30, 59).unwrap()
    }

    #[test]
    fn sanitize_strips_specials_and_collapses_whitespace() {
        assert_eq!(sanitize_title("  Hello, World!! "), "Hello_World");
        assert_eq!(sanitize_title("a   b\tc"), "a_bc"); // tab stripped, not whitespace-classed
        assert_eq!(sanitize_title("kept_under-score"), "kept_under-score");
        assert_eq!(sanitize_title("???"), "");
    }

    #[test]
    fn generated_key_shape() {
        let key = generate_key("ubinote", "Meeting Notes", ts());
        assert_eq!(key, "ubinote/20250908_143059_Meeting_Notes.md");
    }

    #[test]
    fn generate_trims_prefix_slashes() {
        let key = generate_key("ubinote/", "x", ts());
        assert!(key.starts_with("ubinote/20250908_"));
        assert!(!key.contains("//"));
    }

    #[test]
    fn lexicographic_order_matches_chronological() {
        let earlier = generate_key("p", "same", Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap());
        let later = generate_key("p", "same", Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap());
        assert!(earlier < later);
    }

    #[test]
    fn derive_drops_timestamp_pair() {
        assert_eq!(derive_title("ubinote/20250908_143059_Hello_World.md"), "Hello World");
    }

    #[test]
    fn derive_without_timestamp_joins_everything() {
        assert_eq!(derive_title("ubinote/plain_old_note.md"), "plain old note");
        assert_eq!(derive_title("shopping.md"), "shopping");
    }

    #[test]
    fn derive_requires_exact_digit_widths() {
        // 7-digit first token: not a timestamp, keep it
        assert_eq!(derive_title("p/2025090_143059_x.md"), "2025090 143059 x");
        // second token too short
        assert_eq!(derive_title("p/20250908_1430_x.md"), "20250908 1430 x");
    }

    #[test]
    fn derive_fewer_than_three_parts_keeps_numerics() {
        assert_eq!(derive_title("p/20250908_143059.md"), "20250908 143059");
    }

    #[test]
    fn derive_title_ambiguity_is_lossy_by_design() {
        // A user-entered title shaped like a timestamp prefix loses its
        // leading tokens on display.
        let key = generate_key("p", "20250101_123456_meeting", ts());
        assert_eq!(key, "p/20250908_143059_20250101_123456_meeting.md");
        assert_eq!(derive_title(&key), "meeting");
    }

    #[test]
    fn round_trip_is_sanitized_form() {
        let key = generate_key("p", "  Grocery   list ", ts());
        assert_eq!(derive_title(&key), "Grocery list");
        // Idempotent: deriving a derived title's key again changes nothing
        let key2 = generate_key("p", &derive_title(&key), ts());
        assert_eq!(derive_title(&key2), "Grocery list");
    }
}
