//! Formatting helpers for TUI text (durations, truncation).
//!
//! Use these when rendering status lines, history rows or any fixed-width text.

use std::time::Duration;

/// Format a duration for display (e.g. "123ms", "2s 450ms").
///
/// Uses milliseconds when under 1s, otherwise seconds and milliseconds.
pub fn format_duration(d: Duration) -> String {
    let ms = d.as_millis();
    if ms < 1000 {
        format!("{}ms", ms)
    } else {
        let s = ms / 1000;
        let rest_ms = ms % 1000;
        if rest_ms == 0 {
            format!("{}s", s)
        } else {
            format!("{}s {}ms", s, rest_ms)
        }
    }
}

/// Truncate `s` to at most `max_width` characters, appending `suffix` when truncated.
/// Uses character count (not grapheme clusters); suitable for terminal column width in simple cases.
pub fn truncate_with_suffix(s: &str, max_width: usize, suffix: &str) -> String {
    if s.chars().count() <= max_width {
        return s.to_string();
    }
    let suffix_len = suffix.chars().count();
    if max_width <= suffix_len {
        return suffix.chars().take(max_width).collect();
    }
    let take = max_width - suffix_len;
    format!("{}{}", s.chars().take(take).collect::<String>(), suffix)
}

/// Truncate to `max_width` with "…" suffix when needed.
#[inline]
pub fn truncate_ellipsis(s: &str, max_width: usize) -> String {
    truncate_with_suffix(s, max_width, "…")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_duration_ms() {
        assert_eq!(format_duration(Duration::from_millis(0)), "0ms");
        assert_eq!(format_duration(Duration::from_millis(123)), "123ms");
        assert_eq!(format_duration(Duration::from_millis(999)), "999ms");
    }

    #[test]
    fn format_duration_seconds() {
        assert_eq!(format_duration(Duration::from_millis(1000)), "1s");
        assert_eq!(format_duration(Duration::from_millis(2450)), "2s 450ms");
    }

    #[test]
    fn truncate_short_string_unchanged() {
        assert_eq!(truncate_ellipsis("Palette 3", 20), "Palette 3");
    }

    #[test]
    fn truncate_long_string() {
        assert_eq!(truncate_ellipsis("Misty forest at dawn", 8), "Misty f…");
    }

    #[test]
    fn truncate_to_suffix_width() {
        assert_eq!(truncate_with_suffix("abcdef", 2, "..."), "..");
    }
}
