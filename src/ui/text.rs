//! Small text helpers shared by the widgets.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncates a string to fit `width` terminal columns, appending an
/// ellipsis when anything was cut.
#[must_use]
pub fn truncate_to_width(text: &str, width: usize) -> String {
    if UnicodeWidthStr::width(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let budget = width.saturating_sub(1);
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('\u{2026}');
    out
}

/// Uppercase initials for the avatar block, at most two letters.
///
/// Blank names collapse to "?" so the block never renders empty.
#[must_use]
pub fn initials(name: &str) -> String {
    let letters: String = name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect();

    if letters.is_empty() {
        "?".to_string()
    } else {
        letters
    }
}

/// Compacts a count for the card meta line: 1234 becomes "1.2k".
#[must_use]
pub fn compact_count(count: u64) -> String {
    if count < 1_000 {
        return count.to_string();
    }
    if count < 1_000_000 {
        let tenths = count / 100;
        return if tenths % 10 == 0 {
            format!("{}k", tenths / 10)
        } else {
            format!("{}.{}k", tenths / 10, tenths % 10)
        };
    }
    let tenths = count / 100_000;
    if tenths % 10 == 0 {
        format!("{}m", tenths / 10)
    } else {
        format!("{}.{}m", tenths / 10, tenths % 10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_string_unchanged() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
        assert_eq!(truncate_to_width("hello", 5), "hello");
    }

    #[test]
    fn test_truncate_adds_ellipsis() {
        assert_eq!(truncate_to_width("hello world", 8), "hello w\u{2026}");
        assert_eq!(truncate_to_width("hello", 0), "");
    }

    #[test]
    fn test_truncate_respects_wide_chars() {
        // Each CJK glyph is two columns wide
        let out = truncate_to_width("\u{4f60}\u{597d}\u{4e16}\u{754c}", 5);
        assert_eq!(out, "\u{4f60}\u{597d}\u{2026}");
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("Mona Lisa Octocat"), "ML");
        assert_eq!(initials("mona"), "M");
        assert_eq!(initials("  "), "?");
        assert_eq!(initials(""), "?");
    }

    #[test]
    fn test_compact_count() {
        assert_eq!(compact_count(0), "0");
        assert_eq!(compact_count(999), "999");
        assert_eq!(compact_count(1_000), "1k");
        assert_eq!(compact_count(1_234), "1.2k");
        assert_eq!(compact_count(45_600), "45.6k");
        assert_eq!(compact_count(2_000_000), "2m");
        assert_eq!(compact_count(2_500_000), "2.5m");
    }
}
