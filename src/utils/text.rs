// src/utils/text.rs

//! Text shaping helpers for cards and placeholder graphics.

use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

/// Truncate `text` to `limit` grapheme clusters with a trailing ellipsis.
///
/// Returns `None` when the text already fits, so callers can tell whether a
/// see-more affordance is needed.
pub fn truncate(text: &str, limit: usize) -> Option<String> {
    let graphemes: Vec<&str> = text.graphemes(true).collect();
    if graphemes.len() <= limit {
        return None;
    }
    let mut short: String = graphemes[..limit].concat();
    short.push_str("...");
    Some(short)
}

/// Clean a repository name for display on a placeholder graphic.
///
/// Keeps alphanumerics, spaces, and hyphen/underscore separators, collapses
/// separator runs to single spaces, and truncates to `limit` characters with
/// an ellipsis.
pub fn clean_display_name(name: &str, limit: usize) -> String {
    static DISALLOWED: OnceLock<Regex> = OnceLock::new();
    static SEPARATORS: OnceLock<Regex> = OnceLock::new();

    let disallowed = DISALLOWED.get_or_init(|| Regex::new(r"[^a-zA-Z0-9\s_-]").unwrap());
    let separators = SEPARATORS.get_or_init(|| Regex::new(r"[\s_-]+").unwrap());

    let cleaned = disallowed.replace_all(name, "");
    let cleaned = separators.replace_all(&cleaned, " ");
    let cleaned = cleaned.trim();

    truncate(cleaned, limit).unwrap_or_else(|| cleaned.to_string())
}

/// Abbreviate a badge label to at most `limit` characters.
pub fn abbreviate(label: &str, limit: usize) -> String {
    label.chars().take(limit).collect()
}

/// Format a timestamp as a short `Mon D` date, e.g. `Jun 3`.
pub fn month_day(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%b %-d").to_string()
}

/// Escape text for safe embedding in HTML content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn truncate_short_text_untouched() {
        assert_eq!(truncate("hello", 100), None);
    }

    #[test]
    fn truncate_appends_ellipsis() {
        let text = "a".repeat(120);
        let short = truncate(&text, 100).unwrap();
        assert_eq!(short.len(), 103);
        assert!(short.ends_with("..."));
        assert_eq!(&short[..100], &text[..100]);
    }

    #[test]
    fn truncate_respects_grapheme_boundaries() {
        let text = "né".repeat(60);
        let short = truncate(&text, 100).unwrap();
        // 100 graphemes plus the ellipsis, never a split accent
        assert_eq!(short.graphemes(true).count(), 103);
    }

    #[test]
    fn clean_display_name_strips_and_collapses() {
        assert_eq!(clean_display_name("my-cool_project!", 15), "my cool project");
        assert_eq!(clean_display_name("a--b__c", 15), "a b c");
    }

    #[test]
    fn clean_display_name_truncates_long_names() {
        let cleaned = clean_display_name("averyveryverylongprojectname", 15);
        assert_eq!(cleaned, "averyveryveryve...");
    }

    #[test]
    fn abbreviate_caps_length() {
        assert_eq!(abbreviate("SWIFT", 4), "SWIF");
        assert_eq!(abbreviate("GO", 4), "GO");
    }

    #[test]
    fn month_day_format() {
        let date = Utc.with_ymd_and_hms(2024, 6, 3, 12, 0, 0).unwrap();
        assert_eq!(month_day(&date), "Jun 3");
    }

    #[test]
    fn escape_html_covers_specials() {
        assert_eq!(
            escape_html(r#"<a href="x">&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;&lt;/a&gt;"
        );
    }
}
