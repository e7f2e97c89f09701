use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::text::normalize;

static RE_ENGAGEMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?P<on_redfin>[0-9,]+\s+\w+\s+on\s+Redfin)\s*[•·∙⋅]\s*(?P<views>[0-9,]+\s+views)\s*[•·∙⋅]\s*(?P<favorites>[0-9,]+\s+favorites)",
    )
    .expect("invalid regex: engagement stats")
});

const WINDOW_BEFORE: usize = 40;
const WINDOW_AFTER: usize = 80;

/// The three counters shown together under a listing's headline stats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngagementStats {
    pub on_redfin: String,
    pub views: String,
    pub favorites: String,
}

/// First `"N <unit> on Redfin • N views • N favorites"` run in `text`.
pub fn match_engagement(text: &str) -> Option<EngagementStats> {
    let caps = RE_ENGAGEMENT.captures(text)?;
    Some(EngagementStats {
        on_redfin: normalize(&caps["on_redfin"]),
        views: normalize(&caps["views"]),
        favorites: normalize(&caps["favorites"]),
    })
}

/// Text around the first "on redfin", for diagnosing a failed match.
pub fn diagnostic_window(text: &str) -> Option<String> {
    // ASCII lowercasing keeps byte offsets aligned with `text`.
    let at = text.to_ascii_lowercase().find("on redfin")?;
    let start = text[..at]
        .char_indices()
        .rev()
        .nth(WINDOW_BEFORE - 1)
        .map_or(0, |(i, _)| i);
    let end = text[at..]
        .char_indices()
        .nth(WINDOW_AFTER)
        .map_or(text.len(), |(i, _)| at + i);
    Some(text[start..end].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_all_three_counters() {
        let stats =
            match_engagement("Tour it\n1,234 people on Redfin • 567 views • 89 favorites\nMore").unwrap();
        assert_eq!(stats.on_redfin, "1,234 people on Redfin");
        assert_eq!(stats.views, "567 views");
        assert_eq!(stats.favorites, "89 favorites");
    }

    #[test]
    fn case_insensitive_and_middle_dot() {
        let stats = match_engagement("3 DAYS ON REDFIN · 1,002 Views · 7 Favorites").unwrap();
        assert_eq!(stats.on_redfin, "3 DAYS ON REDFIN");
        assert_eq!(stats.views, "1,002 Views");
    }

    #[test]
    fn partial_run_is_no_match() {
        assert!(match_engagement("12 days on Redfin • 300 views").is_none());
        assert!(match_engagement("no stats here").is_none());
    }

    #[test]
    fn order_is_fixed() {
        assert!(match_engagement("300 views • 12 days on Redfin • 4 favorites").is_none());
    }

    #[test]
    fn window_bounds() {
        let prefix = "x".repeat(100);
        let suffix = "y".repeat(200);
        let text = format!("{prefix}On Redfin{suffix}");
        let window = diagnostic_window(&text).unwrap();
        assert_eq!(window.chars().count(), WINDOW_BEFORE + WINDOW_AFTER);
        assert!(window.starts_with(&"x".repeat(WINDOW_BEFORE)));
        assert!(window[WINDOW_BEFORE..].starts_with("On Redfin"));
    }

    #[test]
    fn window_clamps_and_respects_char_boundaries() {
        let window = diagnostic_window("é on redfin ü").unwrap();
        assert_eq!(window, "é on redfin ü");
        assert!(diagnostic_window("nothing").is_none());
    }
}
