//! Job search filter set shared by the frontend store and the job query API.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Current search criteria.
///
/// Every field is a raw user-entered string; an empty string means
/// "no constraint". The same struct is used as the `/api/jobs` query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSet {
    pub role: String,
    pub location: String,
    pub company: String,
    pub description: String,
    pub date: String,
    pub salary: String,
}

impl FilterSet {
    pub fn is_empty(&self) -> bool {
        self.role.is_empty()
            && self.location.is_empty()
            && self.company.is_empty()
            && self.description.is_empty()
            && self.date.is_empty()
            && self.salary.is_empty()
    }

    pub fn date_posted(&self) -> DatePosted {
        DatePosted::parse(&self.date)
    }

    pub fn min_salary(&self) -> Option<u32> {
        parse_min_salary(&self.salary)
    }

    /// Keywords of the description filter, lowercased
    pub fn keywords(&self) -> Vec<String> {
        split_keywords(&self.description)
    }
}

/// The four filter fields a saved search snapshot binds to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchSnapshot {
    pub role: String,
    pub location: String,
    pub company: String,
    pub description: String,
}

/// "Date posted" filter window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DatePosted {
    #[default]
    Any,
    Last24Hours,
    Last3Days,
    Last7Days,
    Last30Days,
}

impl DatePosted {
    pub const ALL: [DatePosted; 5] = [
        DatePosted::Any,
        DatePosted::Last24Hours,
        DatePosted::Last3Days,
        DatePosted::Last7Days,
        DatePosted::Last30Days,
    ];

    /// Unknown values fall back to `Any`
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "24h" => DatePosted::Last24Hours,
            "3d" => DatePosted::Last3Days,
            "7d" => DatePosted::Last7Days,
            "30d" => DatePosted::Last30Days,
            _ => DatePosted::Any,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DatePosted::Any => "",
            DatePosted::Last24Hours => "24h",
            DatePosted::Last3Days => "3d",
            DatePosted::Last7Days => "7d",
            DatePosted::Last30Days => "30d",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DatePosted::Any => "Any time",
            DatePosted::Last24Hours => "Past 24 hours",
            DatePosted::Last3Days => "Past 3 days",
            DatePosted::Last7Days => "Past week",
            DatePosted::Last30Days => "Past month",
        }
    }

    pub fn window(&self) -> Option<Duration> {
        match self {
            DatePosted::Any => None,
            DatePosted::Last24Hours => Some(Duration::hours(24)),
            DatePosted::Last3Days => Some(Duration::days(3)),
            DatePosted::Last7Days => Some(Duration::days(7)),
            DatePosted::Last30Days => Some(Duration::days(30)),
        }
    }

    pub fn admits(&self, posted_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        match self.window() {
            Some(window) => posted_at >= now - window,
            None => true,
        }
    }
}

/// Parses the minimum salary input. Accepts "120000", "120,000", "$120k".
pub fn parse_min_salary(value: &str) -> Option<u32> {
    let trimmed = value.trim().trim_start_matches('$');
    if trimmed.is_empty() {
        return None;
    }
    let (digits, multiplier) = match trimmed.strip_suffix(['k', 'K']) {
        Some(rest) => (rest, 1000),
        None => (trimmed, 1),
    };
    let digits: String = digits.chars().filter(|c| *c != ',' && *c != '_').collect();
    digits
        .parse::<u32>()
        .ok()
        .and_then(|n| n.checked_mul(multiplier))
        .filter(|n| *n > 0)
}

/// Splits a space separated keyword string into lowercase keywords
pub fn split_keywords(value: &str) -> Vec<String> {
    value
        .split_whitespace()
        .map(|k| k.to_lowercase())
        .collect()
}

/// Adds `tag` to the keyword string, or removes it when already present.
/// Comparison is case-insensitive; the remaining keywords keep their order.
pub fn toggle_keyword(value: &str, tag: &str) -> String {
    let needle = tag.to_lowercase();
    let mut words: Vec<&str> = value.split_whitespace().collect();
    let before = words.len();
    words.retain(|w| w.to_lowercase() != needle);
    if words.len() == before {
        words.push(tag);
    }
    words.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_posted_parse() {
        assert_eq!(DatePosted::parse(""), DatePosted::Any);
        assert_eq!(DatePosted::parse("24h"), DatePosted::Last24Hours);
        assert_eq!(DatePosted::parse(" 7d "), DatePosted::Last7Days);
        assert_eq!(DatePosted::parse("yesterday"), DatePosted::Any);
        for d in DatePosted::ALL {
            assert_eq!(DatePosted::parse(d.as_str()), d);
        }
    }

    #[test]
    fn test_date_posted_admits() {
        let now = Utc::now();
        let two_days_ago = now - Duration::days(2);
        assert!(DatePosted::Any.admits(two_days_ago, now));
        assert!(!DatePosted::Last24Hours.admits(two_days_ago, now));
        assert!(DatePosted::Last3Days.admits(two_days_ago, now));
    }

    #[test]
    fn test_parse_min_salary() {
        assert_eq!(parse_min_salary(""), None);
        assert_eq!(parse_min_salary("   "), None);
        assert_eq!(parse_min_salary("120000"), Some(120_000));
        assert_eq!(parse_min_salary("120,000"), Some(120_000));
        assert_eq!(parse_min_salary("$95k"), Some(95_000));
        assert_eq!(parse_min_salary("abc"), None);
        assert_eq!(parse_min_salary("0"), None);
    }

    #[test]
    fn test_toggle_keyword() {
        assert_eq!(toggle_keyword("", "Rust"), "Rust");
        assert_eq!(toggle_keyword("Rust", "Go"), "Rust Go");
        assert_eq!(toggle_keyword("rust Go", "Rust"), "Go");
        assert_eq!(toggle_keyword("  Go  ", "Go"), "");
    }

    #[test]
    fn test_filter_set_query_defaults() {
        let parsed: FilterSet = serde_json::from_str(r#"{"role":"Engineer"}"#).unwrap();
        assert_eq!(parsed.role, "Engineer");
        assert_eq!(parsed.location, "");
        assert!(!parsed.is_empty());
        assert!(FilterSet::default().is_empty());
    }
}
