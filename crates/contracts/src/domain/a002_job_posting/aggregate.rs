use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::filter::FilterSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobPostingId(pub i64);

/// A job offer as shown in the job list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    pub id: JobPostingId,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    /// Yearly salary range
    pub salary_min: Option<u32>,
    pub salary_max: Option<u32>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub url: String,
    pub posted_at: DateTime<Utc>,
}

impl JobPosting {
    /// Upper bound of the advertised salary, or the lower one if only that is known
    pub fn best_salary(&self) -> Option<u32> {
        self.salary_max.or(self.salary_min)
    }

    pub fn salary_label(&self) -> Option<String> {
        match (self.salary_min, self.salary_max) {
            (Some(min), Some(max)) if min != max => {
                Some(format!("${}k – ${}k", min / 1000, max / 1000))
            }
            (Some(v), _) | (None, Some(v)) => Some(format!("${}k", v / 1000)),
            (None, None) => None,
        }
    }

    /// Whether this posting satisfies every non-empty field of `filters`.
    ///
    /// Text fields are case-insensitive substring matches. Description
    /// keywords must each appear in the description or one of the tags.
    pub fn matches(&self, filters: &FilterSet, now: DateTime<Utc>) -> bool {
        if !contains_ci(&self.title, &filters.role)
            || !contains_ci(&self.location, &filters.location)
            || !contains_ci(&self.company, &filters.company)
        {
            return false;
        }

        let description = self.description.to_lowercase();
        let tags: Vec<String> = self.tags.iter().map(|t| t.to_lowercase()).collect();
        let keywords_ok = filters.keywords().iter().all(|keyword| {
            description.contains(keyword.as_str()) || tags.iter().any(|t| t == keyword)
        });
        if !keywords_ok {
            return false;
        }

        if !filters.date_posted().admits(self.posted_at, now) {
            return false;
        }

        match filters.min_salary() {
            Some(min) => self.best_salary().map(|s| s >= min).unwrap_or(false),
            None => true,
        }
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    let needle = needle.trim();
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn posting(now: DateTime<Utc>) -> JobPosting {
        JobPosting {
            id: JobPostingId(1),
            title: "Senior Backend Engineer".into(),
            company: "Ferrous Systems".into(),
            location: "Remote (EU)".into(),
            description: "Build async services with tokio and axum.".into(),
            salary_min: Some(90_000),
            salary_max: Some(130_000),
            tags: vec!["Rust".into(), "Remote".into()],
            url: "https://jobs.example.com/1".into(),
            posted_at: now - Duration::days(2),
        }
    }

    #[test]
    fn test_empty_filters_match_everything() {
        let now = Utc::now();
        assert!(posting(now).matches(&FilterSet::default(), now));
    }

    #[test]
    fn test_text_filters_are_case_insensitive() {
        let now = Utc::now();
        let filters = FilterSet {
            role: "backend".into(),
            location: "REMOTE".into(),
            company: "ferrous".into(),
            ..Default::default()
        };
        assert!(posting(now).matches(&filters, now));

        let filters = FilterSet {
            company: "Acme".into(),
            ..Default::default()
        };
        assert!(!posting(now).matches(&filters, now));
    }

    #[test]
    fn test_keywords_match_description_or_tags() {
        let now = Utc::now();
        let filters = FilterSet {
            description: "rust tokio".into(),
            ..Default::default()
        };
        assert!(posting(now).matches(&filters, now));

        let filters = FilterSet {
            description: "rust kubernetes".into(),
            ..Default::default()
        };
        assert!(!posting(now).matches(&filters, now));
    }

    #[test]
    fn test_date_and_salary_filters() {
        let now = Utc::now();
        let job = posting(now);

        let recent_only = FilterSet {
            date: "24h".into(),
            ..Default::default()
        };
        assert!(!job.matches(&recent_only, now));

        let rich = FilterSet {
            salary: "150000".into(),
            ..Default::default()
        };
        assert!(!job.matches(&rich, now));

        let modest = FilterSet {
            salary: "120k".into(),
            ..Default::default()
        };
        assert!(job.matches(&modest, now));

        let mut unknown_salary = job.clone();
        unknown_salary.salary_min = None;
        unknown_salary.salary_max = None;
        assert!(!unknown_salary.matches(&modest, now));
        assert!(unknown_salary.matches(&FilterSet::default(), now));
    }

    #[test]
    fn test_salary_label() {
        let now = Utc::now();
        let mut job = posting(now);
        assert_eq!(job.salary_label().as_deref(), Some("$90k – $130k"));
        job.salary_max = None;
        assert_eq!(job.salary_label().as_deref(), Some("$90k"));
        job.salary_min = None;
        assert_eq!(job.salary_label(), None);
    }
}
