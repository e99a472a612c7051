use chrono::{DateTime, Utc};
use contracts::domain::a002_job_posting::aggregate::JobPosting;
use contracts::shared::filter::split_keywords;
use leptos::prelude::*;

use crate::shared::components::ui::Badge;
use crate::shared::date_utils::{format_date, format_relative};
use crate::shared::filters::use_filters;

const EXCERPT_CHARS: usize = 180;

fn excerpt(text: &str) -> String {
    if text.chars().count() <= EXCERPT_CHARS {
        return text.to_string();
    }
    let cut: String = text.chars().take(EXCERPT_CHARS).collect();
    format!("{}…", cut.trim_end())
}

/// One posting in the result list. Tags matching a description keyword are
/// highlighted.
#[component]
pub fn JobCard(job: JobPosting, now: DateTime<Utc>) -> impl IntoView {
    let filters = use_filters();
    let salary = job.salary_label();
    let posted = format_relative(job.posted_at, now);
    let posted_title = format_date(job.posted_at);
    let description = excerpt(&job.description);

    let tags = job
        .tags
        .iter()
        .map(|tag| {
            let key = tag.to_lowercase();
            let active = Signal::derive(move || {
                split_keywords(&filters.description()).contains(&key)
            });
            view! { <Badge text=tag.clone() active=active /> }
        })
        .collect_view();

    view! {
        <article class="job-card">
            <header class="job-card__header">
                <h3 class="job-card__title">
                    <a href=job.url target="_blank" rel="noopener noreferrer">
                        {job.title}
                    </a>
                </h3>
                <span class="job-card__posted" title=posted_title>
                    {posted}
                </span>
            </header>
            <div class="job-card__meta">
                <span class="job-card__company">{job.company}</span>
                <span class="job-card__location">{job.location}</span>
                {salary.map(|s| view! { <span class="job-card__salary">{s}</span> })}
            </div>
            <p class="job-card__description">{description}</p>
            <div class="job-card__tags">{tags}</div>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excerpt_keeps_short_text() {
        assert_eq!(excerpt("Tokio and axum"), "Tokio and axum");
    }

    #[test]
    fn test_excerpt_truncates_on_chars() {
        let long = "é".repeat(EXCERPT_CHARS + 10);
        let cut = excerpt(&long);
        assert!(cut.ends_with('…'));
        assert_eq!(cut.chars().count(), EXCERPT_CHARS + 1);
    }
}
