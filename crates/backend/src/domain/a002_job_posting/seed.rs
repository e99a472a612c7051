use chrono::{DateTime, Duration, Utc};
use contracts::domain::a002_job_posting::aggregate::{JobPosting, JobPostingId};

struct Demo {
    title: &'static str,
    company: &'static str,
    location: &'static str,
    description: &'static str,
    salary: (Option<u32>, Option<u32>),
    tags: &'static [&'static str],
    hours_ago: i64,
}

const DEMO: &[Demo] = &[
    Demo {
        title: "Backend Engineer",
        company: "Ferrous Systems",
        location: "Remote",
        description: "Design and run async services in Rust with tokio and axum.",
        salary: (Some(110_000), Some(150_000)),
        tags: &["Rust", "Remote", "Senior"],
        hours_ago: 5,
    },
    Demo {
        title: "Frontend Developer",
        company: "Acme",
        location: "NYC",
        description: "Ship a design system in TypeScript and React.",
        salary: (Some(95_000), Some(125_000)),
        tags: &["TypeScript"],
        hours_ago: 30,
    },
    Demo {
        title: "Platform Engineer",
        company: "Gopher Cloud",
        location: "Berlin",
        description: "Kubernetes operators and internal tooling written in Go.",
        salary: (Some(85_000), None),
        tags: &["Go", "Remote"],
        hours_ago: 60,
    },
    Demo {
        title: "Data Engineer",
        company: "Acme",
        location: "London",
        description: "Batch and streaming pipelines in Python.",
        salary: (None, None),
        tags: &["Python"],
        hours_ago: 24 * 6,
    },
    Demo {
        title: "Senior Systems Engineer",
        company: "Oxide Labs",
        location: "Remote (US)",
        description: "Firmware and control plane work in Rust on bare metal.",
        salary: (Some(160_000), Some(210_000)),
        tags: &["Rust", "Senior"],
        hours_ago: 24 * 20,
    },
];

/// Demo postings relative to `now`
pub fn demo_postings(now: DateTime<Utc>) -> Vec<JobPosting> {
    DEMO.iter()
        .enumerate()
        .map(|(i, d)| JobPosting {
            id: JobPostingId(i as i64 + 1),
            title: d.title.into(),
            company: d.company.into(),
            location: d.location.into(),
            description: d.description.into(),
            salary_min: d.salary.0,
            salary_max: d.salary.1,
            tags: d.tags.iter().map(|t| t.to_string()).collect(),
            url: format!("https://jobs.example.com/{}", i + 1),
            posted_at: now - Duration::hours(d.hours_ago),
        })
        .collect()
}
