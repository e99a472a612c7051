use chrono::{DateTime, Utc};
use contracts::domain::a002_job_posting::aggregate::JobPosting;
use contracts::shared::filter::FilterSet;
use sea_orm::DatabaseConnection;

use super::{repository, seed};

/// Postings matching `filters`, newest first
pub async fn search(
    db: &DatabaseConnection,
    filters: &FilterSet,
    now: DateTime<Utc>,
) -> anyhow::Result<Vec<JobPosting>> {
    let all = repository::list_all(db).await?;
    let total = all.len();
    let matched: Vec<JobPosting> = all
        .into_iter()
        .filter(|job| job.matches(filters, now))
        .collect();
    tracing::debug!("Job search matched {} of {} postings", matched.len(), total);
    Ok(matched)
}

/// Inserts the demo postings when the table is empty
pub async fn seed_if_empty(db: &DatabaseConnection) -> anyhow::Result<usize> {
    if repository::count(db).await? > 0 {
        return Ok(0);
    }
    let postings = seed::demo_postings(Utc::now());
    for posting in &postings {
        repository::insert(db, posting).await?;
    }
    tracing::info!("Seeded {} demo job postings", postings.len());
    Ok(postings.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::test_connection;

    #[tokio::test]
    async fn test_seed_runs_once() {
        let db = test_connection().await;
        let inserted = seed_if_empty(&db).await.unwrap();
        assert!(inserted > 0);
        assert_eq!(seed_if_empty(&db).await.unwrap(), 0);
        assert_eq!(repository::count(&db).await.unwrap(), inserted as u64);
    }

    #[tokio::test]
    async fn test_search_filters_and_orders() {
        let db = test_connection().await;
        seed_if_empty(&db).await.unwrap();
        let now = Utc::now();

        let all = search(&db, &FilterSet::default(), now).await.unwrap();
        assert!(all.windows(2).all(|w| w[0].posted_at >= w[1].posted_at));

        let rust_remote = FilterSet {
            location: "remote".into(),
            description: "rust".into(),
            ..Default::default()
        };
        let titles: Vec<String> = search(&db, &rust_remote, now)
            .await
            .unwrap()
            .into_iter()
            .map(|j| j.title)
            .collect();
        assert_eq!(titles, vec!["Backend Engineer", "Senior Systems Engineer"]);

        let acme_this_week = FilterSet {
            company: "Acme".into(),
            date: "7d".into(),
            ..Default::default()
        };
        assert_eq!(search(&db, &acme_this_week, now).await.unwrap().len(), 2);

        let last_day = FilterSet {
            date: "24h".into(),
            ..Default::default()
        };
        let titles: Vec<String> = search(&db, &last_day, now)
            .await
            .unwrap()
            .into_iter()
            .map(|j| j.title)
            .collect();
        assert_eq!(titles, vec!["Backend Engineer"]);
    }
}
