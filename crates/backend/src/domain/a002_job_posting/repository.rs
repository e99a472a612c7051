use contracts::domain::a002_job_posting::aggregate::{JobPosting, JobPostingId};

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, PaginatorTrait, QueryOrder, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "a002_job_posting")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub salary_min: Option<i64>,
    pub salary_max: Option<i64>,
    /// Comma separated
    pub tags: String,
    pub url: String,
    pub posted_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for JobPosting {
    fn from(m: Model) -> Self {
        JobPosting {
            id: JobPostingId(m.id),
            title: m.title,
            company: m.company,
            location: m.location,
            description: m.description,
            salary_min: m.salary_min.and_then(|v| u32::try_from(v).ok()),
            salary_max: m.salary_max.and_then(|v| u32::try_from(v).ok()),
            tags: split_tags(&m.tags),
            url: m.url,
            posted_at: m.posted_at,
        }
    }
}

fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// All postings, newest first
pub async fn list_all(db: &DatabaseConnection) -> anyhow::Result<Vec<JobPosting>> {
    let items = Entity::find()
        .order_by_desc(Column::PostedAt)
        .order_by_desc(Column::Id)
        .all(db)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn count(db: &DatabaseConnection) -> anyhow::Result<u64> {
    Ok(Entity::find().count(db).await?)
}

/// Inserts a posting; `posting.id` is ignored
pub async fn insert(db: &DatabaseConnection, posting: &JobPosting) -> anyhow::Result<JobPostingId> {
    let active = ActiveModel {
        id: NotSet,
        title: Set(posting.title.clone()),
        company: Set(posting.company.clone()),
        location: Set(posting.location.clone()),
        description: Set(posting.description.clone()),
        salary_min: Set(posting.salary_min.map(i64::from)),
        salary_max: Set(posting.salary_max.map(i64::from)),
        tags: Set(posting.tags.join(",")),
        url: Set(posting.url.clone()),
        posted_at: Set(posting.posted_at),
    };
    let model = active.insert(db).await?;
    Ok(JobPostingId(model.id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_tags() {
        assert_eq!(split_tags("Rust, Remote,,"), vec!["Rust", "Remote"]);
        assert!(split_tags("").is_empty());
    }
}
