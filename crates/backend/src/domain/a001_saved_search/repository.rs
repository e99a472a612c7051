use chrono::Utc;
use contracts::domain::a001_saved_search::aggregate::{SavedSearch, SavedSearchId};
use contracts::domain::common::EntityMetadata;

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, QueryOrder, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "a001_saved_search")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_id: String,
    pub name: String,
    pub title: Option<String>,
    pub location: Option<String>,
    pub company: Option<String>,
    pub job_description: Option<String>,
    pub salary: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for SavedSearch {
    fn from(m: Model) -> Self {
        SavedSearch {
            id: SavedSearchId(m.id),
            user_id: m.user_id,
            name: m.name,
            title: m.title,
            location: m.location,
            company: m.company,
            job_description: m.job_description,
            salary: m.salary,
            metadata: EntityMetadata {
                created_at: m.created_at,
                updated_at: m.updated_at,
            },
        }
    }
}

/// Row to insert; the id and timestamps are assigned on insert
#[derive(Debug, Clone, Default)]
pub struct NewSavedSearch {
    pub user_id: String,
    pub name: String,
    pub title: Option<String>,
    pub location: Option<String>,
    pub company: Option<String>,
    pub job_description: Option<String>,
    pub salary: Option<String>,
}

/// Searches of one user, oldest first
pub async fn list_by_user(db: &DatabaseConnection, user_id: &str) -> anyhow::Result<Vec<SavedSearch>> {
    let items = Entity::find()
        .filter(Column::UserId.eq(user_id))
        .order_by_asc(Column::CreatedAt)
        .order_by_asc(Column::Id)
        .all(db)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(db: &DatabaseConnection, id: SavedSearchId) -> anyhow::Result<Option<SavedSearch>> {
    let result = Entity::find_by_id(id.value()).one(db).await?;
    Ok(result.map(Into::into))
}

pub async fn insert(db: &DatabaseConnection, new: NewSavedSearch) -> anyhow::Result<SavedSearch> {
    let now = Utc::now();
    let active = ActiveModel {
        id: NotSet,
        user_id: Set(new.user_id),
        name: Set(new.name),
        title: Set(new.title),
        location: Set(new.location),
        company: Set(new.company),
        job_description: Set(new.job_description),
        salary: Set(new.salary),
        created_at: Set(now),
        updated_at: Set(now),
    };
    let model = active.insert(db).await?;
    Ok(model.into())
}

pub async fn delete(db: &DatabaseConnection, id: SavedSearchId) -> anyhow::Result<bool> {
    let result = Entity::delete_by_id(id.value()).exec(db).await?;
    Ok(result.rows_affected > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::test_connection;

    fn new_search(user_id: &str, name: &str) -> NewSavedSearch {
        NewSavedSearch {
            user_id: user_id.into(),
            name: name.into(),
            title: Some("Backend Engineer".into()),
            location: Some("Remote".into()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_id_and_timestamps() {
        let db = test_connection().await;
        let saved = insert(&db, new_search("u1", "Remote Rust")).await.unwrap();

        assert!(saved.id.value() > 0);
        assert_eq!(saved.name, "Remote Rust");
        assert_eq!(saved.company, None);
        assert_eq!(saved.created_at(), saved.updated_at());

        let loaded = get_by_id(&db, saved.id).await.unwrap().unwrap();
        assert_eq!(loaded.id, saved.id);
        assert_eq!(loaded.title.as_deref(), Some("Backend Engineer"));
    }

    #[tokio::test]
    async fn test_list_is_scoped_to_user_in_insert_order() {
        let db = test_connection().await;
        insert(&db, new_search("u1", "first")).await.unwrap();
        insert(&db, new_search("u2", "other user")).await.unwrap();
        insert(&db, new_search("u1", "second")).await.unwrap();

        let names: Vec<String> = list_by_user(&db, "u1")
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, vec!["first", "second"]);
        assert!(list_by_user(&db, "nobody").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete() {
        let db = test_connection().await;
        let saved = insert(&db, new_search("u1", "gone")).await.unwrap();
        assert!(delete(&db, saved.id).await.unwrap());
        assert!(!delete(&db, saved.id).await.unwrap());
        assert!(get_by_id(&db, saved.id).await.unwrap().is_none());
    }
}
