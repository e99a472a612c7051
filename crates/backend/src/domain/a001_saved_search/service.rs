use contracts::domain::a001_saved_search::aggregate::{SaveSearchRequest, SavedSearch, SavedSearchId};
use sea_orm::DatabaseConnection;
use thiserror::Error;

use super::repository::{self, NewSavedSearch};

/// Failures of the saved search directory
#[derive(Debug, Error)]
pub enum SavedSearchError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Saved search belongs to another user")]
    Forbidden,

    #[error("Saved search not found")]
    NotFound,

    #[error("Storage error: {0:#}")]
    Storage(#[from] anyhow::Error),
}

/// Saved searches of the caller
pub async fn list_for_user(
    db: &DatabaseConnection,
    user_id: &str,
) -> Result<Vec<SavedSearch>, SavedSearchError> {
    Ok(repository::list_by_user(db, user_id).await?)
}

/// Stores a new saved search for `caller_id`.
///
/// The request's `userId` must name the caller. Empty snapshot fields are
/// stored as absent.
pub async fn save(
    db: &DatabaseConnection,
    caller_id: &str,
    request: SaveSearchRequest,
) -> Result<SavedSearch, SavedSearchError> {
    request.validate().map_err(SavedSearchError::Validation)?;
    if request.user_id != caller_id {
        return Err(SavedSearchError::Forbidden);
    }

    let saved = repository::insert(
        db,
        NewSavedSearch {
            user_id: request.user_id,
            name: request.search_name.trim().to_string(),
            title: non_empty(request.title),
            location: non_empty(request.location),
            company: non_empty(request.company),
            job_description: None,
            salary: None,
        },
    )
    .await?;

    tracing::info!(
        "Saved search {} '{}' for user {}",
        saved.id.value(),
        saved.name,
        saved.user_id
    );
    Ok(saved)
}

/// Deletes one of the caller's saved searches
pub async fn delete(
    db: &DatabaseConnection,
    caller_id: &str,
    id: SavedSearchId,
) -> Result<(), SavedSearchError> {
    let existing = repository::get_by_id(db, id)
        .await?
        .ok_or(SavedSearchError::NotFound)?;
    if !existing.is_owned_by(caller_id) {
        return Err(SavedSearchError::Forbidden);
    }
    if repository::delete(db, id).await? {
        Ok(())
    } else {
        Err(SavedSearchError::NotFound)
    }
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::test_connection;

    fn request(name: &str, user_id: &str) -> SaveSearchRequest {
        SaveSearchRequest {
            search_name: name.into(),
            user_id: user_id.into(),
            title: "Engineer".into(),
            location: "NYC".into(),
            company: "".into(),
        }
    }

    #[tokio::test]
    async fn test_save_stores_snapshot() {
        let db = test_connection().await;
        let saved = save(&db, "u1", request("  My Search ", "u1")).await.unwrap();

        assert_eq!(saved.name, "My Search");
        assert_eq!(saved.title.as_deref(), Some("Engineer"));
        assert_eq!(saved.location.as_deref(), Some("NYC"));
        assert_eq!(saved.company, None);

        let listed = list_for_user(&db, "u1").await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, saved.id);
    }

    #[tokio::test]
    async fn test_save_rejects_empty_name() {
        let db = test_connection().await;
        let err = save(&db, "u1", request("", "u1")).await.unwrap_err();
        assert!(matches!(err, SavedSearchError::Validation(_)));
        assert!(list_for_user(&db, "u1").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_for_someone_else_is_forbidden() {
        let db = test_connection().await;
        let err = save(&db, "u1", request("Sneaky", "u2")).await.unwrap_err();
        assert!(matches!(err, SavedSearchError::Forbidden));
    }

    #[tokio::test]
    async fn test_delete_checks_owner() {
        let db = test_connection().await;
        let saved = save(&db, "u1", request("Mine", "u1")).await.unwrap();

        let err = delete(&db, "u2", saved.id).await.unwrap_err();
        assert!(matches!(err, SavedSearchError::Forbidden));

        delete(&db, "u1", saved.id).await.unwrap();
        let err = delete(&db, "u1", saved.id).await.unwrap_err();
        assert!(matches!(err, SavedSearchError::NotFound));
    }
}
