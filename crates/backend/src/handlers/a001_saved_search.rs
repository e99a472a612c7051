use axum::{extract::Path, http::StatusCode, Json};
use contracts::domain::a001_saved_search::aggregate::{SaveSearchRequest, SavedSearch, SavedSearchId};
use contracts::domain::common::AggregateId;

use crate::domain::a001_saved_search::service::{self, SavedSearchError};
use crate::shared::data::db::get_connection;
use crate::system::auth::extractor::CurrentUser;

fn status_of(err: SavedSearchError) -> StatusCode {
    match err {
        SavedSearchError::Validation(msg) => {
            tracing::debug!("Saved search rejected: {}", msg);
            StatusCode::BAD_REQUEST
        }
        SavedSearchError::Forbidden => StatusCode::FORBIDDEN,
        SavedSearchError::NotFound => StatusCode::NOT_FOUND,
        SavedSearchError::Storage(e) => {
            tracing::error!("Saved search storage failure: {:#}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// GET /api/search
pub async fn list(user: CurrentUser) -> Result<Json<Vec<SavedSearch>>, StatusCode> {
    service::list_for_user(get_connection(), user.user_id())
        .await
        .map(Json)
        .map_err(status_of)
}

/// POST /api/search
pub async fn create(
    user: CurrentUser,
    Json(request): Json<SaveSearchRequest>,
) -> Result<Json<SavedSearch>, StatusCode> {
    service::save(get_connection(), user.user_id(), request)
        .await
        .map(Json)
        .map_err(status_of)
}

/// DELETE /api/search/:id
pub async fn delete(user: CurrentUser, Path(id): Path<String>) -> Result<(), StatusCode> {
    let id = SavedSearchId::from_string(&id).map_err(|_| StatusCode::BAD_REQUEST)?;
    service::delete(get_connection(), user.user_id(), id)
        .await
        .map_err(status_of)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            status_of(SavedSearchError::Validation("Search name is required".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(status_of(SavedSearchError::Forbidden), StatusCode::FORBIDDEN);
        assert_eq!(status_of(SavedSearchError::NotFound), StatusCode::NOT_FOUND);
        assert_eq!(
            status_of(SavedSearchError::Storage(anyhow::anyhow!("disk full"))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
