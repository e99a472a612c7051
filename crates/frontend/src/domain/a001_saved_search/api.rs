use contracts::domain::a001_saved_search::aggregate::{SaveSearchRequest, SavedSearch};

use crate::shared::api_utils::{get_json, post_json};

/// GET /api/search: saved searches of the token's owner
pub async fn fetch_searches(access_token: &str) -> Result<Vec<SavedSearch>, String> {
    get_json("/api/search", Some(access_token)).await
}

/// POST /api/search
pub async fn save_search(
    access_token: &str,
    request: &SaveSearchRequest,
) -> Result<SavedSearch, String> {
    post_json("/api/search", request, Some(access_token)).await
}
