use axum::Json;
use contracts::system::auth::UserInfo;

use crate::system::auth::extractor::CurrentUser;

/// GET /api/system/auth/me
pub async fn current_user(CurrentUser(claims): CurrentUser) -> Json<UserInfo> {
    Json(claims.into())
}
