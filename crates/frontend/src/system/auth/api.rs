use contracts::system::auth::UserInfo;

use crate::shared::api_utils::get_json;

/// Identity behind `access_token`; fails when the token is rejected
pub async fn get_current_user(access_token: &str) -> Result<UserInfo, String> {
    get_json("/api/system/auth/me", Some(access_token)).await
}
