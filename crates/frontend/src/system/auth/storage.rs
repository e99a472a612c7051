use std::collections::HashMap;

use web_sys::window;

const ACCESS_TOKEN_KEY: &str = "jobsearch_access_token";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

pub fn save_access_token(token: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(ACCESS_TOKEN_KEY, token);
    }
}

pub fn get_access_token() -> Option<String> {
    get_local_storage()?.get_item(ACCESS_TOKEN_KEY).ok()?
}

pub fn clear_access_token() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(ACCESS_TOKEN_KEY);
    }
}

/// Picks up a token handed over in the URL fragment by the sign-in
/// redirect, stores it and strips the fragment from the address bar.
pub fn take_token_from_url() -> Option<String> {
    let window = window()?;
    let hash = window.location().hash().ok()?;
    let token = token_from_fragment(&hash)?;

    save_access_token(&token);
    if let Ok(history) = window.history() {
        let path = window.location().pathname().unwrap_or_else(|_| "/".into());
        let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&path));
    }
    Some(token)
}

fn token_from_fragment(hash: &str) -> Option<String> {
    let params: HashMap<String, String> =
        serde_qs::from_str(hash.trim_start_matches('#')).unwrap_or_default();
    params
        .get("access_token")
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_from_fragment() {
        assert_eq!(
            token_from_fragment("#access_token=abc.def.ghi&token_type=bearer"),
            Some("abc.def.ghi".to_string())
        );
        assert_eq!(token_from_fragment("#section-2"), None);
        assert_eq!(token_from_fragment("#access_token="), None);
        assert_eq!(token_from_fragment(""), None);
    }
}
