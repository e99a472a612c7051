use contracts::system::auth::UserInfo;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user_info: Option<UserInfo>,
}

impl AuthState {
    /// Id of the verified user; absent until `/me` confirmed the token
    pub fn user_id(&self) -> Option<String> {
        self.user_info.as_ref().map(|u| u.id.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some() && self.user_info.is_some()
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::default());

    // Restore the session: a fresh redirect token wins over a stored one
    Effect::new(move |_| {
        let Some(access_token) = storage::take_token_from_url().or_else(storage::get_access_token)
        else {
            return;
        };
        spawn_local(async move {
            match api::get_current_user(&access_token).await {
                Ok(user_info) => {
                    log::info!("Signed in as {}", user_info.username);
                    set_auth_state.set(AuthState {
                        access_token: Some(access_token),
                        user_info: Some(user_info),
                    });
                }
                Err(e) => {
                    log::warn!("Stored access token rejected: {}", e);
                    storage::clear_access_token();
                }
            }
        });
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Forget the session locally
pub fn sign_out(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_access_token();
    set_auth_state.set(AuthState::default());
}
