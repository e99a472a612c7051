//! Top navigation bar: brand on the left, session controls on the right.

use leptos::prelude::*;

use crate::system::auth::context::{sign_out, use_auth};
use crate::system::auth::SIGN_IN_PATH;

#[component]
pub fn NavBar() -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();

    let display_name = move || {
        auth_state.with(|s| {
            s.user_info
                .as_ref()
                .map(|u| u.full_name.clone().unwrap_or_else(|| u.username.clone()))
        })
    };

    view! {
        <header class="nav-bar">
            <a class="nav-bar__brand" href="/">
                "devjobs"
            </a>
            <div class="nav-bar__actions">
                <Show
                    when=move || auth_state.with(|s| s.is_authenticated())
                    fallback=|| {
                        view! {
                            <a class="button button--primary" href=SIGN_IN_PATH>
                                "Sign in"
                            </a>
                        }
                    }
                >
                    <span class="nav-bar__user">{display_name}</span>
                    <button
                        type="button"
                        class="button button--ghost"
                        on:click=move |_| sign_out(set_auth_state)
                    >
                        "Sign out"
                    </button>
                </Show>
            </div>
        </header>
    }
}
