use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_saved_search::api;
use crate::domain::a001_saved_search::directory::use_directory;
use crate::domain::a001_saved_search::save_flow::{begin_save, finish_save};
use crate::layout::modal_service::{Modal, ModalService};
use crate::layout::notification_service::use_notifications;
use crate::shared::components::ui::{Button, ButtonVariant, Input};
use crate::shared::filters::use_filters;
use crate::system::auth::context::use_auth;

/// "Save search" button with its name dialog
#[component]
pub fn SaveSearchButton() -> impl IntoView {
    let filters = use_filters();
    let notifications = use_notifications();
    let directory = use_directory();
    let (auth_state, _) = use_auth();

    let modal = ModalService::new();
    let name = RwSignal::new(String::new());

    let submit = move || {
        let session = auth_state.get_untracked();
        let current = filters.snapshot_untracked();
        let user_id = session.user_id();
        let request = match begin_save(
            &name.get_untracked(),
            user_id.as_deref(),
            &current,
            &notifications,
        ) {
            Ok(request) => request,
            Err(rejected) => {
                if rejected.closes_modal() {
                    modal.hide();
                }
                return;
            }
        };

        modal.hide();
        name.set(String::new());
        let Some(token) = session.access_token else {
            return;
        };
        spawn_local(async move {
            let result = api::save_search(&token, &request).await;
            if finish_save(result, &notifications) {
                directory.refresh(Some(token));
            }
        });
    };

    view! {
        <Button
            variant=ButtonVariant::Secondary
            on_click=Callback::new(move |_| modal.show())
        >
            "Save search"
        </Button>
        <Modal service=modal>
            <form
                class="save-search-form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    submit();
                }
            >
                <h2 class="save-search-form__title">"Save this search"</h2>
                <Input
                    id="save-search-name"
                    label="Name"
                    value=Signal::derive(move || name.get())
                    on_input=Callback::new(move |v| name.set(v))
                    placeholder="e.g. Remote Rust"
                />
                <div class="save-search-form__actions">
                    <Button
                        variant=ButtonVariant::Ghost
                        on_click=Callback::new(move |_| modal.hide())
                    >
                        "Cancel"
                    </Button>
                    <button type="submit" class="button button--primary">
                        "Save"
                    </button>
                </div>
            </form>
        </Modal>
    }
}
