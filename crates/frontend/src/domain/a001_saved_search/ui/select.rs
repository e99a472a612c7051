use contracts::domain::a001_saved_search::aggregate::SavedSearch;
use leptos::prelude::*;

use crate::domain::a001_saved_search::directory::use_directory;
use crate::domain::a001_saved_search::selection::{guard_open, reset, select, SearchSelection};
use crate::layout::notification_service::use_notifications;
use crate::shared::components::InputSkeleton;
use crate::shared::filters::use_filters;
use crate::system::auth::context::use_auth;

/// Short description of what a saved search filters on, e.g. "Engineer · Remote"
fn summary(search: &SavedSearch) -> String {
    [&search.title, &search.location, &search.company]
        .into_iter()
        .flatten()
        .filter(|v| !v.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" · ")
}

/// Dropdown of the user's saved searches; picking one applies it to the
/// shared filters, the reset control clears them.
#[component]
pub fn SaveSearchSelect() -> impl IntoView {
    let filters = use_filters();
    let notifications = use_notifications();
    let directory = use_directory();
    let (auth_state, _) = use_auth();

    let selection = RwSignal::new(SearchSelection::NoSelection);
    let is_open = RwSignal::new(false);

    // Reload whenever the session changes
    Effect::new(move |_| {
        let token = auth_state.with(|s| s.access_token.clone());
        directory.refresh(token);
    });

    let on_trigger = move |_: leptos::ev::MouseEvent| {
        if is_open.get_untracked() {
            is_open.set(false);
            return;
        }
        let user_id = auth_state.with_untracked(|s| s.user_id());
        if guard_open(
            user_id.as_deref(),
            &directory.state_untracked(),
            &notifications,
        ) {
            is_open.set(true);
        }
    };

    let on_reset = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        selection.set(reset(&filters));
        is_open.set(false);
    };

    view! {
        <div class="saved-search-select">
            <Show
                when=move || !directory.state().is_loading()
                fallback=|| view! { <InputSkeleton /> }
            >
                <div class="saved-search-select__trigger" role="button" on:click=on_trigger>
                    <span class=move || {
                        if selection.with(SearchSelection::is_selected) {
                            "saved-search-select__value"
                        } else {
                            "saved-search-select__value saved-search-select__value--placeholder"
                        }
                    }>{move || selection.with(|s| s.label().to_string())}</span>
                    <button
                        type="button"
                        class="saved-search-select__reset"
                        title="Clear saved search"
                        on:click=on_reset
                    >
                        "×"
                    </button>
                </div>
                <Show when=move || is_open.get()>
                    <ul class="saved-search-select__options" role="listbox">
                        <For
                            each=move || directory.state().items().to_vec()
                            key=|search| search.id
                            children=move |entry: SavedSearch| {
                                let id = entry.id;
                                let name = entry.name.clone();
                                let detail = summary(&entry);
                                let is_current = move || {
                                    selection.with(|s| s.selected_id() == Some(id))
                                };
                                view! {
                                    <li
                                        role="option"
                                        aria-selected=move || is_current().to_string()
                                        class=move || {
                                            if is_current() {
                                                "saved-search-select__option saved-search-select__option--selected"
                                            } else {
                                                "saved-search-select__option"
                                            }
                                        }
                                        on:click=move |_| {
                                            selection.set(select(entry.clone(), &filters));
                                            is_open.set(false);
                                        }
                                    >
                                        <span class="saved-search-select__name">{name}</span>
                                        <span class="saved-search-select__detail">{detail}</span>
                                        <Show when=is_current>
                                            <span class="saved-search-select__check">"✓"</span>
                                        </Show>
                                    </li>
                                }
                            }
                        />
                    </ul>
                </Show>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_saved_search::test_support::search;

    #[test]
    fn test_summary_skips_empty_fields() {
        let mut entry = search(1, "Remote Rust");
        entry.title = Some("Backend Engineer".into());
        entry.location = Some("".into());
        entry.company = Some("Ferrous".into());
        assert_eq!(summary(&entry), "Backend Engineer · Ferrous");

        entry.title = None;
        entry.company = None;
        assert_eq!(summary(&entry), "");
    }
}
