use contracts::shared::filter::{split_keywords, toggle_keyword};
use leptos::prelude::*;

use super::store::use_filters;

/// Quick keyword tags offered under the search form
pub const QUICK_TAGS: [&str; 6] = ["Rust", "Go", "TypeScript", "Python", "Remote", "Senior"];

/// Row of toggleable keyword chips writing to the description filter
#[component]
pub fn TagWidget() -> impl IntoView {
    let filters = use_filters();

    view! {
        <div class="tag-widget">
            {QUICK_TAGS
                .iter()
                .map(|&tag| {
                    let is_active = move || {
                        split_keywords(&filters.description()).contains(&tag.to_lowercase())
                    };
                    view! {
                        <button
                            type="button"
                            class=move || {
                                if is_active() { "tag tag--active" } else { "tag" }
                            }
                            on:click=move |_| {
                                let current = filters.snapshot_untracked().description;
                                filters.set_description(toggle_keyword(&current, tag));
                            }
                        >
                            {tag}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
