use leptos::prelude::*;

/// Small rounded label, used for posting tags
#[component]
pub fn Badge(
    #[prop(into)]
    text: String,
    /// Highlighted when the tag is one of the active keywords
    #[prop(into)]
    active: Signal<bool>,
) -> impl IntoView {
    view! {
        <span class=move || {
            if active.get() { "badge badge--primary" } else { "badge badge--neutral" }
        }>
            {text}
        </span>
    }
}
