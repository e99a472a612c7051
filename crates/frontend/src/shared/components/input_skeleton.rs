use leptos::prelude::*;
use thaw::Spinner;

/// Placeholder shown in place of an input while its data loads
#[component]
pub fn InputSkeleton() -> impl IntoView {
    view! {
        <div class="input-skeleton" aria-busy="true">
            <Spinner />
        </div>
    }
}
