use leptos::prelude::*;

use crate::domain::a001_saved_search::directory::SavedSearchDirectory;
use crate::domain::a001_saved_search::ui::{SaveSearchButton, SaveSearchSelect};
use crate::domain::a002_job_posting::ui::JobList;
use crate::shared::filters::inputs::{
    CompanyInputBox, DateInputBox, LocationInputBox, MinSalaryInputBox, RoleInputBox,
};
use crate::shared::filters::tags::TagWidget;
use crate::system::auth::context::use_auth;

/// Search form, saved search controls and the result list
#[component]
pub fn HomePage() -> impl IntoView {
    let (auth_state, _) = use_auth();
    provide_context(SavedSearchDirectory::new());

    view! {
        <div class="home-page">
            <section class="hero">
                <h1 class="hero__title">"All the dev jobs, one place"</h1>
                <p class="hero__subtitle">
                    "Filter by role, place and company, then save the search for later."
                </p>
            </section>

            <section class="search-panel">
                <div class="search-panel__saved">
                    <SaveSearchSelect />
                    <Show when=move || auth_state.with(|s| s.is_authenticated())>
                        <SaveSearchButton />
                    </Show>
                </div>
                <div class="search-panel__fields">
                    <RoleInputBox />
                    <LocationInputBox />
                    <CompanyInputBox />
                </div>
                <div class="search-panel__fields search-panel__fields--secondary">
                    <DateInputBox />
                    <MinSalaryInputBox />
                </div>
                <TagWidget />
            </section>

            <JobList />
        </div>
    }
}
