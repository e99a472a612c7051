use leptos::prelude::*;

use crate::layout::{NotificationService, Shell};
use crate::pages::HomePage;
use crate::shared::filters::FilterStore;
use crate::system::auth::context::AuthProvider;

#[component]
pub fn App() -> impl IntoView {
    // Page-session filter state shared by the search form, the saved search
    // selector and the job list
    provide_context(FilterStore::new());
    provide_context(NotificationService::new());

    view! {
        <AuthProvider>
            <Shell>
                <HomePage />
            </Shell>
        </AuthProvider>
    }
}
