pub mod modal_service;
pub mod nav_bar;
pub mod notification_service;
pub mod scroll_to_top;

pub use modal_service::{Modal, ModalService};
pub use notification_service::{NotificationHost, NotificationService, Notifier, Severity};

use leptos::prelude::*;

/// Page frame: navigation bar on top, toasts and the scroll button floating.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <nav_bar::NavBar />
            <main class="app-main">{children()}</main>
            <scroll_to_top::ScrollToTopButton />
            <NotificationHost />
        </div>
    }
}
