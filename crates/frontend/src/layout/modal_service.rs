use leptos::prelude::*;

/// Visibility of one named modal dialog.
///
/// Each dialog owns its own service instance; pages provide it via context
/// or pass it down.
#[derive(Clone, Copy)]
pub struct ModalService {
    is_visible: RwSignal<bool>,
}

impl ModalService {
    pub fn new() -> Self {
        Self {
            is_visible: RwSignal::new(false),
        }
    }

    pub fn show(&self) {
        self.is_visible.set(true);
    }

    pub fn hide(&self) {
        self.is_visible.set(false);
    }

    pub fn toggle(&self) {
        self.is_visible.update(|v| *v = !*v);
    }

    pub fn is_open(&self) -> bool {
        self.is_visible.get()
    }
}

impl Default for ModalService {
    fn default() -> Self {
        Self::new()
    }
}

/// Overlay dialog bound to `service`; clicking the backdrop closes it.
#[component]
pub fn Modal(service: ModalService, children: ChildrenFn) -> impl IntoView {
    view! {
        <Show when=move || service.is_open()>
            <div class="modal-overlay" on:click=move |_| service.hide()>
                <div class="modal-content" on:click=|e| e.stop_propagation()>
                    {children()}
                </div>
            </div>
        </Show>
    }
}
