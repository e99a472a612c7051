use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollToOptions};

/// Vertical offset in px after which the button appears
const SHOW_AFTER_PX: f64 = 400.0;

fn should_show(offset: f64) -> bool {
    offset > SHOW_AFTER_PX
}

/// Floating "back to top" button
#[component]
pub fn ScrollToTopButton() -> impl IntoView {
    let visible = RwSignal::new(false);

    let scroll_listener = window_event_listener(leptos::ev::scroll, move |_| {
        let offset = window().scroll_y().unwrap_or(0.0);
        let show = should_show(offset);
        if visible.get_untracked() != show {
            visible.set(show);
        }
    });
    on_cleanup(move || scroll_listener.remove());

    let scroll_up = move |_: leptos::ev::MouseEvent| {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window().scroll_to_with_scroll_to_options(&options);
    };

    view! {
        <Show when=move || visible.get()>
            <button
                type="button"
                class="scroll-to-top"
                title="Back to top"
                on:click=scroll_up
            >
                "↑"
            </button>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_show_after_threshold() {
        assert!(!should_show(0.0));
        assert!(!should_show(SHOW_AFTER_PX));
        assert!(should_show(SHOW_AFTER_PX + 1.0));
    }
}
