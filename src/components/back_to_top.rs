//! Back To Top Component
//!
//! Floating button that appears once the window has scrolled past the
//! threshold and smooth-scrolls back to the top on click.

use leptos::prelude::*;

use crate::scroll;

#[component]
pub fn BackToTop() -> impl IntoView {
    let (visible, set_visible) = signal(false);

    // Recomputed on every scroll event; no hysteresis.
    let handle = window_event_listener(leptos::ev::scroll, move |_| {
        set_visible.set(scroll::show_back_to_top(scroll::scroll_offset()));
    });
    on_cleanup(move || handle.remove());

    view! {
        <Show when=move || visible.get()>
            <button
                class="back-to-top"
                title="Back to top"
                on:click=move |_| scroll::scroll_to_top()
            >
                "↑"
            </button>
        </Show>
    }
}
