//! Dismissable alert banner for failed requests.

use dioxus::prelude::*;

/// Error banner rendered above page content. It stays until dismissed; a
/// later failure replaces the message rather than stacking banners.
#[component]
pub fn ErrorAlert(
    /// Backend or network error text
    message: String,
    /// Invoked when the user dismisses the banner
    on_dismiss: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "alert-error", role: "alert",
            span { class: "text-sm", "{message}" }
            button {
                class: "btn btn-ghost btn-sm",
                aria_label: "Dismiss",
                onclick: move |_| on_dismiss.call(()),
                "×"
            }
        }
    }
}
