//! Detail Page Header Component
//!
//! Gradient header with a back button, shared by all detail views.

use dioxus::prelude::*;

/// Header bar for detail pages.
#[component]
pub fn PageHeader(
    /// Page title
    title: String,
) -> Element {
    let navigator = use_navigator();

    rsx! {
        header { class: "page-header",
            button {
                class: "back-btn",
                onclick: move |_| {
                    navigator.go_back();
                },
                "←"
            }
            h1 { class: "page-title", "{title}" }
        }
    }
}
