//! Retrograde status detail view.

use astroweather_core::daily;
use dioxus::prelude::*;

use crate::components::{PageHeader, RetrogradeCard, TabBar, TabLocation};

#[component]
pub fn Retrogrades() -> Element {
    let planets = use_signal(daily::retrograde_report);

    rsx! {
        div { class: "app-shell",
            PageHeader { title: "Retrograde Status" }

            div { class: "app-scroll page-content",
                p { class: "page-intro",
                    "Planetary retrogrades can bring delays, introspection, and opportunities for review. Here's what's happening now:"
                }

                RetrogradeCard { planets: planets() }
            }

            TabBar { current: TabLocation::Retrogrades }
        }
    }
}
