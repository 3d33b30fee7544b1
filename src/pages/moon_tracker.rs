//! Moon tracker detail view.

use astroweather_core::daily;
use dioxus::prelude::*;

use crate::components::{MoonCard, PageHeader, TabBar, TabLocation};

#[component]
pub fn MoonTracker() -> Element {
    // One draw per visit
    let moon = use_signal(daily::moon_data);
    let data = moon();
    let best_activities = data.good_for.join(", ");

    rsx! {
        div { class: "app-shell",
            PageHeader { title: "Moon Tracker" }

            div { class: "app-scroll page-content",
                MoonCard { data: data.clone() }

                div { class: "section",
                    div { class: "section-title", "Current Mood" }
                    div { class: "section-body", "{data.mood}" }
                }

                div { class: "section",
                    div { class: "section-title", "Moon's Position" }
                    div { class: "section-body",
                        "The Moon is in {data.sign} ({data.element}), currently in its {data.phase} phase."
                    }
                }

                div { class: "section",
                    div { class: "section-title", "Best Activities" }
                    div { class: "section-body", "{best_activities}" }
                }
            }

            TabBar { current: TabLocation::Moon }
        }
    }
}
