//! Life areas detail view.

use astroweather_core::daily;
use dioxus::prelude::*;

use crate::components::{LifeAreaFocusCard, PageHeader, TabBar, TabLocation};

#[component]
pub fn LifeAreas() -> Element {
    let areas = use_signal(daily::life_area_focus);

    rsx! {
        div { class: "app-shell",
            PageHeader { title: "Life Areas" }

            div { class: "app-scroll page-content",
                p { class: "page-intro",
                    "The houses most activated for you right now. Lean into the listed activities while this energy lasts."
                }

                LifeAreaFocusCard { areas: areas() }
            }

            TabBar { current: TabLocation::LifeAreas }
        }
    }
}
