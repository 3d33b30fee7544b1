//! Life Area Focus Card
//!
//! The two sampled astrological houses with their activity chips.

use astroweather_core::LifeArea;
use dioxus::prelude::*;

#[component]
pub fn LifeAreaFocusCard(areas: Vec<LifeArea>) -> Element {
    // Render nothing rather than an empty card
    if areas.is_empty() {
        return rsx! {};
    }

    rsx! {
        section { class: "card",
            div { class: "card-title", "Life Area Focus" }

            for area in &areas {
                {
                    let planets = area.planets.join(", ");
                    rsx! {
                        div { class: "life-area", key: "{area.house}",
                            span { class: "life-area-emoji", "{area.emoji}" }
                            div {
                                div { class: "life-area-name", "{area.name}" }
                                div { class: "life-area-house",
                                    "House {area.house} • {planets}"
                                }
                                div { class: "life-area-energy", "{area.energy}" }
                                div { class: "chip-row",
                                    for activity in &area.activities {
                                        span { class: "chip", "{activity}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
