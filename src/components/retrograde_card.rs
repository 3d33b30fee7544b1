//! Retrograde Status Card
//!
//! Per-planet retrograde/direct badges with dates and, for retrograde
//! planets, the interpretation text.

use astroweather_core::PlanetStatus;
use dioxus::prelude::*;

#[component]
pub fn RetrogradeCard(planets: Vec<PlanetStatus>) -> Element {
    if planets.is_empty() {
        return rsx! {};
    }

    rsx! {
        section { class: "card",
            div { class: "card-title", "Planetary Climate: Retrogrades" }

            for planet in &planets {
                div { class: "planet-entry", key: "{planet.id}",
                    div { class: "planet-header",
                        span { class: "planet-symbol", "{planet.symbol}" }
                        span { class: "planet-name", "{planet.planet}" }
                        span {
                            class: if planet.is_retrograde { "status-badge retrograde" } else { "status-badge direct" },
                            "{planet.status_text}"
                        }
                    }
                    div { class: "planet-dates", "{planet.dates_label} {planet.dates_value}" }
                    if let Some(interpretation) = &planet.interpretation {
                        div { class: "planet-interpretation", "{interpretation}" }
                    }
                }
            }
        }
    }
}
