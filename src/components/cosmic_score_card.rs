//! Cosmic Score Card
//!
//! Today's cosmic weather: score ring, emoji, description, details.

use astroweather_core::CosmicScore;
use dioxus::prelude::*;

#[component]
pub fn CosmicScoreCard(data: CosmicScore) -> Element {
    rsx! {
        section { class: "card card-gradient",
            div { class: "card-title", "Today's Cosmic Weather" }

            div { class: "score-ring",
                span { class: "score-emoji", "{data.weather_emoji}" }
                span { class: "score-value", "{data.fraction()}" }
            }

            div { class: "score-description", "{data.description}" }
            div { class: "score-details", "{data.details}" }
        }
    }
}
