//! Transit Alerts Card
//!
//! The three sampled transit events with impact badges and advice.

use astroweather_core::TransitAlert;
use dioxus::prelude::*;

#[component]
pub fn TransitAlertsCard(alerts: Vec<TransitAlert>) -> Element {
    if alerts.is_empty() {
        return rsx! {};
    }

    rsx! {
        section { class: "card",
            div { class: "card-title", "Transit Alerts" }

            for alert in &alerts {
                div { class: "alert", key: "{alert.id}",
                    div { class: "alert-header",
                        span { "{alert.emoji}" }
                        span { class: "alert-title", "{alert.title}" }
                        span { class: "impact-badge {alert.impact}", "{alert.impact}" }
                    }
                    div { class: "alert-description", "{alert.description}" }
                    div { class: "alert-advice", "{alert.advice}" }
                }
            }
        }
    }
}
