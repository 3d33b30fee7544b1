//! Moon Tracker Card
//!
//! Current moon sign, phase, mood, and good-for/avoid chips.

use astroweather_core::MoonData;
use chrono::{DateTime, Local};
use dioxus::prelude::*;

/// Format a sign-change timestamp as e.g. "Tue 3:00 PM".
fn format_sign_change(timestamp: i64) -> String {
    match DateTime::from_timestamp(timestamp, 0) {
        Some(dt) => dt
            .with_timezone(&Local)
            .format("%a %-I:%M %p")
            .to_string(),
        None => String::new(),
    }
}

#[component]
pub fn MoonCard(data: MoonData) -> Element {
    let sign_change = format_sign_change(data.next_sign_change);

    rsx! {
        section { class: "card",
            div { class: "card-title", "Moon Tracker" }

            div { class: "moon-header",
                span { class: "moon-phase-emoji", "{data.phase_emoji}" }
                div {
                    div { class: "moon-sign", "Moon in {data.sign}" }
                    div { class: "moon-meta", "{data.phase} • {data.element}" }
                }
            }

            div { class: "moon-mood", "{data.mood}" }

            if !data.good_for.is_empty() {
                div { class: "chip-label", "Good for" }
                div { class: "chip-row",
                    for item in &data.good_for {
                        span { class: "chip good", "{item}" }
                    }
                }
            }

            if !data.avoid.is_empty() {
                div { class: "chip-label", "Avoid" }
                div { class: "chip-row",
                    for item in &data.avoid {
                        span { class: "chip avoid", "{item}" }
                    }
                }
            }

            if !sign_change.is_empty() {
                div { class: "moon-meta", "Next sign change: {sign_change}" }
            }
        }
    }
}
