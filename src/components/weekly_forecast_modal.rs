//! Weekly Forecast Modal
//!
//! Overlay with the 7-day chip strip, moon movement, weekly highlights,
//! and focus periods.

use astroweather_core::{WeeklyForecast, WeeklyPreviewDay};
use chrono::{DateTime, Local};
use dioxus::prelude::*;

/// Format a day timestamp as e.g. "Mon, Aug 24".
fn format_day(timestamp: i64) -> String {
    match DateTime::from_timestamp(timestamp, 0) {
        Some(dt) => dt.with_timezone(&Local).format("%a, %b %-d").to_string(),
        None => String::new(),
    }
}

#[component]
pub fn WeeklyForecastModal(
    /// Whether the modal is visible
    show: bool,
    /// Callback when the modal should close
    on_close: EventHandler<()>,
    /// Forecast data to render
    forecast: WeeklyForecast,
    /// Per-day outlook rows
    preview: Vec<WeeklyPreviewDay>,
) -> Element {
    if !show {
        return rsx! {};
    }

    rsx! {
        div { class: "modal-overlay",
            onclick: move |_| on_close.call(()),

            div {
                class: "modal-content",
                onclick: move |evt| evt.stop_propagation(),

                div { class: "modal-header",
                    h2 { class: "modal-title", "7-Day Cosmic Outlook" }
                    button {
                        class: "modal-close",
                        onclick: move |_| on_close.call(()),
                        "✕"
                    }
                }

                // Day selector strip
                div { class: "chip-strip",
                    for chip in &forecast.daily_chips {
                        div { class: "day-chip", key: "{chip.id}",
                            span { class: "day-chip-abbrev", "{chip.day_abbrev}" }
                            span { class: "day-chip-date", "{chip.day_of_month}" }
                            span { class: "day-chip-emoji", "{chip.weather_emoji}" }
                        }
                    }
                }

                if !preview.is_empty() {
                    div { class: "modal-section-title", "Day by Day" }
                    for (i, day) in preview.iter().enumerate() {
                        {
                            let date = format_day(day.date);
                            let score = format!("{:.1}", day.cosmic_score);
                            rsx! {
                                div { class: "modal-row", key: "{i}",
                                    span { class: "modal-row-lead", "{date}" }
                                    span {
                                        "{day.score_emoji()} {score}/5 • 🌙 Moon in {day.moon_sign} • {day.key_event}"
                                    }
                                }
                            }
                        }
                    }
                }

                div { class: "modal-section-title", "Moon Movement This Week" }
                for change in &forecast.moon_movement.sign_changes {
                    div { class: "modal-row", key: "{change.id}",
                        span { class: "modal-row-lead", "{change.period}" }
                        span { "{change.symbol} Moon in {change.sign}" }
                    }
                }
                div { class: "modal-row",
                    for phase in &forecast.moon_movement.phases {
                        span { key: "{phase.id}", "{phase.emoji} {phase.name}  " }
                    }
                }

                div { class: "modal-section-title", "Weekly Highlights" }
                for highlight in &forecast.highlights {
                    div { class: "modal-row", key: "{highlight.id}",
                        span { class: "modal-row-lead", "{highlight.day_abbrev}" }
                        span {
                            b { "{highlight.title}" }
                            " - {highlight.description}"
                        }
                    }
                }

                div { class: "modal-section-title", "Weekly Focus Areas" }
                for focus in &forecast.focus_areas {
                    div { class: "modal-row", key: "{focus.id}",
                        span {
                            b { "{focus.title}" }
                            " - {focus.description}"
                        }
                    }
                }
            }
        }
    }
}
