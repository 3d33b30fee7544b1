//! Dashboard Header Card
//!
//! Gradient greeting card with the demo birth chart, the time-of-day
//! content bundle, and the period's affirmation.

use astroweather_core::{PeriodDetails, TimeBasedContent, UserProfile};
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct DashboardHeaderProps {
    pub profile: UserProfile,
    pub time_content: TimeBasedContent,
}

#[component]
pub fn DashboardHeader(props: DashboardHeaderProps) -> Element {
    rsx! {
        section { class: "dashboard-header",
            div { class: "welcome-text", "Hello, {props.profile.name}" }
            div { class: "welcome-subtext", "{props.profile.chart_line()}" }

            div { class: "time-content",
                div { class: "time-title", "{props.time_content.title}" }
                {render_details(&props.time_content.details)}
            }

            div { class: "affirmation-label", "Today's Affirmation" }
            div { class: "affirmation-text", "\"{props.time_content.affirmation}\"" }
        }
    }
}

/// One labeled line per detail field; which fields exist depends on the
/// period variant.
fn render_details(details: &PeriodDetails) -> Element {
    match details {
        PeriodDetails::Morning(d) => rsx! {
            div { class: "time-line",
                span { class: "time-line-label", "Cosmic score:" }
                "{d.overall_score}"
            }
            div { class: "time-line",
                span { class: "time-line-label", "Moon mood:" }
                "{d.moon_mood}"
            }
            div { class: "time-line",
                span { class: "time-line-label", "Opportunity:" }
                "{d.key_opportunity}"
            }
            div { class: "time-line",
                span { class: "time-line-label", "Watch for:" }
                "{d.watch_for}"
            }
        },
        PeriodDetails::Afternoon(d) => rsx! {
            div { class: "time-line",
                span { class: "time-line-label", "Moon:" }
                "{d.moon_status}"
            }
            div { class: "time-line",
                span { class: "time-line-label", "Evening:" }
                "{d.evening_preview}"
            }
            div { class: "time-line",
                span { class: "time-line-label", "Best window:" }
                "{d.best_window}"
            }
        },
        PeriodDetails::Evening(d) => rsx! {
            div { class: "time-line",
                span { class: "time-line-label", "Tomorrow:" }
                "{d.tomorrow_score}"
            }
            div { class: "time-line",
                span { class: "time-line-label", "Overnight:" }
                "{d.overnight_moon}"
            }
            div { class: "time-line",
                span { class: "time-line-label", "Rest:" }
                "{d.rest_recommendation}"
            }
        },
    }
}
