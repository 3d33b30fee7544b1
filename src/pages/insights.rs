//! Cosmic insights detail view.

use astroweather_core::daily;
use dioxus::prelude::*;

use crate::components::{PageHeader, TabBar, TabLocation};

#[component]
pub fn Insights() -> Element {
    let score = use_signal(daily::cosmic_score);
    let data = score();
    let fraction = data.fraction();

    rsx! {
        div { class: "app-shell",
            PageHeader { title: "Cosmic Insights" }

            div { class: "app-scroll page-content",
                div { class: "section", style: "text-align: center;",
                    div { class: "score-emoji", "{data.weather_emoji}" }
                    div { class: "score-value", "{fraction}" }
                    div { class: "score-description", "{data.description}" }
                }

                div { class: "section",
                    div { class: "section-title", "Today's Energy" }
                    div { class: "section-body", "{data.details}" }
                }

                div { class: "section",
                    div { class: "section-title", "Best Time for Action" }
                    div { class: "section-body",
                        "The most favorable cosmic alignment occurs during the waxing moon phase, when the moon is moving from new to full. This period is ideal for initiating new projects and making important decisions."
                    }
                }

                div { class: "section",
                    div { class: "section-title", "Areas of Focus" }
                    div { class: "section-body",
                        ul { style: "margin-left: 1.25rem;",
                            li { "Personal growth and self-reflection" }
                            li { "Career advancement and professional goals" }
                            li { "Relationship building and social connections" }
                            li { "Health and wellness practices" }
                        }
                    }
                }

                div { class: "section",
                    div { class: "section-title", "Cosmic Advice" }
                    div { class: "section-body",
                        "Trust your intuition and stay aligned with your higher purpose. The current cosmic energy supports your growth and transformation. Take advantage of this positive period to make meaningful progress in your life."
                    }
                }
            }

            TabBar { current: TabLocation::Insights }
        }
    }
}
