//! Home dashboard.
//!
//! Holds one snapshot of every generated record in local signals.
//! Refresh replaces all of them; an hourly timer re-runs only the
//! time-of-day selector. Nothing survives leaving the page.

use std::time::Duration;

use astroweather_core::{daily, weekly};
use chrono::Local;
use dioxus::prelude::*;

use crate::components::{
    CosmicScoreCard, DashboardHeader, LifeAreaFocusCard, MoonCard, TabBar, TabLocation,
    TransitAlertsCard, WeeklyForecastModal,
};
use crate::context::{time_content_now, use_profile};

/// Main dashboard view component.
#[component]
pub fn Home() -> Element {
    let profile = use_profile();

    // Data snapshots, regenerated wholesale on refresh
    let mut cosmic_score = use_signal(daily::cosmic_score);
    let mut moon = use_signal(daily::moon_data);
    let mut life_areas = use_signal(daily::life_area_focus);
    let mut alerts = use_signal(daily::transit_alerts);
    let mut time_content = use_signal(time_content_now);
    let mut forecast = use_signal(weekly::weekly_forecast);
    let mut preview = use_signal(weekly::weekly_preview);

    // UI state
    let mut refreshing = use_signal(|| false);
    let mut show_weekly = use_signal(|| false);

    // Re-run the time-of-day selector once per hour; the task is
    // dropped with the page on unmount.
    use_future(move || async move {
        loop {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            time_content.set(time_content_now());
        }
    });

    let refresh = move |_| {
        if refreshing() {
            return;
        }
        refreshing.set(true);
        tracing::info!("Regenerating dashboard content");

        cosmic_score.set(daily::cosmic_score());
        moon.set(daily::moon_data());
        life_areas.set(daily::life_area_focus());
        alerts.set(daily::transit_alerts());
        time_content.set(time_content_now());
        forecast.set(weekly::weekly_forecast());
        preview.set(weekly::weekly_preview());

        // The data above is already replaced; the short hold on the
        // refreshing flag is purely visual feedback.
        spawn(async move {
            tokio::time::sleep(Duration::from_millis(1000)).await;
            refreshing.set(false);
        });
    };

    let today = Local::now().format("%A, %B %-d").to_string();

    rsx! {
        div { class: "app-shell",
            header { class: "app-header",
                div {
                    h1 { class: "app-title", "AstroWeather" }
                    div { class: "app-subtitle", "{today}" }
                }
                div { class: "header-actions",
                    button {
                        class: "header-btn",
                        disabled: refreshing(),
                        onclick: refresh,
                        if refreshing() { "..." } else { "Refresh" }
                    }
                    button {
                        class: "header-btn",
                        onclick: move |_| show_weekly.set(true),
                        "Weekly"
                    }
                }
            }

            div { class: "app-scroll",
                if refreshing() {
                    div { class: "refreshing-banner", "Consulting the cosmos..." }
                }

                DashboardHeader {
                    profile: profile(),
                    time_content: time_content(),
                }

                CosmicScoreCard { data: cosmic_score() }
                MoonCard { data: moon() }
                LifeAreaFocusCard { areas: life_areas() }
                TransitAlertsCard { alerts: alerts() }

                div { class: "bottom-spacing" }
            }

            TabBar { current: TabLocation::Home }

            WeeklyForecastModal {
                show: show_weekly(),
                on_close: move |_| show_weekly.set(false),
                forecast: forecast(),
                preview: preview(),
            }
        }
    }
}
