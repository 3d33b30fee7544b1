//! Bottom Tab Bar Component
//!
//! Fixed bottom navigation between the dashboard and detail views.

use dioxus::prelude::*;

use crate::app::Route;

/// Navigation location within the application
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum TabLocation {
    Home,
    Moon,
    LifeAreas,
    Retrogrades,
    Insights,
}

impl TabLocation {
    /// Get the display name for this location
    pub fn display_name(&self) -> &'static str {
        match self {
            TabLocation::Home => "Today",
            TabLocation::Moon => "Moon",
            TabLocation::LifeAreas => "Areas",
            TabLocation::Retrogrades => "Planets",
            TabLocation::Insights => "Insights",
        }
    }

    /// Get the tab icon for this location
    pub fn icon(&self) -> &'static str {
        match self {
            TabLocation::Home => "🏠",
            TabLocation::Moon => "🌙",
            TabLocation::LifeAreas => "🧭",
            TabLocation::Retrogrades => "🪐",
            TabLocation::Insights => "✨",
        }
    }

    /// Get the route for this location
    pub fn route(&self) -> Route {
        match self {
            TabLocation::Home => Route::Home {},
            TabLocation::Moon => Route::MoonTracker {},
            TabLocation::LifeAreas => Route::LifeAreas {},
            TabLocation::Retrogrades => Route::Retrogrades {},
            TabLocation::Insights => Route::Insights {},
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct TabBarProps {
    /// Current active location
    pub current: TabLocation,
}

/// Bottom tab bar shown on every page.
#[component]
pub fn TabBar(props: TabBarProps) -> Element {
    let locations = [
        TabLocation::Home,
        TabLocation::Moon,
        TabLocation::LifeAreas,
        TabLocation::Retrogrades,
        TabLocation::Insights,
    ];

    rsx! {
        nav { class: "tab-bar",
            for location in &locations {
                Link {
                    to: location.route(),
                    class: if *location == props.current { "tab-item active" } else { "tab-item" },

                    span { class: "tab-icon", "{location.icon()}" }
                    span { "{location.display_name()}" }
                }
            }
        }
    }
}
