//! Shared context for the AstroWeather app.
//!
//! The dashboard has no backend; the only shared state is the demo
//! user profile and the clock feeding the time-of-day selector.

use astroweather_core::{daily, TimeBasedContent, UserProfile};
use chrono::{Local, Timelike};
use dioxus::prelude::*;

/// Current hour-of-day for the time-based selector.
///
/// Honors the `--hour` command-line override, otherwise reads the
/// local wall clock. Always in [0,24).
pub fn current_hour() -> u32 {
    crate::get_pinned_hour().unwrap_or_else(|| Local::now().hour())
}

/// Time-based content for the current (possibly pinned) hour.
pub fn time_content_now() -> TimeBasedContent {
    daily::time_based_content(current_hour())
}

/// Hook to access the user profile from context.
///
/// Provided once in [`crate::app::App`]; the profile is the built-in
/// demo chart, nothing is loaded or persisted.
pub fn use_profile() -> Signal<UserProfile> {
    use_context::<Signal<UserProfile>>()
}
