//! AstroWeather Core Library
//!
//! Randomized astrology dashboard content: a daily cosmic score, moon
//! tracker, life-area focus, transit alerts, retrograde report, and a
//! weekly forecast. All of it is canned display text drawn from small
//! fixed tables; nothing is computed from real ephemerides and nothing
//! is persisted.
//!
//! ## Overview
//!
//! Generators are free functions returning plain value records. Each
//! call is independent; the UI regenerates on refresh and on an hourly
//! timer and simply replaces what it held before.
//!
//! ## Quick Start
//!
//! ```
//! use astroweather_core::{daily, weekly, DayPeriod};
//!
//! let score = daily::cosmic_score();
//! println!("{} {} - {}", score.weather_emoji, score.fraction(), score.description);
//!
//! let content = daily::time_based_content(9);
//! assert_eq!(content.period, DayPeriod::Morning);
//!
//! let forecast = weekly::weekly_forecast();
//! assert_eq!(forecast.daily_chips.len(), 7);
//! ```

pub mod daily;
pub mod error;
pub mod tables;
pub mod types;
pub mod weekly;

// Re-exports
pub use error::AstroError;
pub use types::{
    AfternoonDetails, CosmicScore, DailyWeatherChip, DayPeriod, EveningDetails, FocusPeriod,
    Impact, LifeArea, MoonData, MoonMovement, MoonPhaseEntry, MoonSignChange, MorningDetails,
    NotificationSettings, PeriodDetails, PlanetStatus, TimeBasedContent, TransitAlert,
    UserProfile, WeeklyForecast, WeeklyHighlight, WeeklyPreviewDay,
};
