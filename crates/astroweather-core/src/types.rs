//! Record types for AstroWeather dashboard content.
//!
//! Every type here is a plain value record produced fresh by a generator
//! call. Records carry no identity across calls; regeneration fully
//! replaces whatever the UI held before.

use serde::{Deserialize, Serialize};

use crate::error::AstroError;

/// Daily astrological favorability rating on a 0-5 scale.
///
/// `score` is always one of four fixed values, each tied 1:1 to its
/// emoji, description, and detail text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CosmicScore {
    pub score: f32,
    pub max_score: f32,
    pub weather_emoji: String,
    pub description: String,
    pub details: String,
}

impl CosmicScore {
    /// Display form used across the dashboard, e.g. "4.5/5".
    pub fn fraction(&self) -> String {
        format!("{}/{}", self.score, self.max_score)
    }
}

/// Moon flavor-text attributes for the current refresh.
///
/// The sign tuple (sign, element, mood, good-for, avoid) is drawn
/// atomically from one table row; the phase is drawn independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoonData {
    pub sign: String,
    pub element: String,
    pub phase: String,
    pub phase_emoji: String,
    pub mood: String,
    pub good_for: Vec<String>,
    pub avoid: Vec<String>,
    /// Unix timestamp of the next (fictional) sign change.
    pub next_sign_change: i64,
}

/// One of the astrological houses with its activity suggestions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifeArea {
    pub house: u8,
    pub name: String,
    pub emoji: String,
    pub planets: Vec<String>,
    pub energy: String,
    pub activities: Vec<String>,
}

/// Impact classification for a transit alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    Positive,
    Challenging,
    Neutral,
}

impl std::fmt::Display for Impact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Positive => write!(f, "positive"),
            Self::Challenging => write!(f, "challenging"),
            Self::Neutral => write!(f, "neutral"),
        }
    }
}

impl std::str::FromStr for Impact {
    type Err = AstroError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "positive" => Ok(Self::Positive),
            "challenging" => Ok(Self::Challenging),
            "neutral" => Ok(Self::Neutral),
            other => Err(AstroError::UnknownImpact(other.to_string())),
        }
    }
}

/// A canned astrological "event" with advice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitAlert {
    pub id: String,
    pub emoji: String,
    pub title: String,
    pub description: String,
    pub impact: Impact,
    pub advice: String,
}

/// Time-of-day bucket for the dashboard header content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayPeriod {
    Morning,
    Afternoon,
    Evening,
}

impl DayPeriod {
    /// Map an hour of day (0-23) to its period.
    ///
    /// [6,12) is morning, [12,18) is afternoon, everything else
    /// (including the small hours) is evening.
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            6..=11 => Self::Morning,
            12..=17 => Self::Afternoon,
            _ => Self::Evening,
        }
    }
}

impl std::fmt::Display for DayPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Morning => write!(f, "morning"),
            Self::Afternoon => write!(f, "afternoon"),
            Self::Evening => write!(f, "evening"),
        }
    }
}

impl std::str::FromStr for DayPeriod {
    type Err = AstroError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "morning" => Ok(Self::Morning),
            "afternoon" => Ok(Self::Afternoon),
            "evening" => Ok(Self::Evening),
            other => Err(AstroError::UnknownPeriod(other.to_string())),
        }
    }
}

/// Morning bundle fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MorningDetails {
    pub overall_score: String,
    pub moon_mood: String,
    pub key_opportunity: String,
    pub watch_for: String,
}

/// Afternoon bundle fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AfternoonDetails {
    pub moon_status: String,
    pub evening_preview: String,
    pub best_window: String,
}

/// Evening bundle fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EveningDetails {
    pub tomorrow_score: String,
    pub overnight_moon: String,
    pub rest_recommendation: String,
}

/// Exactly one populated variant per generated bundle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PeriodDetails {
    Morning(MorningDetails),
    Afternoon(AfternoonDetails),
    Evening(EveningDetails),
}

/// Header content selected by wall-clock hour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeBasedContent {
    pub period: DayPeriod,
    pub title: String,
    pub details: PeriodDetails,
    pub affirmation: String,
}

/// Retrograde/direct status for one of the five tracked planets.
///
/// Retrograde entries carry a date range and an interpretation; direct
/// entries carry a "direct since" date and no interpretation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetStatus {
    pub id: String,
    pub planet: String,
    pub symbol: String,
    pub is_retrograde: bool,
    pub status_text: String,
    pub dates_label: String,
    pub dates_value: String,
    pub interpretation: Option<String>,
}

/// One day chip in the weekly forecast day selector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyWeatherChip {
    pub id: String,
    /// Unix timestamp at local midnight-ish for the chip's day.
    pub date: i64,
    pub day_abbrev: String,
    pub day_of_month: String,
    pub weather_emoji: String,
    pub cosmic_score: f32,
}

/// Moon sign change entry for the "Moon Movement This Week" card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoonSignChange {
    pub id: String,
    pub period: String,
    pub sign: String,
    pub symbol: String,
}

/// Moon phase entry for the "Moon Movement This Week" card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoonPhaseEntry {
    pub id: String,
    pub name: String,
    pub emoji: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoonMovement {
    pub sign_changes: Vec<MoonSignChange>,
    pub phases: Vec<MoonPhaseEntry>,
}

/// A notable event in the "Weekly Highlights" card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyHighlight {
    pub id: String,
    pub day_abbrev: String,
    pub title: String,
    pub description: String,
}

/// An entry in the "Weekly Focus Areas" card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FocusPeriod {
    pub id: String,
    pub title: String,
    pub description: String,
}

/// Comprehensive weekly forecast backing the weekly modal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyForecast {
    pub daily_chips: Vec<DailyWeatherChip>,
    pub moon_movement: MoonMovement,
    pub highlights: Vec<WeeklyHighlight>,
    pub focus_areas: Vec<FocusPeriod>,
}

/// One row of the simple 7-day outlook list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyPreviewDay {
    pub date: i64,
    pub cosmic_score: f32,
    pub moon_sign: String,
    pub key_event: String,
}

impl WeeklyPreviewDay {
    /// Emoji bucket for a fractional score.
    pub fn score_emoji(&self) -> &'static str {
        if self.cosmic_score >= 4.0 {
            "✨"
        } else if self.cosmic_score >= 3.0 {
            "👍"
        } else if self.cosmic_score >= 2.0 {
            "↔️"
        } else {
            "⚠️"
        }
    }
}

/// Birth chart details shown in the dashboard greeting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub birth_date: String,
    pub birth_time: String,
    pub birth_place: String,
    pub sun_sign: String,
    pub moon_sign: String,
    pub rising_sign: String,
}

impl UserProfile {
    /// The built-in demo profile.
    pub fn sample() -> Self {
        Self {
            name: "Alex".to_string(),
            birth_date: "1990-06-15".to_string(),
            birth_time: "14:30".to_string(),
            birth_place: "New York, NY".to_string(),
            sun_sign: "Gemini".to_string(),
            moon_sign: "Scorpio".to_string(),
            rising_sign: "Libra".to_string(),
        }
    }

    /// "Gemini Sun • Scorpio Moon • Libra Rising"
    pub fn chart_line(&self) -> String {
        format!(
            "{} Sun • {} Moon • {} Rising",
            self.sun_sign, self.moon_sign, self.rising_sign
        )
    }
}

/// Notification toggles (display only; nothing is persisted).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationSettings {
    pub daily_report: bool,
    pub daily_report_time: String,
    pub moon_shifts: bool,
    pub major_transits: bool,
    pub retrograde_alerts: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            daily_report: true,
            daily_report_time: "08:00".to_string(),
            moon_shifts: true,
            major_transits: true,
            retrograde_alerts: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_period_boundaries() {
        assert_eq!(DayPeriod::from_hour(5), DayPeriod::Evening);
        assert_eq!(DayPeriod::from_hour(6), DayPeriod::Morning);
        assert_eq!(DayPeriod::from_hour(11), DayPeriod::Morning);
        assert_eq!(DayPeriod::from_hour(12), DayPeriod::Afternoon);
        assert_eq!(DayPeriod::from_hour(17), DayPeriod::Afternoon);
        assert_eq!(DayPeriod::from_hour(18), DayPeriod::Evening);
        assert_eq!(DayPeriod::from_hour(0), DayPeriod::Evening);
        assert_eq!(DayPeriod::from_hour(23), DayPeriod::Evening);
    }

    #[test]
    fn test_period_round_trip() {
        for period in [DayPeriod::Morning, DayPeriod::Afternoon, DayPeriod::Evening] {
            assert_eq!(DayPeriod::from_str(&period.to_string()).unwrap(), period);
        }
        assert!(DayPeriod::from_str("midnight").is_err());
    }

    #[test]
    fn test_impact_round_trip() {
        for impact in [Impact::Positive, Impact::Challenging, Impact::Neutral] {
            assert_eq!(Impact::from_str(&impact.to_string()).unwrap(), impact);
        }
        assert!(Impact::from_str("catastrophic").is_err());
    }

    #[test]
    fn test_score_fraction_display() {
        let score = CosmicScore {
            score: 4.0,
            max_score: 5.0,
            weather_emoji: "🌤️".to_string(),
            description: "Mostly Clear".to_string(),
            details: String::new(),
        };
        assert_eq!(score.fraction(), "4/5");
    }

    #[test]
    fn test_preview_score_emoji_buckets() {
        let mut day = WeeklyPreviewDay {
            date: 0,
            cosmic_score: 4.2,
            moon_sign: "Leo".to_string(),
            key_event: String::new(),
        };
        assert_eq!(day.score_emoji(), "✨");
        day.cosmic_score = 3.1;
        assert_eq!(day.score_emoji(), "👍");
        day.cosmic_score = 2.0;
        assert_eq!(day.score_emoji(), "↔️");
        day.cosmic_score = 1.9;
        assert_eq!(day.score_emoji(), "⚠️");
    }

    #[test]
    fn test_default_notification_settings() {
        let settings = NotificationSettings::default();
        assert!(settings.daily_report);
        assert_eq!(settings.daily_report_time, "08:00");
        assert!(settings.retrograde_alerts);
    }
}
