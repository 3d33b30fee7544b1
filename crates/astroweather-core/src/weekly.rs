//! Weekly forecast generators.
//!
//! Seven consecutive days starting today. The auxiliary sections (moon
//! movement, highlights, focus periods) are fixed content; only the day
//! labels are resolved relative to "today".

use chrono::{Local, TimeDelta};
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::daily;
use crate::tables;
use crate::types::{
    DailyWeatherChip, MoonMovement, WeeklyForecast, WeeklyHighlight, WeeklyPreviewDay,
};

/// Simple 7-day outlook list for the preview modal.
///
/// Scores land in [3,5); key events cycle through the fixed table by
/// day index.
pub fn weekly_preview() -> Vec<WeeklyPreviewDay> {
    let mut rng = rand::rng();
    let today = Local::now();

    (0..7)
        .map(|i| {
            let date = today + TimeDelta::days(i);
            WeeklyPreviewDay {
                date: date.timestamp(),
                cosmic_score: rng.random_range(3.0..5.0),
                moon_sign: tables::PREVIEW_MOON_SIGNS
                    .choose(&mut rng)
                    .expect("moon sign list is non-empty")
                    .to_string(),
                key_event: tables::WEEKLY_KEY_EVENTS
                    [i as usize % tables::WEEKLY_KEY_EVENTS.len()]
                .to_string(),
            }
        })
        .collect()
}

/// Comprehensive weekly forecast for the weekly modal.
///
/// Daily chips reuse the cosmic score generator so score and emoji stay
/// paired; the remaining sections come straight from the fixed tables.
pub fn weekly_forecast() -> WeeklyForecast {
    let today = Local::now();

    let daily_chips = (0..7)
        .map(|i| {
            let date = today + TimeDelta::days(i);
            let score = daily::cosmic_score();
            DailyWeatherChip {
                id: format!("chip-{i}"),
                date: date.timestamp(),
                day_abbrev: date.format("%a").to_string(),
                day_of_month: date.format("%-d").to_string(),
                weather_emoji: score.weather_emoji,
                cosmic_score: score.score,
            }
        })
        .collect();

    let highlights = tables::WEEKLY_HIGHLIGHTS
        .iter()
        .map(|row| WeeklyHighlight {
            id: row.id.to_string(),
            day_abbrev: (today + TimeDelta::days(row.day_offset))
                .format("%a")
                .to_string(),
            title: row.title.to_string(),
            description: row.description.to_string(),
        })
        .collect();

    WeeklyForecast {
        daily_chips,
        moon_movement: MoonMovement {
            sign_changes: tables::moon_sign_changes(),
            phases: tables::moon_phase_entries(),
        },
        highlights,
        focus_areas: tables::focus_periods(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_seven_consecutive_days() {
        let preview = weekly_preview();
        assert_eq!(preview.len(), 7);
        for pair in preview.windows(2) {
            let gap = pair[1].date - pair[0].date;
            assert_eq!(gap, 24 * 3600);
        }
    }

    #[test]
    fn test_preview_scores_in_range() {
        for day in weekly_preview() {
            assert!(day.cosmic_score >= 3.0);
            assert!(day.cosmic_score < 5.0);
            assert!(tables::PREVIEW_MOON_SIGNS.contains(&day.moon_sign.as_str()));
        }
    }

    #[test]
    fn test_preview_key_events_cycle_in_order() {
        let preview = weekly_preview();
        for (i, day) in preview.iter().enumerate() {
            assert_eq!(
                day.key_event,
                tables::WEEKLY_KEY_EVENTS[i % tables::WEEKLY_KEY_EVENTS.len()]
            );
        }
    }

    #[test]
    fn test_forecast_chips_increase_daily() {
        let forecast = weekly_forecast();
        assert_eq!(forecast.daily_chips.len(), 7);
        for pair in forecast.daily_chips.windows(2) {
            assert_eq!(pair[1].date - pair[0].date, 24 * 3600);
        }
        for (i, chip) in forecast.daily_chips.iter().enumerate() {
            assert_eq!(chip.id, format!("chip-{i}"));
            assert!(!chip.day_abbrev.is_empty());
            assert!(!chip.day_of_month.is_empty());
        }
    }

    #[test]
    fn test_forecast_chip_score_emoji_paired() {
        for chip in weekly_forecast().daily_chips {
            let row = tables::SCORES
                .iter()
                .find(|r| r.score == chip.cosmic_score)
                .expect("chip score must come from the score table");
            assert_eq!(chip.weather_emoji, row.emoji);
        }
    }

    #[test]
    fn test_forecast_fixed_sections() {
        let forecast = weekly_forecast();
        assert_eq!(forecast.moon_movement.sign_changes.len(), 4);
        assert_eq!(forecast.moon_movement.phases.len(), 3);
        assert_eq!(forecast.highlights.len(), 4);
        assert_eq!(forecast.focus_areas.len(), 3);
    }
}
