//! Daily content generators.
//!
//! Pure draws from the fixed tables in [`crate::tables`]. Every call is
//! independent and side-effect-free apart from reading the process RNG
//! (and the clock, for the `_now` variant). Randomness is deliberately
//! unseeded: the variety is cosmetic, not correctness-critical.

use chrono::{Local, TimeDelta, Timelike};
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::tables;
use crate::types::{
    AfternoonDetails, CosmicScore, DayPeriod, EveningDetails, LifeArea, MoonData, MorningDetails,
    PeriodDetails, PlanetStatus, TimeBasedContent, TransitAlert,
};

/// Probability that any given planet is currently retrograde.
const RETROGRADE_CHANCE: f64 = 0.3;

/// Draw today's cosmic score from the four fixed rows.
pub fn cosmic_score() -> CosmicScore {
    let mut rng = rand::rng();
    let row = tables::SCORES
        .choose(&mut rng)
        .expect("score table is non-empty");
    row.to_record()
}

/// Draw moon attributes: one atomic sign tuple plus an independent phase.
pub fn moon_data() -> MoonData {
    let mut rng = rand::rng();
    let sign = tables::MOON_SIGNS
        .choose(&mut rng)
        .expect("moon sign table is non-empty");
    let phase = tables::MOON_PHASES
        .choose(&mut rng)
        .expect("moon phase table is non-empty");
    let hours_until_change = rng.random_range(12..60);

    MoonData {
        sign: sign.sign.to_string(),
        element: sign.element.to_string(),
        phase: phase.phase.to_string(),
        phase_emoji: phase.emoji.to_string(),
        mood: sign.mood.to_string(),
        good_for: sign.good_for.iter().map(|s| s.to_string()).collect(),
        avoid: sign.avoid.iter().map(|s| s.to_string()).collect(),
        next_sign_change: (Local::now() + TimeDelta::hours(hours_until_change)).timestamp(),
    }
}

/// Sample exactly 2 of the 5 life areas, without replacement.
pub fn life_area_focus() -> Vec<LifeArea> {
    let mut rng = rand::rng();
    tables::LIFE_AREAS
        .choose_multiple(&mut rng, 2)
        .map(|row| row.to_record())
        .collect()
}

/// Sample exactly 3 of the 5 transit alerts, without replacement.
pub fn transit_alerts() -> Vec<TransitAlert> {
    let mut rng = rand::rng();
    tables::TRANSIT_ALERTS
        .choose_multiple(&mut rng, 3)
        .map(|row| row.to_record())
        .collect()
}

/// Status report for all five tracked planets, in table order.
///
/// Each planet is independently retrograde with probability 0.3; there
/// is no cross-planet constraint, several may be retrograde at once.
pub fn retrograde_report() -> Vec<PlanetStatus> {
    let mut rng = rand::rng();
    let now = Local::now();

    tables::PLANETS
        .iter()
        .map(|row| {
            let is_retrograde = rng.random_bool(RETROGRADE_CHANCE);
            if is_retrograde {
                let started = now - TimeDelta::days(rng.random_range(5..25));
                let ends = now + TimeDelta::days(rng.random_range(5..30));
                PlanetStatus {
                    id: row.id.to_string(),
                    planet: row.planet.to_string(),
                    symbol: row.symbol.to_string(),
                    is_retrograde: true,
                    status_text: "Retrograde".to_string(),
                    dates_label: "Dates:".to_string(),
                    dates_value: format!(
                        "{} - {}",
                        started.format("%b %-d"),
                        ends.format("%b %-d, %Y")
                    ),
                    interpretation: Some(row.interpretation.to_string()),
                }
            } else {
                let since = now - TimeDelta::days(rng.random_range(10..120));
                PlanetStatus {
                    id: row.id.to_string(),
                    planet: row.planet.to_string(),
                    symbol: row.symbol.to_string(),
                    is_retrograde: false,
                    status_text: "Direct".to_string(),
                    dates_label: "Direct since:".to_string(),
                    dates_value: since.format("%b %-d, %Y").to_string(),
                    interpretation: None,
                }
            }
        })
        .collect()
}

/// Select the header content bundle for an hour of day (0-23).
///
/// [6,12) yields the morning bundle, [12,18) the afternoon bundle, and
/// everything else the evening bundle. Pure in `hour` apart from the
/// randomized score/moon text woven into the bundles.
pub fn time_based_content(hour: u32) -> TimeBasedContent {
    let period = DayPeriod::from_hour(hour);
    tracing::debug!(%period, hour, "selecting time-based content");

    let score = cosmic_score();
    let moon = moon_data();

    match period {
        DayPeriod::Morning => TimeBasedContent {
            period,
            title: tables::MORNING_TITLE.to_string(),
            details: PeriodDetails::Morning(MorningDetails {
                overall_score: format!("{} - {}", score.fraction(), score.description),
                moon_mood: moon.mood,
                key_opportunity: tables::MORNING_OPPORTUNITY.to_string(),
                watch_for: tables::MORNING_WATCH_FOR.to_string(),
            }),
            affirmation: tables::MORNING_AFFIRMATION.to_string(),
        },
        DayPeriod::Afternoon => TimeBasedContent {
            period,
            title: tables::AFTERNOON_TITLE.to_string(),
            details: PeriodDetails::Afternoon(AfternoonDetails {
                moon_status: format!("Moon remains in {} through the afternoon.", moon.sign),
                evening_preview: tables::AFTERNOON_EVENING_PREVIEW.to_string(),
                best_window: tables::AFTERNOON_BEST_WINDOW.to_string(),
            }),
            affirmation: tables::AFTERNOON_AFFIRMATION.to_string(),
        },
        DayPeriod::Evening => TimeBasedContent {
            period,
            title: tables::EVENING_TITLE.to_string(),
            details: PeriodDetails::Evening(EveningDetails {
                tomorrow_score: tables::EVENING_TOMORROW_SCORE.to_string(),
                overnight_moon: tables::EVENING_OVERNIGHT_MOON.to_string(),
                rest_recommendation: tables::EVENING_REST.to_string(),
            }),
            affirmation: tables::EVENING_AFFIRMATION.to_string(),
        },
    }
}

/// [`time_based_content`] for the current local wall-clock hour.
pub fn time_based_content_now() -> TimeBasedContent {
    time_based_content(Local::now().hour())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_cosmic_score_always_from_table() {
        for _ in 0..50 {
            let score = cosmic_score();
            let row = tables::SCORES
                .iter()
                .find(|r| r.score == score.score)
                .expect("score must be one of the four fixed values");
            assert_eq!(score.weather_emoji, row.emoji);
            assert_eq!(score.description, row.description);
            assert_eq!(score.details, row.details);
            assert_eq!(score.max_score, 5.0);
        }
    }

    #[test]
    fn test_moon_data_tuple_is_atomic() {
        for _ in 0..50 {
            let moon = moon_data();
            let row = tables::MOON_SIGNS
                .iter()
                .find(|r| r.sign == moon.sign)
                .expect("sign must come from the table");
            assert_eq!(moon.element, row.element);
            assert_eq!(moon.mood, row.mood);
            assert_eq!(moon.good_for, row.good_for);
            assert_eq!(moon.avoid, row.avoid);
            assert!(tables::MOON_PHASES
                .iter()
                .any(|p| p.phase == moon.phase && p.emoji == moon.phase_emoji));
        }
    }

    #[test]
    fn test_next_sign_change_within_window() {
        let before = Utc::now().timestamp();
        let moon = moon_data();
        let after = Utc::now().timestamp();
        // 12 to 59 hours out, inclusive
        assert!(moon.next_sign_change >= before + 12 * 3600);
        assert!(moon.next_sign_change < after + 60 * 3600);
    }

    #[test]
    fn test_life_areas_two_distinct() {
        for _ in 0..50 {
            let areas = life_area_focus();
            assert_eq!(areas.len(), 2);
            assert_ne!(areas[0].house, areas[1].house);
        }
    }

    #[test]
    fn test_transit_alerts_three_distinct() {
        for _ in 0..50 {
            let alerts = transit_alerts();
            assert_eq!(alerts.len(), 3);
            for (i, a) in alerts.iter().enumerate() {
                for b in &alerts[i + 1..] {
                    assert_ne!(a.id, b.id);
                }
            }
        }
    }

    #[test]
    fn test_retrograde_report_covers_all_planets() {
        for _ in 0..50 {
            let report = retrograde_report();
            assert_eq!(report.len(), 5);
            for (status, row) in report.iter().zip(&tables::PLANETS) {
                assert_eq!(status.planet, row.planet);
                assert!(!status.status_text.is_empty());
                assert!(!status.dates_value.is_empty());
                if status.is_retrograde {
                    assert_eq!(status.status_text, "Retrograde");
                    assert_eq!(status.dates_label, "Dates:");
                    assert!(status.interpretation.is_some());
                } else {
                    assert_eq!(status.status_text, "Direct");
                    assert_eq!(status.dates_label, "Direct since:");
                    assert!(status.interpretation.is_none());
                }
            }
        }
    }

    #[test]
    fn test_every_hour_selects_one_bundle() {
        for hour in 0..24 {
            let content = time_based_content(hour);
            let expected = DayPeriod::from_hour(hour);
            assert_eq!(content.period, expected);
            match (&content.details, expected) {
                (PeriodDetails::Morning(_), DayPeriod::Morning) => {}
                (PeriodDetails::Afternoon(_), DayPeriod::Afternoon) => {}
                (PeriodDetails::Evening(_), DayPeriod::Evening) => {}
                (details, period) => {
                    panic!("hour {hour}: bundle {details:?} does not match period {period}")
                }
            }
        }
    }

    #[test]
    fn test_hour_nine_is_morning_bundle() {
        let content = time_based_content(9);
        assert_eq!(content.period, DayPeriod::Morning);
        assert_eq!(content.title, "Your Day Ahead");
        assert_eq!(
            content.affirmation,
            "I embrace the opportunities this morning brings."
        );
        match content.details {
            PeriodDetails::Morning(details) => {
                assert!(!details.overall_score.is_empty());
                assert!(!details.moon_mood.is_empty());
            }
            other => panic!("expected morning details, got {other:?}"),
        }
    }

    #[test]
    fn test_afternoon_moon_status_names_a_sign() {
        let content = time_based_content(14);
        match content.details {
            PeriodDetails::Afternoon(details) => {
                assert!(tables::MOON_SIGNS
                    .iter()
                    .any(|row| details.moon_status.contains(row.sign)));
            }
            other => panic!("expected afternoon details, got {other:?}"),
        }
    }
}
