//! Fixed content tables behind the generators.
//!
//! Everything here is canned display text. Rows hold `&'static str` and
//! get converted into owned records at draw time.

use crate::types::{
    CosmicScore, FocusPeriod, Impact, LifeArea, MoonPhaseEntry, MoonSignChange, TransitAlert,
};

/// One cosmic score row. Score, emoji, description, and details always
/// travel together.
pub struct ScoreRow {
    pub score: f32,
    pub emoji: &'static str,
    pub description: &'static str,
    pub details: &'static str,
}

impl ScoreRow {
    pub fn to_record(&self) -> CosmicScore {
        CosmicScore {
            score: self.score,
            max_score: MAX_SCORE,
            weather_emoji: self.emoji.to_string(),
            description: self.description.to_string(),
            details: self.details.to_string(),
        }
    }
}

pub const MAX_SCORE: f32 = 5.0;

pub static SCORES: [ScoreRow; 4] = [
    ScoreRow {
        score: 4.5,
        emoji: "☀️",
        description: "Bright & Energetic",
        details: "The cosmos align in your favor today. Excellent energy for new beginnings and important decisions.",
    },
    ScoreRow {
        score: 3.5,
        emoji: "⛅",
        description: "Partly Sunny",
        details: "Mixed energies today. Good for routine tasks and steady progress. Some minor obstacles possible.",
    },
    ScoreRow {
        score: 2.5,
        emoji: "☁️",
        description: "Cloudy",
        details: "Low energy day. Focus on rest and reflection. Avoid major decisions or confrontations.",
    },
    ScoreRow {
        score: 4.0,
        emoji: "🌤️",
        description: "Mostly Clear",
        details: "Generally positive energy with brief moments of tension. Stay flexible and adaptable.",
    },
];

/// One moon sign row; the whole tuple is drawn atomically.
pub struct MoonSignRow {
    pub sign: &'static str,
    pub element: &'static str,
    pub mood: &'static str,
    pub good_for: [&'static str; 4],
    pub avoid: [&'static str; 3],
}

pub static MOON_SIGNS: [MoonSignRow; 4] = [
    MoonSignRow {
        sign: "Gemini",
        element: "Air",
        mood: "Chatty & Curious",
        good_for: ["Communication", "Learning", "Short trips", "Social media"],
        avoid: ["Deep emotional talks", "Major commitments", "Routine tasks"],
    },
    MoonSignRow {
        sign: "Cancer",
        element: "Water",
        mood: "Nurturing & Sensitive",
        good_for: ["Home activities", "Family time", "Cooking", "Self-care"],
        avoid: ["Harsh criticism", "Public speaking", "Risk-taking"],
    },
    MoonSignRow {
        sign: "Leo",
        element: "Fire",
        mood: "Confident & Creative",
        good_for: ["Creative projects", "Romance", "Leadership", "Entertainment"],
        avoid: ["Being ignored", "Mundane tasks", "Criticism"],
    },
    MoonSignRow {
        sign: "Virgo",
        element: "Earth",
        mood: "Organized & Practical",
        good_for: ["Planning", "Health routines", "Work tasks", "Cleaning"],
        avoid: ["Chaos", "Spontaneity", "Messy situations"],
    },
];

pub struct PhaseRow {
    pub phase: &'static str,
    pub emoji: &'static str,
}

pub static MOON_PHASES: [PhaseRow; 8] = [
    PhaseRow { phase: "New Moon", emoji: "🌑" },
    PhaseRow { phase: "Waxing Crescent", emoji: "🌒" },
    PhaseRow { phase: "First Quarter", emoji: "🌓" },
    PhaseRow { phase: "Waxing Gibbous", emoji: "🌔" },
    PhaseRow { phase: "Full Moon", emoji: "🌕" },
    PhaseRow { phase: "Waning Gibbous", emoji: "🌖" },
    PhaseRow { phase: "Last Quarter", emoji: "🌗" },
    PhaseRow { phase: "Waning Crescent", emoji: "🌘" },
];

pub struct LifeAreaRow {
    pub house: u8,
    pub name: &'static str,
    pub emoji: &'static str,
    pub planets: &'static [&'static str],
    pub energy: &'static str,
    pub activities: [&'static str; 4],
}

impl LifeAreaRow {
    pub fn to_record(&self) -> LifeArea {
        LifeArea {
            house: self.house,
            name: self.name.to_string(),
            emoji: self.emoji.to_string(),
            planets: self.planets.iter().map(|p| p.to_string()).collect(),
            energy: self.energy.to_string(),
            activities: self.activities.iter().map(|a| a.to_string()).collect(),
        }
    }
}

pub static LIFE_AREAS: [LifeAreaRow; 5] = [
    LifeAreaRow {
        house: 10,
        name: "Career & Public Life",
        emoji: "💼",
        planets: &["Venus", "Mercury"],
        energy: "High visibility and recognition",
        activities: ["Presentations", "Networking", "Job interviews", "Public speaking"],
    },
    LifeAreaRow {
        house: 7,
        name: "Relationships",
        emoji: "💕",
        planets: &["Venus"],
        energy: "Harmony and connection",
        activities: ["Date nights", "Partner discussions", "Collaborations", "Contracts"],
    },
    LifeAreaRow {
        house: 2,
        name: "Money & Resources",
        emoji: "💰",
        planets: &["Mars"],
        energy: "Financial motivation",
        activities: ["Budget planning", "Investment decisions", "Shopping", "Salary negotiations"],
    },
    LifeAreaRow {
        house: 5,
        name: "Creativity & Romance",
        emoji: "🎨",
        planets: &["Sun"],
        energy: "Playful and expressive",
        activities: ["Art projects", "Dating", "Hobbies", "Fun activities"],
    },
    LifeAreaRow {
        house: 6,
        name: "Health & Routine",
        emoji: "🏃",
        planets: &["Mercury"],
        energy: "Productivity boost",
        activities: ["Exercise", "Health checkups", "Work tasks", "Organization"],
    },
];

pub struct AlertRow {
    pub id: &'static str,
    pub emoji: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub impact: Impact,
    pub advice: &'static str,
}

impl AlertRow {
    pub fn to_record(&self) -> TransitAlert {
        TransitAlert {
            id: self.id.to_string(),
            emoji: self.emoji.to_string(),
            title: self.title.to_string(),
            description: self.description.to_string(),
            impact: self.impact,
            advice: self.advice.to_string(),
        }
    }
}

pub static TRANSIT_ALERTS: [AlertRow; 5] = [
    AlertRow {
        id: "1",
        emoji: "💕",
        title: "Venus harmonizes with your Moon",
        description: "Beautiful energy for relationships and self-care",
        impact: Impact::Positive,
        advice: "Express your feelings and indulge in beauty",
    },
    AlertRow {
        id: "2",
        emoji: "🔥",
        title: "Mars challenges your Mercury",
        description: "Communication may be heated or rushed",
        impact: Impact::Challenging,
        advice: "Think before speaking, avoid arguments",
    },
    AlertRow {
        id: "3",
        emoji: "🌟",
        title: "Jupiter supports your Sun",
        description: "Opportunities knocking! Expansion available",
        impact: Impact::Positive,
        advice: "Say yes to new opportunities",
    },
    AlertRow {
        id: "4",
        emoji: "🪐",
        title: "Saturn creates tension with your Moon",
        description: "Emotional responsibilities may feel heavy",
        impact: Impact::Challenging,
        advice: "Set boundaries and practice self-care",
    },
    AlertRow {
        id: "5",
        emoji: "⚡",
        title: "Uranus activates your Venus",
        description: "Unexpected changes in relationships or finances",
        impact: Impact::Neutral,
        advice: "Stay flexible and embrace the unexpected",
    },
];

/// Planets tracked by the retrograde report, with their retrograde
/// interpretation text.
pub struct PlanetRow {
    pub id: &'static str,
    pub planet: &'static str,
    pub symbol: &'static str,
    pub interpretation: &'static str,
}

pub static PLANETS: [PlanetRow; 5] = [
    PlanetRow {
        id: "mercury",
        planet: "Mercury",
        symbol: "☿",
        interpretation: "Expect delays in communication, travel, and technology. Back up your files, reread messages before sending, and revisit old conversations rather than starting new ones.",
    },
    PlanetRow {
        id: "venus",
        planet: "Venus",
        symbol: "♀",
        interpretation: "Relationships and finances come up for review. Old flames may resurface. Hold off on major purchases and dramatic changes to your look.",
    },
    PlanetRow {
        id: "mars",
        planet: "Mars",
        symbol: "♂",
        interpretation: "Energy and motivation turn inward. Frustrations flare more easily. Redirect drive into finishing stalled projects instead of launching new battles.",
    },
    PlanetRow {
        id: "jupiter",
        planet: "Jupiter",
        symbol: "♃",
        interpretation: "Growth slows so beliefs can be re-examined. Revisit plans for expansion, study, or travel before committing further resources.",
    },
    PlanetRow {
        id: "saturn",
        planet: "Saturn",
        symbol: "♄",
        interpretation: "Structures and commitments get stress-tested. Review responsibilities and boundaries; rebuild anything that proves shaky.",
    },
];

// === Time-based content ===

pub const MORNING_TITLE: &str = "Your Day Ahead";
pub const AFTERNOON_TITLE: &str = "Afternoon Shift";
pub const EVENING_TITLE: &str = "Evening Reflection";

pub const MORNING_AFFIRMATION: &str = "I embrace the opportunities this morning brings.";
pub const AFTERNOON_AFFIRMATION: &str = "I adapt gracefully to the day's evolving energies.";
pub const EVENING_AFFIRMATION: &str = "I am grateful for today and welcome restful sleep.";

pub const MORNING_OPPORTUNITY: &str = "Networking could bring fruitful connections.";
pub const MORNING_WATCH_FOR: &str = "Avoid impulsive spending early in the day.";
pub const AFTERNOON_EVENING_PREVIEW: &str = "Evening energy will be ideal for creative pursuits.";
pub const AFTERNOON_BEST_WINDOW: &str = "Focus on important tasks between 2-4 PM.";
pub const EVENING_TOMORROW_SCORE: &str = "Tomorrow forecast: Mostly Clear (4/5)";
pub const EVENING_OVERNIGHT_MOON: &str =
    "Moon will transition to Virgo overnight, plan for practical tasks.";
pub const EVENING_REST: &str = "Ensure a peaceful wind-down for optimal rejuvenation.";

// === Weekly content ===

/// Cyclic key events for the simple 7-day outlook, paired with days by
/// `index % len`.
pub static WEEKLY_KEY_EVENTS: [&str; 7] = [
    "New opportunities arise",
    "Focus on relationships",
    "Financial breakthroughs",
    "Creative inspiration flows",
    "Rest and recharge",
    "Communication is key",
    "Take bold action",
];

pub static PREVIEW_MOON_SIGNS: [&str; 6] = ["Aries", "Taurus", "Gemini", "Cancer", "Leo", "Virgo"];

pub fn moon_sign_changes() -> Vec<MoonSignChange> {
    [
        ("msc1", "Mon-Tue", "Aries", "♈️"),
        ("msc2", "Wed-Thu", "Taurus", "♉️"),
        ("msc3", "Fri-Sat", "Gemini", "♊️"),
        ("msc4", "Sun", "Cancer", "♋️"),
    ]
    .iter()
    .map(|(id, period, sign, symbol)| MoonSignChange {
        id: id.to_string(),
        period: period.to_string(),
        sign: sign.to_string(),
        symbol: symbol.to_string(),
    })
    .collect()
}

pub fn moon_phase_entries() -> Vec<MoonPhaseEntry> {
    // Kept to three entries for the card layout
    [
        ("mp1", "New Moon", "🌑"),
        ("mp2", "Waxing Crescent", "🌒"),
        ("mp3", "First Quarter", "🌓"),
    ]
    .iter()
    .map(|(id, name, emoji)| MoonPhaseEntry {
        id: id.to_string(),
        name: name.to_string(),
        emoji: emoji.to_string(),
    })
    .collect()
}

/// Weekly highlights; the day offset (0-6 from today) is resolved to a
/// day label by the generator.
pub struct HighlightRow {
    pub id: &'static str,
    pub day_offset: i64,
    pub title: &'static str,
    pub description: &'static str,
}

pub static WEEKLY_HIGHLIGHTS: [HighlightRow; 4] = [
    HighlightRow {
        id: "wh1",
        day_offset: 0,
        title: "New Moon in Aries",
        description: "Fresh starts, new beginnings & bold moves.",
    },
    HighlightRow {
        id: "wh2",
        day_offset: 2,
        title: "Mercury enters Gemini",
        description: "Communication flows more easily, great for talks.",
    },
    HighlightRow {
        id: "wh3",
        day_offset: 4,
        title: "Venus harmonizes with Moon",
        description: "Relationship harmony peaks, enjoy connections.",
    },
    HighlightRow {
        id: "wh4",
        day_offset: 6,
        title: "Mars square Mercury",
        description: "Watch for communication conflicts, think first.",
    },
];

pub fn focus_periods() -> Vec<FocusPeriod> {
    [
        (
            "wf1",
            "Early Week (Mon-Wed)",
            "Personal identity & self-expression (1st House activity)",
        ),
        (
            "wf2",
            "Mid Week (Thu-Fri)",
            "Career & public reputation (10th House focus)",
        ),
        (
            "wf3",
            "Weekend (Sat-Sun)",
            "Home & family matters (4th House vibes)",
        ),
    ]
    .iter()
    .map(|(id, title, description)| FocusPeriod {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_rows_pair_consistently() {
        let expected = [
            (4.5, "☀️", "Bright & Energetic"),
            (3.5, "⛅", "Partly Sunny"),
            (2.5, "☁️", "Cloudy"),
            (4.0, "🌤️", "Mostly Clear"),
        ];
        for (row, (score, emoji, description)) in SCORES.iter().zip(expected) {
            assert_eq!(row.score, score);
            assert_eq!(row.emoji, emoji);
            assert_eq!(row.description, description);
            let record = row.to_record();
            assert_eq!(record.max_score, 5.0);
            assert!(!record.details.is_empty());
        }
    }

    #[test]
    fn test_alert_ids_unique() {
        for (i, a) in TRANSIT_ALERTS.iter().enumerate() {
            for b in &TRANSIT_ALERTS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_planet_table_complete() {
        let names: Vec<_> = PLANETS.iter().map(|p| p.planet).collect();
        assert_eq!(names, ["Mercury", "Venus", "Mars", "Jupiter", "Saturn"]);
        for planet in &PLANETS {
            assert!(!planet.symbol.is_empty());
            assert!(!planet.interpretation.is_empty());
        }
    }

    #[test]
    fn test_fixed_weekly_sections() {
        assert_eq!(moon_sign_changes().len(), 4);
        assert_eq!(moon_phase_entries().len(), 3);
        assert_eq!(focus_periods().len(), 3);
        for highlight in &WEEKLY_HIGHLIGHTS {
            assert!((0..7).contains(&highlight.day_offset));
        }
    }
}
