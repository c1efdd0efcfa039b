use serde::{Deserialize, Serialize};
use std::fmt;

/// The five mood levels, ordered from worst to best.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MoodLevel {
    #[serde(alias = "molto_triste")]
    VerySad,
    #[serde(alias = "triste")]
    Sad,
    #[serde(alias = "neutro")]
    Neutral,
    #[serde(alias = "felice")]
    Happy,
    #[serde(alias = "molto_felice")]
    VeryHappy,
}

impl MoodLevel {
    pub const ALL: [MoodLevel; 5] = [
        MoodLevel::VerySad,
        MoodLevel::Sad,
        MoodLevel::Neutral,
        MoodLevel::Happy,
        MoodLevel::VeryHappy,
    ];

    pub fn weight(self) -> u8 {
        match self {
            MoodLevel::VerySad => 1,
            MoodLevel::Sad => 2,
            MoodLevel::Neutral => 3,
            MoodLevel::Happy => 4,
            MoodLevel::VeryHappy => 5,
        }
    }

    pub fn from_weight(weight: u8) -> Option<Self> {
        match weight {
            1 => Some(MoodLevel::VerySad),
            2 => Some(MoodLevel::Sad),
            3 => Some(MoodLevel::Neutral),
            4 => Some(MoodLevel::Happy),
            5 => Some(MoodLevel::VeryHappy),
            _ => None,
        }
    }

    /// Closest level to an average weight. `None` when there is nothing to
    /// average (a zero or negative mean).
    pub fn nearest(average: f64) -> Option<Self> {
        if !average.is_finite() || average <= 0.0 {
            return None;
        }
        let rounded = average.round().clamp(1.0, 5.0) as u8;
        Self::from_weight(rounded)
    }

    pub fn label(self) -> &'static str {
        match self {
            MoodLevel::VerySad => "Very sad",
            MoodLevel::Sad => "Sad",
            MoodLevel::Neutral => "Neutral",
            MoodLevel::Happy => "Happy",
            MoodLevel::VeryHappy => "Very happy",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            MoodLevel::VerySad => "#EF4444",
            MoodLevel::Sad => "#F97316",
            MoodLevel::Neutral => "#6B7280",
            MoodLevel::Happy => "#10B981",
            MoodLevel::VeryHappy => "#059669",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            MoodLevel::VerySad => "😞",
            MoodLevel::Sad => "😔",
            MoodLevel::Neutral => "😐",
            MoodLevel::Happy => "😊",
            MoodLevel::VeryHappy => "😄",
        }
    }
}

impl fmt::Display for MoodLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
