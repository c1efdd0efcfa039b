use serde::Serialize;
use std::collections::BTreeMap;

use crate::model::mood::MoodLevel;

/// Entries the date-dependent computations had to work around.
#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DataQuality {
    /// Entries whose date is not a strict `YYYY-MM-DD` calendar day.
    pub malformed_dates: usize,
    /// Entries shadowed by an earlier entry carrying the same date string.
    pub duplicate_dates: usize,
}

impl DataQuality {
    pub fn is_clean(&self) -> bool {
        self.malformed_dates == 0 && self.duplicate_dates == 0
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ActivityCount {
    pub tag: String,
    pub count: usize,
    /// Share of entries that include the tag, 0-100.
    pub percentage: f64,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Statistics {
    pub total_entries: usize,
    pub average_mood: f64,
    pub mood_distribution: BTreeMap<MoodLevel, usize>,
    /// Every tag seen, most frequent first, ties in first-seen order.
    pub most_common_activities: Vec<ActivityCount>,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub data_quality: DataQuality,
}

impl Statistics {
    pub fn empty() -> Self {
        Self {
            total_entries: 0,
            average_mood: 0.0,
            mood_distribution: MoodLevel::ALL.iter().map(|l| (*l, 0)).collect(),
            most_common_activities: Vec::new(),
            current_streak: 0,
            longest_streak: 0,
            data_quality: DataQuality::default(),
        }
    }

    pub fn top_activities(&self, k: usize) -> &[ActivityCount] {
        let end = k.min(self.most_common_activities.len());
        &self.most_common_activities[..end]
    }

    pub fn average_level(&self) -> Option<MoodLevel> {
        MoodLevel::nearest(self.average_mood)
    }

    pub fn count_for(&self, level: MoodLevel) -> usize {
        self.mood_distribution.get(&level).copied().unwrap_or(0)
    }

    /// Share of entries at `level`, 0-100.
    pub fn percentage_for(&self, level: MoodLevel) -> f64 {
        if self.total_entries == 0 {
            return 0.0;
        }
        self.count_for(level) as f64 * 100.0 / self.total_entries as f64
    }
}

impl Default for Statistics {
    fn default() -> Self {
        Self::empty()
    }
}
