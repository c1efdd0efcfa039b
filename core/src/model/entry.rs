use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::LeafError;
use crate::model::mood::MoodLevel;
use crate::time::parse_entry_date;

pub const MAX_NOTE_CHARS: usize = 500;

/// One mood submission for a calendar day.
///
/// `date` stays a raw string: calendar matching compares the exact
/// `YYYY-MM-DD` text, and a malformed value must survive loading so it can be
/// reported instead of rejected.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MoodEntry {
    pub id: String,
    pub date: String,
    pub mood_level: MoodLevel,
    #[serde(default)]
    pub activities: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl MoodEntry {
    pub fn new(id: impl Into<String>, date: impl Into<String>, mood_level: MoodLevel) -> Self {
        Self {
            id: id.into(),
            date: date.into(),
            mood_level,
            activities: Vec::new(),
            note: None,
            created_at: None,
        }
    }

    pub fn with_activities<I, S>(mut self, activities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.activities = activities.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_entry_date(&self.date)
    }

    pub fn weight(&self) -> u8 {
        self.mood_level.weight()
    }

    /// Checks the rules entry creation enforces. Aggregation never calls this.
    pub fn validate(&self) -> Result<(), LeafError> {
        if self.parsed_date().is_none() {
            return Err(LeafError::InvalidDate(self.date.clone()));
        }
        if self.activities.iter().all(|a| a.trim().is_empty()) {
            return Err(LeafError::NoActivities);
        }
        if let Some(note) = &self.note {
            let len = note.chars().count();
            if len > MAX_NOTE_CHARS {
                return Err(LeafError::NoteTooLong { len, max: MAX_NOTE_CHARS });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        let entry = MoodEntry::new("1", "2025-01-03", MoodLevel::Happy).with_activities(["work"]);
        assert_eq!(entry.validate(), Ok(()));

        let no_activities = MoodEntry::new("2", "2025-01-03", MoodLevel::Happy);
        assert_eq!(no_activities.validate(), Err(LeafError::NoActivities));

        let bad_date = MoodEntry::new("3", "2025-1-3", MoodLevel::Sad).with_activities(["work"]);
        assert_eq!(
            bad_date.validate(),
            Err(LeafError::InvalidDate("2025-1-3".to_string()))
        );

        let long_note = MoodEntry::new("4", "2025-01-03", MoodLevel::Sad)
            .with_activities(["work"])
            .with_note("é".repeat(MAX_NOTE_CHARS + 1));
        assert_eq!(
            long_note.validate(),
            Err(LeafError::NoteTooLong { len: 501, max: 500 })
        );

        // 500 multi-byte characters are still within the limit.
        let full_note = MoodEntry::new("5", "2025-01-03", MoodLevel::Sad)
            .with_activities(["work"])
            .with_note("é".repeat(MAX_NOTE_CHARS));
        assert_eq!(full_note.validate(), Ok(()));
    }

    #[test]
    fn test_deserialize_minimal_record() {
        let json = r#"{"id": "a1", "date": "2025-01-03", "mood_level": "neutro"}"#;
        let entry: MoodEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.mood_level, MoodLevel::Neutral);
        assert!(entry.activities.is_empty());
        assert_eq!(entry.note, None);
        assert_eq!(entry.created_at, None);
    }

    #[test]
    fn test_malformed_date_survives_deserialization() {
        let json =
            r#"{"id": "a1", "date": "yesterday", "mood_level": "sad", "activities": ["work"]}"#;
        let entry: MoodEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.date, "yesterday");
        assert_eq!(entry.parsed_date(), None);
    }
}
