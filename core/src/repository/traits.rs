use crate::model::entry::MoodEntry;
use anyhow::Result;

/// Read-only access to the current snapshot of mood entries.
pub trait EntrySource {
    fn list(&self) -> Result<Vec<MoodEntry>>;
}
