use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use serde_json::Value;
use tracing::{debug, warn};

use crate::model::entry::MoodEntry;
use crate::repository::traits::EntrySource;

pub const DEFAULT_DIR_NAME: &str = ".leaf";
pub const DEFAULT_FILE_NAME: &str = "entries.json";

/// Default snapshot location, `~/.leaf/entries.json`.
pub fn default_entries_path() -> Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| anyhow!("Could not determine home directory"))?;
    Ok(home_dir.join(DEFAULT_DIR_NAME).join(DEFAULT_FILE_NAME))
}

/// Reads entries from a JSON array on disk. Never writes.
#[derive(Debug, Clone)]
pub struct FileEntrySource {
    file_path: PathBuf,
}

impl FileEntrySource {
    pub fn new(file_path: Option<PathBuf>) -> Result<Self> {
        let file_path = match file_path {
            Some(path) => path,
            None => default_entries_path()?,
        };
        Ok(FileEntrySource { file_path })
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn read_records(&self) -> Result<Vec<Value>> {
        let file = match File::open(&self.file_path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.file_path.display(), "no snapshot file, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to open {}", self.file_path.display()))
            }
        };
        let records: Vec<Value> = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("{} is not a JSON array", self.file_path.display()))?;
        Ok(records)
    }
}

impl EntrySource for FileEntrySource {
    fn list(&self) -> Result<Vec<MoodEntry>> {
        let records = self.read_records()?;
        let mut entries = Vec::with_capacity(records.len());
        for (index, record) in records.into_iter().enumerate() {
            match serde_json::from_value::<MoodEntry>(record) {
                Ok(entry) => entries.push(entry),
                Err(e) => warn!(index, error = %e, "skipping unreadable mood entry"),
            }
        }
        Ok(entries)
    }
}
