use chrono::NaiveDate;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use tracing::debug;

use crate::error::LeafError;
use crate::model::entry::MoodEntry;
use crate::model::stats::DataQuality;
use crate::time::{date_key, parse_entry_date, YearMonth};

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CalendarCell<'a> {
    /// Padding before the 1st of the month.
    Blank,
    Empty {
        day: u32,
        is_today: bool,
    },
    WithEntry {
        day: u32,
        entry: &'a MoodEntry,
        is_today: bool,
    },
}

impl<'a> CalendarCell<'a> {
    pub fn day(&self) -> Option<u32> {
        match self {
            CalendarCell::Blank => None,
            CalendarCell::Empty { day, .. } | CalendarCell::WithEntry { day, .. } => Some(*day),
        }
    }

    pub fn entry(&self) -> Option<&'a MoodEntry> {
        match self {
            CalendarCell::WithEntry { entry, .. } => Some(*entry),
            _ => None,
        }
    }

    pub fn is_today(&self) -> bool {
        match self {
            CalendarCell::Blank => false,
            CalendarCell::Empty { is_today, .. } | CalendarCell::WithEntry { is_today, .. } => {
                *is_today
            }
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CalendarGrid<'a> {
    pub year: i32,
    /// 0-based month index.
    pub month: u32,
    /// Row-major, Sunday-first weeks. Never more than 42 cells.
    pub cells: Vec<CalendarCell<'a>>,
    pub data_quality: DataQuality,
}

impl<'a> CalendarGrid<'a> {
    pub fn year_month(&self) -> YearMonth {
        YearMonth::from_date(
            NaiveDate::from_ymd_opt(self.year, self.month + 1, 1).unwrap_or(NaiveDate::MIN),
        )
    }

    pub fn day_cells(&self) -> impl Iterator<Item = &CalendarCell<'a>> {
        self.cells.iter().filter(|c| !matches!(c, CalendarCell::Blank))
    }

    pub fn weeks(&self) -> std::slice::Chunks<'_, CalendarCell<'a>> {
        self.cells.chunks(7)
    }

    pub fn entry_for_day(&self, day: u32) -> Option<&'a MoodEntry> {
        self.day_cells()
            .find(|c| c.day() == Some(day))
            .and_then(|c| c.entry())
    }

    pub fn logged_days(&self) -> usize {
        self.day_cells().filter(|c| c.entry().is_some()).count()
    }
}

/// Counts malformed dates and entries shadowed by an earlier same-date entry.
pub fn assess_dates(entries: &[MoodEntry]) -> DataQuality {
    let mut seen: HashSet<&str> = HashSet::with_capacity(entries.len());
    let mut quality = DataQuality::default();
    for entry in entries {
        if parse_entry_date(&entry.date).is_none() {
            quality.malformed_dates += 1;
            continue;
        }
        if !seen.insert(entry.date.as_str()) {
            quality.duplicate_dates += 1;
        }
    }
    quality
}

/// Lays out `month` (0-11) of `year` as calendar cells and attaches entries.
///
/// A day matches an entry only when the entry's `date` is exactly the
/// zero-padded `YYYY-MM-DD` key of that day. When several entries share a
/// date the first one in input order is shown.
pub fn build_month_grid<'a>(
    entries: &'a [MoodEntry],
    year: i32,
    month: u32,
    today: NaiveDate,
) -> Result<CalendarGrid<'a>, LeafError> {
    let ym = YearMonth::new(year, month)?;

    let mut by_date: HashMap<&str, &'a MoodEntry> = HashMap::with_capacity(entries.len());
    for entry in entries {
        by_date.entry(entry.date.as_str()).or_insert(entry);
    }

    let blanks = ym.leading_blanks();
    let days = ym.days_in_month();
    let mut cells = Vec::with_capacity((blanks + days) as usize);
    cells.extend((0..blanks).map(|_| CalendarCell::Blank));

    for day in 1..=days {
        let key = date_key(ym.year(), ym.month(), day);
        let is_today = NaiveDate::from_ymd_opt(ym.year(), ym.month(), day) == Some(today);
        let cell = match by_date.get(key.as_str()).copied() {
            Some(entry) => CalendarCell::WithEntry { day, entry, is_today },
            None => CalendarCell::Empty { day, is_today },
        };
        cells.push(cell);
    }

    let data_quality = assess_dates(entries);
    if !data_quality.is_clean() {
        debug!(
            month = %ym,
            malformed = data_quality.malformed_dates,
            duplicates = data_quality.duplicate_dates,
            "calendar built around inconsistent entries"
        );
    }

    Ok(CalendarGrid {
        year: ym.year(),
        month: ym.month0(),
        cells,
        data_quality,
    })
}
