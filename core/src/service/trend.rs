use chrono::{Duration, NaiveDate};
use serde::Serialize;
use tracing::debug;

use crate::model::entry::MoodEntry;
use crate::model::mood::MoodLevel;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub level: MoodLevel,
    pub weight: u8,
    pub label: &'static str,
    pub color: &'static str,
    pub activity_count: usize,
}

impl TrendPoint {
    fn from_entry(date: NaiveDate, entry: &MoodEntry) -> Self {
        Self {
            date,
            level: entry.mood_level,
            weight: entry.weight(),
            label: entry.mood_level.label(),
            color: entry.mood_level.color(),
            activity_count: entry.activities.len(),
        }
    }
}

/// Chronological window over a snapshot. Points are produced on demand and
/// `iter()` can be called any number of times.
#[derive(Debug, Clone, Default)]
pub struct TrendSeries<'a> {
    points: Vec<(NaiveDate, &'a MoodEntry)>,
    skipped: usize,
}

impl<'a> TrendSeries<'a> {
    pub fn iter(&self) -> TrendIter<'_, 'a> {
        TrendIter {
            inner: self.points.iter(),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Entries left out because their date is not a strict `YYYY-MM-DD` day.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn weights(&self) -> Vec<u8> {
        self.points.iter().map(|(_, e)| e.weight()).collect()
    }
}

pub struct TrendIter<'s, 'a> {
    inner: std::slice::Iter<'s, (NaiveDate, &'a MoodEntry)>,
}

impl<'s, 'a> Iterator for TrendIter<'s, 'a> {
    type Item = TrendPoint;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(date, entry)| TrendPoint::from_entry(*date, entry))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'s, 'a> ExactSizeIterator for TrendIter<'s, 'a> {}

impl<'s, 'a> IntoIterator for &'s TrendSeries<'a> {
    type Item = TrendPoint;
    type IntoIter = TrendIter<'s, 'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Date-sorted entries plus the number of entries whose date did not parse.
fn sorted_by_date(entries: &[MoodEntry]) -> (Vec<(NaiveDate, &MoodEntry)>, usize) {
    let mut dated: Vec<(NaiveDate, &MoodEntry)> = entries
        .iter()
        .filter_map(|e| e.parsed_date().map(|d| (d, e)))
        .collect();
    let skipped = entries.len() - dated.len();
    if skipped > 0 {
        debug!(skipped, "trend left out entries with malformed dates");
    }
    // Stable: same-date entries keep their input order.
    dated.sort_by_key(|(date, _)| *date);
    (dated, skipped)
}

/// The `window_size` most recent entries in ascending date order. Entries
/// with malformed dates cannot be placed on the axis; they are left out and
/// counted in [`TrendSeries::skipped`].
pub fn build_trend(entries: &[MoodEntry], window_size: usize) -> TrendSeries<'_> {
    let (mut points, skipped) = sorted_by_date(entries);
    let keep_from = points.len().saturating_sub(window_size);
    points.drain(..keep_from);
    TrendSeries { points, skipped }
}

/// Entries dated within the last `days` days up to and including `today`.
pub fn build_period_trend(
    entries: &[MoodEntry],
    today: NaiveDate,
    days: u32,
) -> TrendSeries<'_> {
    let (points, skipped) = sorted_by_date(entries);
    if days == 0 {
        return TrendSeries {
            points: Vec::new(),
            skipped,
        };
    }
    let start = today
        .checked_sub_signed(Duration::days(i64::from(days) - 1))
        .unwrap_or(NaiveDate::MIN);
    let points = points
        .into_iter()
        .filter(|(date, _)| *date >= start && *date <= today)
        .collect();
    TrendSeries { points, skipped }
}
