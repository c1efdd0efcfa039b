use chrono::NaiveDate;
use tracing::debug;

use crate::error::LeafError;
use crate::model::entry::MoodEntry;
use crate::model::stats::Statistics;
use crate::service::calendar::{build_month_grid, CalendarGrid};
use crate::service::export;
use crate::service::statistics::{compute_month_statistics, compute_statistics, streak_as_of};
use crate::service::trend::{build_period_trend, build_trend, TrendSeries};
use crate::time::YearMonth;

/// Read-only view over one snapshot of entries. Every result borrows from
/// the same slice, so the facade can be shared freely between threads.
#[derive(Debug, Clone, Copy)]
pub struct MoodLogAggregator<'a> {
    entries: &'a [MoodEntry],
}

impl<'a> MoodLogAggregator<'a> {
    pub fn new(entries: &'a [MoodEntry]) -> Self {
        debug!(entries = entries.len(), "aggregating mood log snapshot");
        Self { entries }
    }

    pub fn entries(&self) -> &'a [MoodEntry] {
        self.entries
    }

    pub fn month_grid(
        &self,
        month: YearMonth,
        today: NaiveDate,
    ) -> Result<CalendarGrid<'a>, LeafError> {
        build_month_grid(self.entries, month.year(), month.month0(), today)
    }

    pub fn statistics(&self) -> Statistics {
        compute_statistics(self.entries)
    }

    pub fn month_statistics(&self, month: YearMonth) -> Statistics {
        compute_month_statistics(self.entries, month)
    }

    /// Streak that is still alive on `today` (logged today or yesterday).
    pub fn streak_as_of(&self, today: NaiveDate) -> u32 {
        streak_as_of(self.entries, today)
    }

    pub fn trend(&self, window_size: usize) -> TrendSeries<'a> {
        build_trend(self.entries, window_size)
    }

    pub fn period_trend(&self, today: NaiveDate, days: u32) -> TrendSeries<'a> {
        build_period_trend(self.entries, today, days)
    }

    pub fn export_csv(&self) -> String {
        export::export_csv(self.entries, &self.statistics())
    }
}
