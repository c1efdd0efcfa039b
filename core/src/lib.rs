pub mod error;
pub mod model;
pub mod repository;
pub mod service;
pub mod time;
pub mod usecase;

pub use error::LeafError;
pub use model::activity::{Activity, ActivityCategory, CATALOG};
pub use model::entry::MoodEntry;
pub use model::mood::MoodLevel;
pub use model::stats::{ActivityCount, DataQuality, Statistics};
pub use repository::{EntrySource, FileEntrySource};
pub use service::calendar::{build_month_grid, CalendarCell, CalendarGrid};
pub use service::export::{export_csv, export_file_name, write_csv};
pub use service::statistics::{compute_month_statistics, compute_statistics, streak_as_of};
pub use service::trend::{build_period_trend, build_trend, TrendPoint, TrendSeries};
pub use time::{parse_entry_date, YearMonth};
pub use usecase::aggregator::MoodLogAggregator;
