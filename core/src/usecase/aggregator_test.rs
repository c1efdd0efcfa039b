use crate::model::entry::MoodEntry;
use crate::model::mood::MoodLevel;
use crate::repository::EntrySource;
use crate::time::YearMonth;
use crate::usecase::aggregator::MoodLogAggregator;
use anyhow::Result;
use chrono::NaiveDate;
use pretty_assertions::assert_eq;

struct MockEntrySource {
    entries: Vec<MoodEntry>,
}

impl EntrySource for MockEntrySource {
    fn list(&self) -> Result<Vec<MoodEntry>> {
        Ok(self.entries.clone())
    }
}

fn source() -> MockEntrySource {
    MockEntrySource {
        entries: vec![
            MoodEntry::new("1", "2025-01-01", MoodLevel::Happy)
                .with_activities(["exercise", "reading"]),
            MoodEntry::new("2", "2025-01-02", MoodLevel::Neutral).with_activities(["exercise"]),
            MoodEntry::new("3", "2025-01-03", MoodLevel::VeryHappy).with_activities(["family"]),
            MoodEntry::new("4", "2024-12-30", MoodLevel::Sad).with_activities(["work_stress"]),
        ],
    }
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_views_share_one_snapshot() {
    let entries = source().list().unwrap();
    let aggregator = MoodLogAggregator::new(&entries);

    let stats = aggregator.statistics();
    assert_eq!(stats.total_entries, 4);
    assert_eq!(stats.average_mood, 3.5);
    assert_eq!(stats.current_streak, 3);
    assert_eq!(stats.longest_streak, 3);
    assert_eq!(stats.top_activities(1)[0].tag, "exercise");

    let january = YearMonth::new(2025, 0).unwrap();
    let grid = aggregator.month_grid(january, day(2025, 1, 3)).unwrap();
    assert_eq!(grid.logged_days(), 3);
    assert_eq!(grid.entry_for_day(3).map(|e| e.id.as_str()), Some("3"));

    let month = aggregator.month_statistics(january);
    assert_eq!(month.total_entries, 3);

    let weights = aggregator.trend(3).weights();
    assert_eq!(weights, vec![4, 3, 5]);
    assert_eq!(aggregator.period_trend(day(2025, 1, 3), 7).len(), 4);
}

#[test]
fn test_streak_as_of_today() {
    let entries = source().list().unwrap();
    let aggregator = MoodLogAggregator::new(&entries);
    assert_eq!(aggregator.streak_as_of(day(2025, 1, 4)), 3);
    assert_eq!(aggregator.streak_as_of(day(2025, 1, 10)), 0);
}

#[test]
fn test_export_matches_statistics() {
    let entries = source().list().unwrap();
    let aggregator = MoodLogAggregator::new(&entries);
    let csv = aggregator.export_csv();

    let first_row = csv.lines().nth(1).unwrap();
    assert!(first_row.starts_with("2024-12-30,Sad,2,"));
    assert!(csv.contains("Total entries,4\n"));
    assert!(csv.contains("Most common activities,Exercise; Reading; Family; Work stress\n"));
}

#[test]
fn test_aggregator_is_shareable_across_threads() {
    let entries = source().list().unwrap();
    let aggregator = MoodLogAggregator::new(&entries);
    let totals: Vec<usize> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(move || aggregator.statistics().total_entries))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert_eq!(totals, vec![4; 4]);
}

#[test]
fn test_empty_source() {
    let entries = MockEntrySource { entries: vec![] }.list().unwrap();
    let aggregator = MoodLogAggregator::new(&entries);
    let stats = aggregator.statistics();
    assert_eq!(stats.total_entries, 0);
    assert_eq!(stats.average_mood, 0.0);
    assert!(aggregator.trend(30).is_empty());
}
