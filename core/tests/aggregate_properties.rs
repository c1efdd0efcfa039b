use chrono::NaiveDate;
use std::collections::HashSet;
use leaf_core::{
    build_month_grid, build_trend, compute_statistics, MoodEntry, MoodLevel, YearMonth,
};
use proptest::prelude::*;

/// Catalog keys, a free-form tag and the blank tags a hand-edited file can hold.
const TAGS: [&str; 8] = ["exercise", "work", "family", "reading", "sleep", "custom", "", " "];

fn arb_level() -> impl Strategy<Value = MoodLevel> {
    (1u8..=5).prop_map(|w| MoodLevel::from_weight(w).unwrap())
}

/// Mostly valid dates with the odd malformed or unpadded one.
fn arb_date() -> impl Strategy<Value = String> {
    prop_oneof![
        8 => (2023i32..=2025, 1u32..=12, 1u32..=28)
            .prop_map(|(y, m, d)| format!("{:04}-{:02}-{:02}", y, m, d)),
        1 => (1u32..=12, 1u32..=9).prop_map(|(m, d)| format!("2025-{}-{}", m, d)),
        1 => Just("not-a-date".to_string()),
    ]
}

fn arb_entry() -> impl Strategy<Value = MoodEntry> {
    (
        "[a-z0-9]{6}",
        arb_date(),
        arb_level(),
        prop::collection::vec(prop::sample::select(TAGS.to_vec()), 0..4),
    )
        .prop_map(|(id, date, level, tags)| MoodEntry::new(id, date, level).with_activities(tags))
}

fn arb_entries() -> impl Strategy<Value = Vec<MoodEntry>> {
    prop::collection::vec(arb_entry(), 0..40)
}

proptest! {
    #[test]
    fn total_matches_input_length(entries in arb_entries()) {
        let stats = compute_statistics(&entries);
        prop_assert_eq!(stats.total_entries, entries.len());
    }

    #[test]
    fn distribution_sums_to_total(entries in arb_entries()) {
        let stats = compute_statistics(&entries);
        prop_assert_eq!(stats.mood_distribution.len(), 5);
        prop_assert_eq!(stats.mood_distribution.values().sum::<usize>(), stats.total_entries);
    }

    #[test]
    fn average_stays_in_range(entries in arb_entries()) {
        let stats = compute_statistics(&entries);
        if entries.is_empty() {
            prop_assert_eq!(stats.average_mood, 0.0);
        } else {
            prop_assert!(stats.average_mood >= 1.0 && stats.average_mood <= 5.0);
        }
    }

    #[test]
    fn streaks_are_bounded(entries in arb_entries()) {
        let stats = compute_statistics(&entries);
        prop_assert!(stats.current_streak <= stats.longest_streak);
        prop_assert!(stats.longest_streak as usize <= entries.len());
    }

    #[test]
    fn top_activities_are_ordered_and_counted(entries in arb_entries(), k in 0usize..10) {
        let stats = compute_statistics(&entries);
        let top = stats.top_activities(k);
        prop_assert!(top.len() <= k);
        prop_assert!(top.windows(2).all(|w| w[0].count >= w[1].count));
        for activity in top {
            let holders = entries
                .iter()
                .filter(|e| e.activities.iter().any(|t| *t == activity.tag))
                .count();
            prop_assert_eq!(activity.count, holders);
        }
    }

    #[test]
    fn top_activities_round_trip(entries in arb_entries()) {
        let distinct: HashSet<&str> = entries
            .iter()
            .flat_map(|e| e.activities.iter().map(String::as_str))
            .collect();
        let stats = compute_statistics(&entries);
        let top = stats.top_activities(distinct.len());

        let returned: Vec<&str> = top.iter().map(|a| a.tag.as_str()).collect();
        let unique: HashSet<&str> = returned.iter().copied().collect();
        prop_assert_eq!(returned.len(), unique.len());
        prop_assert_eq!(unique, distinct);
    }

    #[test]
    fn trend_is_bounded_and_ascending(entries in arb_entries(), window in 0usize..50) {
        let series = build_trend(&entries, window);
        prop_assert!(series.len() <= window);
        let dates: Vec<NaiveDate> = series.iter().map(|p| p.date).collect();
        prop_assert!(dates.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn grid_has_one_cell_per_day(
        entries in arb_entries(),
        year in 1990i32..2100,
        month in 0u32..12
    ) {
        let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        let grid = build_month_grid(&entries, year, month, today).unwrap();
        let ym = YearMonth::new(year, month).unwrap();
        prop_assert_eq!(grid.day_cells().count() as u32, ym.days_in_month());
        prop_assert!(grid.cells.len() <= 42);
        for cell in grid.day_cells() {
            if let (Some(day), Some(entry)) = (cell.day(), cell.entry()) {
                prop_assert_eq!(&entry.date, &format!("{:04}-{:02}-{:02}", year, month + 1, day));
            }
        }
    }
}
