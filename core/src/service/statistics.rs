use chrono::NaiveDate;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use tracing::debug;

use crate::model::entry::MoodEntry;
use crate::model::mood::MoodLevel;
use crate::model::stats::{ActivityCount, DataQuality, Statistics};
use crate::service::calendar::assess_dates;
use crate::time::YearMonth;

/// Aggregates a snapshot. Total over any input: an empty slice gives zeroed
/// figures, malformed dates only drop out of the streaks.
pub fn compute_statistics(entries: &[MoodEntry]) -> Statistics {
    let refs: Vec<&MoodEntry> = entries.iter().collect();
    aggregate(&refs, assess_dates(entries))
}

/// Statistics restricted to entries dated inside `month`. Malformed entries
/// cannot be placed in a month, so they only show up in `data_quality`.
pub fn compute_month_statistics(entries: &[MoodEntry], month: YearMonth) -> Statistics {
    let in_month: Vec<&MoodEntry> = entries
        .iter()
        .filter(|e| e.parsed_date().is_some_and(|d| month.contains(d)))
        .collect();
    aggregate(&in_month, assess_dates(entries))
}

/// Streak from `today`'s point of view: the run ending at the most recent
/// entry counts only if that entry is from today or yesterday. Entries dated
/// after `today` are ignored.
pub fn streak_as_of(entries: &[MoodEntry], today: NaiveDate) -> u32 {
    let dates: BTreeSet<NaiveDate> = entries
        .iter()
        .filter_map(|e| e.parsed_date())
        .filter(|d| *d <= today)
        .collect();

    match dates.last() {
        Some(latest) if *latest == today || Some(*latest) == today.pred_opt() => {
            trailing_run(&dates)
        }
        _ => 0,
    }
}

fn aggregate(entries: &[&MoodEntry], data_quality: DataQuality) -> Statistics {
    let mut stats = Statistics::empty();
    stats.data_quality = data_quality;
    if entries.is_empty() {
        return stats;
    }

    let total = entries.len();
    let weight_sum: u64 = entries.iter().map(|e| u64::from(e.weight())).sum();

    let mut distribution: BTreeMap<MoodLevel, usize> =
        MoodLevel::ALL.iter().map(|l| (*l, 0)).collect();
    for entry in entries {
        *distribution.entry(entry.mood_level).or_insert(0) += 1;
    }

    let dates: BTreeSet<NaiveDate> = entries.iter().filter_map(|e| e.parsed_date()).collect();

    stats.total_entries = total;
    stats.average_mood = weight_sum as f64 / total as f64;
    stats.mood_distribution = distribution;
    stats.most_common_activities = rank_activities(entries);
    stats.current_streak = trailing_run(&dates);
    stats.longest_streak = longest_run(&dates);

    debug!(
        total,
        distinct_days = dates.len(),
        current_streak = stats.current_streak,
        "statistics computed"
    );
    stats
}

/// Counts every tag once per entry and ranks by count, keeping first-seen
/// order among equal counts. Tags are taken verbatim, blank ones included.
fn rank_activities(entries: &[&MoodEntry]) -> Vec<ActivityCount> {
    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();

    for entry in entries {
        let mut seen_here: HashSet<&str> = HashSet::new();
        for tag in &entry.activities {
            let tag = tag.as_str();
            if !seen_here.insert(tag) {
                continue;
            }
            let count = counts.entry(tag).or_insert_with(|| {
                order.push(tag);
                0
            });
            *count += 1;
        }
    }

    let total = entries.len() as f64;
    let mut ranked: Vec<ActivityCount> = order
        .into_iter()
        .map(|tag| {
            let count = counts[tag];
            ActivityCount {
                tag: tag.to_string(),
                count,
                percentage: count as f64 * 100.0 / total,
            }
        })
        .collect();
    // sort_by is stable, so ties stay in first-seen order.
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked
}

/// Length of the run of consecutive days ending at the latest date.
fn trailing_run(dates: &BTreeSet<NaiveDate>) -> u32 {
    let mut iter = dates.iter().rev();
    let Some(latest) = iter.next() else {
        return 0;
    };

    let mut streak = 1;
    let mut expected = latest.pred_opt();
    for date in iter {
        if Some(*date) != expected {
            break;
        }
        streak += 1;
        expected = date.pred_opt();
    }
    streak
}

fn longest_run(dates: &BTreeSet<NaiveDate>) -> u32 {
    let mut longest = 0;
    let mut run = 0;
    let mut previous: Option<NaiveDate> = None;

    for date in dates {
        run = match previous {
            Some(prev) if prev.succ_opt() == Some(*date) => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        previous = Some(*date);
    }
    longest
}
