use chrono::{NaiveDate, SecondsFormat};
use std::borrow::Cow;
use std::io::{self, Write};

use crate::model::activity::display_name;
use crate::model::entry::MoodEntry;
use crate::model::mood::MoodLevel;
use crate::model::stats::Statistics;
use crate::time::DATE_FORMAT;

pub const CSV_HEADER: [&str; 7] = [
    "Date",
    "Mood",
    "Mood_Level",
    "Emoji",
    "Activities",
    "Note",
    "Created_At",
];

pub const SUMMARY_MARKER: &str = "=== SUMMARY STATISTICS ===";
pub const DISTRIBUTION_MARKER: &str = "=== MOOD DISTRIBUTION ===";

const SUMMARY_TOP_ACTIVITIES: usize = 5;

pub fn export_file_name(today: NaiveDate) -> String {
    format!("LEAF_mood_data_{}.csv", today.format(DATE_FORMAT))
}

/// Text a spreadsheet would evaluate as a formula.
fn looks_like_formula(value: &str) -> bool {
    let trimmed = value.trim_start();
    matches!(trimmed.chars().next(), Some('=' | '+' | '-' | '@'))
}

/// Prefixes formula-like text with `'` so spreadsheets show it as text, then
/// quotes the field when it holds a separator, a quote or a line break.
fn csv_field(value: &str) -> Cow<'_, str> {
    let value: Cow<'_, str> = if looks_like_formula(value) {
        Cow::Owned(format!("'{}", value))
    } else {
        Cow::Borrowed(value)
    };
    if value.contains(|c| matches!(c, ',' | '"' | '\n' | '\r')) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        value
    }
}

fn push_row<'v>(out: &mut String, fields: impl IntoIterator<Item = &'v str>) {
    let line: Vec<Cow<'_, str>> = fields.into_iter().map(csv_field).collect();
    out.push_str(&line.join(","));
    out.push('\n');
}

fn entry_row(out: &mut String, entry: &MoodEntry) {
    let level = entry.mood_level;
    let weight = level.weight().to_string();
    let activities = entry
        .activities
        .iter()
        .map(|tag| display_name(tag))
        .collect::<Vec<_>>()
        .join("; ");
    let created_at = entry
        .created_at
        .map(|t| t.to_rfc3339_opts(SecondsFormat::Secs, true))
        .unwrap_or_default();

    push_row(
        out,
        [
            entry.date.as_str(),
            level.label(),
            weight.as_str(),
            level.emoji(),
            activities.as_str(),
            entry.note.as_deref().unwrap_or(""),
            created_at.as_str(),
        ],
    );
}

/// Renders entries (ordered by date) followed by a summary section and the
/// mood distribution.
pub fn export_csv(entries: &[MoodEntry], stats: &Statistics) -> String {
    let mut out = String::new();
    push_row(&mut out, CSV_HEADER);

    let mut rows: Vec<&MoodEntry> = entries.iter().collect();
    rows.sort_by(|a, b| a.date.cmp(&b.date));
    for entry in rows {
        entry_row(&mut out, entry);
    }

    out.push('\n');
    out.push_str(SUMMARY_MARKER);
    out.push('\n');

    let average = match stats.average_level() {
        Some(level) => format!("{:.2} ({})", stats.average_mood, level.label()),
        None => "N/A".to_string(),
    };
    let top = stats
        .top_activities(SUMMARY_TOP_ACTIVITIES)
        .iter()
        .map(|a| display_name(&a.tag))
        .collect::<Vec<_>>()
        .join("; ");
    let summary = [
        ("Total entries", stats.total_entries.to_string()),
        ("Current streak (days)", stats.current_streak.to_string()),
        ("Longest streak (days)", stats.longest_streak.to_string()),
        ("Average mood", average),
        ("Most common activities", top),
        ("Malformed dates", stats.data_quality.malformed_dates.to_string()),
        ("Duplicate dates", stats.data_quality.duplicate_dates.to_string()),
    ];
    for (label, value) in &summary {
        push_row(&mut out, [*label, value.as_str()]);
    }

    out.push('\n');
    out.push_str(DISTRIBUTION_MARKER);
    out.push('\n');
    push_row(&mut out, ["Mood", "Count", "Percentage"]);
    for level in MoodLevel::ALL {
        let count = stats.count_for(level).to_string();
        let share = format!("{:.1}%", stats.percentage_for(level));
        push_row(&mut out, [level.label(), count.as_str(), share.as_str()]);
    }

    out
}

pub fn write_csv<W: Write>(
    writer: &mut W,
    entries: &[MoodEntry],
    stats: &Statistics,
) -> io::Result<()> {
    writer.write_all(export_csv(entries, stats).as_bytes())?;
    writer.flush()
}
