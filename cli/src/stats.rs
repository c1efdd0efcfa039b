use leaf_core::model::activity::display_name;
use leaf_core::{MoodLevel, Statistics, TrendSeries, CATALOG};
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "Metric")]
    metric: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

#[derive(Tabled)]
struct DistributionRow {
    #[tabled(rename = "Mood")]
    mood: String,
    #[tabled(rename = "Count")]
    count: usize,
    #[tabled(rename = "Share")]
    share: String,
}

#[derive(Tabled)]
struct ActivityRow {
    #[tabled(rename = "Activity")]
    name: String,
    #[tabled(rename = "Entries")]
    count: usize,
    #[tabled(rename = "Share")]
    share: String,
}

#[derive(Tabled)]
struct TrendRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Mood")]
    mood: String,
    #[tabled(rename = "Level")]
    bar: String,
    #[tabled(rename = "Activities")]
    activities: usize,
}

#[derive(Tabled)]
struct CatalogRow {
    #[tabled(rename = "Category")]
    category: &'static str,
    #[tabled(rename = "Key")]
    key: &'static str,
    #[tabled(rename = "Activity")]
    name: String,
}

fn styled<T: Tabled>(rows: Vec<T>) -> Table {
    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN)); // Header color
    table
}

fn mood_label(level: MoodLevel) -> String {
    format!("{} {}", level.emoji(), level.label())
}

/// Summary, mood distribution and the `top` most common activities.
pub fn render_statistics(stats: &Statistics, streak_today: u32, top: usize) -> String {
    if stats.total_entries == 0 {
        return "No mood entries found.".to_string();
    }

    let average = match stats.average_level() {
        Some(level) => format!("{:.2} ({})", stats.average_mood, mood_label(level)),
        None => "-".to_string(),
    };
    let days = |n: u32| format!("{} days", n);
    let summary: Vec<SummaryRow> = [
        ("Entries", stats.total_entries.to_string()),
        ("Average mood", average),
        ("Current streak", days(stats.current_streak)),
        ("Streak as of today", days(streak_today)),
        ("Longest streak", days(stats.longest_streak)),
    ]
    .into_iter()
    .map(|(metric, value)| SummaryRow { metric, value })
    .collect();

    // Best mood first.
    let distribution: Vec<DistributionRow> = MoodLevel::ALL
        .iter()
        .rev()
        .map(|level| DistributionRow {
            mood: mood_label(*level),
            count: stats.count_for(*level),
            share: format!("{:.1}%", stats.percentage_for(*level)),
        })
        .collect();

    let activities: Vec<ActivityRow> = stats
        .top_activities(top)
        .iter()
        .map(|a| ActivityRow {
            name: display_name(&a.tag).to_string(),
            count: a.count,
            share: format!("{:.1}%", a.percentage),
        })
        .collect();

    let mut out = format!("{}\n{}", styled(summary), styled(distribution));
    if !activities.is_empty() {
        out.push_str(&format!("\n{}", styled(activities)));
    }
    let quality = &stats.data_quality;
    if !quality.is_clean() {
        out.push_str(&format!(
            "\nData issues: {} malformed dates, {} duplicate dates",
            quality.malformed_dates, quality.duplicate_dates
        ));
    }
    out
}

pub fn render_trend(series: &TrendSeries<'_>) -> String {
    if series.is_empty() {
        return "No mood entries in this range.".to_string();
    }
    let rows: Vec<TrendRow> = series
        .iter()
        .map(|point| TrendRow {
            date: point.date.format("%Y-%m-%d (%a)").to_string(),
            mood: mood_label(point.level),
            bar: "█".repeat(point.weight as usize),
            activities: point.activity_count,
        })
        .collect();
    let mut out = styled(rows).to_string();
    if series.skipped() > 0 {
        let note = format!("\n{} entries with malformed dates left out", series.skipped());
        out.push_str(&note);
    }
    out
}

pub fn render_catalog() -> String {
    let rows: Vec<CatalogRow> = CATALOG
        .iter()
        .flat_map(|category| category.activities.iter())
        .map(|a| CatalogRow {
            category: a.category,
            key: a.key,
            name: format!("{} {}", a.icon, a.name),
        })
        .collect();
    styled(rows).to_string()
}
