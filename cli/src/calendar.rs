use leaf_core::{CalendarCell, CalendarGrid};
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct WeekRow {
    #[tabled(rename = "Sun")]
    sun: String,
    #[tabled(rename = "Mon")]
    mon: String,
    #[tabled(rename = "Tue")]
    tue: String,
    #[tabled(rename = "Wed")]
    wed: String,
    #[tabled(rename = "Thu")]
    thu: String,
    #[tabled(rename = "Fri")]
    fri: String,
    #[tabled(rename = "Sat")]
    sat: String,
}

impl WeekRow {
    fn from_cells(week: &[CalendarCell<'_>]) -> Self {
        let mut labels = week.iter().map(cell_label).chain(std::iter::repeat(String::new()));
        let mut next = || labels.next().unwrap_or_default();
        WeekRow {
            sun: next(),
            mon: next(),
            tue: next(),
            wed: next(),
            thu: next(),
            fri: next(),
            sat: next(),
        }
    }
}

/// `15`, `15 😊 4`, and `[15]` for today.
fn cell_label(cell: &CalendarCell<'_>) -> String {
    let label = match cell {
        CalendarCell::Blank => return String::new(),
        CalendarCell::Empty { day, .. } => day.to_string(),
        CalendarCell::WithEntry { day, entry, .. } => {
            format!("{} {} {}", day, entry.mood_level.emoji(), entry.weight())
        }
    };
    if cell.is_today() {
        format!("[{}]", label)
    } else {
        label
    }
}

pub fn render_month(grid: &CalendarGrid<'_>) -> String {
    let title = grid.year_month().first_day().format("%B %Y").to_string();
    let rows: Vec<WeekRow> = grid.weeks().map(WeekRow::from_cells).collect();

    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));

    let days = grid.day_cells().count();
    let mut out = format!(
        "\x1b[1;36m{}\x1b[0m\n{}\nLogged {} of {} days",
        title,
        table,
        grid.logged_days(),
        days
    );
    let quality = &grid.data_quality;
    if !quality.is_clean() {
        out.push_str(&format!(
            "\n{} entries with malformed dates, {} duplicate dates ignored",
            quality.malformed_dates, quality.duplicate_dates
        ));
    }
    out
}
