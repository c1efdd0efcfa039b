mod calendar;
mod config;
mod stats;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use leaf_core::{
    export_file_name, parse_entry_date, write_csv, EntrySource, FileEntrySource, LeafError,
    MoodEntry, MoodLogAggregator, YearMonth, CATALOG,
};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::Config;

const DEFAULT_LOG_FILTER: &str = "leaf=info,leaf_core=info";

#[derive(Parser)]
#[command(name = "leaf")]
#[command(about = "Mood log calendar, statistics and trends", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Entries file (JSON array). Overrides `data_file` from the config
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Config file, defaults to ~/.leaf/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Use this date (YYYY-MM-DD) as today
    #[arg(long, global = true, value_parser = parse_today)]
    today: Option<NaiveDate>,

    /// Print JSON instead of tables
    #[arg(long, global = true)]
    json: bool,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Show a month as a calendar grid (default: current month)
    Calendar {
        /// Month as YYYY-MM
        #[arg(value_parser = YearMonth::parse)]
        month: Option<YearMonth>,
    },
    /// Aggregate statistics over all entries or one month
    Stats {
        /// Restrict to a month (YYYY-MM)
        #[arg(long, value_parser = YearMonth::parse)]
        month: Option<YearMonth>,
        /// Number of activities to list
        #[arg(long)]
        top: Option<usize>,
    },
    /// Chronological mood series
    Trend {
        /// Number of most recent entries
        #[arg(long)]
        window: Option<usize>,
        /// Entries from the last N days instead of a fixed window
        #[arg(long, conflicts_with = "window")]
        days: Option<u32>,
    },
    /// Write entries and summary statistics as CSV
    Export {
        /// Output file, `-` for stdout (default: LEAF_mood_data_<today>.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List the activity catalog
    Catalog,
}

fn parse_today(input: &str) -> Result<NaiveDate, LeafError> {
    parse_entry_date(input).ok_or_else(|| LeafError::InvalidDate(input.to_string()))
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with_writer(io::stderr)
        .init();
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn load_entries(cli: &Cli, config: &Config) -> Result<Vec<MoodEntry>> {
    let path = cli.data.clone().or_else(|| config.data_file.clone());
    let source = FileEntrySource::new(path)?;
    let entries = source
        .list()
        .with_context(|| format!("Failed to load entries from {}", source.path().display()))?;
    debug!(count = entries.len(), path = %source.path().display(), "loaded entries");
    Ok(entries)
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref()).context("Failed to load config")?;
    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());

    if let Some(Commands::Catalog) = cli.command {
        if cli.json {
            return print_json(&CATALOG);
        }
        println!("{}", stats::render_catalog());
        return Ok(());
    }

    let entries = load_entries(&cli, &config)?;
    let aggregator = MoodLogAggregator::new(&entries);

    match cli.command {
        None => show_calendar(&aggregator, YearMonth::from_date(today), today, cli.json)?,
        Some(Commands::Calendar { month }) => {
            let month = month.unwrap_or_else(|| YearMonth::from_date(today));
            show_calendar(&aggregator, month, today, cli.json)?;
        }
        Some(Commands::Stats { month, top }) => {
            let statistics = match month {
                Some(m) => aggregator.month_statistics(m),
                None => aggregator.statistics(),
            };
            if !statistics.data_quality.is_clean() {
                warn!(
                    malformed = statistics.data_quality.malformed_dates,
                    duplicates = statistics.data_quality.duplicate_dates,
                    "some entries have malformed or duplicate dates"
                );
            }
            if cli.json {
                print_json(&statistics)?;
            } else {
                let top = top.unwrap_or(config.top_activities);
                let streak_today = aggregator.streak_as_of(today);
                println!("{}", stats::render_statistics(&statistics, streak_today, top));
            }
        }
        Some(Commands::Trend { window, days }) => {
            let series = match days {
                Some(days) => aggregator.period_trend(today, days),
                None => aggregator.trend(window.unwrap_or(config.trend_window)),
            };
            if series.skipped() > 0 {
                warn!(
                    skipped = series.skipped(),
                    "entries with malformed dates left out of the trend"
                );
            }
            if cli.json {
                let points: Vec<_> = series.iter().collect();
                print_json(&points)?;
            } else {
                println!("{}", stats::render_trend(&series));
            }
        }
        Some(Commands::Export { output }) => {
            let statistics = aggregator.statistics();
            let output = output.unwrap_or_else(|| PathBuf::from(export_file_name(today)));
            if output.as_os_str() == "-" {
                let stdout = io::stdout();
                write_csv(&mut stdout.lock(), &entries, &statistics)?;
            } else {
                let file = File::create(&output)
                    .with_context(|| format!("Failed to create {}", output.display()))?;
                let mut writer = BufWriter::new(file);
                write_csv(&mut writer, &entries, &statistics)?;
                writer.flush()?;
                info!(entries = entries.len(), path = %output.display(), "exported mood data");
            }
        }
        Some(Commands::Catalog) => {}
    }

    Ok(())
}

fn show_calendar(
    aggregator: &MoodLogAggregator<'_>,
    month: YearMonth,
    today: NaiveDate,
    json: bool,
) -> Result<()> {
    let grid = aggregator.month_grid(month, today)?;
    if json {
        print_json(&grid)
    } else {
        println!("{}", calendar::render_month(&grid));
        Ok(())
    }
}
