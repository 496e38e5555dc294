mod commands;
mod storage;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use storage::Storage;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "habitflow",
    version,
    about = "HabitFlow: habit tracking with streaks, points, and achievements"
)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Override the data directory.
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Manage habits.
    #[command(subcommand)]
    Habit(commands::habit::HabitCommand),
    /// Record progress for a habit.
    Record(commands::record::RecordArgs),
    /// Dashboard stats, 30-day trend, and 90-day heatmap.
    Stats(commands::stats::StatsArgs),
    /// Personalized insight cards.
    Insights,
    /// Achievement catalog and unlocks.
    Achievements,
    /// Journal entries.
    #[command(subcommand)]
    Journal(commands::journal::JournalCommand),
    /// Scan for due reminders (run this from a scheduler, e.g. once a minute).
    Remind,
    /// Export all data as a JSON backup.
    Export(commands::data::ExportArgs),
    /// Replace all data from a backup file.
    Import(commands::data::ImportArgs),
    /// Delete all stored data.
    Reset(commands::data::ResetArgs),
    /// Show or set the theme preference.
    Theme(commands::theme::ThemeArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let storage = match cli.data_dir {
        Some(dir) => Storage::at(dir)?,
        None => Storage::open_default()?,
    };

    match cli.command {
        Commands::Habit(cmd) => commands::habit::run(cmd, &storage),
        Commands::Record(args) => commands::record::run(args, &storage),
        Commands::Stats(args) => commands::stats::run(args, &storage),
        Commands::Insights => commands::stats::run_insights(&storage),
        Commands::Achievements => commands::achievements::run(&storage),
        Commands::Journal(cmd) => commands::journal::run(cmd, &storage),
        Commands::Remind => commands::remind::run(&storage),
        Commands::Export(args) => commands::data::run_export(args, &storage),
        Commands::Import(args) => commands::data::run_import(args, &storage),
        Commands::Reset(args) => commands::data::run_reset(args, &storage),
        Commands::Theme(args) => commands::theme::run(args, &storage),
    }
}
