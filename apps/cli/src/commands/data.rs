//! Export, import, and reset. Import and reset are destructive and ask for
//! confirmation unless --yes is passed.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Args;
use habit_core::{backup, Backup};

use super::confirm;
use crate::storage::Storage;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Write to a file instead of stdout.
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// Backup file to restore from.
    file: PathBuf,

    /// Skip the confirmation prompt.
    #[arg(long)]
    yes: bool,
}

#[derive(Debug, Args)]
pub struct ResetArgs {
    /// Skip the confirmation prompt.
    #[arg(long)]
    yes: bool,
}

pub fn run_export(args: ExportArgs, storage: &Storage) -> Result<()> {
    let tracker = storage.load_tracker();
    let document = backup::export(&tracker, Utc::now());
    let json = serde_json::to_string_pretty(&document)?;

    match args.output {
        Some(path) => {
            fs::write(&path, json).with_context(|| format!("writing {}", path.display()))?;
            println!("Exported to {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

pub fn run_import(args: ImportArgs, storage: &Storage) -> Result<()> {
    let raw = fs::read_to_string(&args.file)
        .with_context(|| format!("reading {}", args.file.display()))?;
    let document: Backup = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a valid backup", args.file.display()))?;

    if !args.yes && !confirm("This will replace all your current data. Are you sure?")? {
        println!("Aborted");
        return Ok(());
    }

    let tracker = document.into_tracker();
    storage.save_tracker(&tracker)?;
    println!(
        "Imported {} habits, {} days of completions, {} achievements",
        tracker.habits.len(),
        tracker.completions.len(),
        tracker.unlocked.len()
    );
    Ok(())
}

pub fn run_reset(args: ResetArgs, storage: &Storage) -> Result<()> {
    if !args.yes
        && !confirm(
            "This will delete all your habits, progress, and data. This cannot be undone. Are you sure?",
        )?
    {
        println!("Aborted");
        return Ok(());
    }
    storage.reset()?;
    println!("All data deleted");
    Ok(())
}
