//! Journal commands.

use anyhow::Result;
use chrono::{Local, Utc};
use clap::Subcommand;
use habit_core::journal;

use crate::storage::Storage;

#[derive(Debug, Subcommand)]
pub enum JournalCommand {
    /// Write an entry with a snapshot of today's habits.
    Add {
        text: String,
    },
    /// Show recent entries, newest first.
    List {
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
}

pub fn run(cmd: JournalCommand, storage: &Storage) -> Result<()> {
    match cmd {
        JournalCommand::Add { text } => add(&text, storage),
        JournalCommand::List { limit } => list(limit, storage),
    }
}

fn add(text: &str, storage: &Storage) -> Result<()> {
    let mut tracker = storage.load_tracker();
    let today = Local::now().date_naive();
    journal::add_entry(&mut tracker, text, today, Utc::now())?;
    storage.save_tracker(&tracker)?;
    println!("Journal entry saved");
    Ok(())
}

fn list(limit: usize, storage: &Storage) -> Result<()> {
    let tracker = storage.load_tracker();
    if tracker.journal.is_empty() {
        println!("No journal entries yet.");
        return Ok(());
    }
    for entry in tracker.journal.iter().take(limit) {
        let completed = entry.habits.iter().filter(|h| h.completed).count();
        println!(
            "{}\n    {}\n    {}/{} habits completed that day",
            entry.written_at.with_timezone(&Local).format("%A, %B %e %Y"),
            entry.text,
            completed,
            entry.habits.len()
        );
    }
    Ok(())
}
