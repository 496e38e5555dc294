//! Reminder tick: a read-only scan meant to be run from a scheduler.

use anyhow::Result;
use chrono::Local;
use habit_core::reminders;

use crate::storage::Storage;

pub fn run(storage: &Storage) -> Result<()> {
    let tracker = storage.load_tracker();
    let now = Local::now();
    let hhmm = now.format("%H:%M").to_string();

    for reminder in reminders::due_reminders(&tracker, now.date_naive(), &hhmm) {
        println!(
            "Time for: {} — don't forget to complete your habit!",
            reminder.name
        );
    }
    Ok(())
}
