//! Record a value for a habit and surface the resulting events.

use anyhow::Result;
use chrono::{Local, NaiveDate, Utc};
use clap::Args;
use habit_core::{engine, Event, HabitKind};

use super::resolve_habit_id;
use crate::storage::Storage;

#[derive(Debug, Args)]
pub struct RecordArgs {
    /// Habit id or name.
    habit: String,

    /// Amount to add (defaults to 1 for counters, 15 minutes for timers).
    #[arg(long)]
    value: Option<u32>,

    /// Date to record against, YYYY-MM-DD (defaults to today).
    #[arg(long)]
    date: Option<NaiveDate>,
}

pub fn run(args: RecordArgs, storage: &Storage) -> Result<()> {
    let mut tracker = storage.load_tracker();
    let id = resolve_habit_id(&tracker, &args.habit)?;
    let date = args.date.unwrap_or_else(|| Local::now().date_naive());

    let outcome = engine::record(&mut tracker, &id, date, args.value, Utc::now())?;
    storage.save_tracker(&tracker)?;

    if let Some(habit) = tracker.habit(&id) {
        match habit.kind {
            HabitKind::Boolean => println!("{}: marked done for {}", habit.name, outcome.date),
            HabitKind::Counter | HabitKind::Timer => println!(
                "{}: {}/{} on {}",
                habit.name,
                outcome.value.amount(),
                habit.target,
                outcome.date
            ),
        }
    }
    if outcome.newly_completed {
        println!("+{} points", outcome.points_awarded);
    }
    print_events(&outcome.events);
    Ok(())
}

/// Print event descriptors as user-facing toasts.
pub fn print_events(events: &[Event]) {
    for event in events {
        match event {
            Event::HabitCompleted { name, .. } => println!("Great job! {name} completed!"),
            Event::LevelUp { level } => println!("Level up! You're now level {level}!"),
            Event::AchievementUnlocked { title, .. } => {
                println!("Achievement unlocked: {title}!");
            }
        }
    }
}
