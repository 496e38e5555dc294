//! Habit CRUD commands.

use anyhow::{bail, Result};
use chrono::{Local, NaiveTime, Utc};
use clap::{Args, Subcommand, ValueEnum};
use habit_core::{HabitKind, NewHabit, Priority};

use super::{confirm, resolve_habit_id};
use crate::storage::Storage;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum KindArg {
    Boolean,
    Counter,
    Timer,
}

impl From<KindArg> for HabitKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Boolean => Self::Boolean,
            KindArg::Counter => Self::Counter,
            KindArg::Timer => Self::Timer,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PriorityArg {
    Low,
    Medium,
    High,
}

impl From<PriorityArg> for Priority {
    fn from(priority: PriorityArg) -> Self {
        match priority {
            PriorityArg::Low => Self::Low,
            PriorityArg::Medium => Self::Medium,
            PriorityArg::High => Self::High,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum HabitCommand {
    /// Create a habit.
    Add(AddArgs),
    /// List habits with streaks and today's progress.
    List(ListArgs),
    /// Archive a habit (kept in history, hidden from the dashboard).
    Archive {
        /// Habit id or name.
        habit: String,
    },
    /// Permanently delete a habit and its completion history.
    Delete {
        /// Habit id or name.
        habit: String,
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Display name.
    name: String,

    #[arg(long, value_enum, default_value_t = KindArg::Boolean)]
    kind: KindArg,

    /// Daily target (required for counter and timer habits).
    #[arg(long)]
    target: Option<u32>,

    #[arg(long, value_enum, default_value_t = PriorityArg::Medium)]
    priority: PriorityArg,

    /// Card color, e.g. "#667eea".
    #[arg(long)]
    color: Option<String>,

    /// Daily reminder time as HH:MM.
    #[arg(long)]
    reminder: Option<String>,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Include archived habits.
    #[arg(long)]
    all: bool,
}

pub fn run(cmd: HabitCommand, storage: &Storage) -> Result<()> {
    match cmd {
        HabitCommand::Add(args) => add(args, storage),
        HabitCommand::List(args) => list(args, storage),
        HabitCommand::Archive { habit } => archive(&habit, storage),
        HabitCommand::Delete { habit, yes } => delete(&habit, yes, storage),
    }
}

fn add(args: AddArgs, storage: &Storage) -> Result<()> {
    let kind: HabitKind = args.kind.into();
    let target = match (kind, args.target) {
        (HabitKind::Boolean, _) => 1,
        (_, Some(target)) => target,
        (_, None) => bail!("--target is required for counter and timer habits"),
    };
    if let Some(reminder) = &args.reminder {
        if NaiveTime::parse_from_str(reminder, "%H:%M").is_err() {
            bail!("--reminder must be HH:MM, got '{reminder}'");
        }
    }

    let mut tracker = storage.load_tracker();
    let habit = tracker.create_habit(
        NewHabit {
            name: args.name,
            kind,
            target,
            priority: args.priority.into(),
            color: args.color,
            reminder: args.reminder,
        },
        Utc::now(),
    )?;
    storage.save_tracker(&tracker)?;
    println!("Created '{}' ({})", habit.name, habit.id);
    Ok(())
}

fn list(args: ListArgs, storage: &Storage) -> Result<()> {
    let tracker = storage.load_tracker();
    let today = Local::now().date_naive();

    let mut shown = 0;
    for habit in &tracker.habits {
        if habit.is_archived() && !args.all {
            continue;
        }
        shown += 1;

        let progress = match habit.kind {
            HabitKind::Boolean => {
                if tracker.is_completed_on(today, habit) {
                    "done today".to_string()
                } else {
                    "not done today".to_string()
                }
            }
            HabitKind::Counter | HabitKind::Timer => {
                let value = tracker
                    .value_on(today, &habit.id)
                    .map_or(0, |v| v.amount());
                format!("{}/{} today", value, habit.target)
            }
        };
        let archived = if habit.is_archived() { " [archived]" } else { "" };
        println!(
            "{}  {} ({}, {} priority){}\n    streak {} (best {}), {}",
            habit.id,
            habit.name,
            habit.kind.as_str(),
            habit.priority.as_str(),
            archived,
            habit.streak,
            habit.best_streak,
            progress,
        );
    }
    if shown == 0 {
        println!("No habits yet. Create your first with 'habitflow habit add'.");
    }
    Ok(())
}

fn archive(habit: &str, storage: &Storage) -> Result<()> {
    let mut tracker = storage.load_tracker();
    let id = resolve_habit_id(&tracker, habit)?;
    tracker.archive_habit(&id, Utc::now())?;
    storage.save_tracker(&tracker)?;
    let name = tracker.habit(&id).map_or_else(String::new, |h| h.name.clone());
    println!("'{name}' archived");
    Ok(())
}

fn delete(habit: &str, yes: bool, storage: &Storage) -> Result<()> {
    let mut tracker = storage.load_tracker();
    let id = resolve_habit_id(&tracker, habit)?;
    let name = tracker.habit(&id).map_or_else(String::new, |h| h.name.clone());

    if !yes && !confirm(&format!("Permanently delete '{name}' and its history?"))? {
        println!("Aborted");
        return Ok(());
    }

    tracker.delete_habit(&id)?;
    storage.save_tracker(&tracker)?;
    println!("'{name}' deleted");
    Ok(())
}
