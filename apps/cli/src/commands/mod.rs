//! CLI subcommands. Each module maps onto one engine operation; the
//! presentation here stays thin and all rules live in habit-core.

pub mod achievements;
pub mod data;
pub mod habit;
pub mod journal;
pub mod record;
pub mod remind;
pub mod stats;
pub mod theme;

use std::io::{self, Write};

use anyhow::{bail, Result};
use habit_core::Tracker;

/// Resolve a habit argument: exact id first, then unique name match.
pub fn resolve_habit_id(tracker: &Tracker, query: &str) -> Result<String> {
    if let Some(habit) = tracker.habit(query) {
        return Ok(habit.id.clone());
    }
    let matches: Vec<_> = tracker
        .habits
        .iter()
        .filter(|h| h.name.eq_ignore_ascii_case(query))
        .collect();
    match matches.as_slice() {
        [habit] => Ok(habit.id.clone()),
        [] => bail!("no habit matches '{query}'"),
        _ => bail!("'{query}' matches more than one habit; use the id"),
    }
}

/// Ask the user to confirm a destructive action.
pub fn confirm(prompt: &str) -> Result<bool> {
    print!("{prompt} [y/N] ");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}
