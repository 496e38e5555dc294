//! The habit store: habits, the completion ledger, user progress,
//! achievement unlocks, and the journal, held as one explicit state value.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::dates::date_key;
use crate::error::{HabitError, Result};
use crate::types::{
    AchievementUnlock, CompletionValue, Habit, HabitKind, JournalEntry, Priority, UserProgress,
};

/// One day's recorded values, keyed by habit id.
pub type DayRecord = BTreeMap<String, CompletionValue>;

/// Parameters for creating a habit.
#[derive(Debug, Clone)]
pub struct NewHabit {
    pub name: String,
    pub kind: HabitKind,
    pub target: u32,
    pub priority: Priority,
    pub color: Option<String>,
    pub reminder: Option<String>,
}

/// The whole persistent application state.
///
/// A date key exists in `completions` only while at least one habit has a
/// recorded value that day.
#[derive(Debug, Clone, Default)]
pub struct Tracker {
    pub habits: Vec<Habit>,
    pub completions: BTreeMap<String, DayRecord>,
    pub progress: UserProgress,
    pub unlocked: Vec<AchievementUnlock>,
    pub journal: Vec<JournalEntry>,
}

impl Tracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a habit. Rejects blank names and a zero target for
    /// Counter/Timer habits; Boolean habits always get target 1.
    pub fn create_habit(&mut self, params: NewHabit, now: DateTime<Utc>) -> Result<Habit> {
        let name = params.name.trim();
        if name.is_empty() {
            return Err(HabitError::EmptyName);
        }
        let target = match params.kind {
            HabitKind::Boolean => 1,
            HabitKind::Counter | HabitKind::Timer => {
                if params.target == 0 {
                    return Err(HabitError::InvalidTarget { value: 0 });
                }
                params.target
            }
        };

        let habit = Habit {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            kind: params.kind,
            target,
            priority: params.priority,
            color: params.color,
            reminder: params.reminder,
            created_at: now,
            streak: 0,
            best_streak: 0,
            total_completions: 0,
            archived_at: None,
        };
        self.habits.push(habit.clone());
        Ok(habit)
    }

    pub fn habit(&self, id: &str) -> Option<&Habit> {
        self.habits.iter().find(|h| h.id == id)
    }

    pub fn habit_mut(&mut self, id: &str) -> Option<&mut Habit> {
        self.habits.iter_mut().find(|h| h.id == id)
    }

    /// Habits that are not archived.
    pub fn active_habits(&self) -> impl Iterator<Item = &Habit> {
        self.habits.iter().filter(|h| !h.is_archived())
    }

    /// Soft-delete: the habit keeps its history but drops out of active
    /// aggregations.
    pub fn archive_habit(&mut self, id: &str, now: DateTime<Utc>) -> Result<()> {
        let habit = self.habit_mut(id).ok_or_else(|| HabitError::NotFound {
            id: id.to_string(),
        })?;
        habit.archived_at = Some(now);
        Ok(())
    }

    /// Hard-delete: removes the habit and purges its ledger entries from
    /// every date. Date keys left with no entries are dropped.
    pub fn delete_habit(&mut self, id: &str) -> Result<Habit> {
        let pos = self
            .habits
            .iter()
            .position(|h| h.id == id)
            .ok_or_else(|| HabitError::NotFound {
                id: id.to_string(),
            })?;
        let habit = self.habits.remove(pos);

        self.completions.retain(|_, day| {
            day.remove(id);
            !day.is_empty()
        });

        Ok(habit)
    }

    /// The recorded value for a habit on a date, if any.
    pub fn value_on(&self, date: NaiveDate, habit_id: &str) -> Option<CompletionValue> {
        self.completions
            .get(&date_key(date))
            .and_then(|day| day.get(habit_id))
            .copied()
    }

    /// Whether the habit counts as completed on the date.
    pub fn is_completed_on(&self, date: NaiveDate, habit: &Habit) -> bool {
        let Some(value) = self.value_on(date, &habit.id) else {
            return false;
        };
        match habit.kind {
            HabitKind::Boolean => matches!(value, CompletionValue::Done(true)),
            HabitKind::Counter | HabitKind::Timer => value.amount() >= habit.target,
        }
    }

    /// Progress toward completion on the date as a percentage, capped at 100.
    pub fn progress_percent(&self, date: NaiveDate, habit: &Habit) -> u32 {
        let Some(value) = self.value_on(date, &habit.id) else {
            return 0;
        };
        match habit.kind {
            HabitKind::Boolean => {
                if matches!(value, CompletionValue::Done(true)) {
                    100
                } else {
                    0
                }
            }
            HabitKind::Counter | HabitKind::Timer => {
                let pct = (f64::from(value.amount()) / f64::from(habit.target) * 100.0).round();
                (pct as u32).min(100)
            }
        }
    }
}
