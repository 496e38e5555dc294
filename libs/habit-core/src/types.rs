//! Core types for the habit tracker.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Habit kind, fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HabitKind {
    Boolean,
    Counter,
    Timer,
}

impl HabitKind {
    /// Amount added by a recording event when the caller gives none.
    pub fn default_increment(self) -> u32 {
        match self {
            Self::Boolean | Self::Counter => 1,
            Self::Timer => 15,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Counter => "counter",
            Self::Timer => "timer",
        }
    }
}

/// Habit priority; affects scoring only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Default for Priority {
    fn default() -> Self {
        Self::Medium
    }
}

impl Priority {
    /// Scoring multiplier applied to base points.
    pub fn multiplier(self) -> f64 {
        match self {
            Self::Low => 1.0,
            Self::Medium => 1.5,
            Self::High => 2.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// A tracked habit.
///
/// Serialized camelCase with `kind` renamed to `type` so backups written by
/// earlier versions of the app parse unchanged. Gamification counters default
/// to zero when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: HabitKind,
    #[serde(default = "default_target")]
    pub target: u32,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Reminder time of day as "HH:MM", local clock.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reminder: Option<String>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub streak: u32,
    #[serde(default)]
    pub best_streak: u32,
    #[serde(default)]
    pub total_completions: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archived_at: Option<DateTime<Utc>>,
}

fn default_target() -> u32 {
    1
}

impl Habit {
    pub fn is_archived(&self) -> bool {
        self.archived_at.is_some()
    }
}

/// A single day's recorded value for one habit.
///
/// Boolean habits store `true`; Counter/Timer habits store the accumulated
/// amount. Untagged so the ledger JSON stays `true`-or-number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CompletionValue {
    Done(bool),
    Amount(u32),
}

impl CompletionValue {
    /// Numeric view of the value. `true` counts as 1.
    pub fn amount(self) -> u32 {
        match self {
            Self::Done(true) => 1,
            Self::Done(false) => 0,
            Self::Amount(n) => n,
        }
    }
}

/// Gamification progress for the single user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProgress {
    pub total_points: u64,
    pub level: u32,
    pub experience: u64,
}

impl Default for UserProgress {
    fn default() -> Self {
        Self {
            total_points: 0,
            level: 1,
            experience: 0,
        }
    }
}

/// An unlocked achievement. Append-only, at most one record per id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementUnlock {
    pub id: String,
    pub unlocked_at: DateTime<Utc>,
}

/// Completion flag for one habit, as captured in a journal snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitStatus {
    pub name: String,
    pub completed: bool,
}

/// A journal entry, immutable once written. Newest entries come first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: String,
    #[serde(rename = "date")]
    pub written_at: DateTime<Utc>,
    pub text: String,
    #[serde(default)]
    pub habits: Vec<HabitStatus>,
}

/// Event descriptors emitted by the completion engine for the host's
/// notifier. The core expects no response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    HabitCompleted { habit_id: String, name: String },
    LevelUp { level: u32 },
    AchievementUnlocked { id: String, title: String },
}
