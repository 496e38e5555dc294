//! Core habit engine shared by HabitFlow host applications.
//!
//! Provides:
//! - Habit store and completion ledger (create/archive/delete, per-day values)
//! - Completion engine (accumulation, streaks, points, level-ups)
//! - Achievement catalog and evaluator
//! - Read-only analytics (weekly summary, trend, heatmap, insights)
//! - Journal, reminders, and JSON backup documents

pub mod achievements;
pub mod analytics;
pub mod backup;
pub mod dates;
pub mod engine;
pub mod error;
pub mod journal;
pub mod reminders;
pub mod scoring;
pub mod tracker;
pub mod types;

pub use achievements::{evaluate, AchievementDef, CATALOG};
pub use backup::Backup;
pub use engine::{record, RecordOutcome};
pub use error::{HabitError, Result};
pub use tracker::{NewHabit, Tracker};
pub use types::{
    AchievementUnlock, CompletionValue, Event, Habit, HabitKind, HabitStatus, JournalEntry,
    Priority, UserProgress,
};
