//! Error types for habit-core.

use thiserror::Error;

/// Result type alias using HabitError.
pub type Result<T> = std::result::Result<T, HabitError>;

/// Errors surfaced by the habit store and completion engine.
#[derive(Debug, Error)]
pub enum HabitError {
    #[error("habit not found: {id}")]
    NotFound { id: String },

    #[error("habit name cannot be empty")]
    EmptyName,

    #[error("target must be at least 1, got {value}")]
    InvalidTarget { value: u32 },

    #[error("journal entry cannot be empty")]
    EmptyEntry,
}
