//! Journal entries with a snapshot of today's habit statuses.

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::error::{HabitError, Result};
use crate::tracker::Tracker;
use crate::types::{HabitStatus, JournalEntry};

/// Completion flags for today's active habits, as shown on the dashboard
/// and captured in journal snapshots.
pub fn today_status(tracker: &Tracker, today: NaiveDate) -> Vec<HabitStatus> {
    tracker
        .active_habits()
        .map(|h| HabitStatus {
            name: h.name.clone(),
            completed: tracker.is_completed_on(today, h),
        })
        .collect()
}

/// Append a journal entry (newest first). Blank text is rejected; the
/// entry is immutable once written.
pub fn add_entry(
    tracker: &mut Tracker,
    text: &str,
    today: NaiveDate,
    now: DateTime<Utc>,
) -> Result<JournalEntry> {
    let text = text.trim();
    if text.is_empty() {
        return Err(HabitError::EmptyEntry);
    }

    let entry = JournalEntry {
        id: Uuid::new_v4().to_string(),
        written_at: now,
        text: text.to_string(),
        habits: today_status(tracker, today),
    };
    tracker.journal.insert(0, entry.clone());
    Ok(entry)
}
