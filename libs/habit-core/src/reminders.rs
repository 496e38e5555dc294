//! Reminder scan. The host calls this on its own schedule (once a minute
//! in the original app); the core keeps no timer state.

use chrono::NaiveDate;

use crate::tracker::Tracker;

/// A habit whose reminder time has arrived and which is still incomplete
/// today.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reminder {
    pub habit_id: String,
    pub name: String,
}

/// Read-only scan for reminders due at the given local `HH:MM`.
pub fn due_reminders(tracker: &Tracker, today: NaiveDate, hhmm: &str) -> Vec<Reminder> {
    tracker
        .active_habits()
        .filter(|h| h.reminder.as_deref() == Some(hhmm))
        .filter(|h| !tracker.is_completed_on(today, h))
        .map(|h| Reminder {
            habit_id: h.id.clone(),
            name: h.name.clone(),
        })
        .collect()
}
