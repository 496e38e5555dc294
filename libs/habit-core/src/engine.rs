//! The completion engine: records a value for a habit on a date and, when
//! that newly completes the habit for the date, updates its streak, awards
//! points, and evaluates achievements.

use chrono::{DateTime, NaiveDate, Utc};

use crate::achievements;
use crate::dates::{date_key, previous_day};
use crate::error::{HabitError, Result};
use crate::scoring;
use crate::tracker::Tracker;
use crate::types::{CompletionValue, Event, HabitKind};

/// Outcome of a recording event, including the event descriptors the host
/// should surface.
#[derive(Debug, Clone)]
pub struct RecordOutcome {
    pub habit_id: String,
    pub date: String,
    pub value: CompletionValue,
    pub completed: bool,
    /// True only when this call crossed the completion threshold; streak,
    /// points, and achievement effects fire exactly when this is true.
    pub newly_completed: bool,
    pub points_awarded: u64,
    pub events: Vec<Event>,
}

/// Record a value for `habit_id` on `date`.
///
/// Boolean habits are set to done (idempotent). Counter/Timer habits add
/// `amount` (or the kind's default increment) to the day's accumulated
/// value, which is never clamped and may exceed the target. Archived or
/// unknown ids fail with `NotFound`.
///
/// Achievement windows are anchored at `date`, so a backdated record is
/// judged against the week ending on that date, not the current day.
pub fn record(
    tracker: &mut Tracker,
    habit_id: &str,
    date: NaiveDate,
    amount: Option<u32>,
    now: DateTime<Utc>,
) -> Result<RecordOutcome> {
    let habit = tracker
        .habit(habit_id)
        .filter(|h| !h.is_archived())
        .cloned()
        .ok_or_else(|| HabitError::NotFound {
            id: habit_id.to_string(),
        })?;

    let was_completed = tracker.is_completed_on(date, &habit);
    let key = date_key(date);

    let day = tracker.completions.entry(key.clone()).or_default();
    let value = match habit.kind {
        HabitKind::Boolean => CompletionValue::Done(true),
        HabitKind::Counter | HabitKind::Timer => {
            let add = amount.unwrap_or_else(|| habit.kind.default_increment());
            let current = day.get(habit_id).copied().map_or(0, CompletionValue::amount);
            CompletionValue::Amount(current.saturating_add(add))
        }
    };
    day.insert(habit_id.to_string(), value);

    let completed = tracker.is_completed_on(date, &habit);
    let newly_completed = completed && !was_completed;

    let mut events = Vec::new();
    let mut points_awarded = 0;

    if newly_completed {
        update_streak(tracker, habit_id, date);

        if let Some(habit) = tracker.habit(habit_id) {
            points_awarded = scoring::points_for(habit);
            events.push(Event::HabitCompleted {
                habit_id: habit.id.clone(),
                name: habit.name.clone(),
            });
        }
        if let Some(level) = scoring::add_points(&mut tracker.progress, points_awarded) {
            events.push(Event::LevelUp { level });
        }
        for def in achievements::evaluate(tracker, date, now) {
            events.push(Event::AchievementUnlocked {
                id: def.id.to_string(),
                title: def.title.to_string(),
            });
        }
    }

    Ok(RecordOutcome {
        habit_id: habit_id.to_string(),
        date: key,
        value,
        completed,
        newly_completed,
        points_awarded,
        events,
    })
}

/// Streak update for a newly completed date.
///
/// Continues the streak when the habit was completed the previous calendar
/// day, or when the streak is still zero (the original app's first-completion
/// fallback, preserved deliberately); otherwise the streak restarts at 1.
/// `best_streak` only ever grows.
fn update_streak(tracker: &mut Tracker, habit_id: &str, date: NaiveDate) {
    let completed_prev = tracker
        .habit(habit_id)
        .map(|h| tracker.is_completed_on(previous_day(date), h))
        .unwrap_or(false);

    if let Some(habit) = tracker.habit_mut(habit_id) {
        if completed_prev || habit.streak == 0 {
            habit.streak += 1;
        } else {
            habit.streak = 1;
        }
        habit.best_streak = habit.best_streak.max(habit.streak);
        habit.total_completions += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracker::NewHabit;
    use crate::types::Priority;
    use pretty_assertions::assert_eq;

    fn now() -> DateTime<Utc> {
        Utc::now()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn tracker_with(kind: HabitKind, target: u32, priority: Priority) -> (Tracker, String) {
        let mut tracker = Tracker::new();
        let habit = tracker
            .create_habit(
                NewHabit {
                    name: "Habit".to_string(),
                    kind,
                    target,
                    priority,
                    color: None,
                    reminder: None,
                },
                now(),
            )
            .unwrap();
        (tracker, habit.id)
    }

    #[test]
    fn unknown_habit_is_not_found() {
        let mut tracker = Tracker::new();
        let err = record(&mut tracker, "nope", date(2024, 1, 1), None, now()).unwrap_err();
        assert!(matches!(err, HabitError::NotFound { .. }));
    }

    #[test]
    fn archived_habit_is_not_found() {
        let (mut tracker, id) = tracker_with(HabitKind::Boolean, 1, Priority::Low);
        tracker.archive_habit(&id, now()).unwrap();
        let err = record(&mut tracker, &id, date(2024, 1, 1), None, now()).unwrap_err();
        assert!(matches!(err, HabitError::NotFound { .. }));
    }

    #[test]
    fn boolean_completion_is_idempotent() {
        let (mut tracker, id) = tracker_with(HabitKind::Boolean, 1, Priority::Low);
        let d = date(2024, 1, 1);

        let first = record(&mut tracker, &id, d, None, now()).unwrap();
        assert!(first.newly_completed);
        assert_eq!(first.points_awarded, 10);

        let second = record(&mut tracker, &id, d, None, now()).unwrap();
        assert!(second.completed);
        assert!(!second.newly_completed);
        assert_eq!(second.points_awarded, 0);
        assert!(second.events.is_empty());

        let habit = tracker.habit(&id).unwrap();
        assert_eq!(habit.total_completions, 1);
        assert_eq!(tracker.progress.total_points, 10);
    }

    #[test]
    fn counter_accumulates_and_completes_on_crossing() {
        let (mut tracker, id) = tracker_with(HabitKind::Counter, 8, Priority::Medium);
        let d = date(2024, 1, 1);

        let first = record(&mut tracker, &id, d, Some(3), now()).unwrap();
        assert_eq!(first.value, CompletionValue::Amount(3));
        assert!(!first.completed);
        // Below target: no side effects at all.
        assert_eq!(first.points_awarded, 0);
        assert_eq!(tracker.habit(&id).unwrap().streak, 0);

        let second = record(&mut tracker, &id, d, Some(5), now()).unwrap();
        assert_eq!(second.value, CompletionValue::Amount(8));
        assert!(second.newly_completed);
        assert_eq!(tracker.habit(&id).unwrap().streak, 1);
    }

    #[test]
    fn counter_past_target_fires_no_second_effects() {
        let (mut tracker, id) = tracker_with(HabitKind::Counter, 2, Priority::Low);
        let d = date(2024, 1, 1);
        record(&mut tracker, &id, d, Some(2), now()).unwrap();
        let points_after_first = tracker.progress.total_points;

        let again = record(&mut tracker, &id, d, Some(4), now()).unwrap();
        // Value keeps accumulating past target, never clamped.
        assert_eq!(again.value, CompletionValue::Amount(6));
        assert!(!again.newly_completed);
        assert_eq!(tracker.progress.total_points, points_after_first);
        assert_eq!(tracker.habit(&id).unwrap().total_completions, 1);
    }

    #[test]
    fn timer_uses_default_increment_of_15() {
        let (mut tracker, id) = tracker_with(HabitKind::Timer, 30, Priority::Low);
        let d = date(2024, 1, 1);
        let outcome = record(&mut tracker, &id, d, None, now()).unwrap();
        assert_eq!(outcome.value, CompletionValue::Amount(15));
        assert!(!outcome.completed);
    }

    #[test]
    fn consecutive_days_grow_the_streak() {
        let (mut tracker, id) = tracker_with(HabitKind::Boolean, 1, Priority::Low);
        record(&mut tracker, &id, date(2024, 1, 1), None, now()).unwrap();
        record(&mut tracker, &id, date(2024, 1, 2), None, now()).unwrap();
        record(&mut tracker, &id, date(2024, 1, 3), None, now()).unwrap();

        let habit = tracker.habit(&id).unwrap();
        assert_eq!(habit.streak, 3);
        assert_eq!(habit.best_streak, 3);
        assert_eq!(habit.total_completions, 3);
    }

    #[test]
    fn skipped_day_restarts_streak_but_keeps_best() {
        let (mut tracker, id) = tracker_with(HabitKind::Boolean, 1, Priority::Low);
        record(&mut tracker, &id, date(2024, 1, 1), None, now()).unwrap();
        record(&mut tracker, &id, date(2024, 1, 2), None, now()).unwrap();
        // Skip Jan 3.
        record(&mut tracker, &id, date(2024, 1, 4), None, now()).unwrap();

        let habit = tracker.habit(&id).unwrap();
        assert_eq!(habit.streak, 1);
        assert_eq!(habit.best_streak, 2);
    }

    #[test]
    fn zero_streak_fallback_continues_without_yesterday() {
        // Pins the original behavior: with streak == 0 the streak grows even
        // though the previous day has no completion.
        let (mut tracker, id) = tracker_with(HabitKind::Boolean, 1, Priority::Low);
        record(&mut tracker, &id, date(2024, 5, 20), None, now()).unwrap();
        assert_eq!(tracker.habit(&id).unwrap().streak, 1);
    }

    #[test]
    fn yesterday_below_target_does_not_continue_streak() {
        // A partial counter day is not "completed yesterday".
        let (mut tracker, id) = tracker_with(HabitKind::Counter, 8, Priority::Low);
        record(&mut tracker, &id, date(2024, 1, 1), Some(8), now()).unwrap();
        record(&mut tracker, &id, date(2024, 1, 2), Some(3), now()).unwrap();
        record(&mut tracker, &id, date(2024, 1, 3), Some(8), now()).unwrap();

        let habit = tracker.habit(&id).unwrap();
        assert_eq!(habit.streak, 1);
        assert_eq!(habit.best_streak, 1);
    }

    #[test]
    fn completion_emits_events_in_order() {
        let (mut tracker, id) = tracker_with(HabitKind::Boolean, 1, Priority::High);
        // Push experience to the brink of a level-up.
        tracker.progress.experience = 90;
        tracker.progress.total_points = 90;

        let outcome = record(&mut tracker, &id, date(2024, 1, 1), None, now()).unwrap();
        assert_eq!(outcome.points_awarded, 20);

        assert!(matches!(outcome.events[0], Event::HabitCompleted { .. }));
        assert!(matches!(outcome.events[1], Event::LevelUp { level: 2 }));
        // first_habit unlocks on the first evaluation.
        assert!(outcome
            .events
            .iter()
            .any(|e| matches!(e, Event::AchievementUnlocked { id, .. } if id == "first_habit")));
    }

    #[test]
    fn backdated_record_anchors_achievement_window_at_its_date() {
        let (mut tracker, id) = tracker_with(HabitKind::Boolean, 1, Priority::Low);
        for day in 24..=29 {
            record(&mut tracker, &id, date(2024, 6, day), None, now()).unwrap();
        }

        // Backfilling Jun 23 makes the week ending Jun 29 complete, but the
        // evaluation window ends on the record's own date, whose week still
        // has gaps.
        let outcome = record(&mut tracker, &id, date(2024, 6, 23), None, now()).unwrap();
        assert!(!outcome
            .events
            .iter()
            .any(|e| matches!(e, Event::AchievementUnlocked { id, .. } if id == "perfect_week")));
        assert!(!tracker.unlocked.iter().any(|u| u.id == "perfect_week"));
    }

    #[test]
    fn best_streak_never_decreases() {
        let (mut tracker, id) = tracker_with(HabitKind::Boolean, 1, Priority::Low);
        let days = [
            date(2024, 1, 1),
            date(2024, 1, 2),
            date(2024, 1, 3),
            date(2024, 1, 5),
            date(2024, 1, 9),
            date(2024, 1, 10),
        ];
        let mut best_seen = 0;
        for d in days {
            record(&mut tracker, &id, d, None, now()).unwrap();
            let best = tracker.habit(&id).unwrap().best_streak;
            assert!(best >= best_seen);
            best_seen = best;
        }
        assert_eq!(best_seen, 3);
    }
}
