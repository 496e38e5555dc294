//! Achievement catalog and evaluator.
//!
//! The catalog is static configuration; only unlock records are stored
//! state. Predicates are pure over the tracker; evaluation appends at most
//! one unlock per id, in catalog order, and re-running with unchanged state
//! unlocks nothing new.

use chrono::{DateTime, NaiveDate, Utc};

use crate::dates::last_n_days;
use crate::tracker::Tracker;
use crate::types::AchievementUnlock;

/// A catalog entry: identity, display text, and the unlock predicate.
pub struct AchievementDef {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    predicate: fn(&Tracker, NaiveDate) -> bool,
}

pub const CATALOG: &[AchievementDef] = &[
    AchievementDef {
        id: "first_habit",
        title: "First Step",
        description: "Create your first habit",
        predicate: first_habit,
    },
    AchievementDef {
        id: "week_streak",
        title: "Week Warrior",
        description: "Maintain a 7-day streak",
        predicate: week_streak,
    },
    AchievementDef {
        id: "month_streak",
        title: "Monthly Master",
        description: "Maintain a 30-day streak",
        predicate: month_streak,
    },
    AchievementDef {
        id: "hundred_completions",
        title: "Century Club",
        description: "Complete 100 habits",
        predicate: hundred_completions,
    },
    AchievementDef {
        id: "five_habits",
        title: "Habit Collector",
        description: "Create 5 different habits",
        predicate: five_habits,
    },
    AchievementDef {
        id: "perfect_week",
        title: "Perfect Week",
        description: "Complete all habits for 7 days straight",
        predicate: perfect_week,
    },
];

/// Test every locked catalog entry and record unlocks for the newly
/// satisfied ones. Returns the new subset for notification.
pub fn evaluate(
    tracker: &mut Tracker,
    today: NaiveDate,
    now: DateTime<Utc>,
) -> Vec<&'static AchievementDef> {
    let mut newly_unlocked = Vec::new();
    for def in CATALOG {
        if tracker.unlocked.iter().any(|u| u.id == def.id) {
            continue;
        }
        if (def.predicate)(tracker, today) {
            tracker.unlocked.push(AchievementUnlock {
                id: def.id.to_string(),
                unlocked_at: now,
            });
            newly_unlocked.push(def);
        }
    }
    newly_unlocked
}

fn first_habit(tracker: &Tracker, _: NaiveDate) -> bool {
    !tracker.habits.is_empty()
}

// Streak and total-completion predicates scan all habits, archived
// included: history earned before archival still counts.
fn week_streak(tracker: &Tracker, _: NaiveDate) -> bool {
    tracker.habits.iter().any(|h| h.best_streak >= 7)
}

fn month_streak(tracker: &Tracker, _: NaiveDate) -> bool {
    tracker.habits.iter().any(|h| h.best_streak >= 30)
}

fn hundred_completions(tracker: &Tracker, _: NaiveDate) -> bool {
    tracker
        .habits
        .iter()
        .map(|h| u64::from(h.total_completions))
        .sum::<u64>()
        >= 100
}

fn five_habits(tracker: &Tracker, _: NaiveDate) -> bool {
    tracker.habits.len() >= 5
}

fn perfect_week(tracker: &Tracker, today: NaiveDate) -> bool {
    let active: Vec<_> = tracker.active_habits().collect();
    if active.is_empty() {
        return false;
    }
    last_n_days(today, 7)
        .into_iter()
        .all(|day| active.iter().all(|h| tracker.is_completed_on(day, h)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dates::date_key;
    use crate::tracker::NewHabit;
    use crate::types::{CompletionValue, HabitKind, Priority};
    use pretty_assertions::assert_eq;

    fn now() -> DateTime<Utc> {
        Utc::now()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()
    }

    fn boolean_habit(name: &str) -> NewHabit {
        NewHabit {
            name: name.to_string(),
            kind: HabitKind::Boolean,
            target: 1,
            priority: Priority::Medium,
            color: None,
            reminder: None,
        }
    }

    fn mark_done(tracker: &mut Tracker, habit_id: &str, date: NaiveDate) {
        tracker
            .completions
            .entry(date_key(date))
            .or_default()
            .insert(habit_id.to_string(), CompletionValue::Done(true));
    }

    #[test]
    fn first_habit_unlocks_once() {
        let mut tracker = Tracker::new();
        tracker.create_habit(boolean_habit("Read"), now()).unwrap();

        let unlocked = evaluate(&mut tracker, today(), now());
        assert_eq!(unlocked.len(), 1);
        assert_eq!(unlocked[0].id, "first_habit");

        // Idempotent: a second pass with unchanged state unlocks nothing.
        assert!(evaluate(&mut tracker, today(), now()).is_empty());
        assert_eq!(tracker.unlocked.len(), 1);
    }

    #[test]
    fn streak_achievements_use_best_streak() {
        let mut tracker = Tracker::new();
        let habit = tracker.create_habit(boolean_habit("Run"), now()).unwrap();
        tracker.habit_mut(&habit.id).unwrap().best_streak = 7;
        // Streak history survives archival.
        tracker.archive_habit(&habit.id, now()).unwrap();

        let ids: Vec<_> = evaluate(&mut tracker, today(), now())
            .iter()
            .map(|d| d.id)
            .collect();
        assert!(ids.contains(&"week_streak"));
        assert!(!ids.contains(&"month_streak"));
    }

    #[test]
    fn hundred_completions_sums_all_habits() {
        let mut tracker = Tracker::new();
        for i in 0..4 {
            let habit = tracker
                .create_habit(boolean_habit(&format!("Habit {i}")), now())
                .unwrap();
            tracker.habit_mut(&habit.id).unwrap().total_completions = 25;
        }
        let ids: Vec<_> = evaluate(&mut tracker, today(), now())
            .iter()
            .map(|d| d.id)
            .collect();
        assert!(ids.contains(&"hundred_completions"));
    }

    #[test]
    fn five_habits_counts_created_habits() {
        let mut tracker = Tracker::new();
        for i in 0..5 {
            tracker
                .create_habit(boolean_habit(&format!("Habit {i}")), now())
                .unwrap();
        }
        let ids: Vec<_> = evaluate(&mut tracker, today(), now())
            .iter()
            .map(|d| d.id)
            .collect();
        assert!(ids.contains(&"five_habits"));
    }

    #[test]
    fn perfect_week_requires_every_active_habit_every_day() {
        let mut tracker = Tracker::new();
        let habit = tracker.create_habit(boolean_habit("Read"), now()).unwrap();
        for day in last_n_days(today(), 7) {
            mark_done(&mut tracker, &habit.id, day);
        }
        let ids: Vec<_> = evaluate(&mut tracker, today(), now())
            .iter()
            .map(|d| d.id)
            .collect();
        assert!(ids.contains(&"perfect_week"));
    }

    #[test]
    fn perfect_week_fails_with_a_fresh_habit() {
        let mut tracker = Tracker::new();
        let habit = tracker.create_habit(boolean_habit("Read"), now()).unwrap();
        for day in last_n_days(today(), 7) {
            mark_done(&mut tracker, &habit.id, day);
        }
        // A never-completed habit added on day 7 defeats the predicate.
        tracker.create_habit(boolean_habit("Stretch"), now()).unwrap();

        let ids: Vec<_> = evaluate(&mut tracker, today(), now())
            .iter()
            .map(|d| d.id)
            .collect();
        assert!(!ids.contains(&"perfect_week"));
    }

    #[test]
    fn perfect_week_never_unlocks_with_no_habits() {
        let mut tracker = Tracker::new();
        assert!(evaluate(&mut tracker, today(), now()).is_empty());
    }

    #[test]
    fn unlocks_follow_catalog_order() {
        let mut tracker = Tracker::new();
        for i in 0..5 {
            tracker
                .create_habit(boolean_habit(&format!("Habit {i}")), now())
                .unwrap();
        }
        let ids: Vec<_> = evaluate(&mut tracker, today(), now())
            .iter()
            .map(|d| d.id)
            .collect();
        assert_eq!(ids, vec!["first_habit", "five_habits"]);
    }
}
