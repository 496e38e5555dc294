//! Export/import document. Parsing is deliberately permissive: every field
//! defaults when absent and the version tag is not validated, so backups
//! from any app version (including the original web app's camelCase JSON)
//! restore to a usable state.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::tracker::{DayRecord, Tracker};
use crate::types::{AchievementUnlock, Habit, JournalEntry, UserProgress};

/// The full backup document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Backup {
    #[serde(default)]
    pub habits: Vec<Habit>,
    #[serde(default)]
    pub completions: BTreeMap<String, DayRecord>,
    #[serde(default)]
    pub user_stats: UserProgress,
    #[serde(default)]
    pub achievements: Vec<AchievementUnlock>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub journal_entries: Vec<JournalEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Snapshot the tracker into a backup document.
pub fn export(tracker: &Tracker, now: DateTime<Utc>) -> Backup {
    Backup {
        habits: tracker.habits.clone(),
        completions: tracker.completions.clone(),
        user_stats: tracker.progress,
        achievements: tracker.unlocked.clone(),
        journal_entries: tracker.journal.clone(),
        export_date: Some(now),
        version: Some("1.0".to_string()),
    }
}

impl Backup {
    /// Wholesale replace: every collection comes from the document, with
    /// absent fields already defaulted by deserialization.
    pub fn into_tracker(self) -> Tracker {
        Tracker {
            habits: self.habits,
            completions: self.completions,
            progress: self.user_stats,
            unlocked: self.achievements,
            journal: self.journal_entries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dates::date_key;
    use crate::tracker::NewHabit;
    use crate::types::{CompletionValue, HabitKind, Priority};
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    #[test]
    fn export_import_round_trips() {
        let mut tracker = Tracker::new();
        let habit = tracker
            .create_habit(
                NewHabit {
                    name: "Water".to_string(),
                    kind: HabitKind::Counter,
                    target: 8,
                    priority: Priority::High,
                    color: Some("#667eea".to_string()),
                    reminder: Some("08:00".to_string()),
                },
                Utc::now(),
            )
            .unwrap();
        let day = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
        tracker
            .completions
            .entry(date_key(day))
            .or_default()
            .insert(habit.id.clone(), CompletionValue::Amount(8));
        tracker.progress.total_points = 250;
        tracker.progress.experience = 50;
        tracker.progress.level = 2;
        tracker.unlocked.push(AchievementUnlock {
            id: "first_habit".to_string(),
            unlocked_at: Utc::now(),
        });

        let json = serde_json::to_string(&export(&tracker, Utc::now())).unwrap();
        let restored: Backup = serde_json::from_str(&json).unwrap();
        let restored = restored.into_tracker();

        assert_eq!(restored.habits.len(), 1);
        assert_eq!(restored.habits[0].name, "Water");
        assert_eq!(restored.habits[0].target, 8);
        assert_eq!(restored.completions, tracker.completions);
        assert_eq!(restored.progress, tracker.progress);
        assert_eq!(restored.unlocked, tracker.unlocked);
    }

    #[test]
    fn missing_fields_default() {
        let backup: Backup = serde_json::from_str("{}").unwrap();
        let tracker = backup.into_tracker();
        assert!(tracker.habits.is_empty());
        assert!(tracker.completions.is_empty());
        assert_eq!(tracker.progress, UserProgress::default());
        assert!(tracker.unlocked.is_empty());
        assert!(tracker.journal.is_empty());
    }

    #[test]
    fn parses_original_web_app_export() {
        // Shape written by the original app's export button: camelCase keys,
        // no version, ledger values as bare true/number.
        let json = r#"{
            "habits": [{
                "id": "1700000000000",
                "name": "Meditate",
                "type": "timer",
                "target": 10,
                "priority": "medium",
                "createdAt": "2024-01-01T00:00:00Z",
                "streak": 2,
                "bestStreak": 4,
                "totalCompletions": 9
            }],
            "completions": {
                "2024-01-02": {"1700000000000": 10}
            },
            "userStats": {"totalPoints": 120, "level": 2, "experience": 20},
            "achievements": [{"id": "first_habit", "unlockedAt": "2024-01-01T08:00:00Z"}],
            "exportDate": "2024-01-03T00:00:00Z"
        }"#;
        let tracker = serde_json::from_str::<Backup>(json).unwrap().into_tracker();

        assert_eq!(tracker.habits[0].kind, HabitKind::Timer);
        assert_eq!(tracker.habits[0].best_streak, 4);
        assert_eq!(
            tracker.completions["2024-01-02"]["1700000000000"],
            CompletionValue::Amount(10)
        );
        assert_eq!(tracker.progress.level, 2);
        assert_eq!(tracker.unlocked[0].id, "first_habit");
    }
}
