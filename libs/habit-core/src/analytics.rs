//! Read-only aggregations over the tracker: dashboard summary, trend,
//! heatmap, and insight cards. Archived habits are excluded throughout.

use chrono::NaiveDate;

use crate::dates::{date_key, last_n_days, week_dates};
use crate::tracker::Tracker;
use crate::types::HabitKind;

/// Dashboard stat row: streaks, this week's completion rate, minutes
/// logged today across timer habits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklySummary {
    pub active_streaks: usize,
    /// Percentage of habit-days completed over the Sunday-start week.
    pub completion_rate: u32,
    pub minutes_today: u32,
}

/// One day of the completion trend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendPoint {
    pub date: String,
    pub completed: usize,
}

/// One cell of the activity heatmap; intensity runs 0–4.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeatmapCell {
    pub date: String,
    pub intensity: u8,
}

/// A generated insight card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insight {
    pub title: String,
    pub body: String,
}

fn completed_on(tracker: &Tracker, day: NaiveDate) -> usize {
    tracker
        .active_habits()
        .filter(|h| tracker.is_completed_on(day, h))
        .count()
}

pub fn weekly_summary(tracker: &Tracker, today: NaiveDate) -> WeeklySummary {
    let active_count = tracker.active_habits().count();
    let active_streaks = tracker.active_habits().filter(|h| h.streak > 0).count();

    let completed: usize = week_dates(today)
        .into_iter()
        .map(|day| completed_on(tracker, day))
        .sum();
    let possible = active_count * 7;
    let completion_rate = if possible == 0 {
        0
    } else {
        (completed as f64 / possible as f64 * 100.0).round() as u32
    };

    let minutes_today = tracker
        .active_habits()
        .filter(|h| h.kind == HabitKind::Timer)
        .filter_map(|h| tracker.value_on(today, &h.id))
        .map(|v| v.amount())
        .sum();

    WeeklySummary {
        active_streaks,
        completion_rate,
        minutes_today,
    }
}

/// Completed-habit counts for the last `days` days, oldest first.
pub fn completion_trend(tracker: &Tracker, today: NaiveDate, days: u32) -> Vec<TrendPoint> {
    last_n_days(today, days)
        .into_iter()
        .map(|day| TrendPoint {
            date: date_key(day),
            completed: completed_on(tracker, day),
        })
        .collect()
}

/// Heatmap cells for the last `days` days, oldest first. Intensity is the
/// completed share of active habits scaled to 0–4.
pub fn heatmap(tracker: &Tracker, today: NaiveDate, days: u32) -> Vec<HeatmapCell> {
    let active_count = tracker.active_habits().count();
    last_n_days(today, days)
        .into_iter()
        .map(|day| {
            let intensity = if active_count == 0 {
                0
            } else {
                let share = completed_on(tracker, day) as f64 / active_count as f64;
                ((share * 4.0).ceil() as u8).min(4)
            };
            HeatmapCell {
                date: date_key(day),
                intensity,
            }
        })
        .collect()
}

/// Insight cards for the dashboard: best weekday this week, longest
/// best-streak, and the consistency rate. Falls back to a starter card
/// when there is nothing to report.
pub fn insights(tracker: &Tracker, today: NaiveDate) -> Vec<Insight> {
    let mut cards = Vec::new();

    let week = week_dates(today);
    let per_day: Vec<(String, usize)> = week
        .iter()
        .map(|day| (day.format("%A").to_string(), completed_on(tracker, *day)))
        .collect();
    let total_this_week: usize = per_day.iter().map(|(_, n)| n).sum();
    if total_this_week > 0 {
        if let Some((best_day, _)) = per_day.iter().max_by_key(|(_, n)| *n) {
            cards.push(Insight {
                title: format!("Your best day: {best_day}"),
                body: format!(
                    "You tend to complete more habits on {best_day}s. \
                     Try scheduling important habits on this day!"
                ),
            });
        }
    }

    let longest_streak = tracker.habits.iter().map(|h| h.best_streak).max().unwrap_or(0);
    if longest_streak > 0 {
        cards.push(Insight {
            title: format!("Longest streak: {longest_streak} days"),
            body: "You've shown great consistency! Keep building those habits one day at a time."
                .to_string(),
        });
    }

    let total = tracker.active_habits().count();
    if total > 0 {
        let streaking = tracker.active_habits().filter(|h| h.streak > 0).count();
        let rate = (streaking as f64 / total as f64 * 100.0).round() as u32;
        let encouragement = if rate >= 70 {
            "Excellent work!"
        } else {
            "Keep pushing forward!"
        };
        cards.push(Insight {
            title: format!("{rate}% consistency rate"),
            body: format!("You're maintaining {streaking} out of {total} habits. {encouragement}"),
        });
    }

    if cards.is_empty() {
        cards.push(Insight {
            title: "Start your journey".to_string(),
            body: "Add some habits and start tracking to see personalized insights here!"
                .to_string(),
        });
    }
    cards
}
