//! Scoring and leveling. Pure functions over `Habit` and `UserProgress`.

use crate::types::{Habit, UserProgress};

const BASE_POINTS: f64 = 10.0;

/// Points awarded for completing a habit, using its current (post-update)
/// streak: `floor(10 * priority multiplier) + floor(streak / 7) * 5`.
pub fn points_for(habit: &Habit) -> u64 {
    let base = (BASE_POINTS * habit.priority.multiplier()).floor() as u64;
    let streak_bonus = u64::from(habit.streak / 7) * 5;
    base + streak_bonus
}

/// Experience required to advance past the given level.
pub fn level_threshold(level: u32) -> u64 {
    u64::from(level) * 100
}

/// Add points to the user's progress. On level-up the experience counter
/// resets to zero; overflow past the threshold is discarded, not carried.
/// Returns the new level when a level-up occurred.
pub fn add_points(progress: &mut UserProgress, points: u64) -> Option<u32> {
    progress.total_points += points;
    progress.experience += points;

    if progress.experience >= level_threshold(progress.level) {
        progress.level += 1;
        progress.experience = 0;
        Some(progress.level)
    } else {
        None
    }
}

/// Named rank for a cumulative point total.
pub fn rank_for_points(total: u64) -> &'static str {
    match total {
        0..=499 => "Beginner",
        500..=1499 => "Consistent",
        1500..=2999 => "Dedicated",
        3000..=4999 => "Master",
        _ => "Legend",
    }
}

/// The next rank and the point total it requires, or None at the top rank.
pub fn next_rank(total: u64) -> Option<(&'static str, u64)> {
    [
        ("Consistent", 500),
        ("Dedicated", 1500),
        ("Master", 3000),
        ("Legend", 5000),
    ]
    .into_iter()
    .find(|&(_, min)| total < min)
}
