//! Dashboard statistics, trend, heatmap, and insights.

use anyhow::Result;
use chrono::Local;
use clap::Args;
use habit_core::{analytics, scoring};

use crate::storage::Storage;

#[derive(Debug, Args)]
pub struct StatsArgs {
    /// Show the last-30-days completion trend.
    #[arg(long)]
    trend: bool,

    /// Show the 90-day activity heatmap.
    #[arg(long)]
    heatmap: bool,
}

pub fn run(args: StatsArgs, storage: &Storage) -> Result<()> {
    let tracker = storage.load_tracker();
    let today = Local::now().date_naive();

    if args.trend {
        for point in analytics::completion_trend(&tracker, today, 30) {
            println!("{}  {:2}  {}", point.date, point.completed, "#".repeat(point.completed));
        }
        return Ok(());
    }

    if args.heatmap {
        let cells = analytics::heatmap(&tracker, today, 90);
        println!("Activity heatmap (last 90 days)");
        for row in cells.chunks(30) {
            let line: String = row
                .iter()
                .map(|cell| [' ', '░', '▒', '▓', '█'][usize::from(cell.intensity)])
                .collect();
            println!("{}  {line}", row[0].date);
        }
        return Ok(());
    }

    let summary = analytics::weekly_summary(&tracker, today);
    let progress = tracker.progress;

    println!("Active streaks:  {}", summary.active_streaks);
    println!("Completion rate: {}% this week", summary.completion_rate);
    println!("Time today:      {}m", summary.minutes_today);
    println!(
        "Total points:    {} ({})",
        progress.total_points,
        scoring::rank_for_points(progress.total_points)
    );
    println!(
        "Level {}:         {}/{} XP",
        progress.level,
        progress.experience,
        scoring::level_threshold(progress.level)
    );
    if let Some((rank, min)) = scoring::next_rank(progress.total_points) {
        println!("Next rank:       {rank} at {min} points");
    }
    Ok(())
}

pub fn run_insights(storage: &Storage) -> Result<()> {
    let tracker = storage.load_tracker();
    let today = Local::now().date_naive();
    for card in analytics::insights(&tracker, today) {
        println!("{}\n    {}", card.title, card.body);
    }
    Ok(())
}
