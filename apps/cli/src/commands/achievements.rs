//! Achievement catalog listing.

use anyhow::Result;
use habit_core::CATALOG;

use crate::storage::Storage;

pub fn run(storage: &Storage) -> Result<()> {
    let tracker = storage.load_tracker();
    for def in CATALOG {
        match tracker.unlocked.iter().find(|u| u.id == def.id) {
            Some(unlock) => println!(
                "[x] {} — {} (unlocked {})",
                def.title,
                def.description,
                unlock.unlocked_at.format("%Y-%m-%d")
            ),
            None => println!("[ ] {} — {}", def.title, def.description),
        }
    }
    Ok(())
}
