//! Flat key-value persistence: one JSON file per logical collection in the
//! platform data directory. Missing or corrupt files are treated as absent
//! and fall back to empty/default collections.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use anyhow::{Context, Result};
use habit_core::Tracker;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

const HABITS: &str = "habits";
const COMPLETIONS: &str = "completions";
const USER_STATS: &str = "user_stats";
const ACHIEVEMENTS: &str = "achievements";
const JOURNAL: &str = "journal";
const THEME: &str = "theme";

const KEYS: &[&str] = &[HABITS, COMPLETIONS, USER_STATS, ACHIEVEMENTS, JOURNAL, THEME];

pub struct Storage {
    root: PathBuf,
}

impl Storage {
    pub fn open_default() -> Result<Self> {
        let base = dirs::data_dir().context("no platform data directory")?;
        Self::at(base.join("habitflow"))
    }

    pub fn at(root: PathBuf) -> Result<Self> {
        fs::create_dir_all(&root)
            .with_context(|| format!("creating data directory {}", root.display()))?;
        Ok(Self { root })
    }

    fn path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    /// Load a collection; a missing or unparseable file yields the default.
    pub fn load<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        let path = self.path(key);
        let Ok(raw) = fs::read_to_string(&path) else {
            return T::default();
        };
        serde_json::from_str(&raw).unwrap_or_else(|err| {
            warn!("discarding corrupt {}: {err}", path.display());
            T::default()
        })
    }

    pub fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let path = self.path(key);
        let json = serde_json::to_string_pretty(value)?;
        fs::write(&path, json).with_context(|| format!("writing {}", path.display()))
    }

    pub fn load_tracker(&self) -> Tracker {
        Tracker {
            habits: self.load(HABITS),
            completions: self.load(COMPLETIONS),
            progress: self.load(USER_STATS),
            unlocked: self.load(ACHIEVEMENTS),
            journal: self.load(JOURNAL),
        }
    }

    pub fn save_tracker(&self, tracker: &Tracker) -> Result<()> {
        self.save(HABITS, &tracker.habits)?;
        self.save(COMPLETIONS, &tracker.completions)?;
        self.save(USER_STATS, &tracker.progress)?;
        self.save(ACHIEVEMENTS, &tracker.unlocked)?;
        self.save(JOURNAL, &tracker.journal)
    }

    pub fn theme(&self) -> String {
        let theme: String = self.load(THEME);
        if theme.is_empty() {
            "light".to_string()
        } else {
            theme
        }
    }

    pub fn set_theme(&self, theme: &str) -> Result<()> {
        self.save(THEME, &theme)
    }

    /// Remove every stored collection.
    pub fn reset(&self) -> Result<()> {
        for key in KEYS {
            let path = self.path(key);
            match fs::remove_file(&path) {
                Ok(()) => {}
                Err(err) if err.kind() == ErrorKind::NotFound => {}
                Err(err) => {
                    return Err(err).with_context(|| format!("removing {}", path.display()))
                }
            }
        }
        Ok(())
    }
}
