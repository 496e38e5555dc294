//! Theme preference. Presentation metadata stored alongside the rest of
//! the state; no rules attach to it.

use anyhow::{bail, Result};
use clap::Args;

use crate::storage::Storage;

#[derive(Debug, Args)]
pub struct ThemeArgs {
    /// Theme to set ("light" or "dark"); omit to show the current theme.
    theme: Option<String>,
}

pub fn run(args: ThemeArgs, storage: &Storage) -> Result<()> {
    match args.theme {
        None => println!("{}", storage.theme()),
        Some(theme) if theme == "light" || theme == "dark" => {
            storage.set_theme(&theme)?;
            println!("Theme set to {theme}");
        }
        Some(other) => bail!("unknown theme '{other}', expected 'light' or 'dark'"),
    }
    Ok(())
}
