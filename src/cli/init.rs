//! `baro init` command
//!
//! Creates a `.baro` directory with a default config and a seeded database.
//!
//! # Usage
//! ```bash
//! baro init                    # Initialize in current directory
//! baro init /path/to/project   # Initialize in specific path
//! baro init --global           # Initialize global ~/.baro
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Args;
use colored::Colorize;

use crate::config::{Config, BARO_DIR};
use crate::core::seed::seed_entries;
use crate::core::storage::Storage;

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path to initialize (default: current directory)
    pub path: Option<PathBuf>,

    /// Initialize global config (~/.baro)
    #[arg(long)]
    pub global: bool,

    /// Force re-initialization
    #[arg(short, long)]
    pub force: bool,
}

pub fn run(args: InitArgs) -> Result<()> {
    let baro_dir = if args.global {
        Config::global_dir().context("Cannot determine home directory")?
    } else {
        args.path
            .unwrap_or_else(|| PathBuf::from("."))
            .join(BARO_DIR)
    };

    if is_initialized(&baro_dir) && !args.force {
        bail!(
            "{} already exists. Use --force to reinitialize.",
            baro_dir.display()
        );
    }

    println!("🚀 Initializing baro in: {}", baro_dir.display());

    fs::create_dir_all(&baro_dir)
        .with_context(|| format!("Failed to create {}", baro_dir.display()))?;

    let config_path = baro_dir.join("config.toml");
    fs::write(&config_path, toml::to_string_pretty(&Config::default())?)?;

    // Re-seeding keeps whatever the user already taught
    let db_path = baro_dir.join("data.db");
    let storage = Storage::open(&db_path)?;
    let added = storage.seed(&seed_entries())?;

    println!("\n{} Initialized baro", "✓".green());
    println!("   Config:   {}", config_path.display());
    println!("   Database: {} ({} entries added)", db_path.display(), added);
    println!("\nNext steps:");
    println!("  baro ask \"baro qué hora es\"");
    println!("  baro learn \"mi perro\" \"se llama Toby\"");
    println!("  baro chat");

    Ok(())
}

fn is_initialized(baro_dir: &Path) -> bool {
    baro_dir.join("config.toml").exists() || baro_dir.join("data.db").exists()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_creates_config_and_db() -> Result<()> {
        let dir = tempfile::tempdir()?;
        run(InitArgs {
            path: Some(dir.path().to_path_buf()),
            global: false,
            force: false,
        })?;

        let baro_dir = dir.path().join(BARO_DIR);
        let config = Config::load_from(&baro_dir.join("config.toml"))?;
        assert_eq!(config, Config::default());

        let storage = Storage::open(&baro_dir.join("data.db"))?;
        assert_eq!(storage.stats()?.entries, seed_entries().len());
        Ok(())
    }

    #[test]
    fn test_init_twice_needs_force() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let args = || InitArgs {
            path: Some(dir.path().to_path_buf()),
            global: false,
            force: false,
        };
        run(args())?;
        assert!(run(args()).is_err());
        run(InitArgs {
            force: true,
            ..args()
        })?;
        Ok(())
    }
}
