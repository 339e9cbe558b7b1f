//! `baro show` command
//!
//! Shows a stored topic by exact (case-insensitive) key.

use anyhow::{bail, Result};
use clap::Args;
use colored::Colorize;

use super::utils::{load_config, open_storage};
use super::GlobalArgs;
use crate::core::knowledge::KnowledgeStore;

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Topic key
    pub topic: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ShowArgs, global: &GlobalArgs) -> Result<()> {
    let config = load_config(global)?;
    let storage = open_storage(global, &config)?;

    let Some(entry) = storage.get(&args.topic)? else {
        bail!("Topic not found: {}", args.topic.trim());
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&entry)?);
        return Ok(());
    }

    println!("{}", entry.topic.bold());
    println!("{}", entry.info);
    println!();
    let origin = if entry.is_user_taught() {
        "taught by you".yellow()
    } else {
        "built-in".normal()
    };
    println!("  Category: {} ({})", entry.category, origin);
    if !entry.keywords.is_empty() {
        println!("  Keywords: {}", entry.keywords.join(", "));
    }

    Ok(())
}
