//! `baro learn` command
//!
//! Teaches a topic without going through the "aprende: tema: dato" phrasing.

use anyhow::{bail, Result};
use clap::Args;
use colored::Colorize;

use super::utils::{load_config, open_storage};
use super::GlobalArgs;
use crate::core::knowledge::learn;

#[derive(Args, Debug)]
pub struct LearnArgs {
    /// Topic to teach
    pub topic: String,

    /// What Baro should answer about it
    pub info: String,
}

pub fn run(args: LearnArgs, global: &GlobalArgs) -> Result<()> {
    let topic = args.topic.trim().to_lowercase();
    let info = args.info.trim();
    if topic.is_empty() || info.is_empty() {
        bail!("Topic and info must not be empty");
    }

    let config = load_config(global)?;
    let storage = open_storage(global, &config)?;
    let confirmation = learn(&storage, &topic, info)?;

    println!("{} {}", "✓".green(), confirmation);
    Ok(())
}
