//! Stats command - Show knowledge and interaction statistics

use clap::Args;

use super::utils::{db_path, load_config, open_storage};
use super::GlobalArgs;

/// Stats command arguments
#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Execute stats command
pub fn execute(args: StatsArgs, global: &GlobalArgs) -> anyhow::Result<()> {
    let config = load_config(global)?;
    let storage = open_storage(global, &config)?;
    let stats = storage.stats()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("📊 Knowledge Base Statistics\n");
    println!("  Entries:        {}", stats.entries);
    println!(
        "  └── Taught:     {} ({}%)",
        stats.user_taught,
        percent(stats.user_taught, stats.entries)
    );
    println!("  Interactions:   {}", stats.interactions);

    if !stats.categories.is_empty() {
        println!("\n📂 Categories:");
        for (category, count) in stats.categories.iter().take(10) {
            println!("  {} ({} entries)", category, count);
        }
    }

    if !stats.intents.is_empty() {
        println!("\n🎯 Intents:");
        for (intent, count) in &stats.intents {
            println!("  {} ({})", intent, count);
        }
    }

    println!("\n📁 Database: {}", db_path(global, &config).display());
    Ok(())
}

fn percent(part: usize, total: usize) -> usize {
    if total > 0 {
        part * 100 / total
    } else {
        0
    }
}
