//! `baro history` command
//!
//! Lists the most recent interactions, newest first.

use anyhow::Result;
use clap::Args;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::utils::{load_config, open_storage, preview};
use super::GlobalArgs;

#[derive(Args, Debug)]
pub struct HistoryArgs {
    /// Maximum interactions shown
    #[arg(short, long, default_value = "20")]
    pub limit: usize,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Tabled)]
struct HistoryRow {
    #[tabled(rename = "When")]
    when: String,
    #[tabled(rename = "Command")]
    command: String,
    #[tabled(rename = "Intent")]
    intent: String,
    #[tabled(rename = "Conf.")]
    confidence: String,
    #[tabled(rename = "Response")]
    response: String,
}

pub fn run(args: HistoryArgs, global: &GlobalArgs) -> Result<()> {
    let config = load_config(global)?;
    let storage = open_storage(global, &config)?;
    let records = storage.recent_interactions(args.limit)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    if records.is_empty() {
        println!("No interactions yet.");
        return Ok(());
    }

    let rows: Vec<HistoryRow> = records
        .iter()
        .map(|r| HistoryRow {
            when: r
                .timestamp
                .with_timezone(&chrono::Local)
                .format("%Y-%m-%d %H:%M")
                .to_string(),
            command: preview(&r.command, 30),
            intent: r.intent.clone(),
            confidence: format!("{:.2}", r.confidence),
            response: preview(&r.response, 50),
        })
        .collect();

    println!("{}", Table::new(rows).with(Style::rounded()));
    Ok(())
}
