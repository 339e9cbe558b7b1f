//! `baro search` command
//!
//! Shows how the knowledge ranking scores a query, and which entry (if any)
//! the assistant would answer with.
//!
//! # Usage
//! ```bash
//! baro search "fotosintesis"
//! baro search "lenguaje de programacion" --limit 5
//! baro search "python" --threshold 0.9 --format json
//! ```
//!
//! Scores are additive and may exceed 1.0; an exact topic match is reported
//! with 1.0 and skips the ranking.

use anyhow::Result;
use clap::{Args, ValueEnum};
use colored::Colorize;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::utils::{load_config, open_storage, preview};
use super::GlobalArgs;
use crate::core::knowledge::{rank, scored_search, KnowledgeStore, SearchResult};
use crate::core::similarity::SequenceRatio;

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Pretty,
    Json,
    /// One tab-separated line per candidate
    Compact,
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Query text
    pub query: String,

    /// Minimum score to accept an answer (default: search.question_threshold)
    #[arg(short, long)]
    pub threshold: Option<f64>,

    /// Maximum candidates shown (default: search.default_limit)
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "pretty")]
    pub format: OutputFormat,
}

/// Search output
#[derive(Debug, Serialize)]
pub struct SearchReport {
    pub query: String,
    pub threshold: f64,
    pub candidates: Vec<SearchResult>,
    pub answer: Option<SearchResult>,
}

#[derive(Tabled)]
struct CandidateRow {
    #[tabled(rename = "#")]
    rank: usize,
    #[tabled(rename = "Topic")]
    topic: String,
    #[tabled(rename = "Score")]
    score: String,
    #[tabled(rename = "Info")]
    info: String,
}

pub fn run(args: SearchArgs, global: &GlobalArgs) -> Result<()> {
    let config = load_config(global)?;
    let storage = open_storage(global, &config)?;

    let report = search(
        &storage,
        &args.query,
        args.threshold.unwrap_or(config.search.question_threshold),
        args.limit.unwrap_or(config.search.default_limit),
    )?;

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Compact => print_compact(&report),
        OutputFormat::Pretty => print_pretty(&report),
    }

    Ok(())
}

/// Rank candidates and pick the accepted answer
pub fn search(
    store: &dyn KnowledgeStore,
    query: &str,
    threshold: f64,
    limit: usize,
) -> Result<SearchReport> {
    let query = query.trim().to_lowercase();
    let similarity = SequenceRatio;

    let mut candidates = rank(&store.entries()?, &query, &similarity);
    candidates.truncate(limit);
    let answer = scored_search(store, &query, threshold, &similarity)?;

    Ok(SearchReport {
        query,
        threshold,
        candidates,
        answer,
    })
}

fn print_pretty(report: &SearchReport) {
    if report.candidates.is_empty() && report.answer.is_none() {
        println!("No results found.");
        return;
    }

    if !report.candidates.is_empty() {
        let rows: Vec<CandidateRow> = report
            .candidates
            .iter()
            .enumerate()
            .map(|(i, c)| CandidateRow {
                rank: i + 1,
                topic: c.topic.clone(),
                score: format!("{:.2}", c.score),
                info: preview(&c.info, 60),
            })
            .collect();
        println!("{}", Table::new(rows).with(Style::rounded()));
    }

    match &report.answer {
        Some(answer) => {
            println!(
                "\n{} {} ({:.2})",
                "✓".green(),
                answer.topic.bold(),
                answer.score
            );
            println!("  {}", answer.info);
        }
        None => println!(
            "\n{} No candidate reaches {:.2}",
            "✗".red(),
            report.threshold
        ),
    }
}

fn print_compact(report: &SearchReport) {
    for c in &report.candidates {
        println!("{}\t{:.2}\t{}", c.topic, c.score, c.info);
    }
}
