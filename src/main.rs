//! baro CLI - Entry point
//!
//! Usage: baro <command> [options]

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use baro::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins; --verbose turns on debug for this crate
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if cli.verbose { "baro=debug" } else { "warn" })
    });
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let global = cli.global;
    match cli.command {
        Commands::Init(args) => baro::cli::init::run(args),
        Commands::Ask(args) => baro::cli::ask::run(args, &global),
        Commands::Chat(args) => baro::cli::chat::run(args, &global),
        Commands::Learn(args) => baro::cli::learn::run(args, &global),
        Commands::Search(args) => baro::cli::search::run(args, &global),
        Commands::Show(args) => baro::cli::show::run(args, &global),
        Commands::History(args) => baro::cli::history::run(args, &global),
        Commands::Stats(args) => baro::cli::stats::execute(args, &global),
        Commands::Config(args) => baro::cli::config::run(args),
    }
}
