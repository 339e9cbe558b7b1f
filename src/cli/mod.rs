//! CLI module - Command definitions and handlers

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

pub mod ask;
pub mod chat;
pub mod config;
pub mod history;
pub mod init;
pub mod learn;
pub mod search;
pub mod show;
pub mod stats;
pub mod utils;

/// baro - Spanish voice-assistant core
///
/// Say "Baro" (or "Varo") first, then ask for the time, the weather, the
/// news, a calculation, or anything the knowledge base knows.
#[derive(Parser, Debug)]
#[command(name = "baro")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Config file path
    #[arg(short, long, global = true, env = "BARO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Database path
    #[arg(long, global = true, env = "BARO_DATABASE")]
    pub db: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a .baro directory with config and seeded database
    Init(init::InitArgs),

    /// Handle a single command
    Ask(ask::AskArgs),

    /// Interactive conversation
    Chat(chat::ChatArgs),

    /// Teach a topic directly
    Learn(learn::LearnArgs),

    /// Rank knowledge entries for a query
    Search(search::SearchArgs),

    /// Show a stored topic
    Show(show::ShowArgs),

    /// Recent interactions
    History(history::HistoryArgs),

    /// Knowledge and interaction statistics
    Stats(stats::StatsArgs),

    /// Get or set configuration
    Config(config::ConfigArgs),
}
