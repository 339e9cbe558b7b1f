//! `baro ask` command
//!
//! Runs one command through the dispatcher and prints the reply.
//!
//! # Usage
//! ```bash
//! baro ask baro qué hora es
//! baro ask "baro clima en Madrid" --json
//! baro ask "baro cuéntame un chiste" --seed 7
//! baro ask "baro python" --offline --no-store
//! ```

use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde_json::json;

use super::utils::{build_dispatcher, load_config};
use super::GlobalArgs;
use crate::core::dispatch::Reply;
use crate::core::services::SeededRandom;

#[derive(Args, Debug)]
pub struct AskArgs {
    /// Command text, starting with the activation word
    #[arg(required = true)]
    pub text: Vec<String>,

    /// Do not call network services
    #[arg(long)]
    pub offline: bool,

    /// Use the built-in knowledge in memory; nothing is written
    #[arg(long)]
    pub no_store: bool,

    /// Seed for greeting, farewell and joke choice
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: AskArgs, global: &GlobalArgs) -> Result<()> {
    let config = load_config(global)?;
    let mut dispatcher = build_dispatcher(global, &config, args.offline, args.no_store)?;
    if let Some(seed) = args.seed {
        dispatcher = dispatcher.with_random(Arc::new(SeededRandom::new(seed)));
    }

    let reply = dispatcher.handle(&args.text.join(" "));

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reply_json(&reply))?);
    } else {
        println!("{}", reply.response);
        tracing::debug!(
            rule = reply.route.name(),
            intent = reply.intent_name(),
            confidence = reply.confidence,
            "handled"
        );
        if !reply.should_speak() {
            eprintln!("{}", "(no se lee en voz alta)".dimmed());
        }
    }

    Ok(())
}

/// JSON view of a reply
pub fn reply_json(reply: &Reply) -> serde_json::Value {
    json!({
        "response": reply.response,
        "intent": reply.intent_name(),
        "confidence": reply.confidence,
        "rule": reply.route.name(),
        "speak": reply.should_speak(),
    })
}
