//! `baro chat` command
//!
//! Interactive loop over the dispatcher. An empty line, `salir` or `exit`
//! ends the session.

use anyhow::Result;
use clap::Args;
use console::style;
use dialoguer::{theme::ColorfulTheme, Input};

use super::utils::{build_dispatcher, load_config};
use super::GlobalArgs;
use crate::core::tables::ACTIVATION_WORDS;

const EXIT_WORDS: &[&str] = &["salir", "exit", "quit"];

#[derive(Args, Debug)]
pub struct ChatArgs {
    /// Do not call network services
    #[arg(long)]
    pub offline: bool,

    /// Use the built-in knowledge in memory; nothing is written
    #[arg(long)]
    pub no_store: bool,

    /// Treat every line as addressed to Baro
    #[arg(long)]
    pub always_on: bool,
}

pub fn run(args: ChatArgs, global: &GlobalArgs) -> Result<()> {
    let config = load_config(global)?;
    let dispatcher = build_dispatcher(global, &config, args.offline, args.no_store)?;
    let theme = ColorfulTheme::default();

    println!(
        "{} Escribe 'salir' para terminar.",
        style("Baro").cyan().bold()
    );

    loop {
        let line = Input::<String>::with_theme(&theme)
            .with_prompt("Tú")
            .allow_empty(true)
            .interact_text()?;

        if is_exit(&line) {
            break;
        }

        let command = if args.always_on {
            addressed(&line)
        } else {
            line
        };
        let reply = dispatcher.handle(&command);

        println!("{} {}", style("Baro:").cyan().bold(), reply.response);
        tracing::debug!(rule = reply.route.name(), confidence = reply.confidence, "reply");
    }

    println!("{}", style("¡Hasta luego!").dim());
    Ok(())
}

fn is_exit(line: &str) -> bool {
    let line = line.trim().to_lowercase();
    line.is_empty() || EXIT_WORDS.contains(&line.as_str())
}

/// Prefix the activation word unless the line already starts with one
fn addressed(line: &str) -> String {
    let lowered = line.trim().to_lowercase();
    if ACTIVATION_WORDS.iter().any(|w| lowered.starts_with(w)) {
        line.to_string()
    } else {
        format!("baro {}", line.trim())
    }
}
