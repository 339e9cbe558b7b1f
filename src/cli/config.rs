//! `baro config` command
//!
//! Get or set configuration values.
//!
//! # Usage
//! ```bash
//! baro config                                  # Show all config
//! baro config assistant.fallback_city          # Get specific value
//! baro config assistant.fallback_city Madrid   # Set value
//! baro config services.offline true --global   # Set in ~/.baro/config.toml
//! baro config --path                           # Show config file paths
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Args;
use colored::Colorize;
use toml_edit::{value, DocumentMut};

use crate::config::{Config, BARO_DIR};

#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Config key (e.g., assistant.fallback_city, search.question_threshold)
    pub key: Option<String>,

    /// Value to set
    pub value: Option<String>,

    /// List all config values
    #[arg(long)]
    pub list: bool,

    /// Show config file path
    #[arg(long)]
    pub path: bool,

    /// Use global config (~/.baro/config.toml) instead of local
    #[arg(short, long)]
    pub global: bool,
}

fn local_config_path() -> PathBuf {
    Config::find_local_config().unwrap_or_else(|| PathBuf::from(BARO_DIR).join("config.toml"))
}

fn get_config_path(global: bool) -> Result<PathBuf> {
    if global {
        Config::global_config_path().context("Cannot determine home directory")
    } else {
        Ok(local_config_path())
    }
}

pub fn run(args: ConfigArgs) -> Result<()> {
    let config_path = get_config_path(args.global)?;

    if args.path {
        if let Some(global) = Config::global_config_path() {
            println!("Global: {}", global.display());
        }
        println!("Local:  {}", local_config_path().display());
        println!();
        if config_path.exists() {
            println!("{} Active: {}", "✓".green(), config_path.display());
        } else {
            println!("{} No config file found at {}", "⚠".yellow(), config_path.display());
        }
        return Ok(());
    }

    if args.list || args.key.is_none() {
        if config_path.exists() {
            let content = fs::read_to_string(&config_path)?;
            println!("📋 Configuration ({}):\n", config_path.display());
            println!("{}", content);
        } else {
            println!("📋 No config file at {}", config_path.display());
            println!();
            println!("Create one with:");
            println!("  baro init");
            println!("  baro config assistant.fallback_city \"Madrid\"");
        }
        return Ok(());
    }

    if let Some(key) = &args.key {
        if let Some(val) = &args.value {
            set_config_value(&config_path, key, val)?;
            println!("{} Set {} = {} (in {})", "✓".green(), key, val, config_path.display());
        } else {
            match get_config_value(&config_path, key)? {
                Some(v) => println!("{}", v),
                None => println!("(not set)"),
            }
        }
    }

    Ok(())
}

/// Set a nested config value using dot notation (e.g., "search.default_limit")
fn set_config_value(path: &Path, key: &str, val: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let content = if path.exists() {
        fs::read_to_string(path)?
    } else {
        String::new()
    };

    let mut doc: DocumentMut = content.parse().context("Failed to parse config.toml")?;

    let parts: Vec<&str> = key.split('.').collect();
    match parts.as_slice() {
        [name] => doc[*name] = value(parse_toml_value(val)),
        [section, name] => {
            if doc.get(section).is_none() {
                doc[*section] = toml_edit::table();
            }
            doc[*section][*name] = value(parse_toml_value(val));
        }
        _ => bail!("Key too deep: {}. Max depth is section.key", key),
    }

    // Refuse edits that would leave an unloadable config
    let updated = doc.to_string();
    toml::from_str::<Config>(&updated)
        .with_context(|| format!("Invalid value for {}: {}", key, val))?;

    fs::write(path, updated)?;
    Ok(())
}

/// Get a config value by dot notation key
fn get_config_value(path: &Path, key: &str) -> Result<Option<String>> {
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path)?;
    let doc: toml::Table = content.parse().context("Failed to parse config.toml")?;

    let parts: Vec<&str> = key.split('.').collect();
    let val = match parts.as_slice() {
        [name] => doc.get(*name),
        [section, name] => doc.get(*section).and_then(|t| t.get(*name)),
        _ => None,
    };

    Ok(val.map(|v| match v {
        toml::Value::String(s) => s.clone(),
        other => other.to_string(),
    }))
}

/// Parse string value to appropriate TOML type
fn parse_toml_value(s: &str) -> toml_edit::Value {
    match s {
        "true" => return true.into(),
        "false" => return false.into(),
        _ => {}
    }

    if let Ok(i) = s.parse::<i64>() {
        return i.into();
    }

    if let Ok(f) = s.parse::<f64>() {
        return f.into();
    }

    s.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_toml_value() {
        assert_eq!(parse_toml_value("true").as_bool(), Some(true));
        assert_eq!(parse_toml_value("12").as_integer(), Some(12));
        assert_eq!(parse_toml_value("0.75").as_float(), Some(0.75));
        assert_eq!(parse_toml_value("Madrid").as_str(), Some("Madrid"));
    }

    #[test]
    fn test_set_then_get() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join(BARO_DIR).join("config.toml");

        set_config_value(&path, "assistant.fallback_city", "Madrid")?;
        set_config_value(&path, "search.default_limit", "5")?;

        assert_eq!(
            get_config_value(&path, "assistant.fallback_city")?,
            Some("Madrid".to_string())
        );
        assert_eq!(get_config_value(&path, "search.default_limit")?, Some("5".to_string()));
        assert_eq!(get_config_value(&path, "search.missing")?, None);

        let config = Config::load_from(&path)?;
        assert_eq!(config.assistant.fallback_city, "Madrid");
        assert_eq!(config.search.default_limit, 5);
        Ok(())
    }

    #[test]
    fn test_set_rejects_wrong_type() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("config.toml");

        assert!(set_config_value(&path, "search.default_limit", "muchos").is_err());
        assert!(!path.exists());
        assert!(set_config_value(&path, "a.b.c", "1").is_err());
        Ok(())
    }
}
