//! CLI utility functions
//!
//! Common helpers shared across CLI commands:
//! - configuration and database discovery
//! - opening (and seeding) the store
//! - wiring a dispatcher with the right collaborators

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};

use super::GlobalArgs;
use crate::config::Config;
use crate::core::dispatch::Dispatcher;
use crate::core::knowledge::MemoryKnowledge;
use crate::core::seed::seed_entries;
use crate::core::services::{OfflineServices, Services, TracingLog};
use crate::core::storage::Storage;
use crate::remote::HttpServices;

/// Config from `--config`, or from the default locations
pub fn load_config(global: &GlobalArgs) -> Result<Config> {
    Config::load_or_default(global.config.as_deref())
}

/// Database path: `--db`, then the config lookup order
pub fn db_path(global: &GlobalArgs, config: &Config) -> PathBuf {
    global.db.clone().unwrap_or_else(|| config.data_path())
}

/// Open the database, creating and seeding it if needed
pub fn open_storage(global: &GlobalArgs, config: &Config) -> Result<Storage> {
    let path = db_path(global, config);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let storage = Storage::open(&path)?;
    let added = storage.seed(&seed_entries())?;
    if added > 0 {
        tracing::debug!(added, path = %path.display(), "seeded knowledge");
    }
    Ok(storage)
}

/// Network collaborators, or the offline stand-ins
pub fn build_services(config: &Config, offline: bool) -> Result<Arc<dyn Services>> {
    if offline || config.services.offline {
        Ok(Arc::new(OfflineServices))
    } else {
        Ok(Arc::new(HttpServices::from_config(&config.services)?))
    }
}

/// Dispatcher over the database, or over an in-memory store with `no_store`
pub fn build_dispatcher(
    global: &GlobalArgs,
    config: &Config,
    offline: bool,
    no_store: bool,
) -> Result<Dispatcher> {
    let services = build_services(config, offline)?;
    let dispatcher = if no_store {
        Dispatcher::new(Arc::new(MemoryKnowledge::seeded()), services)?
            .with_log(Arc::new(TracingLog))
    } else {
        let storage = Arc::new(open_storage(global, config)?);
        Dispatcher::new(storage.clone(), services)?.with_log(storage)
    };

    Ok(dispatcher.with_settings(config.dispatch_settings()))
}

/// First `max` characters, with an ellipsis when cut
pub fn preview(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max).collect();
        format!("{}…", cut.trim_end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::knowledge::KnowledgeStore;

    #[test]
    fn test_preview() {
        assert_eq!(preview("corto", 10), "corto");
        assert_eq!(preview("un texto largo", 8), "un texto…");
        assert_eq!(preview("áéíóú", 3), "áéí…");
    }

    #[test]
    fn test_db_flag_wins() {
        let global = GlobalArgs {
            config: None,
            db: Some(PathBuf::from("/tmp/custom.db")),
        };
        assert_eq!(
            db_path(&global, &Config::default()),
            PathBuf::from("/tmp/custom.db")
        );
    }

    #[test]
    fn test_open_storage_creates_and_seeds() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let global = GlobalArgs {
            config: None,
            db: Some(dir.path().join("nested").join("data.db")),
        };
        let storage = open_storage(&global, &Config::default())?;
        assert_eq!(storage.entries()?.len(), seed_entries().len());

        // reopening does not duplicate
        let storage = open_storage(&global, &Config::default())?;
        assert_eq!(storage.entries()?.len(), seed_entries().len());
        Ok(())
    }

    #[test]
    fn test_offline_dispatcher() -> Result<()> {
        let dispatcher = build_dispatcher(&GlobalArgs::default(), &Config::default(), true, true)?;
        let reply = dispatcher.handle("baro python");
        assert!(reply.response.starts_with("Python es un lenguaje"));
        Ok(())
    }
}
