//! Execution context for server commands.

use std::path::Path;

use anyhow::{Context as _, Result};

use crate::config::ServerConfig;
use crate::output::Output;

/// File names searched for, in order, in each directory.
const CONFIG_NAMES: [&str; 3] = ["shop.toml", ".shop.toml", "shop.json"];

/// Execution context for server commands.
pub struct Context {
    /// Server configuration.
    pub config: ServerConfig,
    /// Output handler.
    pub output: Output,
}

impl Context {
    /// Load context from an explicit config file, or the nearest discovered one.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let config = if let Some(path) = config_path {
            ServerConfig::load(path)?
        } else {
            let cwd = std::env::current_dir().context("Failed to get current directory")?;
            find_config(&cwd)?.unwrap_or_default()
        };

        Ok(Self { config, output })
    }
}

/// Find a config file in `start` or one of its parents.
///
/// A file that exists but does not parse is an error, not a miss.
pub fn find_config(start: &Path) -> Result<Option<ServerConfig>> {
    for dir in start.ancestors() {
        for name in CONFIG_NAMES {
            let path = dir.join(name);
            if path.is_file() {
                return ServerConfig::load(&path).map(Some);
            }
        }
    }
    Ok(None)
}
