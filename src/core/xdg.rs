//! XDG Base Directory Support
//!
//! Resolves where toolfinder looks for its configuration and for a
//! user-supplied catalog file on Linux/Unix systems.

use std::env;
use std::path::PathBuf;

/// XDG directory structure for toolfinder
#[derive(Debug, Clone)]
pub struct XdgDirs {
    pub config_dir: PathBuf,
}

impl XdgDirs {
    /// Create new XDG directory structure with proper resolution order
    ///
    /// Priority order (highest to lowest):
    /// 1. Explicit TOOLFINDER_* env vars
    /// 2. XDG_* environment variables
    /// 3. XDG default (~/.config)
    pub fn new() -> Self {
        Self {
            config_dir: Self::resolve_config_dir(),
        }
    }

    fn resolve_config_dir() -> PathBuf {
        if let Ok(dir) = env::var("TOOLFINDER_CONFIG_DIR") {
            return PathBuf::from(dir);
        }

        if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("toolfinder");
        }

        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("toolfinder")
    }

    /// Get config file path
    pub fn config_file(&self) -> PathBuf {
        // Check TOOLFINDER_CONFIG_FILE first (explicit override)
        if let Ok(file) = env::var("TOOLFINDER_CONFIG_FILE") {
            return PathBuf::from(file);
        }

        self.config_dir.join("config.toml")
    }

    /// Default location of a user catalog
    pub fn catalog_file(&self) -> PathBuf {
        self.config_dir.join("catalog.toml")
    }

    /// Log the resolved XDG paths
    pub fn log_paths(&self) {
        tracing::info!("XDG directories resolved:");
        tracing::info!("  Config: {:?}", self.config_dir);
        tracing::info!("  Config file: {:?}", self.config_file());
        tracing::info!("  Catalog file: {:?}", self.catalog_file());
    }
}

impl Default for XdgDirs {
    fn default() -> Self {
        Self::new()
    }
}
