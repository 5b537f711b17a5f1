//! Configuration module for vertexgraph.
//!
//! This module provides a layered configuration system that supports:
//! - Default values
//! - TOML configuration file (`.vertexgraph/settings.toml`)
//! - Environment variable overrides
//!
//! # Environment Variables
//!
//! Environment variables must be prefixed with `VG_` and use double underscores
//! to separate nested levels:
//! - `VG_GRAPH__MAX_VERTICES=4096` sets `graph.max_vertices`
//! - `VG_GRAPH__EDGE_SUFFIX=.deps` sets `graph.edge_suffix`
//! - `VG_LOGGING__DEFAULT=debug` sets `logging.default`

use crate::graph::{DEFAULT_EDGE_SUFFIX, DEFAULT_MAX_VERTICES, DEFAULT_METADATA_SUFFIX};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

const CONFIG_DIR: &str = ".vertexgraph";
const CONFIG_FILE: &str = "settings.toml";
const ENV_PREFIX: &str = "VG_";

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Settings {
    /// Version of the configuration schema
    #[serde(default = "default_version")]
    pub version: u32,

    /// Directory that relative descriptor paths are resolved under
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_root: Option<PathBuf>,

    /// Graph construction settings
    #[serde(default)]
    pub graph: GraphConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct GraphConfig {
    /// Suffix locating a vertex's edge descriptor
    #[serde(default = "default_edge_suffix")]
    pub edge_suffix: String,

    /// Suffix naming a vertex's metadata file
    #[serde(default = "default_metadata_suffix")]
    pub metadata_suffix: String,

    /// Largest graph order the adjacency matrix is allowed to reach
    #[serde(default = "default_max_vertices")]
    pub max_vertices: usize,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    /// Level applied to every target without an override
    #[serde(default = "default_log_level")]
    pub default: String,

    /// Per-module level overrides, e.g. `vertexgraph::graph = "debug"`
    #[serde(default)]
    pub modules: HashMap<String, String>,
}

// Default value functions
fn default_version() -> u32 { 1 }
fn default_edge_suffix() -> String { DEFAULT_EDGE_SUFFIX.to_string() }
fn default_metadata_suffix() -> String { DEFAULT_METADATA_SUFFIX.to_string() }
fn default_max_vertices() -> usize { DEFAULT_MAX_VERTICES }
fn default_log_level() -> String { "warn".to_string() }

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: default_version(),
            workspace_root: None,
            graph: GraphConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            edge_suffix: default_edge_suffix(),
            metadata_suffix: default_metadata_suffix(),
            max_vertices: default_max_vertices(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default: default_log_level(),
            modules: HashMap::new(),
        }
    }
}

impl Settings {
    /// Load configuration from all sources
    pub fn load() -> Result<Self, Box<figment::Error>> {
        let config_path = Self::find_workspace_config()
            .unwrap_or_else(|| PathBuf::from(CONFIG_DIR).join(CONFIG_FILE));

        Self::figment(&config_path)
            .extract()
            .map_err(Box::new)
            .map(|mut settings: Settings| {
                if settings.workspace_root.is_none() {
                    settings.workspace_root = Self::workspace_root();
                }
                settings
            })
    }

    /// Load configuration from a specific file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, Box<figment::Error>> {
        Self::figment(path.as_ref()).extract().map_err(Box::new)
    }

    fn figment(config_path: &Path) -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Settings::default()))
            .merge(Toml::file(config_path))
            // Double underscore separates nested levels; single underscores
            // stay inside field names.
            .merge(
                Env::prefixed(ENV_PREFIX)
                    .map(|key| key.as_str().to_lowercase().replace("__", ".").into()),
            )
    }

    /// Find the workspace config by looking for a .vertexgraph directory
    /// from the current directory up to the filesystem root
    fn find_workspace_config() -> Option<PathBuf> {
        Self::workspace_root().map(|root| root.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Get the workspace root directory (where .vertexgraph is located)
    pub fn workspace_root() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;

        current
            .ancestors()
            .find(|ancestor| ancestor.join(CONFIG_DIR).is_dir())
            .map(Path::to_path_buf)
    }

    /// Save current configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), Box<dyn std::error::Error>> {
        let parent = path.as_ref().parent().ok_or("Invalid path")?;
        std::fs::create_dir_all(parent)?;

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)?;

        Ok(())
    }

    /// Create a default settings file under `dir`
    pub fn init_config_file(
        dir: impl AsRef<Path>,
        force: bool,
    ) -> Result<PathBuf, Box<dyn std::error::Error>> {
        let config_path = dir.as_ref().join(CONFIG_DIR).join(CONFIG_FILE);

        if !force && config_path.exists() {
            return Err("Configuration file already exists. Use --force to overwrite".into());
        }

        let settings = Settings {
            workspace_root: Some(dir.as_ref().to_path_buf()),
            ..Settings::default()
        };
        settings.save(&config_path)?;

        Ok(config_path)
    }
}
