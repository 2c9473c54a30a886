//! Configuration for page map construction.
//!
//! `PageMapConfig::default()` plus struct update is first class for
//! programmatic callers; `ConfigLoader` composes defaults, an optional
//! config file, and a `PAGEMAP_*` environment overlay.

use crate::error::PageMapError;
use crate::logging::LoggingConfig;
use crate::pages::map::CollisionPolicy;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Core configuration. Every field is defaulted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageMapConfig {
    /// Root directory to scan. Default: `pages` under the current directory.
    #[serde(default = "default_dir")]
    pub dir: PathBuf,

    /// Extensions considered pages; case-sensitive, no leading dot.
    #[serde(default = "default_page_extensions")]
    pub page_extensions: Vec<String>,

    /// Whether the entry point yields a nested tree instead of a flat map.
    #[serde(default)]
    pub nested: bool,

    /// Merge policy for colliding routes.
    #[serde(default)]
    pub collisions: CollisionPolicy,

    /// Logging configuration; initialization is the caller's decision.
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_dir() -> PathBuf {
    std::env::current_dir()
        .map(|cwd| cwd.join("pages"))
        .unwrap_or_else(|_| PathBuf::from("pages"))
}

fn default_page_extensions() -> Vec<String> {
    vec!["js".to_string(), "jsx".to_string()]
}

impl Default for PageMapConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            page_extensions: default_page_extensions(),
            nested: false,
            collisions: CollisionPolicy::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from standard sources.
    /// Precedence: defaults (lowest) -> `pagemap.toml` in the working
    /// directory -> environment (highest).
    pub fn load() -> Result<PageMapConfig, PageMapError> {
        let builder = Config::builder()
            .add_source(File::with_name("pagemap").required(false))
            .add_source(
                Environment::with_prefix("PAGEMAP")
                    .separator("__")
                    .try_parsing(true),
            );
        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }

    /// Load configuration from a specific file with environment overlay.
    pub fn load_from_file(path: &Path) -> Result<PageMapConfig, PageMapError> {
        let path_str = path.to_str().ok_or_else(|| {
            PageMapError::ConfigError(format!("config path is not valid UTF-8: {:?}", path))
        })?;
        let builder = Config::builder()
            .add_source(File::with_name(path_str))
            .add_source(
                Environment::with_prefix("PAGEMAP")
                    .separator("__")
                    .try_parsing(true),
            );
        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }
}
