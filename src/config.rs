//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Config file: `--config <path>`, otherwise `$XDG_CONFIG_HOME/xmastree/xmastree.toml`
//! 3. Environment variables: `XMASTREE_*` prefix
//! 4. Command-line flags (merged by the CLI layer through [`Settings::merge_with`])

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::application::ApplicationError;
use crate::domain::{DomainResult, TreeConfig};

/// Prefix for environment overrides, e.g. `XMASTREE_TREE__HEIGHT=40`.
pub const ENV_PREFIX: &str = "XMASTREE";

/// Tree shape settings as the user writes them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TreeSettings {
    /// Rows below the apex
    pub height: u32,
    /// Overall trunk width, converted to a base radius of `(width - 1) / 2`
    pub width: u32,
    /// Number of branch tiers
    pub layers: u32,
    /// Branch slope ratio
    pub slope: f32,
    /// Ornament percentage, clamped to 1..=100 when the tree is built
    pub decoration: i32,
}

impl Default for TreeSettings {
    fn default() -> Self {
        Self {
            height: 30,
            width: 20,
            layers: 5,
            slope: 5.0,
            decoration: 20,
        }
    }
}

impl TreeSettings {
    /// Overlay wins where it specifies a value.
    pub fn merge(&self, overlay: &RawTreeSettings) -> Self {
        Self {
            height: overlay.height.unwrap_or(self.height),
            width: overlay.width.unwrap_or(self.width),
            layers: overlay.layers.unwrap_or(self.layers),
            slope: overlay.slope.unwrap_or(self.slope),
            decoration: overlay.decoration.unwrap_or(self.decoration),
        }
    }

    /// Validate into a domain configuration.
    pub fn to_tree_config(&self) -> DomainResult<TreeConfig> {
        TreeConfig::with_width(
            self.width,
            self.height,
            self.layers,
            self.slope,
            self.decoration,
        )
    }
}

/// Raw tree settings for intermediate parsing (`None` means "not specified").
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct RawTreeSettings {
    pub height: Option<u32>,
    pub width: Option<u32>,
    pub layers: Option<u32>,
    pub slope: Option<f32>,
    pub decoration: Option<i32>,
}

/// Raw settings for intermediate parsing.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct RawSettings {
    pub seed: Option<u64>,
    pub tree: RawTreeSettings,
}

/// Unified configuration for xmastree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Settings {
    /// Fixed engine seed; entropy-seeded when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Tree shape
    pub tree: TreeSettings,
}

/// Get the XDG config directory for xmastree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "xmastree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("xmastree.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

/// Read one key, treating a missing key as "not specified".
fn env_value<T: DeserializeOwned>(config: &Config, key: &str) -> Result<Option<T>, ApplicationError> {
    match config.get::<T>(key) {
        Ok(val) => Ok(Some(val)),
        Err(ConfigError::NotFound(_)) => Ok(None),
        Err(e) => Err(config_err(e)),
    }
}

fn env_source() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
}

impl Settings {
    /// Merge overlay onto self (base). Overlay wins where specified.
    pub fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            seed: overlay.seed.or(self.seed),
            tree: self.tree.merge(&overlay.tree),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Explicit config file; replaces the global file and must exist
    ///
    /// # Precedence (lowest to highest)
    /// 1. Compiled defaults
    /// 2. `config_file`, or the global config if present
    /// 3. Environment variables: `XMASTREE_*` prefix
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        let global_path = global_config_path();
        let current = Self::default().with_file_layer(config_file, global_path.as_deref())?;
        Self::apply_env_overrides(current, env_source())
    }

    /// Merge the config file layer.
    ///
    /// An explicit file must exist and parse. The global file is optional:
    /// if it is unreadable or malformed a warning is logged and it is skipped.
    fn with_file_layer(
        self,
        config_file: Option<&Path>,
        global_path: Option<&Path>,
    ) -> Result<Self, ApplicationError> {
        match (config_file, global_path) {
            (Some(path), _) => {
                if !path.exists() {
                    return Err(ApplicationError::Config {
                        message: format!("config file not found: {}", path.display()),
                    });
                }
                Ok(self.merge_with(&load_raw_settings(path)?))
            }
            (None, Some(path)) if path.exists() => match load_raw_settings(path) {
                Ok(raw) => Ok(self.merge_with(&raw)),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "ignoring global config");
                    Ok(self)
                }
            },
            (None, _) => Ok(self),
        }
    }

    /// Apply `XMASTREE_*` environment variables as explicit overrides.
    ///
    /// Values that are present but unparseable are errors, not silently skipped.
    fn apply_env_overrides(settings: Self, env: Environment) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(env)
            .build()
            .map_err(config_err)?;

        let overlay = RawSettings {
            seed: env_value(&config, "seed")?,
            tree: RawTreeSettings {
                height: env_value(&config, "tree.height")?,
                width: env_value(&config, "tree.width")?,
                layers: env_value(&config, "tree.layers")?,
                slope: env_value(&config, "tree.slope")?,
                decoration: env_value(&config, "tree.decoration")?,
            },
        };

        Ok(settings.merge_with(&overlay))
    }

    /// Render settings as TOML (for `config show`).
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize settings: {}", e),
        })
    }
}
