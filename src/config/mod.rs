//! Backend configuration: which program implements each external applet.
//!
//! ```toml
//! [applets.su]
//! program = "/data/adb/magisk/su_client"
//!
//! [applets.resetprop]
//! program = "resetprop_impl"
//! args = ["--quiet"]
//! ```
pub mod toml_loader;

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::registry::Applet;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "MAGISK_APPLETS_CONFIG";

/// Config file location when [`CONFIG_ENV`] is unset.
pub const DEFAULT_CONFIG_PATH: &str = "/etc/magisk/applets.toml";

/// The program backing one applet.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Backend {
    /// Absolute path, or a bare name looked up on `PATH`.
    pub program: String,
    /// Extra arguments inserted before the applet's own arguments.
    #[serde(default)]
    pub args: Vec<String>,
}

/// All loaded backend configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Backends keyed by applet name.
    #[serde(default)]
    pub applets: BTreeMap<String, Backend>,
}

impl Config {
    /// Load the config file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let config: Self = toml_loader::load_config(path)?;
        for name in config.applets.keys() {
            if !Applet::ALL.iter().any(|a| a.name() == name) {
                tracing::debug!("ignoring backend for unknown applet '{name}'");
            }
        }
        Ok(config)
    }

    /// Load the config file from [`config_path`], falling back to an empty
    /// configuration (with a warning) if it cannot be loaded.
    #[must_use]
    pub fn load_or_default() -> Self {
        let path = config_path();
        Self::load(&path).unwrap_or_else(|e| {
            tracing::warn!("{e}");
            Self::default()
        })
    }

    /// The backend configured for `applet`, if any.
    #[must_use]
    pub fn backend(&self, applet: Applet) -> Option<&Backend> {
        self.applets.get(applet.name())
    }
}

/// Resolve the config file location from the environment.
#[must_use]
pub fn config_path() -> PathBuf {
    std::env::var_os(CONFIG_ENV)
        .filter(|v| !v.is_empty())
        .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from)
}
