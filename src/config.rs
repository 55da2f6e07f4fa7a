//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/patternkit/patternkit.toml`
//! 3. Explicit config file (`--config`)
//! 4. Environment variables: `PATTERNKIT_*` prefix, `__` between section and key

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::composite::RenderStyle;
use crate::observer::ObserverSettings;

/// Unified configuration for patternkit.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Composite rendering labels
    pub composite: RenderStyle,
    /// Observer state range, seed and thresholds
    pub observer: ObserverSettings,
}

#[derive(Debug, thiserror::Error)]
#[error("config error: {message}")]
pub struct SettingsError {
    pub message: String,
}

fn config_err(e: ConfigError) -> SettingsError {
    SettingsError {
        message: e.to_string(),
    }
}

/// Get the XDG config directory for patternkit.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "patternkit").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("patternkit.toml"))
}

/// Expand `~`, `$VAR` and `${VAR}` in a user-supplied path.
///
/// Undefined variables leave the input untouched.
pub fn expand_path(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    match shellexpand::full(raw.as_ref()) {
        Ok(expanded) => PathBuf::from(expanded.as_ref()),
        Err(_) => path.to_path_buf(),
    }
}

impl Settings {
    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `explicit` - Optional config file given on the command line; it must
    ///   exist when given.
    pub fn load(explicit: Option<&Path>) -> Result<Self, SettingsError> {
        let global = global_config_path().filter(|p| p.exists());
        Self::load_from(global.as_deref(), explicit)
    }

    /// Same as `load`, with the global file location supplied by the caller.
    pub fn load_from(global: Option<&Path>, explicit: Option<&Path>) -> Result<Self, SettingsError> {
        let defaults = Settings::default();
        let mut builder = Config::builder()
            .set_default("composite.leaf_label", defaults.composite.leaf_label)
            .map_err(config_err)?
            .set_default("composite.branch_label", defaults.composite.branch_label)
            .map_err(config_err)?
            .set_default("composite.delimiter", defaults.composite.delimiter)
            .map_err(config_err)?
            .set_default("observer.state_min", i64::from(defaults.observer.state_min))
            .map_err(config_err)?
            .set_default("observer.state_max", i64::from(defaults.observer.state_max))
            .map_err(config_err)?
            .set_default("observer.low_limit", i64::from(defaults.observer.low_limit))
            .map_err(config_err)?
            .set_default("observer.high_floor", i64::from(defaults.observer.high_floor))
            .map_err(config_err)?;

        if let Some(global) = global {
            debug!("Loading global config: {}", global.display());
            builder = builder.add_source(File::from(global).required(false));
        }

        if let Some(explicit) = explicit {
            let explicit = expand_path(explicit);
            debug!("Loading config: {}", explicit.display());
            builder = builder.add_source(File::from(explicit).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix("PATTERNKIT")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(config_err)?;
        config.try_deserialize().map_err(config_err)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, SettingsError> {
        toml::to_string_pretty(self).map_err(|e| SettingsError {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# patternkit configuration
#
# Locations (by precedence, lowest to highest):
#   Global:   ~/.config/patternkit/patternkit.toml
#   Explicit: --config <FILE>
#   Env:      PATTERNKIT_* (e.g. PATTERNKIT_OBSERVER__SEED=7)

[composite]
# leaf_label = "Leaf"
# branch_label = "Branch"
# delimiter = "+"

[observer]
# Random state is drawn from state_min..state_max (end exclusive)
# state_min = 0
# state_max = 10

# Fixed seed for reproducible runs
# seed = 42

# Observer A reacts when state < low_limit
# low_limit = 3

# Observer B reacts when state == 0 or state >= high_floor
# high_floor = 2
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_no_config_when_loading_then_uses_defaults() {
        let settings = Settings::load_from(None, None).expect("load defaults");
        assert_eq!(settings.composite, RenderStyle::default());
        assert_eq!(settings.observer.state_max, 10);
        assert_eq!(settings.observer.seed, None);
    }

    #[test]
    fn given_default_settings_when_serialized_then_contains_sections() {
        let toml = Settings::default().to_toml().expect("serialize");
        assert!(toml.contains("[composite]"));
        assert!(toml.contains("[observer]"));
        assert!(toml.contains("delimiter = \"+\""));
    }

    #[test]
    fn given_template_when_parsed_then_is_valid_toml() {
        let parsed: Settings = toml::from_str(&Settings::template()).expect("parse template");
        assert_eq!(parsed, Settings::default());
    }
}
