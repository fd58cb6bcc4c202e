use std::{env, path::PathBuf};

use super::schema::Settings;

/// Configuration loading helpers.
///
/// `Settings::load` reads an optional config file, then lets environment
/// variables (prefix `TUNEBOX__`) override it, falling back to struct defaults.
impl Settings {
    /// Load settings from environment and optional config file.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("TUNEBOX")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), String> {
        let v = self.player.default_volume;
        if !(v > 0.0 && v <= 1.0) {
            return Err(format!("player.default_volume must be within (0, 1], got {v}"));
        }
        let step = self.controls.volume_step;
        if !(step > 0.0 && step <= 1.0) {
            return Err(format!("controls.volume_step must be within (0, 1], got {step}"));
        }
        if self.shell.heading.variable.trim().is_empty() || self.shell.body.variable.trim().is_empty()
        {
            return Err("shell typefaces need a non-empty variable name".to_string());
        }
        if self.logging.level.parse::<tracing::Level>().is_err() {
            return Err(format!("logging.level is not a level: {}", self.logging.level));
        }
        Ok(())
    }
}

/// Resolve the config path from `TUNEBOX_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("TUNEBOX_CONFIG_PATH") {
        return Some(PathBuf::from(p));
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/tunebox/config.toml`
/// or `~/.config/tunebox/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"))
    };

    config_home.map(|d| d.join("tunebox").join("config.toml"))
}

/// Default log file under `$XDG_STATE_HOME/tunebox/` or `~/.local/state/tunebox/`.
pub fn default_log_path() -> Option<PathBuf> {
    let state_home = if let Some(xdg) = env::var_os("XDG_STATE_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".local").join("state"))
    };

    state_home.map(|d| d.join("tunebox").join("tunebox.log"))
}
