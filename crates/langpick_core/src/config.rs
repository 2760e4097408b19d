//! Configuration loading from environment variables.

use crate::catalog::OptionSet;
use crate::constants::{
    DEFAULT_DEBOUNCE, DEFAULT_MAX_RESULTS, ENV_AUTO_DETECT, ENV_DEBOUNCE_MS, ENV_MAX_RESULTS,
    ENV_OPTIONS_PATH,
};
use crate::error::PickerError;
use crate::filter::clamp_max_results;
use crate::picker::PickerSettings;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Runtime configuration for a picker session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub max_results: usize,
    pub debounce: Duration,
    /// JSON option file; the built-in catalog is used when unset.
    pub options_path: Option<PathBuf>,
    pub include_auto_detect: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
            debounce: DEFAULT_DEBOUNCE,
            options_path: None,
            include_auto_detect: true,
        }
    }
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = resolve_home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

fn resolve_home_dir() -> Option<PathBuf> {
    ["HOME", "USERPROFILE"]
        .into_iter()
        .filter_map(|name| env::var(name).ok())
        .find(|value| !value.trim().is_empty())
        .map(PathBuf::from)
}

/// Parse a boolean-like environment flag value.
///
/// # Supported Values
/// - Truthy: `1`, `true`, `yes`, `on`
/// - Falsy: `0`, `false`, `no`, `off`, empty string
///
/// Matching is case-insensitive and ignores surrounding whitespace.
///
/// # Returns
/// `Some(bool)` when the value is recognized, otherwise `None`.
pub fn parse_env_flag(value: &str) -> Option<bool> {
    let normalized = value.trim().to_ascii_lowercase();
    match normalized.as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "" | "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Read a boolean flag from the environment, falling back to `default` when
/// the variable is missing or unrecognized.
pub fn env_flag_enabled(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .and_then(|value| parse_env_flag(&value))
        .unwrap_or(default)
}

fn env_parsed<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|raw| raw.trim().parse().ok())
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Returns
    /// A populated [`Config`] with defaults applied when env vars are missing
    /// or malformed. Negative result caps clamp to zero.
    pub fn from_env() -> Self {
        Self {
            max_results: env_parsed::<i64>(ENV_MAX_RESULTS)
                .map(clamp_max_results)
                .unwrap_or(DEFAULT_MAX_RESULTS),
            debounce: env_parsed::<u64>(ENV_DEBOUNCE_MS)
                .map(Duration::from_millis)
                .unwrap_or(DEFAULT_DEBOUNCE),
            options_path: env::var(ENV_OPTIONS_PATH)
                .ok()
                .filter(|raw| !raw.trim().is_empty())
                .map(|raw| expand_tilde(raw.trim())),
            include_auto_detect: env_flag_enabled(ENV_AUTO_DETECT, true),
        }
    }

    pub fn picker_settings(&self) -> PickerSettings {
        PickerSettings {
            max_results: self.max_results,
            debounce: self.debounce,
        }
    }

    /// Load the configured option set.
    ///
    /// # Errors
    /// Propagates [`PickerError`] from [`OptionSet::from_json_path`] when an
    /// option file is configured.
    pub fn load_options(&self) -> Result<OptionSet, PickerError> {
        match self.options_path.as_deref() {
            Some(path) => OptionSet::from_json_path(path, self.include_auto_detect),
            None => Ok(OptionSet::builtin(self.include_auto_detect)),
        }
    }
}
