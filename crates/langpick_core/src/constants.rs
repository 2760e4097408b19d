//! Shared constants used across langpick crates.

use std::time::Duration;

/// Default upper bound on rendered matches.
pub const DEFAULT_MAX_RESULTS: usize = 50;

/// Default quiet period before a typed query is evaluated.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(150);

/// Value of the auto-detect sentinel option.
pub const AUTO_DETECT_VALUE: &str = "auto";
/// Display label of the auto-detect sentinel option.
pub const AUTO_DETECT_LABEL: &str = "🤖 Auto Detect";

/// Environment variable overriding [`DEFAULT_MAX_RESULTS`].
pub const ENV_MAX_RESULTS: &str = "LANGPICK_MAX_RESULTS";
/// Environment variable overriding [`DEFAULT_DEBOUNCE`] (milliseconds).
pub const ENV_DEBOUNCE_MS: &str = "LANGPICK_DEBOUNCE_MS";
/// Environment variable naming a JSON option file.
pub const ENV_OPTIONS_PATH: &str = "LANGPICK_OPTIONS_PATH";
/// Environment flag controlling the auto-detect sentinel.
pub const ENV_AUTO_DETECT: &str = "LANGPICK_AUTO_DETECT";
