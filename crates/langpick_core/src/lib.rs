//! Core library for langpick (option catalog, filtering, picker state).

/// Language option catalog and alias canonicalization.
pub mod catalog;
/// Configuration loading and defaults.
pub mod config;
/// Shared constants used across langpick crates.
pub mod constants;
/// Clock-driven debounce primitive.
pub mod debounce;
/// Process-global environment mutation helpers.
pub mod env;
/// Option loading error types.
pub mod error;
/// Incremental option filter.
pub mod filter;
/// Picker state machine and sink seam.
pub mod picker;

pub use catalog::{LanguageOption, OptionSet};
pub use config::Config;
pub use constants::*;
pub use debounce::Debouncer;
pub use error::PickerError;
pub use filter::{clamp_max_results, filter_options, match_rule, MatchRule};
pub use picker::{
    results_header, Direction, LanguagePicker, MatchView, PickerEvent, PickerSettings, PickerSink,
    PickerState, Selection,
};
