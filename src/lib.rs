//! Root crate facade for the langpick picker library.

pub use langpick_core::{
    catalog, clamp_max_results, config, constants, debounce, error, filter, filter_options,
    match_rule, picker, results_header, Config, Debouncer, Direction, LanguageOption,
    LanguagePicker, MatchRule, MatchView, OptionSet, PickerError, PickerEvent, PickerSettings,
    PickerSink, PickerState, Selection,
};
