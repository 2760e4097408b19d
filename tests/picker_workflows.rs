use langpick::{
    filter_options, Config, LanguageOption, LanguagePicker, MatchView, OptionSet, PickerEvent,
    PickerSettings, PickerSink, PickerState, Selection,
};
use serde_json::json;
use std::time::{Duration, Instant};
use tempfile::TempDir;

#[derive(Default)]
struct HostSink {
    last_view: Option<MatchView>,
    chosen: Option<Selection>,
}

impl PickerSink for HostSink {
    fn render(&mut self, view: &MatchView) {
        self.last_view = Some(view.clone());
    }

    fn selected(&mut self, selection: &Selection) {
        self.chosen = Some(selection.clone());
    }
}

fn write_option_file(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("languages.json");
    let body = json!([
        { "alias": "python", "displayname": "Python" },
        { "alias": "javascript", "displayname": "JavaScript" },
        { "alias": "typescript", "displayname": "TypeScript" },
        { "alias": "shell", "displayname": "Shell Script" },
        { "alias": "auto", "displayname": "Detect" },
    ]);
    std::fs::write(&path, body.to_string()).expect("write option file");
    path
}

#[test]
fn option_file_drives_full_selection_flow() {
    let dir = TempDir::new().expect("temp dir");
    let config = Config {
        options_path: Some(write_option_file(&dir)),
        debounce: Duration::from_millis(150),
        ..Config::default()
    };
    let options = config.load_options().expect("load options");
    assert_eq!(options.len(), 5);

    let mut picker = LanguagePicker::new(options, config.picker_settings(), HostSink::default());
    let start = Instant::now();
    picker.handle(PickerEvent::OpenRequested, start);
    for (offset, text) in [(0u64, "s"), (50, "sc"), (100, "script")] {
        picker.handle(
            PickerEvent::QueryChanged(text.to_string()),
            start + Duration::from_millis(offset),
        );
    }
    assert!(picker.poll(start + Duration::from_millis(250)));
    assert_eq!(picker.state(), PickerState::OpenFiltered);

    let labels: Vec<String> = picker
        .sink()
        .last_view
        .as_ref()
        .expect("rendered")
        .results
        .iter()
        .map(|option| option.label.clone())
        .collect();
    assert_eq!(labels, vec!["JavaScript", "Shell Script", "TypeScript"]);

    picker.handle(PickerEvent::EntryChosen(Some(1)), start + Duration::from_millis(300));
    assert_eq!(picker.value(), Some("shell"));
    assert_eq!(
        picker.sink().chosen.as_ref().map(|s| s.label.as_str()),
        Some("Shell Script")
    );
}

#[test]
fn filter_is_usable_without_a_picker() {
    let options = vec![
        LanguageOption::new("py", "Python"),
        LanguageOption::new("js", "JavaScript"),
        LanguageOption::new("ts", "TypeScript"),
    ];
    let results = filter_options(&options, Some("script"), 50);
    let values: Vec<&str> = results.iter().map(|o| o.value.as_str()).collect();
    assert_eq!(values, vec!["js", "ts"]);

    let results = filter_options(&options, Some(""), 2);
    let values: Vec<&str> = results.iter().map(|o| o.value.as_str()).collect();
    assert_eq!(values, vec!["py", "js"]);
}

#[test]
fn builtin_catalog_opens_with_sentinel_highlighted() {
    let mut picker = LanguagePicker::new(
        OptionSet::builtin(true),
        PickerSettings::default(),
        HostSink::default(),
    );
    picker.handle(PickerEvent::OpenRequested, Instant::now());
    let view = picker.sink().last_view.as_ref().expect("rendered");
    assert!(view
        .highlighted_option()
        .expect("highlight")
        .is_auto_detect());
}
