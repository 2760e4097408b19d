//! Unit tests for the `langpick` CLI entrypoint module.

use super::interactive::{drive, parse_line, SessionInput};
use super::render::TerminalSink;
use super::{format_options, format_resolved, resolve_config, Cli, Commands};
use clap::Parser;
use crossbeam_channel::unbounded;
use langpick_core::env::{env_lock, EnvGuard};
use langpick_core::{
    Direction, LanguageOption, LanguagePicker, OptionSet, PickerEvent, PickerSettings,
    ENV_OPTIONS_PATH,
};
use std::path::PathBuf;
use std::time::Duration;

fn sample_options() -> OptionSet {
    OptionSet::from_choices(
        vec![
            LanguageOption::new("python", "Python"),
            LanguageOption::new("javascript", "JavaScript"),
            LanguageOption::new("typescript", "TypeScript"),
        ],
        true,
    )
}

fn run_script(lines: &[&str], json: bool) -> String {
    let (tx, rx) = unbounded();
    for line in lines {
        tx.send(line.to_string()).expect("queue line");
    }
    drop(tx);

    let settings = PickerSettings {
        max_results: 50,
        debounce: Duration::from_secs(60),
    };
    let mut picker = LanguagePicker::new(
        sample_options(),
        settings,
        TerminalSink::new(Vec::new(), json),
    );
    drive(&mut picker, &rx).expect("session");
    String::from_utf8(picker.into_sink().into_inner()).expect("utf8 output")
}

#[test]
fn cli_parses_search_with_limit_and_global_flags() {
    let cli = Cli::try_parse_from(["langpick", "search", "script", "--limit", "3", "--json"])
        .expect("parse");
    assert!(cli.json);
    match cli.command {
        Commands::Search { query, limit } => {
            assert_eq!(query, "script");
            assert_eq!(limit, Some(3));
        }
        _ => panic!("expected search command"),
    }
}

#[test]
fn cli_options_flag_overrides_environment() {
    let _lock = env_lock().lock().expect("env lock");
    let _guard = EnvGuard::set(ENV_OPTIONS_PATH, "/from/env.json");
    let cli = Cli::try_parse_from(["langpick", "--options", "/from/flag.json", "list"])
        .expect("parse");
    let config = resolve_config(cli.options);
    assert_eq!(config.options_path, Some(PathBuf::from("/from/flag.json")));

    let cli = Cli::try_parse_from(["langpick", "list"]).expect("parse");
    let config = resolve_config(cli.options);
    assert_eq!(config.options_path, Some(PathBuf::from("/from/env.json")));
}

#[test]
fn env_options_path_keeps_tilde_expansion_through_cli() {
    let _lock = env_lock().lock().expect("env lock");
    let _home = EnvGuard::set("HOME", "/home/picker");
    let _path = EnvGuard::set(ENV_OPTIONS_PATH, "~/langs.json");
    let cli = Cli::try_parse_from(["langpick", "list"]).expect("parse");
    assert!(cli.options.is_none());
    assert_eq!(
        resolve_config(cli.options).options_path,
        Some(PathBuf::from("/home/picker/langs.json"))
    );
}

#[test]
fn format_options_renders_rows_and_json() {
    let go = LanguageOption::new("go", "Go");
    let rows = format_options(&[&go], false).expect("rows");
    assert_eq!(rows.trim_end(), "go               Go");

    let json = format_options(&[&go], true).expect("json");
    let parsed: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(parsed[0]["value"], "go");
    assert_eq!(parsed[0]["label"], "Go");
}

#[test]
fn format_resolved_accepts_aliases() {
    let options = OptionSet::builtin(true);
    let label = format_resolved("py", &options, false).expect("resolve");
    assert_eq!(label.as_deref(), Some("Python"));
    let missing = format_resolved("cobol", &options, true).expect("resolve");
    assert!(missing.is_none());

    let json = format_resolved("rs", &options, true)
        .expect("resolve")
        .expect("known alias");
    let parsed: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(parsed["value"], "rust");
}

#[test]
fn parse_line_maps_commands_and_queries() {
    let cases = [
        (":open", SessionInput::Event(PickerEvent::OpenRequested)),
        (
            ":down",
            SessionInput::Event(PickerEvent::ArrowMoved(Direction::Down)),
        ),
        (
            ":up",
            SessionInput::Event(PickerEvent::ArrowMoved(Direction::Up)),
        ),
        (
            ":enter",
            SessionInput::Event(PickerEvent::EntryChosen(None)),
        ),
        (
            ":pick 2",
            SessionInput::Event(PickerEvent::EntryChosen(Some(2))),
        ),
        (":hover 1", SessionInput::Event(PickerEvent::Hovered(1))),
        (":esc", SessionInput::Event(PickerEvent::DismissRequested)),
        (":wait", SessionInput::Settle),
        (":quit", SessionInput::Quit),
        (":pick", SessionInput::Unknown("pick".to_string())),
        (
            "rust\r",
            SessionInput::Event(PickerEvent::QueryChanged("rust".to_string())),
        ),
        (
            "::colon",
            SessionInput::Event(PickerEvent::QueryChanged(":colon".to_string())),
        ),
    ];
    for (line, expected) in cases {
        assert_eq!(parse_line(line), expected, "line: {line:?}");
    }
}

#[test]
fn scripted_session_debounces_and_selects() {
    let output = run_script(&["s", "sc", "script", ":wait", ":down", ":enter"], false);
    let lines: Vec<&str> = output.lines().collect();

    // Typing opens the picker (4 rows), then one settled render for "script".
    assert_eq!(lines[0], "4 languages found");
    let settled = lines
        .iter()
        .position(|line| *line == "2 languages found")
        .expect("settled render");
    assert_eq!(lines[settled + 1], ">   0  JavaScript");
    assert_eq!(
        output.matches("languages found").count(),
        3,
        "open, settle, and highlight move each render once"
    );
    assert!(output.contains("selected typescript (TypeScript)"));
    assert!(output.trim_end().ends_with("closed"));
}

#[test]
fn pending_query_is_evaluated_when_input_ends() {
    let output = run_script(&[":open", "python"], false);
    assert!(output.trim_end().ends_with(">   0  Python"));
    assert!(output.contains("1 language found"));
}

#[test]
fn quit_stops_before_remaining_lines() {
    let output = run_script(&[":open", ":quit", ":enter"], false);
    assert!(!output.contains("selected"));
}

#[test]
fn json_session_emits_event_lines() {
    let output = run_script(&[":open", ":pick 1"], true);
    let events: Vec<serde_json::Value> = output
        .lines()
        .map(|line| serde_json::from_str(line).expect("json line"))
        .collect();
    assert_eq!(events[0]["event"], "render");
    assert_eq!(events[1]["event"], "selected");
    assert_eq!(events[1]["selection"]["value"], "javascript");
    assert_eq!(events[2]["event"], "closed");
}
