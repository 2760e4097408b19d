//! Line-driven picker session.
//!
//! A reader thread forwards stdin lines over a channel; the session loop
//! waits on that channel until the picker's debounce deadline and feeds the
//! picker one event per line.

use crate::render::TerminalSink;
use anyhow::Context;
use crossbeam_channel::{unbounded, Receiver, RecvTimeoutError};
use langpick_core::{Direction, LanguagePicker, OptionSet, PickerEvent, PickerSettings};
use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Instant;
use tracing::{debug, warn};

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SessionInput {
    Event(PickerEvent),
    /// Evaluate any pending query without waiting out the quiet period.
    Settle,
    Quit,
    Unknown(String),
}

/// Parse a session line. Lines starting with `:` are commands (`::` escapes a
/// literal colon); anything else replaces the query.
pub(crate) fn parse_line(line: &str) -> SessionInput {
    let line = line.trim_end_matches(['\r', '\n']);
    if let Some(literal) = line.strip_prefix("::") {
        return SessionInput::Event(PickerEvent::QueryChanged(format!(":{}", literal)));
    }
    let Some(command) = line.strip_prefix(':') else {
        return SessionInput::Event(PickerEvent::QueryChanged(line.to_string()));
    };

    let mut parts = command.split_whitespace();
    let name = parts.next().unwrap_or_default();
    let index = parts.next().and_then(|raw| raw.parse::<usize>().ok());
    match (name, index) {
        ("open", _) => SessionInput::Event(PickerEvent::OpenRequested),
        ("down", _) => SessionInput::Event(PickerEvent::ArrowMoved(Direction::Down)),
        ("up", _) => SessionInput::Event(PickerEvent::ArrowMoved(Direction::Up)),
        ("enter", _) => SessionInput::Event(PickerEvent::EntryChosen(None)),
        ("pick", Some(index)) => SessionInput::Event(PickerEvent::EntryChosen(Some(index))),
        ("hover", Some(index)) => SessionInput::Event(PickerEvent::Hovered(index)),
        ("esc", _) => SessionInput::Event(PickerEvent::DismissRequested),
        ("wait", _) => SessionInput::Settle,
        ("quit", _) | ("q", _) => SessionInput::Quit,
        _ => SessionInput::Unknown(command.to_string()),
    }
}

fn check_sink<W: Write>(picker: &mut LanguagePicker<TerminalSink<W>>) -> anyhow::Result<()> {
    match picker.sink_mut().take_error() {
        Some(err) => Err(err).context("failed to write picker output"),
        None => Ok(()),
    }
}

fn apply_input<W: Write>(
    picker: &mut LanguagePicker<TerminalSink<W>>,
    input: SessionInput,
) -> bool {
    match input {
        SessionInput::Quit => return false,
        SessionInput::Settle => {
            if let Some(deadline) = picker.next_deadline() {
                picker.poll(deadline);
            }
        }
        SessionInput::Unknown(command) => warn!(command = %command, "unknown session command"),
        SessionInput::Event(event) => {
            let now = Instant::now();
            // Typing into a closed picker focuses it first.
            if matches!(event, PickerEvent::QueryChanged(_)) && !picker.state().is_open() {
                picker.handle(PickerEvent::OpenRequested, now);
            }
            let state = picker.handle(event, now);
            debug!(state = ?state, "picker transition");
        }
    }
    true
}

/// Drive `picker` from `lines` until `:quit` or the sender disconnects.
///
/// A query still pending at disconnect is evaluated before returning.
pub(crate) fn drive<W: Write>(
    picker: &mut LanguagePicker<TerminalSink<W>>,
    lines: &Receiver<String>,
) -> anyhow::Result<()> {
    loop {
        let received = match picker.next_deadline() {
            Some(deadline) => lines.recv_deadline(deadline),
            None => lines.recv().map_err(|_| RecvTimeoutError::Disconnected),
        };
        match received {
            Ok(line) => {
                let keep_going = apply_input(picker, parse_line(&line));
                check_sink(picker)?;
                if !keep_going {
                    return Ok(());
                }
            }
            Err(RecvTimeoutError::Timeout) => {
                picker.poll(Instant::now());
                check_sink(picker)?;
            }
            Err(RecvTimeoutError::Disconnected) => {
                if let Some(deadline) = picker.next_deadline() {
                    picker.poll(deadline);
                }
                return check_sink(picker);
            }
        }
    }
}

/// Run a session over stdin, returning the sink once input ends.
///
/// # Errors
/// Returns an error when the reader thread cannot be spawned or picker output
/// cannot be written.
pub(crate) fn run_session<W: Write>(
    options: OptionSet,
    settings: PickerSettings,
    sink: TerminalSink<W>,
) -> anyhow::Result<TerminalSink<W>> {
    let (line_tx, line_rx) = unbounded();
    thread::Builder::new()
        .name("langpick-stdin".to_string())
        .spawn(move || {
            for line in io::stdin().lock().lines() {
                match line {
                    Ok(line) => {
                        if line_tx.send(line).is_err() {
                            break;
                        }
                    }
                    Err(err) => {
                        warn!(error = %err, "stopped reading stdin");
                        break;
                    }
                }
            }
        })
        .context("failed to spawn stdin reader")?;

    let mut picker = LanguagePicker::new(options, settings, sink);
    drive(&mut picker, &line_rx)?;
    Ok(picker.into_sink())
}
