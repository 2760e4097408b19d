//! Terminal rendering surface for picker output.

use langpick_core::{results_header, MatchView, PickerSink, Selection};
use serde_json::json;
use std::io::{self, Write};

/// Writes picker renders and selections as text rows or JSON lines.
pub(crate) struct TerminalSink<W: Write> {
    out: W,
    json: bool,
    error: Option<io::Error>,
}

impl<W: Write> TerminalSink<W> {
    pub(crate) fn new(out: W, json: bool) -> Self {
        Self {
            out,
            json,
            error: None,
        }
    }

    /// Return the first write error seen since the last call.
    pub(crate) fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    pub(crate) fn into_inner(self) -> W {
        self.out
    }

    fn record(&mut self, result: io::Result<()>) {
        if let Err(err) = result {
            self.error.get_or_insert(err);
        }
    }

    fn write_view(&mut self, view: &MatchView) -> io::Result<()> {
        if self.json {
            let line = json!({ "event": "render", "view": view });
            return writeln!(self.out, "{}", line);
        }
        writeln!(self.out, "{}", results_header(view.results.len()))?;
        for (index, option) in view.results.iter().enumerate() {
            let marker = if view.highlighted == Some(index) {
                '>'
            } else {
                ' '
            };
            writeln!(self.out, "{} {:>3}  {}", marker, index, option.label)?;
        }
        Ok(())
    }

    fn write_selection(&mut self, selection: &Selection) -> io::Result<()> {
        if self.json {
            let line = json!({ "event": "selected", "selection": selection });
            return writeln!(self.out, "{}", line);
        }
        writeln!(
            self.out,
            "selected {} ({})",
            selection.value, selection.label
        )
    }
}

impl<W: Write> PickerSink for TerminalSink<W> {
    fn render(&mut self, view: &MatchView) {
        let result = self.write_view(view);
        self.record(result);
    }

    fn selected(&mut self, selection: &Selection) {
        let result = self.write_selection(selection);
        self.record(result);
    }

    fn closed(&mut self) {
        let result = if self.json {
            writeln!(self.out, "{}", json!({ "event": "closed" }))
        } else {
            writeln!(self.out, "closed")
        };
        self.record(result);
    }
}
