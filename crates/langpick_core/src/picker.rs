//! Picker state machine driving the option filter from discrete input events.
//!
//! A [`LanguagePicker`] owns the option set, the current query, and the last
//! rendered [`MatchView`]. Hosts translate their raw input (keys, clicks,
//! typed text) into [`PickerEvent`]s and call [`LanguagePicker::poll`] when the
//! debounce deadline passes; the picker reports back through a [`PickerSink`].

use crate::catalog::{LanguageOption, OptionSet};
use crate::constants::{DEFAULT_DEBOUNCE, DEFAULT_MAX_RESULTS};
use crate::debounce::Debouncer;
use crate::filter::filter_options;
use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::debug;

/// Visible state of the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerState {
    Closed,
    /// Open, showing the leading options for a blank query.
    OpenEmpty,
    /// Open, showing matches for a non-blank query.
    OpenFiltered,
}

impl PickerState {
    pub fn is_open(self) -> bool {
        !matches!(self, PickerState::Closed)
    }
}

/// Highlight movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Discrete input accepted by [`LanguagePicker::handle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerEvent {
    /// Trigger activated; opens a closed picker and closes an open one.
    OpenRequested,
    /// Query text replaced by the user.
    QueryChanged(String),
    ArrowMoved(Direction),
    /// Pointer moved over a rendered row.
    Hovered(usize),
    /// Row chosen by index, or the highlighted row when `None`.
    EntryChosen(Option<usize>),
    /// Escape pressed or focus left the picker.
    DismissRequested,
}

/// Chosen option delivered to the selection host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub value: String,
    pub label: String,
}

impl From<&LanguageOption> for Selection {
    fn from(option: &LanguageOption) -> Self {
        Self {
            value: option.value.clone(),
            label: option.label.clone(),
        }
    }
}

/// Snapshot handed to the rendering surface after each evaluation or
/// highlight change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MatchView {
    /// Query the results were computed for (untrimmed, as typed).
    pub query: String,
    pub results: Vec<LanguageOption>,
    pub highlighted: Option<usize>,
}

impl MatchView {
    pub fn highlighted_option(&self) -> Option<&LanguageOption> {
        self.highlighted.and_then(|index| self.results.get(index))
    }
}

/// Header line shown above a rendered result list.
pub fn results_header(count: usize) -> String {
    match count {
        0 => "No languages found".to_string(),
        1 => "1 language found".to_string(),
        n => format!("{} languages found", n),
    }
}

/// Receives picker output. `render` is the rendering surface; `selected` is the
/// selection host.
pub trait PickerSink {
    fn render(&mut self, view: &MatchView);

    fn selected(&mut self, selection: &Selection);

    /// Called when the picker closes without or after a selection.
    fn closed(&mut self) {}
}

impl<S: PickerSink + ?Sized> PickerSink for &mut S {
    fn render(&mut self, view: &MatchView) {
        (**self).render(view);
    }

    fn selected(&mut self, selection: &Selection) {
        (**self).selected(selection);
    }

    fn closed(&mut self) {
        (**self).closed();
    }
}

/// Tunables for a picker instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickerSettings {
    pub max_results: usize,
    pub debounce: Duration,
}

impl Default for PickerSettings {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
            debounce: DEFAULT_DEBOUNCE,
        }
    }
}

/// Searchable language selector bound to one option set and one sink.
pub struct LanguagePicker<S> {
    options: OptionSet,
    settings: PickerSettings,
    sink: S,
    state: PickerState,
    query: String,
    view: MatchView,
    pending_query: Debouncer<String>,
    current: Option<LanguageOption>,
}

impl<S: PickerSink> LanguagePicker<S> {
    /// Create a closed picker whose current value is the first option.
    pub fn new(options: OptionSet, settings: PickerSettings, sink: S) -> Self {
        let current = options.first().cloned();
        Self {
            options,
            settings,
            sink,
            state: PickerState::Closed,
            query: String::new(),
            view: MatchView::default(),
            pending_query: Debouncer::new(settings.debounce),
            current,
        }
    }

    pub fn state(&self) -> PickerState {
        self.state
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn view(&self) -> &MatchView {
        &self.view
    }

    pub fn options(&self) -> &OptionSet {
        &self.options
    }

    pub fn settings(&self) -> PickerSettings {
        self.settings
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Stored value of the current selection.
    pub fn value(&self) -> Option<&str> {
        self.current.as_ref().map(|option| option.value.as_str())
    }

    /// Display label of the current selection.
    pub fn label(&self) -> Option<&str> {
        self.current.as_ref().map(|option| option.label.as_str())
    }

    /// Select an option by value (aliases accepted) without notifying the sink.
    ///
    /// # Returns
    /// `false` when no option carries `value`; the current selection is kept.
    pub fn set_value(&mut self, value: &str) -> bool {
        match self.options.find(value) {
            Some(option) => {
                self.current = Some(option.clone());
                true
            }
            None => false,
        }
    }

    /// Instant at which a pending query settles, for host loops that sleep.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending_query.deadline()
    }

    /// Apply one input event at `now`.
    ///
    /// # Returns
    /// The state after the transition.
    pub fn handle(&mut self, event: PickerEvent, now: Instant) -> PickerState {
        match event {
            PickerEvent::OpenRequested => {
                if self.state.is_open() {
                    self.close();
                } else {
                    self.open();
                }
            }
            PickerEvent::QueryChanged(query) => {
                if self.state.is_open() {
                    self.pending_query.schedule(query.clone(), now);
                    self.query = query;
                }
            }
            PickerEvent::ArrowMoved(direction) => {
                if self.state.is_open() {
                    self.move_highlight(direction);
                }
            }
            PickerEvent::Hovered(index) => {
                if self.state.is_open() && index < self.view.results.len() {
                    self.view.highlighted = Some(index);
                    self.sink.render(&self.view);
                }
            }
            PickerEvent::EntryChosen(index) => {
                if self.state.is_open() {
                    self.choose(index);
                }
            }
            PickerEvent::DismissRequested => {
                if self.state.is_open() {
                    self.close();
                }
            }
        }
        self.state
    }

    /// Evaluate the pending query if its quiet period has elapsed at `now`.
    ///
    /// # Returns
    /// `true` when a recomputation ran.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.pending_query.poll(now) {
            Some(query) => {
                self.evaluate(query);
                true
            }
            None => false,
        }
    }

    fn open(&mut self) {
        self.query.clear();
        self.pending_query.cancel();
        self.evaluate(String::new());
    }

    fn close(&mut self) {
        self.pending_query.cancel();
        self.view.highlighted = None;
        self.state = PickerState::Closed;
        self.sink.closed();
    }

    fn evaluate(&mut self, query: String) {
        let results: Vec<LanguageOption> = filter_options(
            self.options.as_slice(),
            Some(query.as_str()),
            self.settings.max_results,
        )
        .into_iter()
        .cloned()
        .collect();
        debug!(query = %query, matches = results.len(), "recomputed language matches");

        self.state = if query.trim().is_empty() {
            PickerState::OpenEmpty
        } else {
            PickerState::OpenFiltered
        };
        self.view = MatchView {
            highlighted: (!results.is_empty()).then_some(0),
            query,
            results,
        };
        self.sink.render(&self.view);
    }

    fn move_highlight(&mut self, direction: Direction) {
        let len = self.view.results.len();
        self.view.highlighted = match (direction, self.view.highlighted) {
            (_, _) if len == 0 => None,
            (Direction::Down, None) => Some(0),
            (Direction::Down, Some(index)) => Some((index + 1).min(len - 1)),
            (Direction::Up, None) | (Direction::Up, Some(0)) => None,
            (Direction::Up, Some(index)) => Some(index - 1),
        };
        self.sink.render(&self.view);
    }

    fn choose(&mut self, index: Option<usize>) {
        let Some(option) = index
            .or(self.view.highlighted)
            .and_then(|index| self.view.results.get(index))
            .cloned()
        else {
            return;
        };
        let selection = Selection::from(&option);
        self.query = option.label.clone();
        self.current = Some(option);
        self.sink.selected(&selection);
        self.close();
    }
}
