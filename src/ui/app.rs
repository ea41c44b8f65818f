use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::counter::{parse_set_value, CounterIntent, CounterReducer, CounterState, SetValueError};
use crate::store::Store;

/// Maximum length of the set-value field. A signed i64 needs at most 20
/// characters.
const MAX_INPUT_LEN: usize = 20;

/// Which part of the screen receives key presses.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    /// Counter shortcuts are active (+/-/reset).
    Counter,
    /// Key presses edit the set-value field.
    Input,
}

/// View-side application state.
///
/// Owns the injected [`Store`] plus the transient bits the store does
/// not track: the uncommitted text of the set-value field, the last
/// rejected input, focus, and the quit flag.
pub struct App {
    store: Store<CounterReducer>,
    redraw: Arc<AtomicBool>,
    focus: Focus,
    input: String,
    input_error: Option<SetValueError>,
    should_quit: bool,
}

impl App {
    /// Mount the view against an existing store.
    ///
    /// Subscribes a listener that marks the frame dirty whenever the
    /// state changes; the run loop only draws dirty frames.
    pub fn new(mut store: Store<CounterReducer>) -> Self {
        let redraw = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&redraw);
        store.subscribe(move |_state: &CounterState| {
            flag.store(true, Ordering::Relaxed);
        });

        Self {
            store,
            redraw,
            focus: Focus::Counter,
            input: String::new(),
            input_error: None,
            should_quit: false,
        }
    }

    pub fn value(&self) -> i64 {
        self.store.state().value
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn input_error(&self) -> Option<&SetValueError> {
        self.input_error.as_ref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
        self.request_redraw();
    }

    /// Consume the dirty flag. True means the frame must be drawn.
    pub fn take_redraw(&mut self) -> bool {
        self.redraw.swap(false, Ordering::Relaxed)
    }

    pub fn request_redraw(&mut self) {
        self.redraw.store(true, Ordering::Relaxed);
    }

    pub fn increment(&mut self) {
        self.dispatch(CounterIntent::Increment);
    }

    pub fn decrement(&mut self) {
        self.dispatch(CounterIntent::Decrement);
    }

    pub fn reset(&mut self) {
        self.dispatch(CounterIntent::Reset);
    }

    pub fn focus_input(&mut self) {
        self.focus = Focus::Input;
        self.request_redraw();
    }

    /// Leave the set-value field, discarding uncommitted text.
    pub fn cancel_input(&mut self) {
        self.focus = Focus::Counter;
        self.input.clear();
        self.input_error = None;
        self.request_redraw();
    }

    /// Append a character to the set-value field.
    ///
    /// Digits are accepted anywhere; a sign only in the first position.
    /// Everything else is ignored.
    pub fn push_input(&mut self, ch: char) {
        if self.input.len() >= MAX_INPUT_LEN {
            return;
        }
        let accepted = ch.is_ascii_digit() || (self.input.is_empty() && (ch == '-' || ch == '+'));
        if !accepted {
            return;
        }
        self.input.push(ch);
        self.input_error = None;
        self.request_redraw();
    }

    pub fn backspace_input(&mut self) {
        if self.input.pop().is_some() {
            self.input_error = None;
            self.request_redraw();
        }
    }

    /// Paste into the set-value field, keeping only characters the
    /// field would accept when typed. Ignored unless the field has
    /// focus.
    pub fn paste_input(&mut self, text: &str) {
        if self.focus != Focus::Input {
            return;
        }
        for ch in text.chars() {
            self.push_input(ch);
        }
    }

    /// Validate the field and dispatch `Set` on success.
    ///
    /// On failure the text stays on screen with the error next to it
    /// so it can be corrected.
    pub fn commit_input(&mut self) {
        match parse_set_value(&self.input) {
            Ok(value) => {
                self.dispatch(CounterIntent::Set(value));
                self.input.clear();
                self.input_error = None;
                self.focus = Focus::Counter;
            }
            Err(err) => {
                tracing::debug!(input = %self.input, error = %err, "set-value input rejected");
                self.input_error = Some(err);
            }
        }
        self.request_redraw();
    }

    fn dispatch(&mut self, intent: CounterIntent) {
        self.store.dispatch(intent);
        tracing::debug!(?intent, value = self.store.state().value, "dispatched");
    }
}
