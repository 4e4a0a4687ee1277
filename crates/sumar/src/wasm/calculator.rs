//! Browser calculator model
//!
//! [`WasmCalculator`] wires the token-buffer engine to the DOM: it consumes
//! click and keydown events, runs the defensive identity/value checks at the
//! classification boundary, keeps the display element's text in sync with
//! the buffer, and marks the highlighted operator button with a CSS class
//! driven by explicit state rather than DOM queries.

use serde::{Deserialize, Serialize};

use crate::core::buffer::{OperatorPress, TokenBuffer};
use crate::core::key::{classify, Key, RawKey};
use crate::core::token::Operator;

use super::dom::{DomEvent, MockDom};
use super::keypad::{DomKeypad, ACTIVE_CLASS, DISPLAY_ID};

/// A serializable snapshot of the calculator state
///
/// The browser side reads this as JSON to drive rendering frameworks that
/// want plain data instead of method calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalcState {
    /// The display string
    pub display: String,
    /// Identity of the highlighted operator key, if any
    pub active_operator: Option<String>,
    /// Whether the next operand entry starts a fresh buffer
    pub reset: bool,
}

/// The calculator page: engine, DOM, and highlight state
#[derive(Debug)]
pub struct WasmCalculator {
    buffer: TokenBuffer,
    dom: MockDom,
    keypad: DomKeypad,
    last_operator: Option<Operator>,
}

impl Default for WasmCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl WasmCalculator {
    /// Creates the calculator and builds its page
    #[must_use]
    pub fn new() -> Self {
        let keypad = DomKeypad::new();
        let mut dom = MockDom::new();
        keypad.install(&mut dom);
        Self {
            buffer: TokenBuffer::new(),
            dom,
            keypad,
            last_operator: None,
        }
    }

    /// Returns the display string
    #[must_use]
    pub fn display(&self) -> String {
        self.buffer.display()
    }

    /// Returns the operator whose button is highlighted, if any
    #[must_use]
    pub fn active_operator(&self) -> Option<Operator> {
        self.last_operator
    }

    /// Returns the page DOM
    #[must_use]
    pub fn dom(&self) -> &MockDom {
        &self.dom
    }

    /// Returns the DOM keypad
    #[must_use]
    pub fn keypad(&self) -> &DomKeypad {
        &self.keypad
    }

    /// Dispatches a DOM event into the calculator
    pub fn dispatch(&mut self, event: DomEvent) {
        self.dom.log_event(event.clone());
        match event {
            DomEvent::Click { element_id } => self.handle_click(&element_id),
            DomEvent::KeyDown { key } => self.handle_keydown(&key),
        }
    }

    /// Handles a click on the element with the given id
    pub fn handle_click(&mut self, element_id: &str) {
        let value = self
            .dom
            .element(element_id)
            .and_then(|element| element.attr("value"))
            .unwrap_or_default();
        let raw = RawKey::new(element_id, value);

        match classify(&raw) {
            Ok(key) => self.press(key),
            Err(error) => {
                // Malformed events are dropped without touching state.
                tracing::warn!("ignoring click on '{element_id}': {error}");
            }
        }
    }

    /// Handles a keyboard key pressed on the page
    pub fn handle_keydown(&mut self, key: &str) {
        if let Some(key) = DomKeypad::key_from_keyboard(key) {
            self.press(key);
        }
    }

    /// Applies one classified keypress and re-renders
    pub fn press(&mut self, key: Key) {
        match key {
            Key::Digit(d) => self.buffer.press_digit(d),
            Key::Decimal => self.buffer.press_decimal(),
            Key::Operator(op) => {
                if self.buffer.press_operator(op) == OperatorPress::Applied {
                    self.set_active_operator(Some(op));
                }
            }
            Key::Equals => {
                self.buffer.press_equals();
                self.set_active_operator(None);
            }
            Key::Clear => {
                self.buffer.press_clear();
                self.set_active_operator(None);
            }
        }
        self.sync_display();
    }

    /// Returns a serializable state snapshot
    #[must_use]
    pub fn state(&self) -> CalcState {
        CalcState {
            display: self.display(),
            active_operator: self
                .last_operator
                .map(|op| Key::Operator(op).id().to_string()),
            reset: self.buffer.reset_pending(),
        }
    }

    /// Returns the state snapshot as JSON
    #[must_use]
    pub fn state_json(&self) -> String {
        serde_json::to_string(&self.state()).unwrap_or_default()
    }

    fn sync_display(&mut self) {
        let display = self.buffer.display();
        self.dom.set_text(DISPLAY_ID, &display);
    }

    fn set_active_operator(&mut self, op: Option<Operator>) {
        if self.last_operator == op {
            return;
        }
        if let Some(previous) = self.last_operator {
            let id = Key::Operator(previous).id();
            if let Some(element) = self.dom.element_mut(id) {
                element.remove_class(ACTIVE_CLASS);
            }
        }
        if let Some(next) = op {
            let id = Key::Operator(next).id();
            if let Some(element) = self.dom.element_mut(id) {
                element.add_class(ACTIVE_CLASS);
            }
        }
        self.last_operator = op;
    }
}
