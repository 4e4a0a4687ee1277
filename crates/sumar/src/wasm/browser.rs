//! Real-browser bindings
//!
//! The wasm-bindgen entry point the page scripts talk to. The page owns the
//! actual DOM; this type owns the engine and hands back plain data (display
//! string, active-operator id, JSON state) for the page to render.

use wasm_bindgen::prelude::*;
use web_sys::console;

use crate::core::buffer::{OperatorPress, TokenBuffer};
use crate::core::key::{classify, Key, RawKey};
use crate::core::token::Operator;
use crate::wasm::keypad::DomKeypad;

/// Browser calculator, exported to JavaScript
#[derive(Debug, Default)]
#[wasm_bindgen]
pub struct BrowserCalculator {
    buffer: TokenBuffer,
    last_operator: Option<Operator>,
}

#[wasm_bindgen]
impl BrowserCalculator {
    /// Creates a new browser calculator
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new() -> Self {
        console_error_panic_hook::set_once();
        Self {
            buffer: TokenBuffer::new(),
            last_operator: None,
        }
    }

    /// The display string
    #[wasm_bindgen(getter)]
    #[must_use]
    pub fn display(&self) -> String {
        self.buffer.display()
    }

    /// Identity of the operator key to highlight, or `null`
    #[wasm_bindgen(getter, js_name = activeOperator)]
    #[must_use]
    pub fn active_operator(&self) -> Option<String> {
        self.last_operator
            .map(|op| Key::Operator(op).id().to_string())
    }

    /// Handles a button click, given the element's id and value attributes
    ///
    /// Returns the new display string. Malformed events are logged to the
    /// console and leave the state untouched.
    #[wasm_bindgen(js_name = pressKey)]
    pub fn press_key(&mut self, id: &str, value: &str) -> String {
        let raw = RawKey::new(id, value);
        match classify(&raw) {
            Ok(key) => self.apply(key),
            Err(error) => {
                console::warn_1(&format!("ignoring keypress: {error}").into());
            }
        }
        self.display()
    }

    /// Handles a keyboard event, given the DOM `key` string
    #[wasm_bindgen(js_name = pressKeyboard)]
    pub fn press_keyboard(&mut self, key: &str) -> String {
        if let Some(key) = DomKeypad::key_from_keyboard(key) {
            self.apply(key);
        }
        self.display()
    }

    fn apply(&mut self, key: Key) {
        match key {
            Key::Digit(d) => self.buffer.press_digit(d),
            Key::Decimal => self.buffer.press_decimal(),
            Key::Operator(op) => {
                if self.buffer.press_operator(op) == OperatorPress::Applied {
                    self.last_operator = Some(op);
                }
            }
            Key::Equals => {
                self.buffer.press_equals();
                self.last_operator = None;
            }
            Key::Clear => {
                self.buffer.press_clear();
                self.last_operator = None;
            }
        }
    }
}
