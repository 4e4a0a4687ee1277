//! DOM-backed driver for the unified keystroke specifications
//!
//! Presses keys by dispatching click events at the mock DOM, so every
//! specification exercises the full browser path: event, classification,
//! engine, display sync, highlight class.

use crate::core::token::Operator;
use crate::driver::CalculatorDriver;

use super::calculator::WasmCalculator;
use super::dom::{DomEvent, MockDom};
use super::keypad::DISPLAY_ID;

/// Drives the calculator through DOM events
#[derive(Debug, Default)]
pub struct WasmDriver {
    calculator: WasmCalculator,
}

impl WasmDriver {
    /// Creates a fresh DOM-backed driver
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the underlying calculator
    #[must_use]
    pub fn calculator(&self) -> &WasmCalculator {
        &self.calculator
    }

    /// Returns the page DOM
    #[must_use]
    pub fn dom(&self) -> &MockDom {
        self.calculator.dom()
    }

    /// Dispatches a keyboard event at the page
    pub fn key_down(&mut self, key: &str) {
        self.calculator.dispatch(DomEvent::key_down(key));
    }
}

impl CalculatorDriver for WasmDriver {
    fn press(&mut self, id: &str) {
        self.calculator.dispatch(DomEvent::click(id));
    }

    fn display(&self) -> String {
        // Read what the page shows, not what the engine holds.
        self.dom()
            .text(DISPLAY_ID)
            .unwrap_or_default()
            .to_string()
    }

    fn active_operator(&self) -> Option<Operator> {
        self.calculator.active_operator()
    }
}
