//! TUI application state
//!
//! A thin shell around the token-buffer engine: it dispatches typed keys,
//! tracks which operator key should render highlighted, and carries the
//! quit flag for the event loop.

use crate::core::buffer::{OperatorPress, TokenBuffer};
use crate::core::key::Key;
use crate::core::token::Operator;

/// Calculator application state
#[derive(Debug, Default)]
pub struct CalculatorApp {
    /// The token-buffer engine
    buffer: TokenBuffer,
    /// The operator whose key renders highlighted
    last_operator: Option<Operator>,
    /// Whether the event loop should exit
    should_quit: bool,
}

impl CalculatorApp {
    /// Creates a fresh calculator
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the display string
    #[must_use]
    pub fn display(&self) -> String {
        self.buffer.display()
    }

    /// Returns the underlying token buffer
    #[must_use]
    pub fn buffer(&self) -> &TokenBuffer {
        &self.buffer
    }

    /// Returns the operator to highlight, if any
    #[must_use]
    pub fn last_operator(&self) -> Option<Operator> {
        self.last_operator
    }

    /// Returns whether the event loop should exit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Requests event-loop exit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Applies one classified keypress
    pub fn press(&mut self, key: Key) {
        match key {
            Key::Digit(d) => self.buffer.press_digit(d),
            Key::Decimal => self.buffer.press_decimal(),
            Key::Operator(op) => {
                // An ignored press is a no-op end to end; the highlight
                // stays where it was.
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
