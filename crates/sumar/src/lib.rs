//! Sumar - a keypad calculator
//!
//! A seventeen-key calculator built around a token-buffer engine: each
//! keystroke mutates an ordered sequence of numeric and operator tokens,
//! and equals reduces the sequence left to right with no operator
//! precedence. The same engine sits behind two frontends, a ratatui
//! terminal UI and a browser (WASM) build whose DOM wiring is testable
//! natively through a mock DOM.
//!
//! # Example
//!
//! ```rust
//! use sumar::prelude::*;
//!
//! let mut buffer = TokenBuffer::new();
//! buffer.press_digit(7);
//! buffer.press_operator(Operator::Add);
//! buffer.press_digit(3);
//! buffer.press_equals();
//! assert_eq!(buffer.display(), "10");
//! ```

// Allow common test patterns in this crate
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod driver;
pub mod keypad;

#[cfg(feature = "tui")]
pub mod tui;

/// Browser module - always available for testing
/// (the mock DOM keeps it runnable without actual browser bindings)
pub mod wasm;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::buffer::{OperatorPress, TokenBuffer};
    pub use crate::core::key::{classify, Key, KeyEventError, RawKey};
    pub use crate::core::reduce::{calculate, format_number, parse_number, reduce};
    pub use crate::core::token::{Operator, Token};
    pub use crate::driver::CalculatorDriver;
    pub use crate::keypad::{KeyDef, Keypad};
    pub use crate::wasm::{CalcState, DomEvent, MockDom, WasmCalculator, WasmDriver};

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;
    #[cfg(feature = "tui")]
    pub use crate::tui::CalculatorApp;
}
