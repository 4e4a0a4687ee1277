//! Browser frontend for the calculator
//!
//! The mock DOM keeps the whole module testable under plain `cargo test`;
//! only the wasm-bindgen bindings need the `wasm` feature.

#[cfg(feature = "wasm")]
mod browser;
mod calculator;
mod dom;
mod driver;
mod keypad;

#[cfg(feature = "wasm")]
pub use browser::BrowserCalculator;
pub use calculator::{CalcState, WasmCalculator};
pub use dom::{DomElement, DomEvent, MockDom};
pub use driver::WasmDriver;
pub use keypad::{DomKeypad, ACTIVE_CLASS, DISPLAY_ID, KEY_CLASS};
