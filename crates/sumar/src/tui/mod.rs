//! Terminal frontend for the calculator

mod app;
mod input;
mod keypad;
mod ui;

pub use app::CalculatorApp;
pub use input::{InputHandler, KeyAction};
pub use keypad::KeypadWidget;
pub use ui::{render, CalculatorUi};
