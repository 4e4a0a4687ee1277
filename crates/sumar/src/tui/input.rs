//! Keyboard input mapping for the TUI
//!
//! Terminal key events map onto the same seventeen keys the on-screen
//! keypad offers. Anything else is ignored.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::key::Key;
use crate::core::token::Operator;

/// What a terminal key event asks the calculator to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Press one of the seventeen calculator keys
    Press(Key),
    /// Quit the application
    Quit,
    /// Ignored input
    None,
}

/// Maps terminal key events to calculator actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code, modifiers, ..
        } = event;

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char(ch @ '0'..='9') => {
                KeyAction::Press(Key::Digit(ch as u8 - b'0'))
            }
            KeyCode::Char('.') => KeyAction::Press(Key::Decimal),
            KeyCode::Char('=') | KeyCode::Enter => KeyAction::Press(Key::Equals),
            KeyCode::Char('c' | 'C') | KeyCode::Esc => KeyAction::Press(Key::Clear),
            KeyCode::Char(symbol) => Operator::from_symbol(symbol)
                .map_or(KeyAction::None, |op| KeyAction::Press(Key::Operator(op))),
            _ => KeyAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_event(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn key_event_ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::CONTROL)
    }

    // ===== Digit keys =====

    #[test]
    fn test_digit_keys() {
        let handler = InputHandler::new();
        for (d, ch) in ('0'..='9').enumerate() {
            assert_eq!(
                handler.handle_key(key_event(KeyCode::Char(ch))),
                KeyAction::Press(Key::Digit(d as u8))
            );
        }
    }

    // ===== Operator keys =====

    #[test]
    fn test_operator_keys() {
        let handler = InputHandler::new();
        for op in Operator::ALL {
            assert_eq!(
                handler.handle_key(key_event(KeyCode::Char(op.symbol()))),
                KeyAction::Press(Key::Operator(op))
            );
        }
    }

    // ===== Special keys =====

    #[test]
    fn test_decimal_key() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('.'))),
            KeyAction::Press(Key::Decimal)
        );
    }

    #[test]
    fn test_equals_keys() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('='))),
            KeyAction::Press(Key::Equals)
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Enter)),
            KeyAction::Press(Key::Equals)
        );
    }

    #[test]
    fn test_clear_keys() {
        let handler = InputHandler::new();
        for code in [KeyCode::Char('c'), KeyCode::Char('C'), KeyCode::Esc] {
            assert_eq!(
                handler.handle_key(key_event(code)),
                KeyAction::Press(Key::Clear)
            );
        }
    }

    // ===== Quit keys =====

    #[test]
    fn test_ctrl_c_quits() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('c'))),
            KeyAction::Quit
        );
    }

    #[test]
    fn test_ctrl_q_quits() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('q'))),
            KeyAction::Quit
        );
    }

    #[test]
    fn test_ctrl_other_ignored() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('x'))),
            KeyAction::None
        );
    }

    // ===== Ignored keys =====

    #[test]
    fn test_unmapped_keys_ignored() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('x'))),
            KeyAction::None
        );
        assert_eq!(handler.handle_key(key_event(KeyCode::Tab)), KeyAction::None);
        assert_eq!(
            handler.handle_key(key_event(KeyCode::F(1))),
            KeyAction::None
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Backspace)),
            KeyAction::None
        );
    }
}
