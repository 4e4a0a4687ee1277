//! DOM keypad for the browser frontend
//!
//! Builds the seventeen keypad buttons from the shared layout. Each button's
//! element id is the key's identity string and its `value` attribute is the
//! key's glyph, so a click event carries exactly the identity/value pair the
//! classification boundary expects.

use crate::core::key::Key;
use crate::core::token::Operator;
use crate::keypad::Keypad;

use super::dom::{DomElement, MockDom};

/// Element id of the display region
pub const DISPLAY_ID: &str = "display";

/// CSS class carried by every keypad button
pub const KEY_CLASS: &str = "key";

/// CSS class marking the highlighted operator button
pub const ACTIVE_CLASS: &str = "is-active";

/// Builds DOM elements for the calculator page
#[derive(Debug, Clone)]
pub struct DomKeypad {
    layout: Keypad,
}

impl Default for DomKeypad {
    fn default() -> Self {
        Self::new()
    }
}

impl DomKeypad {
    /// Creates the DOM keypad over the standard layout
    #[must_use]
    pub fn new() -> Self {
        Self {
            layout: Keypad::new(),
        }
    }

    /// Returns the shared layout
    #[must_use]
    pub fn layout(&self) -> &Keypad {
        &self.layout
    }

    /// Builds the display element
    #[must_use]
    pub fn display_element(&self) -> DomElement {
        DomElement::new("div")
            .with_id(DISPLAY_ID)
            .with_class("screen")
            .with_text("0")
    }

    /// Builds one button element per key
    #[must_use]
    pub fn button_elements(&self) -> Vec<DomElement> {
        self.layout
            .keys()
            .iter()
            .map(|def| {
                let mut button = DomElement::new("button")
                    .with_id(def.key.id())
                    .with_text(def.key.value())
                    .with_class(KEY_CLASS)
                    .with_attr("value", def.key.value());
                if def.col_span > 1 {
                    button = button.with_class("key-wide");
                }
                if def.row_span > 1 {
                    button = button.with_class("key-tall");
                }
                button
            })
            .collect()
    }

    /// Registers the display and all buttons into a DOM
    pub fn install(&self, dom: &mut MockDom) {
        dom.register(self.display_element());
        for button in self.button_elements() {
            dom.register(button);
        }
    }

    /// Maps a DOM keyboard `key` string to a calculator key
    #[must_use]
    pub fn key_from_keyboard(key: &str) -> Option<Key> {
        let mut chars = key.chars();
        if let (Some(ch), None) = (chars.next(), chars.next()) {
            if let Some(digit) = ch.to_digit(10) {
                return Some(Key::Digit(digit as u8));
            }
            if let Some(op) = Operator::from_symbol(ch) {
                return Some(Key::Operator(op));
            }
        }
        match key {
            "." => Some(Key::Decimal),
            "=" | "Enter" => Some(Key::Equals),
            "Escape" | "c" | "C" => Some(Key::Clear),
            _ => None,
        }
    }
}
