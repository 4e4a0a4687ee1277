//! The fixed seventeen-key keypad layout
//!
//! Both frontends render the same 4-column grid:
//!
//! ```text
//! [   AC    ] [ / ] [ * ]
//! [ 1 ] [ 2 ] [ 3 ] [ + ]
//! [ 4 ] [ 5 ] [ 6 ] [ - ]
//! [ 7 ] [ 8 ] [ 9 ] [   ]
//! [   0    ] [ . ] [ = ]
//! ```
//!
//! Clear and Zero are two columns wide; Equals is two rows tall.

use crate::core::key::Key;

/// Grid columns
pub const COLS: usize = 4;
/// Grid rows
pub const ROWS: usize = 5;

/// One key's place in the grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyDef {
    /// The key this cell dispatches
    pub key: Key,
    /// Grid row (0-indexed, top to bottom)
    pub row: usize,
    /// Grid column (0-indexed, left to right)
    pub col: usize,
    /// Number of columns the key covers
    pub col_span: usize,
    /// Number of rows the key covers
    pub row_span: usize,
}

impl KeyDef {
    fn new(key: Key, row: usize, col: usize) -> Self {
        Self {
            key,
            row,
            col,
            col_span: 1,
            row_span: 1,
        }
    }

    fn spanning(key: Key, row: usize, col: usize, col_span: usize, row_span: usize) -> Self {
        Self {
            key,
            row,
            col,
            col_span,
            row_span,
        }
    }

    /// Returns true if the key covers the given grid cell
    #[must_use]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        (self.row..self.row + self.row_span).contains(&row)
            && (self.col..self.col + self.col_span).contains(&col)
    }
}

/// The fixed keypad layout
#[derive(Debug, Clone)]
pub struct Keypad {
    keys: Vec<KeyDef>,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard seventeen-key layout
    #[must_use]
    pub fn new() -> Self {
        use crate::core::token::Operator::{Add, Divide, Multiply, Subtract};

        let keys = vec![
            // Row 0: AC (wide), /, *
            KeyDef::spanning(Key::Clear, 0, 0, 2, 1),
            KeyDef::new(Key::Operator(Divide), 0, 2),
            KeyDef::new(Key::Operator(Multiply), 0, 3),
            // Row 1: 1 2 3 +
            KeyDef::new(Key::Digit(1), 1, 0),
            KeyDef::new(Key::Digit(2), 1, 1),
            KeyDef::new(Key::Digit(3), 1, 2),
            KeyDef::new(Key::Operator(Add), 1, 3),
            // Row 2: 4 5 6 -
            KeyDef::new(Key::Digit(4), 2, 0),
            KeyDef::new(Key::Digit(5), 2, 1),
            KeyDef::new(Key::Digit(6), 2, 2),
            KeyDef::new(Key::Operator(Subtract), 2, 3),
            // Row 3: 7 8 9 = (tall)
            KeyDef::new(Key::Digit(7), 3, 0),
            KeyDef::new(Key::Digit(8), 3, 1),
            KeyDef::new(Key::Digit(9), 3, 2),
            KeyDef::spanning(Key::Equals, 3, 3, 1, 2),
            // Row 4: 0 (wide), .
            KeyDef::spanning(Key::Digit(0), 4, 0, 2, 1),
            KeyDef::new(Key::Decimal, 4, 2),
        ];

        Self { keys }
    }

    /// Returns every key definition in layout order
    #[must_use]
    pub fn keys(&self) -> &[KeyDef] {
        &self.keys
    }

    /// Returns the number of keys
    #[must_use]
    pub fn key_count(&self) -> usize {
        self.keys.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (ROWS, COLS)
    }

    /// Finds a key by its identity string
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&KeyDef> {
        self.keys.iter().find(|def| def.key.id() == id)
    }

    /// Finds a key by its display value
    #[must_use]
    pub fn find_by_value(&self, value: &str) -> Option<&KeyDef> {
        self.keys.iter().find(|def| def.key.value() == value)
    }

    /// Returns the key covering a grid cell, honoring spans
    #[must_use]
    pub fn key_at(&self, row: usize, col: usize) -> Option<&KeyDef> {
        self.keys.iter().find(|def| def.contains(row, col))
    }
}
