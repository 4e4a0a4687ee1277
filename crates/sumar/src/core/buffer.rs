//! The token-buffer engine
//!
//! [`TokenBuffer`] owns the ordered token sequence and the rules for
//! mutating it on each keystroke category. The buffer is never empty: it
//! starts as `["0"]`, Clear restores that state, and Equals collapses it to
//! the formatted result while arming the reset flag so the next operand
//! entry starts fresh.

use super::reduce::{format_number, reduce};
use super::token::{digit_char, Operator, Token};

/// Outcome of an operator keypress
///
/// A Subtract pressed while two operators are already trailing is dropped
/// outright; callers use the outcome to decide whether the keypress counts
/// as the most recent operator press (highlighting, for one).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorPress {
    /// The press mutated the buffer
    Applied,
    /// The press was dropped without touching the buffer
    Ignored,
}

/// Ordered keystroke tokens plus the reset flag
#[derive(Debug, Clone, PartialEq)]
pub struct TokenBuffer {
    tokens: Vec<Token>,
    reset: bool,
}

impl Default for TokenBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenBuffer {
    /// Creates the initial `["0"]` buffer
    #[must_use]
    pub fn new() -> Self {
        Self {
            tokens: vec![Token::zero()],
            reset: false,
        }
    }

    /// Returns the token sequence
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Returns true while the next operand entry should start a fresh buffer
    #[must_use]
    pub fn reset_pending(&self) -> bool {
        self.reset
    }

    /// Renders the buffer as the display string
    #[must_use]
    pub fn display(&self) -> String {
        self.tokens.iter().map(Token::text).collect()
    }

    /// Handles a digit keypress (0-9)
    pub fn press_digit(&mut self, digit: u8) {
        if self.reset {
            self.tokens = vec![Token::digit(digit)];
            self.reset = false;
            return;
        }

        // A pending binary operator with an operand already present starts
        // the next operand as its own token.
        if self.last_is_op() && self.second_to_last_is_operand() {
            self.tokens.push(Token::digit(digit));
            return;
        }

        // Otherwise the digit extends the last token. Extending an operator
        // token turns it into a signed numeric fragment ("-" then "3" is
        // the literal "-3").
        if let Some(last) = self.tokens.last_mut() {
            match last {
                Token::Number(literal) if literal == "0" => {
                    *literal = digit_char(digit).to_string();
                }
                Token::Number(literal) => literal.push(digit_char(digit)),
                Token::Op(op) => {
                    *last = Token::Number(format!("{}{}", op.symbol(), digit_char(digit)));
                }
            }
        }
    }

    /// Handles the decimal-point keypress
    pub fn press_decimal(&mut self) {
        if self.reset {
            self.tokens = vec![Token::Number(".".to_string())];
            self.reset = false;
            return;
        }

        if let Some(last) = self.tokens.last_mut() {
            match last {
                // One decimal point per operand.
                Token::Number(literal) if literal.contains('.') => {}
                Token::Number(literal) => literal.push('.'),
                Token::Op(op) => {
                    *last = Token::Number(format!("{}.", op.symbol()));
                }
            }
        }
    }

    /// Handles an operator keypress
    pub fn press_operator(&mut self, op: Operator) -> OperatorPress {
        self.reset = false;

        // No operand yet: the operator takes the place of the seed zero.
        if self.tokens.len() < 2 {
            if let Some(Token::Number(literal)) = self.tokens.first() {
                if literal == "0" {
                    self.tokens.clear();
                    self.tokens.push(Token::Op(op));
                    return OperatorPress::Applied;
                }
            }
        }

        let last_is_op = self.last_is_op();
        let prev_is_op = self.tokens.len() >= 2
            && self
                .tokens
                .get(self.tokens.len() - 2)
                .is_some_and(Token::is_op);

        if last_is_op && prev_is_op {
            // Two operators already trailing. Another Subtract is dropped;
            // anything else collapses both into the new operator.
            if op == Operator::Subtract {
                return OperatorPress::Ignored;
            }
            self.tokens.truncate(self.tokens.len() - 2);
            self.tokens.push(Token::Op(op));
            return OperatorPress::Applied;
        }

        if last_is_op {
            // Subtract layers on top of the pending operator, setting up a
            // negative next operand; any other operator replaces it.
            if op == Operator::Subtract {
                self.tokens.push(Token::Op(op));
            } else if let Some(last) = self.tokens.last_mut() {
                *last = Token::Op(op);
            }
            return OperatorPress::Applied;
        }

        self.tokens.push(Token::Op(op));
        OperatorPress::Applied
    }

    /// Handles the clear keypress
    pub fn press_clear(&mut self) {
        self.tokens = vec![Token::zero()];
        self.reset = false;
    }

    /// Handles the equals keypress, collapsing the buffer to the result
    pub fn press_equals(&mut self) -> f64 {
        let result = reduce(&self.tokens);
        self.tokens = vec![Token::Number(format_number(result))];
        self.reset = true;
        result
    }

    fn last_is_op(&self) -> bool {
        self.tokens.last().is_some_and(Token::is_op)
    }

    fn second_to_last_is_operand(&self) -> bool {
        self.tokens.len() >= 2
            && self
                .tokens
                .get(self.tokens.len() - 2)
                .is_some_and(|token| !token.is_op())
    }
}
