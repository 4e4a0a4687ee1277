//! Unified calculator driver
//!
//! One trait both frontends implement, so the keystroke-level behavior can
//! be specified once and verified everywhere: a driver presses keys by
//! identity and reports what the user would see.

use crate::core::token::Operator;

/// Abstract driver over a calculator frontend
pub trait CalculatorDriver {
    /// Presses the key with the given identity string
    fn press(&mut self, id: &str);

    /// Returns the display string
    fn display(&self) -> String;

    /// Returns the operator currently highlighted, if any
    fn active_operator(&self) -> Option<Operator>;
}

/// Presses a sequence of keys by identity
pub fn press_sequence<D: CalculatorDriver>(driver: &mut D, ids: &[&str]) {
    for id in ids {
        driver.press(id);
    }
}

/// TUI driver implementation
#[cfg(feature = "tui")]
pub mod tui_driver {
    use super::CalculatorDriver;
    use crate::core::key::Key;
    use crate::core::token::Operator;
    use crate::tui::CalculatorApp;

    /// Drives the TUI application state directly
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: CalculatorApp,
    }

    impl TuiDriver {
        /// Creates a fresh TUI driver
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Returns the underlying app
        #[must_use]
        pub fn app(&self) -> &CalculatorApp {
            &self.app
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn press(&mut self, id: &str) {
            match Key::from_id(id) {
                Some(key) => self.app.press(key),
                None => tracing::warn!("ignoring unknown key identity '{id}'"),
            }
        }

        fn display(&self) -> String {
            self.app.display()
        }

        fn active_operator(&self) -> Option<Operator> {
            self.app.last_operator()
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

// ===== Unified keystroke specifications =====
// Each runs against ANY CalculatorDriver implementation.

/// Digits concatenate with the leading zero suppressed
pub fn verify_digit_entry<D: CalculatorDriver>(driver: &mut D) {
    press_sequence(driver, &["clear", "zero", "five", "one"]);
    assert_eq!(driver.display(), "51");
    driver.press("clear");
}

/// A second decimal press on the same operand is a no-op
pub fn verify_decimal_idempotence<D: CalculatorDriver>(driver: &mut D) {
    press_sequence(driver, &["clear", "one", "decimal", "five", "decimal", "two"]);
    assert_eq!(driver.display(), "1.52");
    driver.press("clear");
}

/// Clear, 7, +, 3, = displays 10
pub fn verify_round_trip<D: CalculatorDriver>(driver: &mut D) {
    press_sequence(driver, &["clear", "seven", "add", "three", "equals"]);
    assert_eq!(driver.display(), "10");
    driver.press("clear");
}

/// A non-minus operator replaces the pending operator
pub fn verify_operator_replacement<D: CalculatorDriver>(driver: &mut D) {
    press_sequence(driver, &["clear", "five", "add", "multiply", "three", "equals"]);
    assert_eq!(driver.display(), "15");
    driver.press("clear");
}

/// Subtract after an operator layers a negative operand; 5 + - 3 = 2
pub fn verify_layered_minus<D: CalculatorDriver>(driver: &mut D) {
    press_sequence(driver, &["clear", "five", "add", "subtract", "three", "equals"]);
    assert_eq!(driver.display(), "2");
    driver.press("clear");
}

/// A third subtract in a row is dropped; the result is unchanged
pub fn verify_repeated_minus_ignored<D: CalculatorDriver>(driver: &mut D) {
    press_sequence(
        driver,
        &["clear", "five", "add", "subtract", "subtract", "three"],
    );
    assert_eq!(driver.display(), "5+-3");
    driver.press("equals");
    assert_eq!(driver.display(), "2");
    driver.press("clear");
}

/// A digit after equals starts a fresh buffer
pub fn verify_reset_after_equals<D: CalculatorDriver>(driver: &mut D) {
    press_sequence(driver, &["clear", "five", "add", "three", "equals", "nine"]);
    assert_eq!(driver.display(), "9");
    driver.press("clear");
}

/// Division by zero shows the IEEE result instead of failing
pub fn verify_division_by_zero<D: CalculatorDriver>(driver: &mut D) {
    press_sequence(driver, &["clear", "five", "divide", "zero", "equals"]);
    assert_eq!(driver.display(), "inf");
    driver.press("clear");
}

/// Clear always restores the zero display
pub fn verify_clear_resets<D: CalculatorDriver>(driver: &mut D) {
    press_sequence(driver, &["one", "add", "two", "decimal", "five", "clear"]);
    assert_eq!(driver.display(), "0");
    assert_eq!(driver.active_operator(), None);
}

/// The highlight follows the most recent applied operator press
pub fn verify_operator_highlight<D: CalculatorDriver>(driver: &mut D) {
    press_sequence(driver, &["clear", "five", "add"]);
    assert_eq!(driver.active_operator(), Some(Operator::Add));
    driver.press("multiply");
    assert_eq!(driver.active_operator(), Some(Operator::Multiply));
    driver.press("equals");
    assert_eq!(driver.active_operator(), None);
    driver.press("clear");
}

/// Malformed keystrokes are dropped without touching state
pub fn verify_malformed_keys_ignored<D: CalculatorDriver>(driver: &mut D) {
    press_sequence(driver, &["clear", "five"]);
    press_sequence(driver, &["", "modulo", "percent"]);
    assert_eq!(driver.display(), "5");
    driver.press("clear");
}

/// Runs every keystroke specification
pub fn run_full_specification<D: CalculatorDriver>(driver: &mut D) {
    verify_digit_entry(driver);
    verify_decimal_idempotence(driver);
    verify_round_trip(driver);
    verify_operator_replacement(driver);
    verify_layered_minus(driver);
    verify_repeated_minus_ignored(driver);
    verify_reset_after_equals(driver);
    verify_division_by_zero(driver);
    verify_clear_resets(driver);
    verify_operator_highlight(driver);
    verify_malformed_keys_ignored(driver);
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== TUI driver =====

    #[cfg(feature = "tui")]
    mod tui_tests {
        use super::*;

        #[test]
        fn test_tui_driver_new() {
            let driver = TuiDriver::new();
            assert_eq!(driver.display(), "0");
        }

        #[test]
        fn test_tui_driver_press_by_id() {
            let mut driver = TuiDriver::new();
            press_sequence(&mut driver, &["four", "two"]);
            assert_eq!(driver.display(), "42");
            assert_eq!(driver.app().display(), "42");
        }

        #[test]
        fn test_tui_driver_unknown_id_ignored() {
            let mut driver = TuiDriver::new();
            driver.press("modulo");
            assert_eq!(driver.display(), "0");
        }

        #[test]
        fn test_unified_digit_entry() {
            verify_digit_entry(&mut TuiDriver::new());
        }

        #[test]
        fn test_unified_decimal_idempotence() {
            verify_decimal_idempotence(&mut TuiDriver::new());
        }

        #[test]
        fn test_unified_round_trip() {
            verify_round_trip(&mut TuiDriver::new());
        }

        #[test]
        fn test_unified_operator_replacement() {
            verify_operator_replacement(&mut TuiDriver::new());
        }

        #[test]
        fn test_unified_layered_minus() {
            verify_layered_minus(&mut TuiDriver::new());
        }

        #[test]
        fn test_unified_repeated_minus() {
            verify_repeated_minus_ignored(&mut TuiDriver::new());
        }

        #[test]
        fn test_unified_reset_after_equals() {
            verify_reset_after_equals(&mut TuiDriver::new());
        }

        #[test]
        fn test_unified_division_by_zero() {
            verify_division_by_zero(&mut TuiDriver::new());
        }

        #[test]
        fn test_unified_clear_resets() {
            verify_clear_resets(&mut TuiDriver::new());
        }

        #[test]
        fn test_unified_operator_highlight() {
            verify_operator_highlight(&mut TuiDriver::new());
        }

        #[test]
        fn test_unified_malformed_keys() {
            verify_malformed_keys_ignored(&mut TuiDriver::new());
        }

        #[test]
        fn test_full_specification() {
            run_full_specification(&mut TuiDriver::new());
        }
    }
}
