//! Keystroke acceptance tests
//!
//! The calculator's observable contract, exercised end to end through the
//! unified driver against both frontends.

use sumar::driver::{press_sequence, run_full_specification};
use sumar::prelude::*;
use sumar::wasm::{ACTIVE_CLASS, DISPLAY_ID};

// ===== Browser frontend =====

#[test]
fn test_wasm_full_specification() {
    run_full_specification(&mut WasmDriver::new());
}

#[test]
fn test_wasm_display_element_tracks_engine() {
    let mut driver = WasmDriver::new();
    press_sequence(&mut driver, &["one", "decimal", "five", "multiply", "two"]);
    assert_eq!(driver.dom().text(DISPLAY_ID), Some("1.5*2"));
}

#[test]
fn test_wasm_highlight_class_follows_operator() {
    let mut driver = WasmDriver::new();
    press_sequence(&mut driver, &["eight", "divide"]);
    let divide = driver.dom().element("divide").unwrap();
    assert!(divide.has_class(ACTIVE_CLASS));

    press_sequence(&mut driver, &["two", "equals"]);
    let divide = driver.dom().element("divide").unwrap();
    assert!(!divide.has_class(ACTIVE_CLASS));
    assert_eq!(driver.display(), "4");
}

#[test]
fn test_wasm_state_snapshot_roundtrip() {
    let mut driver = WasmDriver::new();
    press_sequence(&mut driver, &["nine", "subtract"]);
    let json = driver.calculator().state_json();
    let state: CalcState = serde_json::from_str(&json).unwrap();
    assert_eq!(state.display, "9-");
    assert_eq!(state.active_operator.as_deref(), Some("subtract"));
    assert!(!state.reset);
}

#[test]
fn test_wasm_keyboard_and_clicks_mix() {
    let mut driver = WasmDriver::new();
    driver.key_down("7");
    driver.press("add");
    driver.key_down("3");
    driver.key_down("Enter");
    assert_eq!(driver.display(), "10");
}

// ===== Terminal frontend =====

#[cfg(feature = "tui")]
mod tui {
    use super::*;

    #[test]
    fn test_tui_full_specification() {
        run_full_specification(&mut TuiDriver::new());
    }

    #[test]
    fn test_tui_chained_calculation() {
        let mut driver = TuiDriver::new();
        press_sequence(&mut driver, &["five", "add", "three", "equals"]);
        assert_eq!(driver.display(), "8");
        // The result seeds the next calculation.
        press_sequence(&mut driver, &["multiply", "two", "equals"]);
        assert_eq!(driver.display(), "16");
    }

    #[test]
    fn test_tui_fresh_entry_after_equals() {
        let mut driver = TuiDriver::new();
        press_sequence(&mut driver, &["five", "add", "three", "equals", "nine"]);
        assert_eq!(driver.display(), "9");
    }
}

// ===== Canonical scenarios, spelled out =====

#[test]
fn test_leading_zero_suppression() {
    let mut driver = WasmDriver::new();
    press_sequence(&mut driver, &["zero", "five"]);
    assert_eq!(driver.display(), "5");
}

#[test]
fn test_decimal_twice_single_point() {
    let mut driver = WasmDriver::new();
    press_sequence(&mut driver, &["one", "decimal", "decimal", "five"]);
    assert_eq!(driver.display(), "1.5");
}

#[test]
fn test_seven_plus_three_is_ten() {
    let mut driver = WasmDriver::new();
    press_sequence(&mut driver, &["clear", "seven", "add", "three", "equals"]);
    assert_eq!(driver.display(), "10");
}

#[test]
fn test_add_then_subtract_yields_two() {
    let mut driver = WasmDriver::new();
    press_sequence(&mut driver, &["five", "add", "subtract", "three", "equals"]);
    assert_eq!(driver.display(), "2");
}

#[test]
fn test_repeated_minus_is_ignored() {
    let mut driver = WasmDriver::new();
    press_sequence(
        &mut driver,
        &["five", "add", "subtract", "subtract", "three", "equals"],
    );
    assert_eq!(driver.display(), "2");
}

#[test]
fn test_division_by_zero_displays_inf() {
    let mut driver = WasmDriver::new();
    press_sequence(&mut driver, &["five", "divide", "zero", "equals"]);
    assert_eq!(driver.display(), "inf");
}

#[test]
fn test_clear_from_any_depth() {
    let mut driver = WasmDriver::new();
    press_sequence(
        &mut driver,
        &["one", "add", "two", "multiply", "three", "clear"],
    );
    assert_eq!(driver.display(), "0");
}
