//! End-to-end key sequences through the public API

use tapcalc::{ArithmeticEvaluator, Engine, EngineConfig, Key, Mode};

fn press(keys: &str) -> Engine {
    let mut engine = Engine::new();
    engine.press_all(keys).unwrap();
    engine
}

#[test]
fn test_precedence_and_auto_completion() {
    let engine = press("5 + 3 × 2 =");
    assert_eq!(engine.rendered_display(), "11");
    assert_eq!(engine.rendered_expression(), "5 + 3 × 2 =");
    assert!(engine.just_evaluated());
}

#[test]
fn test_repeating_fraction_is_trimmed() {
    let engine = press("1 ÷ 3 =");
    assert!(engine.display().starts_with("0.333333"));
    assert_eq!(engine.display(), "0.333333");
}

#[test]
fn test_division_by_zero_shows_marker() {
    let engine = press("5 ÷ 0 =");
    assert_eq!(engine.rendered_display(), "Erreur");
    assert_eq!(engine.mode(), Mode::Error);
}

#[test]
fn test_result_becomes_leading_operand() {
    let engine = press("5 + 3 × 2 = ÷");
    assert_eq!(engine.expression(), "11 ÷ ");
    assert_eq!(engine.display(), "0");
}

#[test]
fn test_percent_divides_in_place() {
    let engine = press("5 0 %");
    assert_eq!(engine.display(), "0.5");
}

#[test]
fn test_decimal_entry_and_sum() {
    let engine = press("0 . 1 + 0 . 2 =");
    assert_eq!(engine.display(), "0.3");
    assert_eq!(engine.expression(), "0.1 + 0.2 =");
}

#[test]
fn test_trailing_decimal_point_operand() {
    let engine = press("4 . × 2 =");
    assert_eq!(engine.expression(), "4. × 2 =");
    assert_eq!(engine.display(), "8");
}

#[test]
fn test_recovery_by_digit() {
    let engine = press("9 ÷ 0 = 6 × 7 =");
    assert_eq!(engine.display(), "42");
    assert_eq!(engine.expression(), "6 × 7 =");
}

#[test]
fn test_negative_results() {
    let engine = press("3 - 1 0 =");
    assert_eq!(engine.display(), "-7");
}

#[test]
fn test_keypad_labels_drive_engine() {
    let mut engine = Engine::new();
    for key in Key::ALL {
        engine.handle_key(key);
    }
    assert_eq!(engine.expression(), "0 ÷ 789 × 456 - 123 + 0. =");
    assert_eq!(engine.display(), "-123");
}

#[test]
fn test_explicit_evaluator() {
    let mut engine = Engine::with_evaluator(EngineConfig::default(), ArithmeticEvaluator::new());
    engine.press_all("2 × 2 × 2 =").unwrap();
    assert_eq!(engine.display(), "8");
}
