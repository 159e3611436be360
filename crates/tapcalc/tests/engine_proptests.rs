//! Property-based tests for the calculator engine

use proptest::prelude::*;
use tapcalc::{BinaryOp, Engine, Key, Mode};

// ===== Strategy definitions =====

fn digit_strategy() -> impl Strategy<Value = u8> {
    0u8..=9u8
}

fn digit_key_strategy() -> impl Strategy<Value = Key> {
    digit_strategy().prop_filter_map("digit out of range", Key::digit)
}

fn operator_strategy() -> impl Strategy<Value = BinaryOp> {
    prop_oneof![
        Just(BinaryOp::Add),
        Just(BinaryOp::Subtract),
        Just(BinaryOp::Multiply),
        Just(BinaryOp::Divide),
    ]
}

fn key_strategy() -> impl Strategy<Value = Key> {
    prop_oneof![
        4 => digit_key_strategy(),
        1 => Just(Key::Decimal),
        2 => operator_strategy().prop_map(Key::Operator),
        1 => Just(Key::ToggleSign),
        1 => Just(Key::Percent),
        1 => Just(Key::Clear),
        1 => Just(Key::Equals),
    ]
}

fn entry_key_strategy() -> impl Strategy<Value = Key> {
    prop_oneof![
        4 => digit_key_strategy(),
        1 => Just(Key::Decimal),
    ]
}

fn run(keys: &[Key]) -> Engine {
    let mut engine = Engine::new();
    for key in keys {
        engine.handle_key(*key);
    }
    engine
}

fn is_numeric_display(display: &str) -> bool {
    let body = display.strip_prefix('-').unwrap_or(display);
    !body.is_empty()
        && body.chars().all(|c| c.is_ascii_digit() || c == '.')
        && body.chars().filter(|&c| c == '.').count() <= 1
}

// ===== Properties =====

proptest! {
    /// Clear always restores the initial state
    #[test]
    fn prop_clear_resets(keys in prop::collection::vec(key_strategy(), 0..40)) {
        let mut engine = run(&keys);
        engine.handle_key(Key::Clear);
        prop_assert_eq!(engine.expression(), "");
        prop_assert_eq!(engine.display(), "0");
        prop_assert!(!engine.just_evaluated());
        prop_assert_eq!(engine.mode(), Mode::Entering);
    }

    /// Digits typed from a fresh engine concatenate
    #[test]
    fn prop_digits_concatenate(
        first in 1u8..=9u8,
        rest in prop::collection::vec(digit_strategy(), 0..12),
    ) {
        let mut keys = vec![Key::Digit(first)];
        keys.extend(rest.iter().copied().map(Key::Digit));
        let engine = run(&keys);

        let expected: String = std::iter::once(first)
            .chain(rest)
            .map(|d| char::from(b'0' + d))
            .collect();
        prop_assert_eq!(engine.display(), expected);
    }

    /// Never more than one decimal point on the display
    #[test]
    fn prop_single_decimal_point(
        keys in prop::collection::vec(entry_key_strategy(), 0..30),
    ) {
        let engine = run(&keys);
        prop_assert!(engine.display().matches('.').count() <= 1);
    }

    /// The display is always a number or the error marker
    #[test]
    fn prop_display_well_formed(keys in prop::collection::vec(key_strategy(), 0..40)) {
        let engine = run(&keys);
        if engine.is_error() {
            prop_assert_eq!(engine.display(), "Erreur");
        } else {
            prop_assert!(
                is_numeric_display(engine.display()),
                "display {:?}",
                engine.display()
            );
        }
    }

    /// Toggling the sign twice is the identity
    #[test]
    fn prop_toggle_sign_involution(keys in prop::collection::vec(key_strategy(), 0..30)) {
        let mut engine = run(&keys);
        let before = engine.display().to_string();
        engine.handle_key(Key::ToggleSign);
        engine.handle_key(Key::ToggleSign);
        prop_assert_eq!(engine.display(), before);
    }

    /// Toggling zero does nothing
    #[test]
    fn prop_toggle_zero_noop(presses in 1usize..5) {
        let engine = run(&vec![Key::ToggleSign; presses]);
        prop_assert_eq!(engine.display(), "0");
    }

    /// An operator after a result starts a new expression led by that result
    #[test]
    fn prop_result_reuse(
        a in 1u8..=9u8,
        b in 1u8..=9u8,
        op in operator_strategy(),
        next in operator_strategy(),
    ) {
        let mut engine = run(&[
            Key::Digit(a),
            Key::Operator(op),
            Key::Digit(b),
            Key::Equals,
        ]);
        let result = engine.display().to_string();
        engine.handle_key(Key::Operator(next));
        prop_assert_eq!(engine.expression(), format!("{} {} ", result, next.glyph()));
        prop_assert_eq!(engine.display(), "0");
        prop_assert!(!engine.just_evaluated());
    }

    /// Overlong operands end in the error marker, never `inf`
    #[test]
    fn prop_overlong_operand_is_error(
        digits in 309usize..400,
        last in prop_oneof![Just(Key::Equals), Just(Key::Percent)],
    ) {
        let mut keys = vec![Key::Digit(9); digits];
        keys.push(last);
        let engine = run(&keys);
        prop_assert!(engine.is_error());
        prop_assert_eq!(engine.display(), "Erreur");
    }

    /// `=` right after a result fails and keeps the evaluated expression
    #[test]
    fn prop_equals_after_result_is_error(
        a in 1u8..=9u8,
        b in 1u8..=9u8,
        op in operator_strategy(),
    ) {
        let keys = [
            Key::Digit(a),
            Key::Operator(op),
            Key::Digit(b),
            Key::Equals,
        ];
        let mut engine = run(&keys);
        let expression = engine.expression().to_string();
        engine.handle_key(Key::Equals);
        prop_assert!(engine.is_error());
        prop_assert_eq!(engine.expression(), expression);
        prop_assert!(engine.just_evaluated());
    }

    /// Only clear and digits leave the error state
    #[test]
    fn prop_error_is_sticky(key in key_strategy()) {
        let mut engine = run(&[
            Key::Digit(5),
            Key::Operator(BinaryOp::Divide),
            Key::Digit(0),
            Key::Equals,
        ]);
        prop_assert!(engine.is_error());
        engine.handle_key(key);
        match key {
            Key::Clear | Key::Digit(_) => {
                prop_assert!(!engine.is_error());
            }
            _ => {
                prop_assert!(engine.is_error());
                prop_assert_eq!(engine.display(), "Erreur");
                prop_assert_eq!(engine.expression(), "5 ÷ ");
            }
        }
    }
}
