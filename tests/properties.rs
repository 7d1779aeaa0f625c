use letcalc::{ErrorKind, evaluate_top_level};
use proptest::prelude::*;

/// Small non-negative operands, so that sums and products stay in range.
fn operand() -> impl Strategy<Value = i32> {
    0..10_000i32
}

proptest! {
    #[test]
    fn literals_evaluate_to_themselves(n in 0..=i32::MAX) {
        prop_assert_eq!(evaluate_top_level(&n.to_string()), Ok(n));
    }

    #[test]
    fn operators_match_integer_arithmetic(a in operand(), b in operand()) {
        prop_assert_eq!(evaluate_top_level(&format!("add({a},{b})")), Ok(a + b));
        prop_assert_eq!(evaluate_top_level(&format!("sub({a},{b})")), Ok(a - b));
        prop_assert_eq!(evaluate_top_level(&format!("mult({a},{b})")), Ok(a * b));
        if b != 0 {
            prop_assert_eq!(evaluate_top_level(&format!("div({a},{b})")), Ok(a / b));
        }
    }

    #[test]
    fn division_truncates_toward_zero(a in operand(), b in 1..100i32) {
        let src = format!("div(sub(0,{a}),{b})");
        prop_assert_eq!(evaluate_top_level(&src), Ok(-a / b));
    }

    #[test]
    fn zero_divisor_always_fails(a in operand(), b in operand()) {
        let src = format!("div({a},sub({b},{b}))");
        prop_assert_eq!(evaluate_top_level(&src).unwrap_err().kind(), ErrorKind::DivisionByZero);
    }

    #[test]
    fn let_substitutes_its_value(name in "[a-z]{1,8}", v in operand(), c in operand()) {
        let bound = evaluate_top_level(&format!("let({name},{v},add({name},{c}))"));
        prop_assert_eq!(bound, Ok(v + c));
    }

    #[test]
    fn sibling_lets_may_reuse_a_name(name in "[a-z]{1,8}", x in operand(), y in operand()) {
        let src = format!("add(let({name},{x},{name}),let({name},{y},{name}))");
        prop_assert_eq!(evaluate_top_level(&src), Ok(x + y));
    }

    #[test]
    fn nested_lets_may_not_reuse_a_name(name in "[a-z]{1,8}", x in operand(), y in operand()) {
        let src = format!("let({name},{x},let({name},{y},{name}))");
        prop_assert_eq!(evaluate_top_level(&src).unwrap_err().kind(), ErrorKind::Redeclaration);
    }
}
