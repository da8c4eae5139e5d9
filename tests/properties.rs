use attrcalc::{SymbolTable, evaluate, parse_statement, tokenize};
use proptest::prelude::*;

/// A variable-free expression together with its source text and the value
/// direct floating-point arithmetic gives for it.
#[derive(Debug, Clone)]
struct Case {
    source: String,
    value:  f64,
}

fn literal() -> impl Strategy<Value = Case> {
    (0u32..1000, 0u32..100).prop_map(|(whole, hundredths)| {
                               let source = format!("{whole}.{hundredths:02}");
                               let value = source.parse().unwrap_or_default();
                               Case { source, value }
                           })
}

fn combine(left: &Case, op: char, right: &Case) -> Option<Case> {
    let value = match op {
        '+' => left.value + right.value,
        '-' => left.value - right.value,
        '*' => left.value * right.value,
        _ => {
            if right.value == 0.0 {
                return None;
            }
            left.value / right.value
        },
    };
    Some(Case { source: format!("({} {op} {})", left.source, right.source),
                value })
}

fn expression() -> impl Strategy<Value = Case> {
    literal().prop_recursive(4, 32, 2, |inner| {
                 (inner.clone(), prop::sample::select(vec!['+', '-', '*', '/']), inner)
                     .prop_filter_map("division by zero", |(left, op, right)| {
                         combine(&left, op, &right)
                     })
             })
}

fn eval(source: &str) -> f64 {
    let tree = parse_statement(&tokenize(source).unwrap()).unwrap();
    evaluate(&tree, &mut SymbolTable::new()).unwrap()
}

proptest! {
    #[test]
    fn fully_parenthesized_expressions_match_direct_arithmetic(case in expression()) {
        let value = eval(&case.source);
        prop_assert!(value == case.value || (value.is_nan() && case.value.is_nan()),
                     "{} evaluated to {} instead of {}", case.source, value, case.value);
    }

    #[test]
    fn precedence_and_left_associativity(a in 1u32..100, b in 1u32..100, c in 1u32..100, d in 1u32..100) {
        let (fa, fb, fc, fd) = (f64::from(a), f64::from(b), f64::from(c), f64::from(d));

        prop_assert_eq!(eval(&format!("{a} + {b} * {c} - {d}")), fa + fb * fc - fd);
        prop_assert_eq!(eval(&format!("{a} - {b} - {c} - {d}")), ((fa - fb) - fc) - fd);
        prop_assert_eq!(eval(&format!("{a} / {b} / {c} * {d}")), ((fa / fb) / fc) * fd);
        prop_assert_eq!(eval(&format!("{a} * {b} + {c} / {d}")), fa * fb + fc / fd);
    }
}
