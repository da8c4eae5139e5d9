use attrcalc::{Error, EvalError, get_result};

fn assert_value(src: &str, expected: f64) {
    match get_result(src) {
        Ok(values) => assert_eq!(values.last().copied(),
                                 Some(expected),
                                 "Script {src:?} produced {values:?}"),
        Err(e) => panic!("Script failed: {e}"),
    }
}

fn assert_failure(src: &str) -> Error {
    match get_result(src) {
        Ok(values) => panic!("Script succeeded with {values:?} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn basic_arithmetic() {
    assert_value("1 + 2", 3.0);
    assert_value("7 * 9", 63.0);
    assert_value("8 - 5", 3.0);
    assert_value("10 / 4", 2.5);
}

#[test]
fn precedence_and_grouping() {
    assert_value("2 + 3 * 4", 14.0);
    assert_value("(2 + 3) * 4", 20.0);
    assert_value("2 * 3 + 4 * 5", 26.0);
    assert_value("((7))", 7.0);
    assert_value("2 * (3 + (4 - 1)) / 3", 4.0);
}

#[test]
fn left_associativity() {
    assert_value("10 - 4 - 3", 3.0);
    assert_value("64 / 4 / 2", 8.0);
    assert_value("8 / 2 * 4", 16.0);
    assert_value("1 - 2 + 3", 2.0);
}

#[test]
fn decimals() {
    assert_value("3.5 + 0.25", 3.75);
    assert_value("1. + 1", 2.0);
    assert_value("0.1 + 0.2", 0.1 + 0.2);
}

#[test]
fn assignment_and_use() {
    assert_value("x = 5\nx + 3", 8.0);
    assert_value("a = 1\na = a + 1\na", 2.0);
    assert_value("foo_1 = 2\nbar = foo_1 * foo_1\nbar - 1", 3.0);
}

#[test]
fn assignment_yields_its_value() {
    assert_eq!(get_result("x = 4 * 2").unwrap(), vec![8.0]);
}

#[test]
fn statements_may_span_lines() {
    assert_value("2 +\n3", 5.0);
    assert_value("2\n+ 3", 5.0);
    assert_value("(1 +\n2)\n* 3", 9.0);
}

#[test]
fn division_by_zero() {
    assert!(matches!(assert_failure("1 / 0"),
                     Error::Eval(EvalError::DivisionByZero { line: 1 })));
    assert!(matches!(assert_failure("y = 3\n\ny / (y - y)"),
                     Error::Eval(EvalError::DivisionByZero { line: 3 })));
}

#[test]
fn undefined_variable() {
    let Error::Eval(EvalError::UndefinedVariable { name, line }) = assert_failure("z + 1") else {
        panic!("expected an undefined variable error");
    };
    assert_eq!((name.as_str(), line), ("z", 1));
}

#[test]
fn syntax_errors() {
    assert!(matches!(assert_failure("2 +"), Error::Parse(_)));
    assert!(matches!(assert_failure("(1 + 2"), Error::Parse(_)));
    assert!(matches!(assert_failure("2 3"), Error::Parse(_)));
    assert!(matches!(assert_failure("= 3"), Error::Parse(_)));
    assert!(matches!(assert_failure("x = = 3"), Error::Parse(_)));
    assert!(matches!(assert_failure("2 ^ 3"), Error::Lex(_)));
}

#[test]
fn empty_source_has_no_statements() {
    assert_eq!(get_result("").unwrap(), Vec::<f64>::new());
    assert_eq!(get_result("  \n\t\n").unwrap(), Vec::<f64>::new());
}

#[test]
fn error_lines_follow_the_source() {
    assert_eq!(assert_failure("1\n2\n3 $").line(), 3);
    assert_eq!(assert_failure("1\n\n(2").line(), 3);
}
