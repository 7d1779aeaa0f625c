use std::fs;

use letcalc::{ErrorKind, Scope, evaluate, evaluate_top_level, get_result};
use walkdir::WalkDir;

fn assert_success(src: &str, expected: i32) {
    match get_result(src) {
        Ok(value) => assert_eq!(value, expected, "wrong result for {src:?}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_failure(src: &str, kind: ErrorKind) {
    match get_result(src) {
        Ok(value) => panic!("Expression {src:?} succeeded with {value} but was expected to fail"),
        Err(e) => assert_eq!(e.kind(), kind, "wrong error for {src:?}: {e}"),
    }
}

fn parse_kind(name: &str) -> ErrorKind {
    match name {
        "syntax" => ErrorKind::Syntax,
        "redeclaration" => ErrorKind::Redeclaration,
        "undeclared" => ErrorKind::UndeclaredVariable,
        "division" => ErrorKind::DivisionByZero,
        "number" => ErrorKind::NumberFormat,
        "overflow" => ErrorKind::Overflow,
        other => panic!("Unknown error kind '{other}' in case file"),
    }
}

#[test]
fn case_files_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (src, expected) = line.rsplit_once("=>")
                                      .unwrap_or_else(|| panic!("Malformed case in {path:?}: {line}"));
            let expected = expected.trim();

            count += 1;
            if let Some(kind) = expected.strip_prefix('!') {
                assert_failure(src, parse_kind(kind));
            } else {
                let value = expected.parse()
                                    .unwrap_or_else(|_| panic!("Bad expected value in {path:?}: {line}"));
                assert_success(src, value);
            }
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

#[test]
fn documented_examples() {
    assert_eq!(evaluate_top_level("add(1,2)"), Ok(3));
    assert_eq!(evaluate_top_level("add(1,mult(2,3))"), Ok(7));
    assert_eq!(evaluate_top_level("mult(add(2,2),div(9,3))"), Ok(12));
    assert_eq!(evaluate_top_level("let(a,5,add(a,a))"), Ok(10));
    assert_eq!(evaluate_top_level("let(a,5,let(b,mult(a,10),add(b,a)))"), Ok(55));
    assert_eq!(evaluate_top_level("let(a,let(b,10,add(b,b)),let(b,20,add(a,b)))"), Ok(40));
}

#[test]
fn division_by_zero_is_error() {
    let err = evaluate_top_level("div(5,0)").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DivisionByZero);
    assert_eq!(err.to_string(), "Error at column 1: Division by zero in 'div(5,0)'.");
}

#[test]
fn divisor_is_checked_before_dividend() {
    let err = evaluate_top_level("div(undefined,0)").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DivisionByZero);
}

#[test]
fn unterminated_expression_is_error() {
    assert_eq!(evaluate_top_level("add(1,2").unwrap_err().kind(), ErrorKind::Syntax);
    assert_failure("add(1,2", ErrorKind::Syntax);
}

#[test]
fn core_rejects_whitespace() {
    assert_eq!(evaluate_top_level("add(1, 2)").unwrap_err().kind(), ErrorKind::Syntax);
    assert_eq!(evaluate_top_level(" 5").unwrap_err().kind(), ErrorKind::Syntax);
    assert_success("add(1, 2)", 3);
}

#[test]
fn redeclaration_names_the_variable() {
    let err = evaluate_top_level("let(v,1,let(v,2,v))").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Redeclaration);
    assert_eq!(err.column(), 9);
    assert!(err.to_string().contains("'v'"));
}

#[test]
fn undeclared_variable_names_the_variable() {
    let err = evaluate_top_level("add(v,1)").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UndeclaredVariable);
    assert_eq!(err.column(), 5);
    assert!(err.to_string().contains("'v'"));
}

#[test]
fn syntax_errors_win_over_evaluation_errors() {
    assert_eq!(evaluate_top_level("add(v,foo)bar").unwrap_err().kind(), ErrorKind::Syntax);
    assert_eq!(evaluate_top_level("add(div(1,0),2!)").unwrap_err().kind(), ErrorKind::Syntax);
}

#[test]
fn caller_scope_is_restored() {
    let mut scope = Scope::new();
    scope.bind("base", 100);

    assert_eq!(evaluate("let(a,1,let(b,2,add(base,add(a,b))))", &mut scope), Ok(103));
    assert_eq!(scope.len(), 1);
    assert_eq!(scope.lookup("base"), Some(100));

    let err = evaluate("let(a,1,div(a,0))", &mut scope).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DivisionByZero);
    assert!(!scope.contains("a"));
    assert_eq!(scope.len(), 1);
}

#[test]
fn binding_is_released_after_failed_body() {
    let mut scope = Scope::new();
    assert!(evaluate("let(a,1,undefined)", &mut scope).is_err());
    assert!(scope.is_empty());
    assert_eq!(evaluate("let(a,2,a)", &mut scope), Ok(2));
}

#[test]
fn deeply_nested_sums() {
    let depth = 200;
    let src = format!("{}1{}", "add(1,".repeat(depth), ")".repeat(depth));
    assert_eq!(evaluate_top_level(&src), Ok(201));
}
