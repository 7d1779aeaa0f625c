//! # letcalc
//!
//! letcalc evaluates integer expressions in a small prefix language:
//!
//! ```text
//! expr := NUMBER | NAME
//!       | add(expr,expr) | sub(expr,expr) | mult(expr,expr) | div(expr,expr)
//!       | let(NAME,expr,expr)
//! ```
//!
//! `let(name, value, body)` binds `name` to the value of `value` while `body`
//! is evaluated. A name that is already bound cannot be bound again until the
//! `let` that owns it has finished.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

pub use crate::{
    error::{ErrorKind, EvalError},
    interpreter::{
        evaluator::scope::Scope,
        lexer::tokenize,
        parser::{core::parse, operand::extract_operand},
    },
};
use crate::{interpreter::evaluator::core::Context, util::preprocess::prepare};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum that represents an expression as a
/// tree. The AST is built by the parser and walked by the evaluator.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while preprocessing,
/// lexing, parsing or evaluating an expression, and classifies them into
/// kinds.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (parser, evaluator).
/// - Attaches columns and the offending names or sub-expressions.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the evaluation of an expression.
///
/// This module ties together lexing, parsing and evaluation.
pub mod interpreter;
/// General utilities that run before the interpreter.
///
/// # Responsibilities
/// - Check bracket balance over raw user input.
/// - Normalize whitespace around brackets and commas.
pub mod util;

/// Evaluates an expression with a fresh, empty scope.
///
/// The expression must not contain whitespace; use [`get_result`] for raw
/// user input.
///
/// # Errors
/// Returns the first error encountered while parsing or evaluating.
///
/// # Examples
/// ```
/// use letcalc::{ErrorKind, evaluate_top_level};
///
/// assert_eq!(evaluate_top_level("let(a,let(b,10,add(b,b)),let(b,20,add(a,b)))"), Ok(40));
///
/// let err = evaluate_top_level("add(v,1)").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::UndeclaredVariable);
/// ```
pub fn evaluate_top_level(expression: &str) -> Result<i32, EvalError> {
    let mut scope = Scope::new();
    evaluate(expression, &mut scope)
}

/// Evaluates an expression against a caller-owned scope.
///
/// Names already bound in `scope` are visible to the expression and cannot be
/// rebound by a `let`. On return, successful or not, `scope` holds exactly the
/// bindings it was given.
///
/// # Errors
/// Returns the first error encountered while parsing or evaluating.
///
/// # Examples
/// ```
/// use letcalc::{ErrorKind, Scope, evaluate};
///
/// let mut scope = Scope::new();
/// scope.bind("x", 3);
///
/// assert_eq!(evaluate("mult(x,let(y,2,y))", &mut scope), Ok(6));
/// assert_eq!(scope.len(), 1);
///
/// let err = evaluate("let(x,1,x)", &mut scope).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::Redeclaration);
/// ```
pub fn evaluate(expression: &str, scope: &mut Scope) -> Result<i32, EvalError> {
    debug!(expression, "evaluating expression");

    let expr = parse(expression)?;
    let result = Context::new(scope).eval(&expr)?;

    debug!(result, "returned result");
    Ok(result)
}

/// Evaluates raw user input.
///
/// The input is checked for balanced brackets and its whitespace is
/// normalized before evaluation with a fresh scope.
///
/// # Errors
/// Returns an error if the brackets do not match, or if parsing or evaluation
/// fails.
///
/// # Examples
/// ```
/// use letcalc::get_result;
///
/// assert_eq!(get_result("mult( add(2, 2), div(9, 3) )"), Ok(12));
/// assert!(get_result("add(1, 2").is_err());
/// ```
pub fn get_result(source: &str) -> Result<i32, EvalError> {
    let expression = prepare(source)?;
    evaluate_top_level(&expression)
}
