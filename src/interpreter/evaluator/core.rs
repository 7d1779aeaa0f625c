use tracing::{debug, trace};

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::evaluator::scope::Scope,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// The context borrows the [`Scope`] for the duration of one evaluation. Every
/// `let` evaluated through it releases its binding before returning, so the
/// scope is handed back exactly as it was received.
pub struct Context<'s> {
    pub scope: &'s mut Scope,
}

impl<'s> Context<'s> {
    #[must_use]
    pub const fn new(scope: &'s mut Scope) -> Self {
        Self { scope }
    }

    /// Evaluates an expression and returns its value.
    ///
    /// This is the main entry point for evaluation. Evaluation is depth-first
    /// and stops at the first error.
    ///
    /// # Example
    /// ```
    /// use letcalc::{
    ///     interpreter::{
    ///         evaluator::{core::Context, scope::Scope},
    ///         parser::core::parse,
    ///     },
    /// };
    ///
    /// let expr = parse("let(a,5,let(b,mult(a,10),add(b,a)))").unwrap();
    /// let mut scope = Scope::new();
    ///
    /// assert_eq!(Context::new(&mut scope).eval(&expr), Ok(55));
    /// assert!(scope.is_empty());
    /// ```
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<i32> {
        trace!(%expr, "evaluating");

        let result = match expr {
            Expr::Literal { value, .. } => Ok(*value),
            Expr::Variable { name, column } => self.eval_variable(name, *column),
            Expr::BinaryOp { op,
                             left,
                             right,
                             column, } => self.eval_binary_op(expr, *op, left, right, *column),
            Expr::Let { name,
                        value,
                        body,
                        column, } => self.eval_let(name, value, body, *column),
        }?;

        trace!(%expr, result, "evaluated");
        Ok(result)
    }

    /// Looks up a variable by name.
    ///
    /// The binding is left in place; only the `let` that created it removes
    /// it.
    pub fn eval_variable(&self, name: &str, column: usize) -> EvalResult<i32> {
        self.scope
            .lookup(name)
            .ok_or_else(|| RuntimeError::UndeclaredVariable { name: name.to_string(),
                                                              column })
    }

    /// Evaluates `let(name, value, body)`.
    ///
    /// The order of steps is fixed: `name` must not be live, `value` is
    /// evaluated without `name` visible, `name` is bound, `body` is evaluated,
    /// and `name` is released whether or not `body` succeeded.
    pub fn eval_let(&mut self,
                    name: &str,
                    value: &Expr,
                    body: &Expr,
                    column: usize)
                    -> EvalResult<i32> {
        if self.scope.contains(name) {
            return Err(RuntimeError::Redeclaration { name: name.to_string(),
                                                     column });
        }

        let value = self.eval(value)?;
        self.scope.bind(name, value);
        debug!(name, value, "added variable");

        let result = self.eval(body);

        self.scope.release(name);
        debug!(name, "removed variable");

        result
    }
}
