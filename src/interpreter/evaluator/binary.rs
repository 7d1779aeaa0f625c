use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
    interpreter::evaluator::core::{Context, EvalResult},
};

impl Context<'_> {
    /// Evaluates both operands of a binary operation and combines them.
    ///
    /// Operands are evaluated left to right, except for `div`: the divisor is
    /// evaluated first and checked for zero before the dividend is evaluated.
    ///
    /// # Parameters
    /// - `expr`: The whole operation, used in error messages.
    /// - `op`: The operator.
    /// - `left`: First operand.
    /// - `right`: Second operand.
    /// - `column`: Column for error reporting.
    pub fn eval_binary_op(&mut self,
                          expr: &Expr,
                          op: BinaryOperator,
                          left: &Expr,
                          right: &Expr,
                          column: usize)
                          -> EvalResult<i32> {
        let (left, right) = if op == BinaryOperator::Div {
            let divisor = self.eval(right)?;
            if divisor == 0 {
                return Err(RuntimeError::DivisionByZero { expr: expr.to_string(),
                                                          column });
            }
            (self.eval(left)?, divisor)
        } else {
            let left = self.eval(left)?;
            (left, self.eval(right)?)
        };

        Self::eval_binary(op, left, right).ok_or_else(|| RuntimeError::Overflow { expr:
                                                                                      expr.to_string(),
                                                                                  column })
    }

    /// Applies an operator to two integers.
    ///
    /// Division truncates toward zero. Returns `None` if the result does not
    /// fit in an `i32` or the divisor is zero.
    ///
    /// # Example
    /// ```
    /// use letcalc::{ast::BinaryOperator, interpreter::evaluator::core::Context};
    ///
    /// assert_eq!(Context::eval_binary(BinaryOperator::Div, -7, 2), Some(-3));
    /// assert_eq!(Context::eval_binary(BinaryOperator::Mult, i32::MAX, 2), None);
    /// ```
    #[must_use]
    pub const fn eval_binary(op: BinaryOperator, left: i32, right: i32) -> Option<i32> {
        match op {
            BinaryOperator::Add => left.checked_add(right),
            BinaryOperator::Sub => left.checked_sub(right),
            BinaryOperator::Mult => left.checked_mul(right),
            BinaryOperator::Div => left.checked_div(right),
        }
    }
}
