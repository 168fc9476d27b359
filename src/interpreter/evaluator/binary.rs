use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::evaluator::core::{EvalResult, Environment},
    util::num::{approx_eq, from_bool, is_truthy, is_zero},
};

impl Environment {
    /// Evaluates a binary operation between two numbers.
    ///
    /// - `+ - * ^` follow IEEE double semantics.
    /// - `/` and `%` fail when the divisor is within tolerance of zero.
    /// - Ordering comparisons are exact; `==` and `!=` use the tolerance.
    /// - `&&` and `||` treat any operand outside the tolerance of zero as
    ///   true. Both operands are always evaluated by the caller.
    ///
    /// Comparisons and logical operators produce `1` or `0`.
    ///
    /// # Errors
    /// [`RuntimeError::DivisionByZero`] and [`RuntimeError::ModuloByZero`].
    ///
    /// # Example
    /// ```
    /// use exprcalc::{
    ///     ast::BinaryOperator, error::RuntimeError,
    ///     interpreter::evaluator::core::Environment,
    /// };
    ///
    /// assert_eq!(Environment::eval_binary(BinaryOperator::Pow, 2.0, 10.0), Ok(1024.0));
    /// assert_eq!(Environment::eval_binary(BinaryOperator::Equal, 0.1 + 0.2, 0.3), Ok(1.0));
    /// assert_eq!(Environment::eval_binary(BinaryOperator::Div, 5.0, 0.0),
    ///            Err(RuntimeError::DivisionByZero));
    /// ```
    pub fn eval_binary(op: BinaryOperator, left: f64, right: f64) -> EvalResult<f64> {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Or,
            Pow, Sub,
        };

        Ok(match op {
            Add => left + right,
            Sub => left - right,
            Mul => left * right,
            Div => {
                if is_zero(right) {
                    return Err(RuntimeError::DivisionByZero);
                }
                left / right
            },
            Mod => {
                if is_zero(right) {
                    return Err(RuntimeError::ModuloByZero);
                }
                left % right
            },
            Pow => left.powf(right),
            Greater => from_bool(left > right),
            Less => from_bool(left < right),
            GreaterEqual => from_bool(left >= right),
            LessEqual => from_bool(left <= right),
            Equal => from_bool(approx_eq(left, right)),
            NotEqual => from_bool(!approx_eq(left, right)),
            And => from_bool(is_truthy(left) && is_truthy(right)),
            Or => from_bool(is_truthy(left) || is_truthy(right)),
        })
    }
}
