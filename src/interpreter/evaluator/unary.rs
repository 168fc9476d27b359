use crate::{
    ast::UnaryOperator,
    interpreter::evaluator::core::Environment,
    util::num::{from_bool, is_truthy},
};

impl Environment {
    /// Evaluates a unary operation on a number.
    ///
    /// Supported operators:
    /// - `Negate`: numeric negation.
    /// - `Not`: `1` when the operand is falsy (within tolerance of zero),
    ///   `0` otherwise.
    ///
    /// # Example
    /// ```
    /// use exprcalc::{ast::UnaryOperator, interpreter::evaluator::core::Environment};
    ///
    /// assert_eq!(Environment::eval_unary(UnaryOperator::Negate, 5.0), -5.0);
    /// assert_eq!(Environment::eval_unary(UnaryOperator::Not, 0.0), 1.0);
    /// assert_eq!(Environment::eval_unary(UnaryOperator::Not, 3.0), 0.0);
    /// ```
    #[must_use]
    pub fn eval_unary(op: UnaryOperator, value: f64) -> f64 {
        match op {
            UnaryOperator::Negate => -value,
            UnaryOperator::Not => from_bool(!is_truthy(value)),
        }
    }
}
