use crate::{
    ast::{Expr, UnaryOperator},
    interpreter::evaluator::core::Environment,
};

/// Applies the unary rewrite rules to an already simplified operand.
///
/// - A constant operand folds to a number.
/// - `-(-x)` becomes `x`, and `!(!x)` becomes `x`.
pub(crate) fn reduce_unary(op: UnaryOperator, operand: Expr) -> Expr {
    if let Some(value) = operand.as_number() {
        return Expr::Number(Environment::eval_unary(op, value));
    }

    match operand {
        Expr::Unary { op: inner,
                      operand: inner_operand, } if inner == op => *inner_operand,
        operand => Expr::unary(op, operand),
    }
}
