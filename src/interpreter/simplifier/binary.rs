use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    interpreter::{
        evaluator::core::{EvalResult, Environment},
        simplifier::{
            pattern::{like_powers, like_terms},
            unary::reduce_unary,
        },
    },
};

/// Applies the binary rewrite rules to already simplified operands.
///
/// Two constant operands fold to a number through
/// [`Environment::eval_binary`], so folding fails exactly where evaluation
/// would. Otherwise the operator-specific rules run; anything they do not
/// rewrite is rebuilt unchanged.
pub(crate) fn reduce_binary(op: BinaryOperator, left: Expr, right: Expr) -> EvalResult<Expr> {
    use BinaryOperator::{Add, Div, Mod, Mul, Pow, Sub};

    if let (Some(l), Some(r)) = (left.as_number(), right.as_number()) {
        return Ok(Expr::Number(Environment::eval_binary(op, l, r)?));
    }

    match op {
        Add => reduce_add(left, right),
        Sub => reduce_sub(left, right),
        Mul => reduce_mul(left, right),
        // `0 / a` stays: `a` may be zero when evaluated.
        Div if right.is_number(1.0) => Ok(left),
        Mod if right.is_number(1.0) || left.is_number(0.0) => Ok(Expr::Number(0.0)),
        Pow if right.is_number(0.0) => Ok(Expr::Number(1.0)),
        Pow if right.is_number(1.0) => Ok(left),
        // Also taken for `0 ^ a` where `a` later evaluates to zero.
        Pow if left.is_number(0.0) => Ok(Expr::Number(0.0)),
        _ => Ok(Expr::binary(op, left, right)),
    }
}

/// `x + x -> 2 * x`, `a + 0 -> a`, `0 + a -> a`.
fn reduce_add(left: Expr, right: Expr) -> EvalResult<Expr> {
    if let Some((l, r)) = like_terms(&left, &right) {
        log::trace!("merging like terms of {}", l.variable);
        return merged_term(l.coefficient + r.coefficient, l.variable);
    }

    if left.is_number(0.0) {
        return Ok(right);
    }
    if right.is_number(0.0) {
        return Ok(left);
    }

    Ok(Expr::binary(BinaryOperator::Add, left, right))
}

/// `3 * x - x -> 2 * x`, `a - 0 -> a`, `0 - a -> -a`.
fn reduce_sub(left: Expr, right: Expr) -> EvalResult<Expr> {
    if let Some((l, r)) = like_terms(&left, &right) {
        log::trace!("merging like terms of {}", l.variable);
        return merged_term(l.coefficient - r.coefficient, l.variable);
    }

    if right.is_number(0.0) {
        return Ok(left);
    }
    if left.is_number(0.0) {
        return Ok(reduce_unary(UnaryOperator::Negate, right));
    }

    Ok(Expr::binary(BinaryOperator::Sub, left, right))
}

/// Rebuilds a merged term and runs it through the product rules, so a
/// coefficient of `0`, `1` or `-1` reduces further.
fn merged_term(coefficient: f64, variable: &str) -> EvalResult<Expr> {
    reduce_binary(BinaryOperator::Mul,
                  Expr::Number(coefficient),
                  Expr::variable(variable))
}

/// Simplifies a product.
///
/// Like powers merge first (`d * d ^ 2 -> d ^ 3`). Otherwise a constant
/// side is pulled out as a factor, together with the constant of a nested
/// product on the other side (`x * 7 * 8 -> 56 * x`), and the result is
/// rebuilt with the constant on the left. A product without a constant
/// side is left alone.
fn reduce_mul(left: Expr, right: Expr) -> EvalResult<Expr> {
    if let Some((l, r)) = like_powers(&left, &right) {
        log::trace!("merging powers of {}", l.base);
        let exponent = l.exponent + r.exponent;
        return reduce_binary(BinaryOperator::Pow,
                             Expr::variable(l.base),
                             Expr::Number(exponent));
    }

    let (factor, rest) = match (left.as_number(), right.as_number()) {
        (Some(factor), _) => (factor, right),
        (_, Some(factor)) => (factor, left),
        _ => return Ok(Expr::binary(BinaryOperator::Mul, left, right)),
    };

    let (factor, rest) = accumulate_factor(factor, rest);

    Ok(scale(factor, rest))
}

/// Pulls the constant out of `rest` when it is itself a product with a
/// constant side. `rest` is already simplified, so one level is enough.
fn accumulate_factor(factor: f64, rest: Expr) -> (f64, Expr) {
    match rest {
        Expr::Binary { op: BinaryOperator::Mul,
                       left,
                       right, } => match (left.as_number(), right.as_number()) {
            (Some(inner), _) => (factor * inner, *right),
            (_, Some(inner)) => (factor * inner, *left),
            _ => (factor, Expr::binary(BinaryOperator::Mul, *left, *right)),
        },
        rest => (factor, rest),
    }
}

/// Builds `factor * rest` in canonical form.
#[allow(clippy::float_cmp)]
fn scale(factor: f64, rest: Expr) -> Expr {
    if factor == 0.0 {
        Expr::Number(0.0)
    } else if factor == 1.0 {
        rest
    } else if factor == -1.0 {
        reduce_unary(UnaryOperator::Negate, rest)
    } else {
        Expr::binary(BinaryOperator::Mul, Expr::Number(factor), rest)
    }
}
