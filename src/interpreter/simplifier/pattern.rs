use crate::ast::{BinaryOperator, Expr};

/// A `coefficient * variable` term, as found in sums and differences.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Term<'a> {
    pub coefficient: f64,
    pub variable:    &'a str,
}

impl<'a> Term<'a> {
    /// Matches a bare variable (coefficient 1) or a product of a number and a
    /// variable in either order.
    pub(crate) fn of(expr: &'a Expr) -> Option<Self> {
        match expr {
            Expr::Variable(name) => Some(Self { coefficient: 1.0,
                                                variable:    name, }),
            Expr::Binary { op: BinaryOperator::Mul,
                           left,
                           right, } => match (left.as_ref(), right.as_ref()) {
                (Expr::Number(coefficient), Expr::Variable(name))
                | (Expr::Variable(name), Expr::Number(coefficient)) => {
                    Some(Self { coefficient: *coefficient,
                                variable:    name, })
                },
                _ => None,
            },
            _ => None,
        }
    }
}

/// A `base ^ exponent` power of a variable, as found in products.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Power<'a> {
    pub base:     &'a str,
    pub exponent: f64,
}

impl<'a> Power<'a> {
    /// Matches a bare variable (exponent 1) or a variable raised to a
    /// number.
    pub(crate) fn of(expr: &'a Expr) -> Option<Self> {
        match expr {
            Expr::Variable(name) => Some(Self { base:     name,
                                                exponent: 1.0, }),
            Expr::Binary { op: BinaryOperator::Pow,
                           left,
                           right, } => match (left.as_ref(), right.as_ref()) {
                (Expr::Variable(name), Expr::Number(exponent)) => {
                    Some(Self { base:     name,
                                exponent: *exponent, })
                },
                _ => None,
            },
            _ => None,
        }
    }
}

/// Returns the shared variable of two terms, if they are like terms.
pub(crate) fn like_terms<'a>(left: &'a Expr, right: &'a Expr) -> Option<(Term<'a>, Term<'a>)> {
    let (left, right) = (Term::of(left)?, Term::of(right)?);
    (left.variable == right.variable).then_some((left, right))
}

/// Returns the shared base of two powers, if they have the same base.
pub(crate) fn like_powers<'a>(left: &'a Expr, right: &'a Expr) -> Option<(Power<'a>, Power<'a>)> {
    let (left, right) = (Power::of(left)?, Power::of(right)?);
    (left.base == right.base).then_some((left, right))
}
