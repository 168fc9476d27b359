use crate::{
    ast::Expr,
    interpreter::{
        evaluator::core::EvalResult,
        simplifier::{binary::reduce_binary, unary::reduce_unary},
    },
    util::num::is_truthy,
};

impl Expr {
    /// Returns an algebraically simplified copy of the tree.
    ///
    /// Children are simplified first, then the local rewrite rules for the
    /// node's kind are applied. The result is a fixed point:
    /// simplifying it again yields a structurally equal tree. Wherever the
    /// input evaluates successfully, the simplified tree evaluates to the
    /// same number within tolerance.
    ///
    /// # Errors
    /// Constant folding a division or modulo whose divisor is within
    /// tolerance of zero fails with the same error evaluation would raise.
    ///
    /// # Example
    /// ```
    /// use exprcalc::parse;
    ///
    /// assert_eq!(parse("2+3*4").unwrap().simplify().unwrap().to_string(), "14");
    /// assert_eq!(parse("x+x").unwrap().simplify().unwrap().to_string(), "(2 * x)");
    /// assert_eq!(parse("d*d^2").unwrap().simplify().unwrap().to_string(), "(d ^ 3)");
    /// assert!(parse("5/0").unwrap().simplify().is_err());
    /// ```
    pub fn simplify(&self) -> EvalResult<Self> {
        match self {
            Self::Number(_) | Self::Variable(_) => Ok(self.clone()),
            Self::Unary { op, operand } => Ok(reduce_unary(*op, operand.simplify()?)),
            Self::Binary { op, left, right } => {
                reduce_binary(*op, left.simplify()?, right.simplify()?)
            },
            Self::Assign { name, value } => Ok(Self::Assign { name:  name.clone(),
                                                              value: Box::new(value.simplify()?), }),
            Self::Call { name, arguments } => {
                Ok(Self::Call { name:      name.clone(),
                                arguments: arguments.iter()
                                                    .map(Self::simplify)
                                                    .collect::<EvalResult<_>>()?, })
            },
            Self::Conditional { condition,
                                then_branch,
                                else_branch, } => {
                simplify_conditional(condition, then_branch, else_branch)
            },
        }
    }
}

/// Simplifies `condition ? then : else`.
///
/// When the condition folds to a number only the selected branch is
/// simplified and returned; the other branch is dropped without being
/// looked at. Otherwise both branches are simplified, and a folding error in
/// either one fails the whole conditional.
fn simplify_conditional(condition: &Expr,
                        then_branch: &Expr,
                        else_branch: &Expr)
                        -> EvalResult<Expr> {
    let condition = condition.simplify()?;

    if let Some(value) = condition.as_number() {
        log::trace!("dropping the branch not selected by {value}");
        return if is_truthy(value) {
            then_branch.simplify()
        } else {
            else_branch.simplify()
        };
    }

    Ok(Expr::Conditional { condition:   Box::new(condition),
                           then_branch: Box::new(then_branch.simplify()?),
                           else_branch: Box::new(else_branch.simplify()?), })
}
