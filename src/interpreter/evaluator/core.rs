use std::{
    collections::HashMap,
    f64::consts::{E, PI},
};

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::value::Value,
    util::num::is_truthy,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Constants every new environment starts with.
pub const CONSTANTS: &[(&str, f64)] = &[("pi", PI), ("e", E)];

/// Stores the runtime evaluation state.
///
/// An `Environment` is created once per session and reused for every
/// expression, so assignments made by one input are visible to the next.
/// Builtin functions are not stored here; they live in a static read-only
/// table shared by every environment.
#[derive(Debug, Clone)]
pub struct Environment {
    variables: HashMap<String, f64>,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment {
    /// Creates a new environment seeded with [`CONSTANTS`].
    #[must_use]
    pub fn new() -> Self {
        Self { variables: CONSTANTS.iter()
                                   .map(|(name, value)| ((*name).to_string(), *value))
                                   .collect(), }
    }

    /// Looks up the value bound to `name`.
    #[must_use]
    pub fn variable(&self, name: &str) -> Option<f64> {
        self.variables.get(name).copied()
    }

    /// Binds `name` to `value`, replacing any previous binding.
    pub fn set_variable(&mut self, name: impl Into<String>, value: f64) {
        self.variables.insert(name.into(), value);
    }

    /// Returns every binding, sorted by name.
    #[must_use]
    pub fn variables(&self) -> Vec<(&str, f64)> {
        let mut bindings: Vec<(&str, f64)> = self.variables
                                                 .iter()
                                                 .map(|(name, value)| (name.as_str(), *value))
                                                 .collect();
        bindings.sort_by(|a, b| a.0.cmp(b.0));
        bindings
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. A bare
    /// variable without a binding evaluates to [`Value::Symbol`]; every
    /// operation that needs a number from a symbol fails with
    /// [`RuntimeError::UndefinedVariable`]. A conditional only needs its
    /// condition to be numeric and never evaluates the branch it does not
    /// select.
    ///
    /// # Example
    /// ```
    /// use exprcalc::{
    ///     interpreter::{evaluator::core::Environment, value::Value},
    ///     parse,
    /// };
    ///
    /// let mut env = Environment::new();
    ///
    /// env.eval(&parse("x = 5").unwrap()).unwrap();
    /// assert_eq!(env.eval(&parse("x + 1").unwrap()).unwrap(), Value::Number(6.0));
    /// assert_eq!(env.eval(&parse("y").unwrap()).unwrap(),
    ///            Value::Symbol("y".to_string()));
    /// assert!(env.eval(&parse("y + 1").unwrap()).is_err());
    /// ```
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Number(value) => Ok(Value::Number(*value)),
            Expr::Variable(name) => Ok(self.eval_variable(name)),
            Expr::Unary { op, operand } => {
                let operand = self.eval(operand)?.as_number()?;
                Ok(Value::Number(Self::eval_unary(*op, operand)))
            },
            Expr::Binary { op, left, right } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_binary(*op, left.as_number()?, right.as_number()?).map(Value::Number)
            },
            Expr::Assign { name, value } => self.eval_assign(name, value),
            Expr::Call { name, arguments } => self.eval_call(name, arguments),
            Expr::Conditional { condition,
                                then_branch,
                                else_branch, } => {
                if is_truthy(self.eval(condition)?.as_number()?) {
                    self.eval(then_branch)
                } else {
                    self.eval(else_branch)
                }
            },
        }
    }

    /// Resolves a variable, falling back to a symbol when it is unbound.
    fn eval_variable(&self, name: &str) -> Value {
        self.variable(name)
            .map_or_else(|| Value::Symbol(name.to_string()), Value::Number)
    }

    /// Evaluates the value of an assignment and stores it.
    ///
    /// Fails with [`RuntimeError::AssignUndefined`] when the value is still
    /// symbolic, leaving the environment untouched.
    fn eval_assign(&mut self, name: &str, value: &Expr) -> EvalResult<Value> {
        match self.eval(value)? {
            Value::Number(number) => {
                log::debug!("assigned {name} = {number}");
                self.set_variable(name, number);
                Ok(Value::Number(number))
            },
            Value::Symbol(symbol) => Err(RuntimeError::AssignUndefined { name: name.to_string(),
                                                                         symbol }),
        }
    }
}

impl Expr {
    /// Evaluates `self` in `env`. Shorthand for [`Environment::eval`].
    ///
    /// # Errors
    /// Returns a [`RuntimeError`] describing why evaluation failed.
    pub fn evaluate(&self, env: &mut Environment) -> EvalResult<Value> {
        env.eval(self)
    }
}
