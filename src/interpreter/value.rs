use std::fmt;

use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Represents the outcome of evaluating an expression.
///
/// Evaluation either produces a number or, when a bare variable has no
/// binding, a symbol carrying the variable's name. A symbol is a
/// first-class result rather than an error; it only becomes an error when an
/// enclosing operation needs a number (see [`Value::as_number`]).
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// An unresolved variable name.
    Symbol(String),
}

impl Value {
    /// Converts the value to an `f64`, or returns an error if it is symbolic.
    ///
    /// # Returns
    /// - `Ok(f64)`: If the value is a number.
    /// - `Err(RuntimeError::UndefinedVariable)`: If the value is a symbol.
    ///
    /// # Example
    /// ```
    /// use exprcalc::interpreter::value::Value;
    ///
    /// assert_eq!(Value::Number(2.5).as_number().unwrap(), 2.5);
    /// assert!(Value::Symbol("y".to_string()).as_number().is_err());
    /// ```
    pub fn as_number(&self) -> EvalResult<f64> {
        match self {
            Self::Number(n) => Ok(*n),
            Self::Symbol(name) => Err(RuntimeError::UndefinedVariable { name: name.clone() }),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Symbol(name) => write!(f, "{name}"),
        }
    }
}
