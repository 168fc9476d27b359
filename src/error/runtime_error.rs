use thiserror::Error;

/// Represents all errors that can occur during evaluation.
///
/// Constant folding raises the same [`RuntimeError::DivisionByZero`] and
/// [`RuntimeError::ModuloByZero`] kinds as evaluation does.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// A number was required but the variable has no value.
    #[error("Undefined variable '{name}'.")]
    UndefinedVariable {
        /// The name of the variable.
        name: String,
    },
    /// Called a function that is not in the builtin table.
    #[error("Undefined function '{name}'.")]
    UndefinedFunction {
        /// The name of the function.
        name: String,
    },
    /// The wrong number of arguments was supplied to a function.
    #[error("Function '{name}' expects {expected} argument(s), but found {found}.")]
    ArgumentCountMismatch {
        /// The name of the function.
        name:     String,
        /// The number of arguments the function accepts.
        expected: usize,
        /// The number of arguments supplied.
        found:    usize,
    },
    /// Attempted division by zero.
    #[error("Division by zero.")]
    DivisionByZero,
    /// Attempted modulo by zero.
    #[error("Modulo by zero.")]
    ModuloByZero,
    /// Tried to assign a value that depends on an undefined variable.
    #[error("Cannot assign to '{name}': '{symbol}' is undefined.")]
    AssignUndefined {
        /// The variable being assigned.
        name:   String,
        /// The undefined variable the value depends on.
        symbol: String,
    },
}
