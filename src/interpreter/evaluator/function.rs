use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Environment},
        value::Value,
    },
};

/// Type alias for builtin function handlers.
///
/// Every builtin maps one real number to another.
pub type BuiltinFn = fn(f64) -> f64;

/// The number of arguments every builtin accepts.
pub const BUILTIN_ARITY: usize = 1;

/// Defines builtin functions by generating a lookup table and a name list.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => $func:expr
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name: &'static str,
            func: BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, func: $func },
            )*
        ];
        /// Names of all builtin functions, in table order.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "sin"  => f64::sin,
    "cos"  => f64::cos,
    "tan"  => f64::tan,
    "sqrt" => f64::sqrt,
    "abs"  => f64::abs,
    "log"  => f64::log10,
    "ln"   => f64::ln,
    "exp"  => f64::exp,
}

/// Looks up a builtin function by name.
///
/// # Example
/// ```
/// use exprcalc::interpreter::evaluator::function::builtin;
///
/// let ln = builtin("ln").unwrap();
/// assert_eq!(ln(1.0), 0.0);
/// assert!(builtin("cbrt").is_none());
/// ```
#[must_use]
pub fn builtin(name: &str) -> Option<BuiltinFn> {
    BUILTIN_TABLE.iter()
                 .find(|def| def.name == name)
                 .map(|def| def.func)
}

impl Environment {
    /// Evaluates a function call.
    ///
    /// The function is resolved first, then the argument count is checked,
    /// and only then is the single argument evaluated.
    ///
    /// # Errors
    /// - [`RuntimeError::UndefinedFunction`] if `name` is not a builtin.
    /// - [`RuntimeError::ArgumentCountMismatch`] unless exactly one argument
    ///   is supplied.
    /// - [`RuntimeError::UndefinedVariable`] if the argument is symbolic.
    pub(crate) fn eval_call(&mut self, name: &str, arguments: &[Expr]) -> EvalResult<Value> {
        let func = builtin(name).ok_or_else(|| RuntimeError::UndefinedFunction { name: name.to_string() })?;

        let [argument] = arguments else {
            return Err(RuntimeError::ArgumentCountMismatch { name:     name.to_string(),
                                                             expected: BUILTIN_ARITY,
                                                             found:    arguments.len(), });
        };

        let x = self.eval(argument)?.as_number()?;
        Ok(Value::Number(func(x)))
    }
}
