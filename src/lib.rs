//! # exprcalc
//!
//! exprcalc is an expression calculator written in Rust.
//! It lexes, parses, symbolically simplifies and numerically evaluates
//! arithmetic and logical expressions over real numbers and named variables,
//! with assignment, builtin function calls and ternary conditionals.
//! Variables without a value stay symbolic: `y + 1` still simplifies, it just
//! cannot be evaluated to a number.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Expr,
    error::{Error, ParseError},
    interpreter::{evaluator::core::Environment, parser::Parser},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum and its operators, which represent
/// an expression as an owned tree, and renders trees back to text.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// simplifying or evaluating an expression, each with a human-readable
/// reason.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches source positions to lexing and parsing errors.
pub mod error;
/// Orchestrates the calculation pipeline.
///
/// This module ties together lexing, parsing, simplification, evaluation and
/// value representations.
pub mod interpreter;
/// General utilities shared by the simplifier and the evaluator.
pub mod util;

/// Parses `source` into an expression tree.
///
/// # Errors
/// Returns a [`ParseError`] if the text cannot be lexed, is empty, or is not
/// a single well-formed expression.
///
/// # Example
/// ```
/// use exprcalc::parse;
///
/// assert_eq!(parse("1 ? 10 : 20").unwrap().to_string(), "1 ? 10 : 20");
/// assert!(parse("(1 + 2").is_err());
/// ```
pub fn parse(source: &str) -> Result<Expr, ParseError> {
    Parser::new(source)?.parse()
}

/// Options controlling [`calculate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Run the simplifier before evaluating.
    pub simplify: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self { simplify: true }
    }
}

/// The outcome of running one input through the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculation {
    /// The simplified tree (or the parsed tree when simplification is off).
    pub expr:  Expr,
    /// The numeric result, or why the tree could not be evaluated to a
    /// number. A symbolic result is reported as an undefined variable.
    pub value: Result<f64, error::RuntimeError>,
}

/// Parses, simplifies and evaluates one input in `env`.
///
/// Parse and simplification failures abort the calculation. Evaluation
/// failures do not: the simplified form is still returned, with the error in
/// [`Calculation::value`].
///
/// # Errors
/// Returns [`Error::Parse`] if the input cannot be parsed and
/// [`Error::Runtime`] if constant folding fails.
///
/// # Example
/// ```
/// use exprcalc::{Options, calculate, interpreter::evaluator::core::Environment};
///
/// let mut env = Environment::new();
///
/// let calc = calculate("y + 1", &mut env, Options::default()).unwrap();
/// assert_eq!(calc.expr.to_string(), "(y + 1)");
/// assert!(calc.value.is_err());
///
/// calculate("y = 2", &mut env, Options::default()).unwrap();
/// let calc = calculate("y + 1", &mut env, Options::default()).unwrap();
/// assert_eq!(calc.value, Ok(3.0));
/// ```
pub fn calculate(source: &str,
                 env: &mut Environment,
                 options: Options)
                 -> Result<Calculation, Error> {
    let parsed = parse(source)?;

    let expr = if options.simplify {
        let simplified = parsed.simplify()?;
        log::debug!("simplified {parsed} to {simplified}");
        simplified
    } else {
        parsed
    };

    let value = env.eval(&expr).and_then(|value| value.as_number());
    match &value {
        Ok(number) => log::debug!("evaluated {expr} to {number}"),
        Err(e) => log::debug!("could not evaluate {expr}: {e}"),
    }

    Ok(Calculation { expr, value })
}
