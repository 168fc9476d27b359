/// Parser state and the precedence-climbing loop.
///
/// Holds the eagerly lexed token buffer and implements the binary/ternary
/// operator loop, the entry point for every sub-expression.
pub mod core;

/// Binding powers and associativity of the infix operators.
pub mod precedence;

/// Primary expressions.
///
/// Parses literals, variables, calls, assignments introduced by an
/// identifier, parenthesised groups and the prefix operators.
pub mod primary;

/// Helpers shared by the parsing routines.
pub mod utils;

pub use self::core::{ParseResult, Parser};
