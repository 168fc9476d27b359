/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the tree with a mutable [`evaluator::core::Environment`],
/// performs arithmetic and logical operations, stores assignments, and
/// produces a [`value::Value`].
///
/// # Responsibilities
/// - Evaluates every expression variant.
/// - Resolves variables and the fixed table of builtin functions.
/// - Reports runtime errors such as division by zero or undefined variables.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens
/// (numbers, identifiers and operators), each paired with its byte offset.
/// This is the first stage of interpretation.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// A precedence-climbing parser over an eagerly lexed token buffer.
///
/// # Responsibilities
/// - Converts tokens into [`crate::ast::Expr`] trees.
/// - Applies binding powers and associativity for every infix operator.
/// - Reports syntax errors with positional context.
pub mod parser;
/// The simplifier module rewrites trees into a simpler equivalent form.
///
/// # Responsibilities
/// - Folds constant sub-expressions with the evaluator's own arithmetic.
/// - Merges like terms and like powers, and accumulates constant factors.
/// - Removes identities and collapses conditionals with a constant
///   condition.
pub mod simplifier;
/// The value module defines the result type of evaluation.
pub mod value;
