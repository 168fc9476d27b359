/// Core evaluation logic.
///
/// Defines the [`core::Environment`] holding variables, and the tree walk
/// that dispatches on each expression variant.
pub mod core;

/// Unary operator evaluation.
///
/// Handles numeric negation and logical not.
pub mod unary;

/// Binary operator evaluation.
///
/// Implements the arithmetic, comparison and logical operators. The same
/// routine is used by the simplifier for constant folding, so folded and
/// evaluated results always agree.
pub mod binary;

/// Builtin function table and call evaluation.
pub mod function;
