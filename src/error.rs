/// Lexing and parsing errors.
///
/// Defines all error types that can occur while turning source text into a
/// tree: unrecognised characters, malformed numeric literals, and structural
/// syntax mistakes. Either kind aborts the pipeline for that input.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, and during
/// simplification when constant folding hits a division or modulo by zero.
pub mod runtime_error;

pub use parse_error::{LexError, ParseError};
pub use runtime_error::RuntimeError;

/// Any failure of the calculation pipeline.
///
/// Used by the driver-facing entry points that run parsing, simplification
/// and evaluation in one go.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The input could not be lexed or parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Simplification or evaluation failed.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
