use thiserror::Error;

/// Represents the errors the lexer can report.
///
/// Positions are byte offsets into the source text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character that starts no token, including a lone `&` or `|`.
    #[error("Error at position {position}: Unexpected character '{character}'.")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// The byte offset where the error occurred.
        position:  usize,
    },
    /// A numeric literal that cannot be converted to a number (e.g. `.`).
    #[error("Error at position {position}: Invalid number '{literal}'.")]
    InvalidNumber {
        /// The literal as written.
        literal:  String,
        /// The byte offset where the error occurred.
        position: usize,
    },
}

/// Represents all errors that can occur during lexing or parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The lexer rejected the input.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The input contained no tokens at all.
    #[error("Empty expression.")]
    EmptyExpression,
    /// Found an unexpected token while parsing.
    #[error("Error at position {position}: Unexpected token: {token}.")]
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// The byte offset where the error occurred.
        position: usize,
    },
    /// Reached the end of input unexpectedly.
    #[error("Unexpected end of input.")]
    UnexpectedEndOfInput,
    /// A closing parenthesis `)` was expected but not found.
    #[error("Error at position {position}: Expected closing parenthesis ')' but none found.")]
    ExpectedClosingParen {
        /// The byte offset where the error occurred.
        position: usize,
    },
    /// The `:` of a ternary conditional was expected but not found.
    #[error("Error at position {position}: Expected ':' in ternary conditional.")]
    ExpectedColon {
        /// The byte offset where the error occurred.
        position: usize,
    },
    /// Found extra tokens after a complete expression.
    #[error("Error at position {position}: Extra tokens after expression: {token}.")]
    UnexpectedTrailingTokens {
        /// The first extra token.
        token:    String,
        /// The byte offset where the error occurred.
        position: usize,
    },
    /// The left side of an infix `=` is not a variable.
    #[error("Error at position {position}: Only a variable can be assigned to.")]
    InvalidAssignmentTarget {
        /// The byte offset of the `=`.
        position: usize,
    },
}
