use std::fmt;

use logos::Logos;

use crate::error::LexError;

/// Result type used by the lexer.
pub type LexResult<T> = Result<T, LexError>;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
///
/// Operators are matched longest first, so `**` wins over `*`, `==` over `=`,
/// and so on. Identifiers are case-sensitive and there are no reserved
/// keywords.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14`, `1.` or `.5`.
    ///
    /// A literal is the longest run of digits containing at most one decimal
    /// point; a lone `.` is lexed as a malformed number.
    #[regex(r"[0-9]+(\.[0-9]*)?", parse_number)]
    #[regex(r"\.[0-9]*", parse_number)]
    Number(f64),
    /// Identifier tokens; variable or function names such as `x` or `sqrt`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `**` or `^`
    #[token("**")]
    #[token("^")]
    Pow,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `&&`
    #[token("&&")]
    DoubleAmpersand,
    /// `||`
    #[token("||")]
    DoublePipe,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `=`
    #[token("=")]
    Equals,
    /// `>`
    #[token(">")]
    Greater,
    /// `<`
    #[token("<")]
    Less,
    /// `!`
    #[token("!")]
    Bang,
    /// `?`
    #[token("?")]
    Question,
    /// `:`
    #[token(":")]
    Colon,
    /// `,`
    #[token(",")]
    Comma,
    /// Whitespace between tokens.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

/// Parses a numeric literal from the current token slice.
///
/// # Returns
/// - `Some(f64)`: The parsed value if the slice is a valid number.
/// - `None`: If it is not (e.g. a lone `.`) or it is too large to be
///   represented, which the lexer reports as an error.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok().filter(|value: &f64| value.is_finite())
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lexeme = match self {
            Self::Number(value) => return write!(f, "{value}"),
            Self::Identifier(name) => return write!(f, "{name}"),
            Self::Pow => "^",
            Self::EqualEqual => "==",
            Self::GreaterEqual => ">=",
            Self::LessEqual => "<=",
            Self::BangEqual => "!=",
            Self::DoubleAmpersand => "&&",
            Self::DoublePipe => "||",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Percent => "%",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::Equals => "=",
            Self::Greater => ">",
            Self::Less => "<",
            Self::Bang => "!",
            Self::Question => "?",
            Self::Colon => ":",
            Self::Comma => ",",
            Self::Ignored => " ",
        };
        write!(f, "{lexeme}")
    }
}

/// Produces tokens one at a time from a source string.
///
/// Each token is paired with its byte offset in the source. The lexer is
/// exhausted (`None`) once the cursor passes the end of the input, and
/// yields a [`LexError`] for any unrecognised character or malformed
/// numeric literal.
pub struct Lexer<'src> {
    inner: logos::Lexer<'src, Token>,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { inner: Token::lexer(source) }
    }

    /// Returns the next token and its byte offset, `None` at the end of the
    /// input, or an error describing why the input could not be tokenized.
    ///
    /// # Example
    /// ```
    /// use exprcalc::interpreter::lexer::{Lexer, Token};
    ///
    /// let mut lexer = Lexer::new("x ** 2");
    ///
    /// assert_eq!(lexer.next_token(), Some(Ok((Token::Identifier("x".to_string()), 0))));
    /// assert_eq!(lexer.next_token(), Some(Ok((Token::Pow, 2))));
    /// assert_eq!(lexer.next_token(), Some(Ok((Token::Number(2.0), 5))));
    /// assert_eq!(lexer.next_token(), None);
    /// ```
    pub fn next_token(&mut self) -> Option<LexResult<(Token, usize)>> {
        let token = self.inner.next()?;
        let position = self.inner.span().start;

        Some(token.map(|token| (token, position))
                  .map_err(|()| self.error_at(position)))
    }

    /// Classifies the slice the lexer just rejected.
    fn error_at(&self, position: usize) -> LexError {
        let slice = self.inner.slice();
        match slice.chars().next() {
            Some(c) if c.is_ascii_digit() || c == '.' => {
                LexError::InvalidNumber { literal: slice.to_string(),
                                          position }
            },
            Some(character) => LexError::UnexpectedCharacter { character, position },
            None => LexError::UnexpectedCharacter { character: '\0',
                                                    position },
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = LexResult<(Token, usize)>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

/// Tokenizes a whole source string, stopping at the first error.
///
/// # Errors
/// Returns the first [`LexError`] encountered.
pub fn tokenize(source: &str) -> LexResult<Vec<(Token, usize)>> {
    let tokens = Lexer::new(source).collect::<LexResult<Vec<_>>>()?;
    log::trace!("lexed {} token(s) from {source:?}", tokens.len());
    Ok(tokens)
}
