use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Token, tokenize},
        parser::precedence::{Infix, token_to_infix},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// A precedence-climbing parser over an eagerly lexed token buffer.
///
/// The whole source is tokenized up front, so a lexical error anywhere in the
/// input fails construction before any parsing happens. Each token is kept
/// with its byte offset for error reporting.
pub struct Parser {
    tokens: Vec<(Token, usize)>,
    cursor: usize,
    end:    usize,
}

impl Parser {
    /// Lexes `source` into the parser's token buffer.
    ///
    /// # Errors
    /// Returns [`ParseError::Lex`] if the lexer rejects any part of the
    /// input.
    pub fn new(source: &str) -> ParseResult<Self> {
        Ok(Self { tokens: tokenize(source)?,
                  cursor: 0,
                  end:    source.len(), })
    }

    /// Parses the buffered tokens as a single expression.
    ///
    /// # Errors
    /// - [`ParseError::EmptyExpression`] if there are no tokens.
    /// - [`ParseError::UnexpectedTrailingTokens`] if tokens remain after a
    ///   complete expression.
    /// - Any structural error raised while parsing.
    ///
    /// # Example
    /// ```
    /// use exprcalc::interpreter::parser::Parser;
    ///
    /// let expr = Parser::new("2 ^ 3 ^ 2").unwrap().parse().unwrap();
    /// assert_eq!(expr.to_string(), "(2 ^ (3 ^ 2))");
    ///
    /// assert!(Parser::new("").unwrap().parse().is_err());
    /// assert!(Parser::new("1 2").unwrap().parse().is_err());
    /// ```
    pub fn parse(&mut self) -> ParseResult<Expr> {
        if self.tokens.is_empty() {
            return Err(ParseError::EmptyExpression);
        }

        let expr = self.parse_expression(0)?;

        if let Some((token, position)) = self.peek() {
            return Err(ParseError::UnexpectedTrailingTokens { token:    token.to_string(),
                                                              position: *position, });
        }

        log::debug!("parsed {expr}");
        Ok(expr)
    }

    /// Parses an expression whose infix operators all bind at least as
    /// tightly as `min_precedence`.
    ///
    /// Starts from a primary expression and keeps folding infix operators
    /// into the left operand while their binding power is high enough.
    /// Right-associative operators recurse with their own precedence, the
    /// rest with one more, and a `?` is handled as a pseudo-binary operator
    /// (see [`Parser::parse_ternary`]).
    pub(crate) fn parse_expression(&mut self, min_precedence: u8) -> ParseResult<Expr> {
        let mut left = self.parse_primary()?;

        while let Some((token, position)) = self.peek() {
            let Some(infix) = token_to_infix(token) else {
                break;
            };
            if infix.precedence() < min_precedence {
                break;
            }
            let position = *position;
            self.advance();

            left = match infix {
                Infix::Ternary => self.parse_ternary(left, infix.precedence())?,
                Infix::Assign => {
                    let value = self.parse_expression(infix.next_min_precedence())?;
                    Self::assignment(left, value, position)?
                },
                Infix::Binary(op) => {
                    let right = self.parse_expression(infix.next_min_precedence())?;
                    Expr::binary(op, left, right)
                },
            };
        }

        Ok(left)
    }

    /// Parses the remainder of `condition ? then : else` after the `?`.
    ///
    /// The `then` branch may contain any expression; the `else` branch is
    /// parsed at the ternary's own precedence so that nested conditionals
    /// chain to the right.
    fn parse_ternary(&mut self, condition: Expr, precedence: u8) -> ParseResult<Expr> {
        let then_branch = self.parse_expression(0)?;

        match self.advance() {
            Some((Token::Colon, _)) => {},
            Some((_, position)) => return Err(ParseError::ExpectedColon { position }),
            None => return Err(ParseError::ExpectedColon { position: self.end }),
        }

        let else_branch = self.parse_expression(precedence)?;

        Ok(Expr::Conditional { condition:   Box::new(condition),
                               then_branch: Box::new(then_branch),
                               else_branch: Box::new(else_branch), })
    }

    /// Builds an assignment from an infix `=`, which requires a variable on
    /// the left.
    fn assignment(target: Expr, value: Expr, position: usize) -> ParseResult<Expr> {
        match target {
            Expr::Variable(name) => Ok(Expr::Assign { name,
                                                      value: Box::new(value) }),
            _ => Err(ParseError::InvalidAssignmentTarget { position }),
        }
    }

    /// Returns the next token without consuming it.
    pub(crate) fn peek(&self) -> Option<&(Token, usize)> {
        self.tokens.get(self.cursor)
    }

    /// Consumes and returns the next token.
    pub(crate) fn advance(&mut self) -> Option<(Token, usize)> {
        let token = self.tokens.get(self.cursor).cloned();
        if token.is_some() {
            self.cursor += 1;
        }
        token
    }

    /// Byte offset just past the last character of the source.
    pub(crate) const fn end_position(&self) -> usize {
        self.end
    }
}
