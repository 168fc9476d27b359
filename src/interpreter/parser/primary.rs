use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser {
    /// Parses a primary (atomic) expression.
    ///
    /// Primary expressions form the base of the expression grammar:
    /// - numeric literals
    /// - identifiers, which become a call, an assignment or a variable
    /// - parenthesized expressions
    /// - prefix `-` and `!`, whose operand is itself a primary expression, so
    ///   they bind tighter than any binary operator (`-x ^ 2` is `(-x) ^ 2`)
    ///
    /// Grammar (simplified):
    /// ```text
    ///     primary := number
    ///              | identifier_or_call
    ///              | "(" expression ")"
    ///              | ("-" | "!") primary
    /// ```
    ///
    /// # Errors
    /// Returns [`ParseError::UnexpectedEndOfInput`] when no token is left, and
    /// [`ParseError::UnexpectedToken`] for any token that cannot start an
    /// expression (including a bare `?`).
    pub(in crate::interpreter::parser) fn parse_primary(&mut self) -> ParseResult<Expr> {
        let (token, position) = self.advance().ok_or(ParseError::UnexpectedEndOfInput)?;

        match token {
            Token::Number(value) => Ok(Expr::Number(value)),
            Token::Identifier(name) => self.parse_identifier_or_call(name),
            Token::LParen => {
                let expr = self.parse_expression(0)?;
                self.expect_closing_paren()?;
                Ok(expr)
            },
            Token::Minus => Ok(Expr::unary(UnaryOperator::Negate, self.parse_primary()?)),
            Token::Bang => Ok(Expr::unary(UnaryOperator::Not, self.parse_primary()?)),
            tok => Err(ParseError::UnexpectedToken { token: tok.to_string(),
                                                     position }),
        }
    }

    /// Disambiguates an identifier by looking at the token after it.
    ///
    /// - `name(` starts a function call with zero or more arguments.
    /// - `name =` starts an assignment whose value is a full expression.
    /// - Anything else leaves a bare variable reference.
    fn parse_identifier_or_call(&mut self, name: String) -> ParseResult<Expr> {
        match self.peek() {
            Some((Token::LParen, _)) => {
                self.advance();
                let arguments = self.parse_comma_separated()?;
                Ok(Expr::Call { name, arguments })
            },
            Some((Token::Equals, _)) => {
                self.advance();
                let value = self.parse_expression(0)?;
                Ok(Expr::Assign { name,
                                  value: Box::new(value) })
            },
            _ => Ok(Expr::Variable(name)),
        }
    }
}
