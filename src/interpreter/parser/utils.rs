use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser {
    /// Parses a comma-separated list of expressions up to a closing `)`.
    ///
    /// The opening `(` must already have been consumed. An immediately
    /// encountered `)` produces an empty list.
    ///
    /// Grammar (simplified): `list := (expression ("," expression)*)? ")"`
    ///
    /// # Errors
    /// Returns a `ParseError` if:
    /// - an item fails to parse,
    /// - a token other than `,` or `)` follows an item,
    /// - the input ends before the closing `)`.
    pub(in crate::interpreter::parser) fn parse_comma_separated(&mut self)
                                                                -> ParseResult<Vec<Expr>> {
        let mut items = Vec::new();
        if let Some((Token::RParen, _)) = self.peek() {
            self.advance();

            return Ok(items);
        }
        loop {
            items.push(self.parse_expression(0)?);
            match self.advance() {
                Some((Token::Comma, _)) => {},
                Some((Token::RParen, _)) => break,
                Some((_, position)) => return Err(ParseError::ExpectedClosingParen { position }),
                None => {
                    return Err(ParseError::ExpectedClosingParen { position: self.end_position() });
                },
            }
        }
        Ok(items)
    }

    /// Consumes the `)` that closes a parenthesised group.
    ///
    /// # Errors
    /// Returns [`ParseError::ExpectedClosingParen`] if the next token is
    /// anything else or the input has ended.
    pub(in crate::interpreter::parser) fn expect_closing_paren(&mut self) -> ParseResult<()> {
        match self.advance() {
            Some((Token::RParen, _)) => Ok(()),
            Some((_, position)) => Err(ParseError::ExpectedClosingParen { position }),
            None => Err(ParseError::ExpectedClosingParen { position: self.end_position() }),
        }
    }
}
