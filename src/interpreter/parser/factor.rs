use crate::{
    ast::{Expr, LiteralValue},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser {
    /// Parses an atomic operand.
    ///
    /// Grammar: `factor := id | int | real | 'true' | 'false' | listExpr | tupleExpr | 'hd' factor | 'tl' factor | '(' expr ')'`
    ///
    /// # Errors
    /// A token that no alternative recognizes is fatal: the parser cannot
    /// tell where the current statement ends, so it gives up on the whole
    /// input rather than loop on the spot. Running out of tokens here is
    /// fatal for the same reason.
    pub(in crate::interpreter::parser) fn factor(&mut self) -> ParseResult<Expr> {
        self.trace("factor");

        match self.next.clone() {
            Some((Token::Identifier(name), line)) => {
                self.advance()?;
                Ok(Expr::Identifier { name, line })
            },
            Some((Token::Integer(value), line)) => {
                self.advance()?;
                Ok(Expr::Literal { value: LiteralValue::Integer(value),
                                   line })
            },
            Some((Token::Real(value), line)) => {
                self.advance()?;
                Ok(Expr::Literal { value: LiteralValue::Real(value),
                                   line })
            },
            Some((Token::Bool(value), line)) => {
                self.advance()?;
                Ok(Expr::Literal { value: LiteralValue::Bool(value),
                                   line })
            },
            Some((Token::Head, line)) => {
                self.advance()?;
                let expr = self.factor()?;
                Ok(Expr::Head { expr: Box::new(expr),
                                line })
            },
            Some((Token::Tail, line)) => {
                self.advance()?;
                let expr = self.factor()?;
                Ok(Expr::Tail { expr: Box::new(expr),
                                line })
            },
            Some((Token::List, line)) => self.list_literal(line),
            Some((Token::Tuple, line)) => self.tuple_literal(line),
            Some((Token::LParen, _)) => {
                self.advance()?;
                let node = self.expr()?;
                self.expect(&Token::RParen, ParseError::ExpectedClosingParen { line: self.line() })?;
                Ok(node)
            },
            Some((token, line)) => Err(ParseError::UnrecognizedFactor { token: format!("{token:?}"),
                                                                        line }),
            None => Err(ParseError::UnexpectedEndOfInput { line: self.line() }),
        }
    }

    /// Parses a list literal, starting at the `list` keyword.
    ///
    /// List elements are restricted at the grammar level: only identifiers,
    /// integer literals and real literals may appear. Anything else is
    /// recorded as a diagnostic and skipped.
    ///
    /// Grammar: `listExpr := 'list' '(' (listElement (',' listElement)*)? ')'`
    pub(in crate::interpreter::parser) fn list_literal(&mut self, line: usize) -> ParseResult<Expr> {
        self.trace("listExpr");
        self.advance()?;
        self.expect(&Token::LParen, ParseError::UnexpectedToken { token: self.token_text(),
                                                                  line:  self.line(), })?;

        let mut elements = Vec::new();
        while let Some((token, token_line)) = self.next.clone() {
            if token == Token::RParen {
                break;
            }
            match token {
                Token::Identifier(name) => {
                    self.advance()?;
                    elements.push(Expr::Identifier { name, line: token_line });
                },
                Token::Integer(value) => {
                    self.advance()?;
                    elements.push(Expr::Literal { value: LiteralValue::Integer(value),
                                                  line:  token_line, });
                },
                Token::Real(value) => {
                    self.advance()?;
                    elements.push(Expr::Literal { value: LiteralValue::Real(value),
                                                  line:  token_line, });
                },
                token => {
                    self.error(ParseError::InvalidListElement { token: format!("{token:?}"),
                                                                line:  token_line, });
                    self.advance()?;
                },
            }
            if !self.eat(&Token::Comma)? {
                break;
            }
        }
        self.expect(&Token::RParen, ParseError::ExpectedClosingParen { line: self.line() })?;

        Ok(Expr::List { elements, line })
    }

    /// Parses a tuple literal, starting at the `tuple` keyword.
    ///
    /// Tuples accept the list elements plus boolean literals and nested
    /// `list` and `tuple` literals.
    ///
    /// Grammar: `tupleExpr := 'tuple' '(' (tupleElement (',' tupleElement)*)? ')'`
    pub(in crate::interpreter::parser) fn tuple_literal(&mut self, line: usize) -> ParseResult<Expr> {
        self.trace("tupleExpr");
        self.advance()?;
        self.expect(&Token::LParen, ParseError::UnexpectedToken { token: self.token_text(),
                                                                  line:  self.line(), })?;

        let mut elements = Vec::new();
        while let Some((token, token_line)) = self.next.clone() {
            if token == Token::RParen {
                break;
            }
            match token {
                Token::Identifier(name) => {
                    self.advance()?;
                    elements.push(Expr::Identifier { name, line: token_line });
                },
                Token::Integer(value) => {
                    self.advance()?;
                    elements.push(Expr::Literal { value: LiteralValue::Integer(value),
                                                  line:  token_line, });
                },
                Token::Real(value) => {
                    self.advance()?;
                    elements.push(Expr::Literal { value: LiteralValue::Real(value),
                                                  line:  token_line, });
                },
                Token::Bool(value) => {
                    self.advance()?;
                    elements.push(Expr::Literal { value: LiteralValue::Bool(value),
                                                  line:  token_line, });
                },
                Token::List => elements.push(self.list_literal(token_line)?),
                Token::Tuple => elements.push(self.tuple_literal(token_line)?),
                token => {
                    self.error(ParseError::InvalidTupleElement { token: format!("{token:?}"),
                                                                 line:  token_line, });
                    self.advance()?;
                },
            }
            if !self.eat(&Token::Comma)? {
                break;
            }
        }
        self.expect(&Token::RParen, ParseError::ExpectedClosingParen { line: self.line() })?;

        Ok(Expr::Tuple { elements, line })
    }
}
