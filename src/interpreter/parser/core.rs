use crate::{
    ast::{Expr, Program},
    error::ParseError,
    interpreter::lexer::{Token, TokenStream},
};

/// Result type used by the parser.
///
/// An `Err` from a parsing rule is fatal and aborts the whole parse.
/// Recoverable violations are recorded in the parser's diagnostics list
/// instead, so a single run can report several of them.
pub type ParseResult<T> = Result<T, ParseError>;

/// The outcome of parsing a source text.
///
/// The program is only fit for evaluation when [`has_errors`] reports
/// `false`. A program that parsed with recorded diagnostics still mirrors
/// the shape of the input, which keeps later diagnostics meaningful, but it
/// contains placeholder nodes where recovery gave up on a subtree.
///
/// [`has_errors`]: Self::has_errors
#[derive(Debug)]
pub struct ParseOutcome {
    /// The parsed statements in source order.
    pub program:     Program,
    /// Every recoverable violation encountered while parsing.
    pub diagnostics: Vec<ParseError>,
}

impl ParseOutcome {
    /// Returns `true` when at least one diagnostic was recorded.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// A recursive-descent parser with a single token of lookahead.
///
/// The lookahead token lives in `next`. Every rule inspects it and calls
/// [`advance`](Self::advance) to consume it; `advance` is the only place
/// that pulls from the token stream, which keeps the lookahead invariant
/// and comment skipping in one spot.
pub struct Parser {
    tokens:      TokenStream,
    pub(in crate::interpreter::parser) next: Option<(Token, usize)>,
    diagnostics: Vec<ParseError>,
    tracing:     bool,
}

impl Parser {
    /// Creates a parser over the given source text.
    #[must_use]
    pub fn new(source: &str) -> Self {
        Self { tokens:      TokenStream::new(source),
               next:        None,
               diagnostics: Vec::new(),
               tracing:     false, }
    }

    /// Enables or disables rule tracing on standard error.
    #[must_use]
    pub const fn with_tracing(mut self, enabled: bool) -> Self {
        self.tracing = enabled;
        self
    }

    /// Parses the whole source into a program.
    ///
    /// Grammar: `program := funOrExpr*`
    ///
    /// # Returns
    /// A [`ParseOutcome`] carrying the program together with all recorded
    /// diagnostics.
    ///
    /// # Errors
    /// Returns a `ParseError` only for the fatal conditions: a token that no
    /// `factor` alternative recognizes, or a comment still open at the end
    /// of the input.
    ///
    /// # Example
    /// ```
    /// use letlang::interpreter::parser::core::Parser;
    ///
    /// let outcome = Parser::new("let x := 1 in x + 1").parse().unwrap();
    /// assert!(!outcome.has_errors());
    /// assert_eq!(outcome.program.statements.len(), 1);
    /// ```
    pub fn parse(mut self) -> ParseResult<ParseOutcome> {
        self.advance()?;

        let mut statements = Vec::new();
        while self.next.is_some() {
            statements.push(self.fun_or_expr()?);
        }

        Ok(ParseOutcome { program:     Program { statements },
                          diagnostics: self.diagnostics, })
    }

    /// Parses one top-level statement.
    ///
    /// Grammar: `funOrExpr := 'fun' id lambdaExpr | expr`
    fn fun_or_expr(&mut self) -> ParseResult<Expr> {
        self.trace("funOrExpr");
        if matches!(self.next, Some((Token::Fun, _))) {
            self.function_def()
        } else {
            self.expr()
        }
    }

    /// Advances the lookahead by one token.
    ///
    /// Comment spans are skipped here, so no other rule ever sees a comment
    /// marker.
    ///
    /// # Errors
    /// Returns `ParseError::UnterminatedComment` when the input ends inside
    /// an open comment.
    pub(in crate::interpreter::parser) fn advance(&mut self) -> ParseResult<()> {
        loop {
            match self.tokens.next_token() {
                Some((Token::Comment, line)) => loop {
                    match self.tokens.next_token() {
                        Some((Token::Comment, _)) => break,
                        Some(_) => {},
                        None => return Err(ParseError::UnterminatedComment { line }),
                    }
                },
                other => {
                    self.next = other;
                    return Ok(());
                },
            }
        }
    }

    /// Returns `true` when the lookahead matches the given token.
    pub(in crate::interpreter::parser) fn at(&self, token: &Token) -> bool {
        self.next.as_ref().is_some_and(|(current, _)| current == token)
    }

    /// Consumes the lookahead when it matches and reports whether it did.
    pub(in crate::interpreter::parser) fn eat(&mut self, token: &Token) -> ParseResult<bool> {
        if self.at(token) {
            self.advance()?;

            return Ok(true);
        }
        Ok(false)
    }

    /// Consumes the lookahead when it matches the expected token, otherwise
    /// records `missing` and leaves the lookahead in place for the caller's
    /// next rule.
    pub(in crate::interpreter::parser) fn expect(&mut self,
                                                expected: &Token,
                                                missing: ParseError)
                                                -> ParseResult<()> {
        if !self.eat(expected)? {
            self.error(missing);
        }
        Ok(())
    }

    /// Records a recoverable violation and keeps parsing.
    pub(in crate::interpreter::parser) fn error(&mut self, error: ParseError) {
        self.diagnostics.push(error);
    }

    /// Line number of the lookahead token, or of the end of the input.
    pub(in crate::interpreter::parser) fn line(&self) -> usize {
        self.next
            .as_ref()
            .map_or_else(|| self.tokens.current_line(), |(_, line)| *line)
    }

    /// Renders the lookahead token for a diagnostic message.
    pub(in crate::interpreter::parser) fn token_text(&self) -> String {
        self.next
            .as_ref()
            .map_or_else(|| "end of input".to_string(), |(token, _)| format!("{token:?}"))
    }

    /// Prints the rule being entered when tracing is on.
    pub(in crate::interpreter::parser) fn trace(&self, rule: &str) {
        if self.tracing {
            eprintln!("{rule}: next {}", self.token_text());
        }
    }
}
