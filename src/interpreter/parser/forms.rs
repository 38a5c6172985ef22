use crate::{
    ast::{Binding, Expr, LiteralValue, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser {
    /// Parses a `let` expression.
    ///
    /// Grammar: `letExpr := 'let' bindings 'in' expr`
    ///
    /// A missing `in` is recorded and the body is replaced with a
    /// placeholder, so the bindings still get checked for further
    /// diagnostics.
    pub(in crate::interpreter::parser) fn let_expr(&mut self) -> ParseResult<Expr> {
        self.trace("letExpr");
        let line = self.line();
        self.advance()?;

        let bindings = self.binding_list()?;

        let body = if self.eat(&Token::In)? {
            self.expr()?
        } else {
            self.error(ParseError::ExpectedIn { line: self.line() });
            self.placeholder()
        };

        Ok(Expr::Let { bindings,
                       body: Box::new(body),
                       line })
    }

    /// Parses a `global` expression.
    ///
    /// Grammar: `globalExpr := 'global' bindings`
    pub(in crate::interpreter::parser) fn global_expr(&mut self) -> ParseResult<Expr> {
        self.trace("globalExpr");
        let line = self.line();
        self.advance()?;

        let bindings = self.binding_list()?;
        Ok(Expr::Global { bindings, line })
    }

    /// Parses a binding group.
    ///
    /// All names come first, then `:=`, then one expression per name. A
    /// mismatch between the two counts is recorded and the longer side is
    /// dropped when the two lists are joined.
    ///
    /// Grammar: `bindings := id (',' id)* ':=' expr (',' expr)*`
    fn binding_list(&mut self) -> ParseResult<Vec<Binding>> {
        self.trace("bindings");

        let mut names = Vec::new();
        loop {
            if let Some((Token::Identifier(name), _)) = &self.next {
                names.push(name.clone());
                self.advance()?;
            } else {
                self.error(ParseError::ExpectedIdentifier { line: self.line() });
                break;
            }
            if !self.eat(&Token::Comma)? {
                break;
            }
        }

        self.expect(&Token::Assign, ParseError::ExpectedAssign { line: self.line() })?;

        let mut exprs = Vec::new();
        loop {
            exprs.push(self.expr()?);
            if !self.eat(&Token::Comma)? {
                break;
            }
        }

        if names.len() != exprs.len() {
            self.error(ParseError::BindingCountMismatch { names: names.len(),
                                                          exprs: exprs.len(),
                                                          line:  self.line(), });
        }

        Ok(names.into_iter()
                .zip(exprs)
                .map(|(name, expr)| Binding { name, expr })
                .collect())
    }

    /// Parses an `if` expression. Both branches are mandatory.
    ///
    /// Grammar: `ifExpr := 'if' expr 'then' expr 'else' expr`
    pub(in crate::interpreter::parser) fn if_expr(&mut self) -> ParseResult<Expr> {
        self.trace("ifExpr");
        let line = self.line();
        self.advance()?;

        let condition = self.expr()?;
        self.expect(&Token::Then, ParseError::ExpectedThen { line: self.line() })?;
        let then_branch = self.expr()?;
        self.expect(&Token::Else, ParseError::ExpectedElse { line: self.line() })?;
        let else_branch = self.expr()?;

        Ok(Expr::If { condition:   Box::new(condition),
                      then_branch: Box::new(then_branch),
                      else_branch: Box::new(else_branch),
                      line })
    }

    /// Parses a `not` expression.
    ///
    /// Grammar: `notExpr := 'not' rexpr`
    pub(in crate::interpreter::parser) fn not_expr(&mut self) -> ParseResult<Expr> {
        self.trace("notExpr");
        let line = self.line();
        self.advance()?;

        let operand = self.rexpr()?;
        Ok(Expr::UnaryOp { op:   UnaryOperator::Not,
                           expr: Box::new(operand),
                           line })
    }

    /// Parses a lambda expression in either spelling.
    ///
    /// Grammar: `lambdaExpr := ('lambda' | '=>') id '=>' expr`
    ///
    /// The body is a full expression, so a parenthesized nested lambda such
    /// as `lambda x => (lambda y => x + y)` parses through the ordinary
    /// grouping in `expr`.
    pub(in crate::interpreter::parser) fn lambda_expr(&mut self) -> ParseResult<Expr> {
        self.trace("lambdaExpr");
        let line = self.line();

        if matches!(self.next, Some((Token::Lambda | Token::Arrow, _))) {
            self.advance()?;
        } else {
            self.error(ParseError::ExpectedLambda { line });

            return Ok(self.placeholder());
        }

        let parameter = self.identifier()?;
        self.expect(&Token::Arrow, ParseError::ExpectedArrow { line: self.line() })?;
        let body = self.expr()?;

        Ok(Expr::Lambda { parameter,
                          body: Box::new(body),
                          line })
    }

    /// Parses a function definition.
    ///
    /// Two spellings are accepted: `fun inc := (lambda x => x + 1)` and the
    /// shorthand `fun inc x => x + 1`.
    ///
    /// Grammar: `funDef := 'fun' id (':=' '(' lambdaExpr ')' | id '=>' expr)`
    pub(in crate::interpreter::parser) fn function_def(&mut self) -> ParseResult<Expr> {
        self.trace("funDef");
        let line = self.line();
        self.advance()?;

        let name = self.identifier()?;

        let lambda = match self.next.as_ref().map(|(token, _)| token) {
            Some(Token::Assign) => {
                self.advance()?;
                if self.eat(&Token::LParen)? {
                    let lambda = self.lambda_expr()?;
                    self.expect(&Token::RParen,
                                ParseError::ExpectedClosingParen { line: self.line() })?;
                    lambda
                } else {
                    self.lambda_expr()?
                }
            },
            Some(Token::Identifier(_)) => {
                let parameter_line = self.line();
                let parameter = self.identifier()?;
                self.expect(&Token::Arrow, ParseError::ExpectedArrow { line: self.line() })?;
                let body = self.expr()?;
                Expr::Lambda { parameter,
                               body: Box::new(body),
                               line: parameter_line }
            },
            _ => {
                self.error(ParseError::ExpectedLambda { line: self.line() });
                Expr::Lambda { parameter: String::new(),
                               body:      Box::new(self.placeholder()),
                               line, }
            },
        };

        Ok(Expr::FunctionDef { name,
                               lambda: Box::new(lambda),
                               line })
    }

    /// Parses an `apply` expression.
    ///
    /// Grammar: `applyExpr := 'apply' (id | '(' (lambdaExpr | applyExpr) ')') expr`
    pub(in crate::interpreter::parser) fn apply_expr(&mut self) -> ParseResult<Expr> {
        self.trace("applyExpr");
        let line = self.line();
        self.advance()?;

        let callee = self.apply_callee()?;
        let argument = self.expr()?;

        Ok(Expr::Apply { callee:   Box::new(callee),
                         argument: Box::new(argument),
                         line })
    }

    /// Parses the callee position of an `apply`.
    ///
    /// A bare identifier names a defined function. A parenthesized callee is
    /// either a lambda expression or a nested `apply`, which is what makes
    /// curried calls like `apply (apply add 3) 4` work.
    fn apply_callee(&mut self) -> ParseResult<Expr> {
        match self.next.clone() {
            Some((Token::Identifier(name), line)) => {
                self.advance()?;
                Ok(Expr::Identifier { name, line })
            },
            Some((Token::LParen, _)) => {
                self.advance()?;
                let callee = match self.next.as_ref().map(|(token, _)| token) {
                    Some(Token::Lambda | Token::Arrow) => self.lambda_expr()?,
                    Some(Token::Apply) => self.apply_expr()?,
                    Some(Token::LParen) => self.apply_callee()?,
                    _ => {
                        self.error(ParseError::InvalidCallee { line: self.line() });
                        self.placeholder()
                    },
                };
                self.expect(&Token::RParen, ParseError::ExpectedClosingParen { line: self.line() })?;
                Ok(callee)
            },
            _ => {
                self.error(ParseError::InvalidCallee { line: self.line() });
                Ok(self.placeholder())
            },
        }
    }

    /// Reads an identifier. A missing one is recorded and an empty name is
    /// substituted.
    fn identifier(&mut self) -> ParseResult<String> {
        if let Some((Token::Identifier(name), _)) = &self.next {
            let name = name.clone();
            self.advance()?;

            return Ok(name);
        }
        self.error(ParseError::ExpectedIdentifier { line: self.line() });
        Ok(String::new())
    }

    /// Placeholder node substituted where recovery abandoned a subtree.
    fn placeholder(&self) -> Expr {
        Expr::Literal { value: LiteralValue::Nothing,
                        line:  self.line(), }
    }
}
