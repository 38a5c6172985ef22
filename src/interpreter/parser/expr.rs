use crate::{
    ast::{BinaryOperator, Expr, RelationalOperator},
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser {
    /// Parses an expression.
    ///
    /// Keyword-introduced forms are dispatched on the lookahead; anything
    /// else descends into the precedence ladder, where `and` and `or` chains
    /// bind loosest.
    ///
    /// A single leading `(` is consumed transparently here, and the matching
    /// `)` is consumed after the enclosed form completes. This is what lets
    /// `(let x := 1 in x)` and `apply (lambda x => x) 1` parse without a
    /// dedicated grouping rule for the keyword forms.
    ///
    /// Grammar: `expr := letExpr | globalExpr | applyExpr | ifExpr | 'not' rexpr | lambdaExpr | rexpr (('and' | 'or') rexpr)*`
    pub(in crate::interpreter::parser) fn expr(&mut self) -> ParseResult<Expr> {
        self.trace("expr");

        let grouped = self.eat(&Token::LParen)?;

        let node = match self.next.as_ref().map(|(token, _)| token) {
            Some(Token::Let) => self.let_expr()?,
            Some(Token::Global) => self.global_expr()?,
            Some(Token::Apply) => self.apply_expr()?,
            Some(Token::If) => self.if_expr()?,
            Some(Token::Not) => self.not_expr()?,
            Some(Token::Lambda | Token::Arrow) => self.lambda_expr()?,
            _ => self.logic_chain()?,
        };

        if grouped {
            self.eat(&Token::RParen)?;
        }

        Ok(node)
    }

    /// Parses a chain of `and` and `or` operators.
    ///
    /// Both operators sit on one precedence level and associate to the left.
    fn logic_chain(&mut self) -> ParseResult<Expr> {
        let mut node = self.rexpr()?;

        while let Some(op) = self.next.as_ref().and_then(|(token, _)| logic_operator(token)) {
            let line = self.line();
            self.advance()?;
            let right = self.rexpr()?;
            node = Expr::BinaryOp { left: Box::new(node),
                                    op,
                                    right: Box::new(right),
                                    line };
        }

        Ok(node)
    }

    /// Parses a relational expression.
    ///
    /// At most one relational operator is accepted at this level, so
    /// `1 < 2 < 3` parses the first comparison and leaves the rest behind
    /// for the caller to reject.
    ///
    /// Grammar: `rexpr := mexpr (relOp mexpr)?`
    pub(in crate::interpreter::parser) fn rexpr(&mut self) -> ParseResult<Expr> {
        self.trace("rexpr");
        let left = self.mexpr()?;

        if let Some(op) = self.next.as_ref().and_then(|(token, _)| relational_operator(token)) {
            let line = self.line();
            self.advance()?;
            let right = self.mexpr()?;

            return Ok(Expr::RelationalOp { left: Box::new(left),
                                           op,
                                           right: Box::new(right),
                                           line });
        }

        Ok(left)
    }

    /// Grammar: `mexpr := term (('+' | '-') term)*`
    fn mexpr(&mut self) -> ParseResult<Expr> {
        self.trace("mexpr");
        let mut node = self.term()?;

        while let Some(op) = self.next.as_ref().and_then(|(token, _)| additive_operator(token)) {
            let line = self.line();
            self.advance()?;
            let right = self.term()?;
            node = Expr::BinaryOp { left: Box::new(node),
                                    op,
                                    right: Box::new(right),
                                    line };
        }

        Ok(node)
    }

    /// Grammar: `term := factor (('*' | '/' | '++') factor)*`
    fn term(&mut self) -> ParseResult<Expr> {
        self.trace("term");
        let mut node = self.factor()?;

        while let Some(op) = self.next
                                 .as_ref()
                                 .and_then(|(token, _)| multiplicative_operator(token))
        {
            let line = self.line();
            self.advance()?;
            let right = self.factor()?;
            node = Expr::BinaryOp { left: Box::new(node),
                                    op,
                                    right: Box::new(right),
                                    line };
        }

        Ok(node)
    }
}

/// Maps a token to the logical operator it spells, if any.
const fn logic_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::And => Some(BinaryOperator::And),
        Token::Or => Some(BinaryOperator::Or),
        _ => None,
    }
}

/// Maps a token to the relational operator it spells, if any.
const fn relational_operator(token: &Token) -> Option<RelationalOperator> {
    match token {
        Token::Less => Some(RelationalOperator::Less),
        Token::Greater => Some(RelationalOperator::Greater),
        Token::LessEqual => Some(RelationalOperator::LessEqual),
        Token::GreaterEqual => Some(RelationalOperator::GreaterEqual),
        Token::Equal => Some(RelationalOperator::Equal),
        Token::BangEqual => Some(RelationalOperator::NotEqual),
        _ => None,
    }
}

/// Maps a token to the additive operator it spells, if any.
const fn additive_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        _ => None,
    }
}

/// Maps a token to the multiplicative operator it spells, if any.
const fn multiplicative_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Concat => Some(BinaryOperator::Concat),
        _ => None,
    }
}
