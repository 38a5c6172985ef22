/// Represents a literal value in the language.
///
/// `LiteralValue` covers the raw, constant values that can appear directly in
/// source code: integers, reals and booleans. `Nothing` never appears in
/// source text; the parser uses it as the placeholder produced while
/// recovering from a syntax error, and it evaluates to the `Nothing` value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A 64-bit floating-point literal.
    Real(f64),
    /// A boolean literal value: `true` or `false`.
    Bool(bool),
    /// The absence of a value; only produced during parser error recovery.
    Nothing,
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// A single `name := expression` pair inside a `let` or `global` binding
/// list.
///
/// Binding lists are parsed as separate identifier and expression lists and
/// then zipped, so a `Binding` always pairs exactly one name with exactly one
/// expression; a length mismatch in the source is a recorded parse error.
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    /// The identifier being bound.
    pub name: String,
    /// The expression whose value the identifier is bound to.
    pub expr: Expr,
}

/// An abstract syntax tree (AST) node representing an expression in the
/// language.
///
/// `Expr` covers every syntactic construct: literals and identifiers,
/// operator applications, conditionals, `let`/`global` binding forms, list
/// and tuple literals, list accessors, lambdas, named function definitions
/// and function application. Nodes are immutable after construction and each
/// carries the source line it began on.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value.
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a binding by name.
    Identifier {
        /// Name of the binding.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A unary operation; `not` is the only one.
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary operation: arithmetic, logic or list concatenation.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A relational comparison between two numeric operands.
    RelationalOp {
        /// Left operand.
        left:  Box<Self>,
        /// The comparison operator.
        op:    RelationalOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// Conditional ("if-then-else") expression. Both branches are required.
    If {
        /// The condition expression; must evaluate to a boolean.
        condition:   Box<Self>,
        /// Expression evaluated if the condition is true.
        then_branch: Box<Self>,
        /// Expression evaluated if the condition is false.
        else_branch: Box<Self>,
        /// Line number in the source code.
        line:        usize,
    },
    /// A `let bindings in body` expression.
    Let {
        /// The bindings introduced for the body.
        bindings: Vec<Binding>,
        /// The expression evaluated with the bindings in place.
        body:     Box<Self>,
        /// Line number in the source code.
        line:     usize,
    },
    /// A `global bindings` expression installing persistent bindings.
    Global {
        /// The bindings to install into the top-level environment.
        bindings: Vec<Binding>,
        /// Line number in the source code.
        line:     usize,
    },
    /// List literal expression, `list(...)`.
    List {
        /// Elements of the list.
        elements: Vec<Self>,
        /// Line number in the source code.
        line:     usize,
    },
    /// Tuple literal expression, `tuple(...)`.
    Tuple {
        /// Elements of the tuple.
        elements: Vec<Self>,
        /// Line number in the source code.
        line:     usize,
    },
    /// `hd`, the head of a non-empty list.
    Head {
        /// The expression that must evaluate to a non-empty list.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// `tl`, the tail of a non-empty list.
    Tail {
        /// The expression that must evaluate to a non-empty list.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A lambda abstraction with a single parameter.
    Lambda {
        /// The parameter name.
        parameter: String,
        /// The body expression.
        body:      Box<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// A named function definition, `fun name := (lambda ...)`.
    FunctionDef {
        /// The function name.
        name:   String,
        /// The lambda being named; always an [`Expr::Lambda`].
        lambda: Box<Self>,
        /// Line number in the source code.
        line:   usize,
    },
    /// Function application, `apply callee argument`.
    Apply {
        /// The callee: an identifier, a nested application or a lambda.
        callee:   Box<Self>,
        /// The argument expression.
        argument: Box<Self>,
        /// Line number in the source code.
        line:     usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use letlang::ast::Expr;
    ///
    /// let expr = Expr::Identifier { name: "x".to_string(),
    ///                               line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Literal { line, .. }
            | Self::Identifier { line, .. }
            | Self::UnaryOp { line, .. }
            | Self::BinaryOp { line, .. }
            | Self::RelationalOp { line, .. }
            | Self::If { line, .. }
            | Self::Let { line, .. }
            | Self::Global { line, .. }
            | Self::List { line, .. }
            | Self::Tuple { line, .. }
            | Self::Head { line, .. }
            | Self::Tail { line, .. }
            | Self::Lambda { line, .. }
            | Self::FunctionDef { line, .. }
            | Self::Apply { line, .. } => *line,
        }
    }
}

/// A parsed program: the ordered list of top-level statements.
///
/// Every statement is an expression node; the program driver gives
/// function definitions, `global` forms and ordinary expressions their
/// distinct top-level treatment.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// The top-level statements in source order.
    pub statements: Vec<Expr>,
}

/// Represents a binary operator.
///
/// Binary operators cover arithmetic, logic and list concatenation.
/// Comparisons are carried by [`RelationalOperator`] instead, since the
/// grammar gives them their own non-terminal.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// List concatenation (`++`)
    Concat,
    /// Logical and (`and`)
    And,
    /// Logical or (`or`)
    Or,
}

/// Represents a relational operator between numeric operands.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RelationalOperator {
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`=`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Logical NOT (`not x`).
    Not,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{Add, And, Concat, Div, Mul, Or, Sub};
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Concat => "++",
            And => "and",
            Or => "or",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for RelationalOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use RelationalOperator::{Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual};
        let operator = match self {
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
            Equal => "=",
            NotEqual => "!=",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Not => write!(f, "not"),
        }
    }
}
