#[derive(Debug)]
/// Represents all errors that can occur during lexing or parsing.
///
/// Most of these are recorded into the parser's diagnostics list and parsing
/// continues; `UnrecognizedFactor` and `UnterminatedComment` abort parsing
/// immediately.
pub enum ParseError {
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A token no factor production recognizes. Fatal.
    UnrecognizedFactor {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A comment was opened but its closing marker never appeared. Fatal.
    UnterminatedComment {
        /// The source line where the comment marker was seen.
        line: usize,
    },
    /// An identifier was expected but not found.
    ExpectedIdentifier {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The `:=` of a binding list was expected but not found.
    ExpectedAssign {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The `in` keyword was expected after `let` bindings.
    ExpectedIn {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The `then` keyword was expected after an `if` condition.
    ExpectedThen {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The `else` keyword was expected after a `then` branch.
    ExpectedElse {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The `=>` of a lambda was expected but not found.
    ExpectedArrow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A lambda expression was expected but not found.
    ExpectedLambda {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The callee of an `apply` was neither a name nor a lambda form.
    InvalidCallee {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A `list(...)` element was not an identifier or numeric literal.
    InvalidListElement {
        /// The offending token.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A `tuple(...)` element was not a legal tuple element form.
    InvalidTupleElement {
        /// The offending token.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A binding list's identifier and expression counts differ.
    BindingCountMismatch {
        /// How many identifiers were parsed.
        names: usize,
        /// How many expressions were parsed.
        exprs: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, line } => {
                write!(f, "Error on line {line}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error on line {line}: Unexpected end of input.")
            },

            Self::UnrecognizedFactor { token, line } => {
                write!(f, "Error on line {line}: Unrecognized factor: {token}.")
            },

            Self::UnterminatedComment { line } => {
                write!(f, "Error on line {line}: Comment is never terminated.")
            },

            Self::ExpectedIdentifier { line } => {
                write!(f, "Error on line {line}: Expected an identifier.")
            },

            Self::ExpectedAssign { line } => {
                write!(f, "Error on line {line}: Expected ':=' in binding list.")
            },

            Self::ExpectedIn { line } => {
                write!(f, "Error on line {line}: Expected 'in' after let bindings.")
            },

            Self::ExpectedThen { line } => {
                write!(f, "Error on line {line}: Expected 'then' after if condition.")
            },

            Self::ExpectedElse { line } => {
                write!(f, "Error on line {line}: Expected 'else' after then branch.")
            },

            Self::ExpectedArrow { line } => {
                write!(f, "Error on line {line}: Expected '=>' after lambda parameter.")
            },

            Self::ExpectedClosingParen { line } => write!(f,
                                                          "Error on line {line}: Expected closing parenthesis ')' but none found."),

            Self::ExpectedLambda { line } => {
                write!(f, "Error on line {line}: Expected a lambda expression.")
            },

            Self::InvalidCallee { line } => write!(f,
                                                   "Error on line {line}: Function name or lambda expression expected."),

            Self::InvalidListElement { token, line } => {
                write!(f, "Error on line {line}: Invalid list element: {token}.")
            },

            Self::InvalidTupleElement { token, line } => {
                write!(f, "Error on line {line}: Invalid tuple element: {token}.")
            },

            Self::BindingCountMismatch { names, exprs, line } => write!(f,
                                                                        "Error on line {line}: Binding list has {names} names but {exprs} expressions."),
        }
    }
}

impl std::error::Error for ParseError {}
