#[derive(Debug)]
/// Represents all errors that can occur during evaluation.
///
/// Every variant carries the source line of the node that failed. Runtime
/// errors propagate upward through operators and, at the top level, halt the
/// remaining program evaluation.
pub enum RuntimeError {
    /// Tried to use an identifier with no binding in scope.
    UnknownVariable {
        /// The name of the identifier.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A binary or relational operator was given operands of two different
    /// kinds.
    MixedTypeOperands {
        /// The operator being applied.
        operator: String,
        /// The kind of the left operand.
        left:     String,
        /// The kind of the right operand.
        right:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A boolean value was expected, but not found.
    ExpectedBoolean {
        /// The kind of the value found instead.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A numeric value was expected, but not found.
    ExpectedNumber {
        /// The kind of the value found instead.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A list value was expected, but not found.
    ExpectedList {
        /// The kind of the value found instead.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A function value was expected, but not found.
    ExpectedFunction {
        /// The kind of the value found instead.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Took the head or tail of an empty list.
    EmptyList {
        /// The operation that required a non-empty list (`hd` or `tl`).
        operation: String,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// A container element did not match the kind fixed by the first
    /// element.
    HeterogeneousElement {
        /// Which container was being built or combined (`list` or `tuple`).
        container: String,
        /// The kind fixed by the first element.
        expected:  String,
        /// The kind of the offending element.
        found:     String,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// A value of a kind that can never be a container element.
    InvalidElementKind {
        /// Which container was being built (`list` or `tuple`).
        container: String,
        /// The kind of the offending element.
        found:     String,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// A `let` or `global` binding produced a value of a kind that cannot
    /// be bound. Reported and skipped, not fatal.
    InvalidBinding {
        /// The name that failed to bind.
        name: String,
        /// The kind of the rejected value.
        kind: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Integer division by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name, line } => {
                write!(f, "Error on line {line}: Unknown variable {name}.")
            },

            Self::MixedTypeOperands { operator,
                                      left,
                                      right,
                                      line, } => write!(f,
                                                        "Error on line {line}: Mixed type expression: {left} {operator} {right}."),

            Self::ExpectedBoolean { found, line } => {
                write!(f, "Error on line {line}: Expected a boolean, found {found}.")
            },

            Self::ExpectedNumber { found, line } => {
                write!(f, "Error on line {line}: Expected a number, found {found}.")
            },

            Self::ExpectedList { found, line } => {
                write!(f, "Error on line {line}: Expected a list, found {found}.")
            },

            Self::ExpectedFunction { found, line } => write!(f,
                                                             "Error on line {line}: Cannot apply {found}; a function is required."),

            Self::EmptyList { operation, line } => write!(f,
                                                          "Error on line {line}: Cannot take {operation} of an empty list."),

            Self::HeterogeneousElement { container,
                                         expected,
                                         found,
                                         line, } => write!(f,
                                                           "Error on line {line}: Mixed type {container}: expected {expected}, found {found}."),

            Self::InvalidElementKind { container, found, line } => write!(f,
                                                                          "Error on line {line}: {found} is not a valid {container} element."),

            Self::InvalidBinding { name, kind, line } => write!(f,
                                                                "Error on line {line}: Cannot bind {name} to a value of kind {kind}."),

            Self::DivisionByZero { line } => {
                write!(f, "Error on line {line}: Division by zero.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
