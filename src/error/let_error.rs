use crate::error::{ParseError, RuntimeError};

#[derive(Debug)]
/// The error type returned by the top-level entry points.
///
/// A run fails either before evaluation, with every syntax diagnostic the
/// parser recorded (in source order, a fatal error last if one occurred), or
/// during evaluation with the runtime error that halted the program.
pub enum LetError {
    /// Parsing failed; contains all recorded diagnostics.
    Syntax(Vec<ParseError>),
    /// Evaluation failed.
    Runtime(RuntimeError),
}

impl std::fmt::Display for LetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Syntax(diagnostics) => {
                let mut first = true;
                for diagnostic in diagnostics {
                    if !first {
                        writeln!(f)?;
                    }
                    write!(f, "{diagnostic}")?;
                    first = false;
                }
                Ok(())
            },
            Self::Runtime(error) => write!(f, "{error}"),
        }
    }
}

impl std::error::Error for LetError {}

impl From<ParseError> for LetError {
    fn from(error: ParseError) -> Self {
        Self::Syntax(vec![error])
    }
}

impl From<RuntimeError> for LetError {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}
