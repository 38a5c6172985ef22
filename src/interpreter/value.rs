use std::rc::Rc;

use crate::{
    ast::{Expr, LiteralValue},
    error::RuntimeError,
    interpreter::{env::EnvRef, evaluator::core::EvalResult},
};

/// Represents a runtime value in the interpreter.
///
/// This enum models every type a program can produce: numbers, booleans,
/// lists, tuples, closures and the `Nothing` unit. Lists and tuples are
/// homogeneous by the kind of their first element; the evaluator enforces
/// this when containers are built or concatenated.
#[derive(Debug, Clone)]
pub enum Value {
    /// A 64-bit signed integer value.
    Integer(i64),
    /// A numeric value (double precision floating-point).
    Real(f64),
    /// A boolean value (`true` or `false`).
    /// Produced by literals, relational operators and logic operators, and
    /// required as the condition of an `if` expression.
    Bool(bool),
    /// An ordered list of values sharing one element kind.
    List(Rc<Vec<Self>>),
    /// An ordered tuple of values sharing one element kind.
    Tuple(Rc<Vec<Self>>),
    /// A named function paired with the environment captured at its
    /// definition site. Produced only by `fun` definitions and by partial
    /// application; a bare lambda is not a value.
    Closure(Rc<ClosureValue>),
    /// The absence of a value. Produced by `global` forms and by an empty
    /// program; never a legal operand or container element.
    Nothing,
}

/// The payload of a [`Value::Closure`].
///
/// The captured environment is held by shared handle, so bindings written
/// into it during application are visible to every later call of the same
/// closure.
pub struct ClosureValue {
    /// The name the closure was defined under.
    pub name:      String,
    /// The parameter bound at application time.
    pub parameter: String,
    /// The body evaluated in the captured environment.
    pub body:      Expr,
    /// The environment captured at the definition site.
    pub env:       EnvRef,
}

// The captured environment can contain the closure itself (a definition is
// installed into the environment it captured), so Debug must not descend
// into it.
impl std::fmt::Debug for ClosureValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClosureValue")
         .field("name", &self.name)
         .field("parameter", &self.parameter)
         .finish_non_exhaustive()
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Real(a), Self::Real(b)) => a == b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::List(a), Self::List(b)) | (Self::Tuple(a), Self::Tuple(b)) => a == b,
            (Self::Closure(a), Self::Closure(b)) => Rc::ptr_eq(a, b),
            (Self::Nothing, Self::Nothing) => true,
            _ => false,
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<LiteralValue> for Value {
    fn from(v: LiteralValue) -> Self {
        match v {
            LiteralValue::Integer(n) => Self::Integer(n),
            LiteralValue::Real(r) => Self::Real(r),
            LiteralValue::Bool(b) => Self::Bool(b),
            LiteralValue::Nothing => Self::Nothing,
        }
    }
}

/// The kind of a [`Value`], used for homogeneity checks and diagnostics.
///
/// `Display` renders the lowercase name that error messages use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// An integer value.
    Integer,
    /// A real value.
    Real,
    /// A boolean value.
    Boolean,
    /// A list value.
    List,
    /// A tuple value.
    Tuple,
    /// A closure value.
    Function,
    /// The `Nothing` unit.
    Nothing,
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Integer => "integer",
            Self::Real => "real",
            Self::Boolean => "boolean",
            Self::List => "list",
            Self::Tuple => "tuple",
            Self::Function => "function",
            Self::Nothing => "nothing",
        };
        write!(f, "{name}")
    }
}

impl Value {
    /// Wraps a vector of values as a list.
    #[must_use]
    pub fn list(elements: Vec<Self>) -> Self {
        Self::List(Rc::new(elements))
    }

    /// Wraps a vector of values as a tuple.
    #[must_use]
    pub fn tuple(elements: Vec<Self>) -> Self {
        Self::Tuple(Rc::new(elements))
    }

    /// The kind of this value.
    ///
    /// # Example
    /// ```
    /// use letlang::interpreter::value::{Value, ValueKind};
    ///
    /// assert_eq!(Value::Integer(3).kind(), ValueKind::Integer);
    /// assert_eq!(Value::list(vec![]).kind(), ValueKind::List);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Integer(_) => ValueKind::Integer,
            Self::Real(_) => ValueKind::Real,
            Self::Bool(_) => ValueKind::Boolean,
            Self::List(_) => ValueKind::List,
            Self::Tuple(_) => ValueKind::Tuple,
            Self::Closure(_) => ValueKind::Function,
            Self::Nothing => ValueKind::Nothing,
        }
    }

    /// Converts the value to a `bool`, or returns an error if it is not a
    /// boolean.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(bool)`: If the value is a boolean.
    /// - `Err(RuntimeError::ExpectedBoolean)`: Otherwise.
    ///
    /// # Example
    /// ```
    /// use letlang::interpreter::value::Value;
    ///
    /// let condition = Value::Bool(true);
    ///
    /// assert!(condition.as_bool(1).unwrap());
    /// ```
    pub fn as_bool(&self, line: usize) -> EvalResult<bool> {
        match self {
            Self::Bool(b) => Ok(*b),
            _ => Err(RuntimeError::ExpectedBoolean { found: self.kind().to_string(),
                                                     line }),
        }
    }

    /// Converts the value to its list elements, or returns an error if it is
    /// not a list.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(Rc<Vec<Value>>)`: If the value is a list.
    /// - `Err(RuntimeError::ExpectedList)`: Otherwise.
    pub fn as_list(&self, line: usize) -> EvalResult<Rc<Vec<Self>>> {
        match self {
            Self::List(elements) => Ok(Rc::clone(elements)),
            _ => Err(RuntimeError::ExpectedList { found: self.kind().to_string(),
                                                  line }),
        }
    }

    /// Converts the value to a closure, or returns an error if it is not a
    /// function.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(Rc<ClosureValue>)`: If the value is a closure.
    /// - `Err(RuntimeError::ExpectedFunction)`: Otherwise.
    pub fn as_closure(&self, line: usize) -> EvalResult<Rc<ClosureValue>> {
        match self {
            Self::Closure(closure) => Ok(Rc::clone(closure)),
            _ => Err(RuntimeError::ExpectedFunction { found: self.kind().to_string(),
                                                      line }),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => write!(f, "{r}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::List(elements) => {
                write!(f, "[")?;

                for (index, value) in elements.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{value}")?;
                }

                write!(f, "]")
            },
            Self::Tuple(elements) => {
                write!(f, "(")?;

                for (index, value) in elements.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{value}")?;
                }

                write!(f, ")")
            },
            Self::Closure(closure) => write!(f, "<fun {}>", closure.name),
            Self::Nothing => write!(f, "nothing"),
        }
    }
}
