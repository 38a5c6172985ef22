use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::interpreter::value::Value;

/// A shared, mutable handle to an [`Environment`].
///
/// The program driver owns the global environment through one of these, and
/// every closure captures its definition environment by cloning the handle.
/// Mutations made through any holder are visible to all of them, which is
/// what gives application its update-in-place binding behavior.
pub type EnvRef = Rc<RefCell<Environment>>;

/// A mutable binding store mapping identifiers to values.
///
/// Environments implement lexical scoping: lookups read the current
/// bindings, `bind` overwrites or inserts, and [`Environment::snapshot`]
/// produces an independent copy that [`Environment::restore`] can later
/// write back, discarding every mutation made in between.
///
/// # Example
/// ```
/// use letlang::interpreter::{env::Environment, value::Value};
///
/// let mut env = Environment::new();
/// env.bind("x", Value::Integer(3));
///
/// let saved = env.snapshot();
/// env.bind("x", Value::Integer(99));
/// env.bind("y", Value::Bool(true));
///
/// env.restore(saved);
/// assert_eq!(env.lookup("x"), Some(Value::Integer(3)));
/// assert_eq!(env.lookup("y"), None);
/// ```
#[derive(Debug, Default, Clone)]
pub struct Environment {
    bindings: HashMap<String, Value>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty environment behind a shared handle.
    #[must_use]
    pub fn shared() -> EnvRef {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Binds `name` to `value`, overwriting any previous binding.
    pub fn bind(&mut self, name: impl Into<String>, value: Value) {
        self.bindings.insert(name.into(), value);
    }

    /// Looks up `name`, returning a copy of its value if bound.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<Value> {
        self.bindings.get(name).cloned()
    }

    /// Produces an independent copy of the current bindings. Mutating the
    /// original afterwards does not affect the snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Self {
        self.clone()
    }

    /// Overwrites the current bindings with a snapshot, in place. Every
    /// holder of a shared handle to this environment observes the restore.
    pub fn restore(&mut self, snapshot: Self) {
        self.bindings = snapshot.bindings;
    }
}
