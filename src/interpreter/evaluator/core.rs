use crate::{
    ast::{Binding, Expr},
    error::RuntimeError,
    interpreter::{
        env::{EnvRef, Environment},
        value::{Value, ValueKind},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the interpreter state across the statements of a program.
///
/// The global environment holds every function definition and `global`
/// binding. Rejected bindings do not stop evaluation; they are collected
/// in the diagnostics list so callers can surface them after the run.
pub struct Interpreter {
    globals:     EnvRef,
    diagnostics: Vec<RuntimeError>,
}

#[allow(clippy::new_without_default)]
impl Interpreter {
    /// Creates an interpreter with an empty global environment.
    #[must_use]
    pub fn new() -> Self {
        Self { globals:     Environment::shared(),
               diagnostics: Vec::new(), }
    }

    /// Every binding rejection recorded while evaluating, in order.
    #[must_use]
    pub fn diagnostics(&self) -> &[RuntimeError] {
        &self.diagnostics
    }

    /// Records a rejected binding and lets evaluation continue.
    pub(in crate::interpreter::evaluator) fn report(&mut self, error: RuntimeError) {
        self.diagnostics.push(error);
    }

    /// Shared handle to the global environment.
    pub(in crate::interpreter::evaluator) fn globals(&self) -> EnvRef {
        EnvRef::clone(&self.globals)
    }

    /// Evaluates an expression in the given environment.
    ///
    /// This is the main entry point for expression evaluation. The
    /// evaluator dispatches on the expression variant: literals,
    /// identifiers, operators, conditionals, `let` bindings, containers,
    /// lambdas and applications.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    /// - `env`: Environment identifiers are resolved against.
    ///
    /// # Returns
    /// The computed [`Value`].
    ///
    /// # Example
    /// ```
    /// use letlang::{
    ///     ast::{BinaryOperator, Expr, LiteralValue},
    ///     interpreter::{env::Environment, evaluator::core::Interpreter, value::Value},
    /// };
    ///
    /// let mut interpreter = Interpreter::new();
    /// let env = Environment::shared();
    /// let expr = Expr::BinaryOp { left:  Box::new(Expr::Literal { value: LiteralValue::Integer(2),
    ///                                                             line:  1, }),
    ///                             op:    BinaryOperator::Add,
    ///                             right: Box::new(Expr::Literal { value: LiteralValue::Integer(3),
    ///                                                             line:  1, }),
    ///                             line:  1, };
    ///
    /// let value = interpreter.eval(&expr, &env).unwrap();
    /// assert_eq!(value, Value::Integer(5));
    /// ```
    pub fn eval(&mut self, expr: &Expr, env: &EnvRef) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(Value::from(*value)),
            Expr::Identifier { name, line } => Self::eval_identifier(name, env, *line),
            Expr::UnaryOp { op, expr, line } => self.eval_unary(*op, expr, env, *line),
            Expr::BinaryOp { left,
                             op,
                             right,
                             line, } => self.eval_binary(left, *op, right, env, *line),
            Expr::RelationalOp { left,
                                 op,
                                 right,
                                 line, } => self.eval_relational(left, *op, right, env, *line),
            Expr::If { condition,
                       then_branch,
                       else_branch,
                       .. } => self.eval_if(condition, then_branch, else_branch, env),
            Expr::Let { bindings, body, .. } => self.eval_let(bindings, body, env),
            // Globals are installed by the program driver; anywhere else the
            // form produces no value.
            Expr::Global { .. } => Ok(Value::Nothing),
            Expr::List { elements, line } => self.eval_list(elements, env, *line),
            Expr::Tuple { elements, line } => self.eval_tuple(elements, env, *line),
            Expr::Head { expr, line } => self.eval_head(expr, env, *line),
            Expr::Tail { expr, line } => self.eval_tail(expr, env, *line),
            Expr::Lambda { body, .. } => self.eval(body, env),
            Expr::FunctionDef { name, lambda, .. } => {
                Self::install_function(name, lambda, env);
                Ok(Value::Nothing)
            },
            Expr::Apply { callee,
                          argument,
                          line, } => self.eval_apply(callee, argument, env, *line),
        }
    }

    /// Looks up an identifier in the environment.
    fn eval_identifier(name: &str, env: &EnvRef, line: usize) -> EvalResult<Value> {
        env.borrow()
           .lookup(name)
           .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string(),
                                                          line })
    }

    /// Evaluates a conditional. The condition must produce a boolean; the
    /// branch that is not taken is never evaluated.
    fn eval_if(&mut self,
               condition: &Expr,
               then_branch: &Expr,
               else_branch: &Expr,
               env: &EnvRef)
               -> EvalResult<Value> {
        let chosen = self.eval(condition, env)?
                         .as_bool(condition.line_number())?;
        if chosen {
            self.eval(then_branch, env)
        } else {
            self.eval(else_branch, env)
        }
    }

    /// Evaluates a `let` expression.
    ///
    /// All binding expressions are evaluated against the enclosing
    /// environment before any name is installed, so the bindings of one
    /// group never see each other. Rejected bindings are recorded and
    /// skipped; the body is evaluated either way.
    fn eval_let(&mut self, bindings: &[Binding], body: &Expr, env: &EnvRef) -> EvalResult<Value> {
        let resolved = self.resolve_bindings(bindings, env);
        for (name, value) in resolved {
            env.borrow_mut().bind(name, value);
        }
        self.eval(body, env)
    }

    /// Evaluates a binding group and filters out every binding that fails.
    ///
    /// A binding is kept only when its expression evaluates cleanly and the
    /// resulting value is an integer, real, boolean, list or tuple. Failed
    /// evaluations and disallowed kinds are recorded as diagnostics.
    pub(in crate::interpreter::evaluator) fn resolve_bindings(&mut self,
                                                             bindings: &[Binding],
                                                             env: &EnvRef)
                                                             -> Vec<(String, Value)> {
        let mut resolved = Vec::with_capacity(bindings.len());
        for binding in bindings {
            match self.eval(&binding.expr, env) {
                Ok(value) => {
                    if bindable(&value) {
                        resolved.push((binding.name.clone(), value));
                    } else {
                        self.report(RuntimeError::InvalidBinding { name: binding.name.clone(),
                                                                   kind: value.kind().to_string(),
                                                                   line: binding.expr.line_number(), });
                    }
                },
                Err(error) => self.report(error),
            }
        }
        resolved
    }
}

/// Returns `true` for the value kinds a binding may hold.
const fn bindable(value: &Value) -> bool {
    matches!(value.kind(),
             ValueKind::Integer
             | ValueKind::Real
             | ValueKind::Boolean
             | ValueKind::List
             | ValueKind::Tuple)
}
