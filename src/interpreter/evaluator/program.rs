use crate::{
    ast::{Binding, Expr, Program},
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::Value,
    },
};

impl Interpreter {
    /// Evaluates a whole program and returns its final value.
    ///
    /// Statements run in source order:
    /// - A function definition installs a closure in the global environment
    ///   and produces no value.
    /// - A `global` statement evaluates its bindings and installs the
    ///   accepted ones persistently.
    /// - Every other statement runs against the global environment and the
    ///   environment is put back to its pre-statement state afterwards, so
    ///   `let` bindings never leak into the next statement.
    ///
    /// The program value is the value of the last ordinary statement, or
    /// nothing when there is none. The first failing statement stops the
    /// run, as does a statement that produces no value.
    ///
    /// # Errors
    /// The first `RuntimeError` raised by a statement.
    ///
    /// # Example
    /// ```
    /// use letlang::interpreter::{evaluator::core::Interpreter, parser::core::Parser, value::Value};
    ///
    /// let outcome = Parser::new("global base := 10 base + 5").parse().unwrap();
    /// assert!(!outcome.has_errors());
    ///
    /// let mut interpreter = Interpreter::new();
    /// let value = interpreter.eval_program(&outcome.program).unwrap();
    /// assert_eq!(value, Value::Integer(15));
    /// ```
    pub fn eval_program(&mut self, program: &Program) -> EvalResult<Value> {
        let mut result = Value::Nothing;

        for statement in &program.statements {
            match statement {
                Expr::FunctionDef { name, lambda, .. } => {
                    let globals = self.globals();
                    Self::install_function(name, lambda, &globals);
                },
                Expr::Global { bindings, .. } => self.install_globals(bindings),
                statement => {
                    let globals = self.globals();
                    let snapshot = globals.borrow().snapshot();
                    let outcome = self.eval(statement, &globals);
                    // Restore in place: closures holding this environment
                    // observe the rollback too.
                    globals.borrow_mut().restore(snapshot);

                    result = outcome?;
                    if matches!(result, Value::Nothing) {
                        return Ok(Value::Nothing);
                    }
                },
            }
        }

        Ok(result)
    }

    /// Evaluates the bindings of a top-level `global` and installs every
    /// accepted one for the rest of the run.
    fn install_globals(&mut self, bindings: &[Binding]) {
        let globals = self.globals();
        let resolved = self.resolve_bindings(bindings, &globals);
        for (name, value) in resolved {
            globals.borrow_mut().bind(name, value);
        }
    }
}
