use std::rc::Rc;

use crate::{
    ast::Expr,
    interpreter::{
        env::EnvRef,
        evaluator::core::{EvalResult, Interpreter},
        value::{ClosureValue, Value},
    },
};

impl Interpreter {
    /// Installs a function definition as a closure in the environment.
    ///
    /// The closure captures the environment by handle, not by copy, so
    /// `global` bindings made after the definition are visible inside later
    /// calls.
    pub(in crate::interpreter::evaluator) fn install_function(name: &str,
                                                              lambda: &Expr,
                                                              env: &EnvRef) {
        let Expr::Lambda { parameter, body, .. } = lambda else {
            // Recovery node from a failed parse; there is nothing to install.
            return;
        };

        let closure = Value::Closure(Rc::new(ClosureValue { name:      name.to_string(),
                                                            parameter: parameter.clone(),
                                                            body:      (**body).clone(),
                                                            env:       EnvRef::clone(env), }));
        env.borrow_mut().bind(name, closure);
    }

    /// Applies a function to one argument.
    ///
    /// The callee is resolved first, then the argument is evaluated in the
    /// caller's environment, and the resulting value is bound directly into
    /// the closure's captured environment. The binding replaces any earlier
    /// value of the parameter, which is what makes recursive calls see
    /// their own argument.
    ///
    /// An inline lambda callee has no captured environment of its own; its
    /// parameter is bound into the caller's environment instead.
    ///
    /// # Parameters
    /// - `callee`: Function name, inline lambda, or nested `apply`.
    /// - `argument`: Argument expression, evaluated in `env`.
    /// - `env`: The caller's environment.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The value of the closure body, or a new closure when the call was
    /// partial.
    pub(in crate::interpreter::evaluator) fn eval_apply(&mut self,
                                                        callee: &Expr,
                                                        argument: &Expr,
                                                        env: &EnvRef,
                                                        line: usize)
                                                        -> EvalResult<Value> {
        match callee {
            Expr::Lambda { parameter, body, .. } => {
                let argument = self.eval(argument, env)?;
                env.borrow_mut().bind(parameter.clone(), argument);
                self.apply_body(body, env, "lambda")
            },
            _ => {
                let callee_value = self.eval(callee, env)?;
                let closure = callee_value.as_closure(line)?;
                let argument = self.eval(argument, env)?;
                closure.env.borrow_mut().bind(closure.parameter.clone(), argument);
                self.apply_body(&closure.body, &closure.env, &closure.name)
            },
        }
    }

    /// Runs a closure body after the argument has been bound.
    ///
    /// A lambda body means the call was partial: the result is a closure
    /// over the same environment waiting for the next argument.
    fn apply_body(&mut self, body: &Expr, env: &EnvRef, name: &str) -> EvalResult<Value> {
        if let Expr::Lambda { parameter,
                              body: inner,
                              .. } = body
        {
            return Ok(Value::Closure(Rc::new(ClosureValue { name:      name.to_string(),
                                                            parameter: parameter.clone(),
                                                            body:      (**inner).clone(),
                                                            env:       EnvRef::clone(env), })));
        }
        self.eval(body, env)
    }
}
