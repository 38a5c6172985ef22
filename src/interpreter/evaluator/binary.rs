use crate::{
    ast::{BinaryOperator, Expr, RelationalOperator, UnaryOperator},
    error::RuntimeError,
    interpreter::{
        env::EnvRef,
        evaluator::core::{EvalResult, Interpreter},
        value::Value,
    },
};

impl Interpreter {
    /// Evaluates a binary operation.
    ///
    /// Both operands are evaluated first, left before right, and the
    /// operator is dispatched on afterwards. `++` goes to concatenation,
    /// `and`/`or` to the boolean operators, and the rest to arithmetic.
    ///
    /// # Parameters
    /// - `left`: Left operand expression.
    /// - `op`: The binary operator.
    /// - `right`: Right operand expression.
    /// - `env`: Environment both operands are evaluated in.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The computed `Value` wrapped in `EvalResult`.
    pub(in crate::interpreter::evaluator) fn eval_binary(&mut self,
                                                         left: &Expr,
                                                         op: BinaryOperator,
                                                         right: &Expr,
                                                         env: &EnvRef,
                                                         line: usize)
                                                         -> EvalResult<Value> {
        let left_value = self.eval(left, env)?;
        let right_value = self.eval(right, env)?;

        match op {
            BinaryOperator::Concat => Self::eval_concat(&left_value, &right_value, line),
            BinaryOperator::And | BinaryOperator::Or => {
                Self::eval_logic(op, &left_value, &right_value, line)
            },
            _ => Self::eval_arithmetic(op, &left_value, &right_value, line),
        }
    }

    /// Evaluates an arithmetic operation.
    ///
    /// Both operands must be integers, or both reals; there is no implicit
    /// promotion between the two. Integer division truncates and checks for
    /// a zero divisor explicitly.
    fn eval_arithmetic(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mul, Sub};
        use Value::{Integer, Real};

        match (left, right) {
            (Integer(a), Integer(b)) => match op {
                Add => Ok(Integer(a + b)),
                Sub => Ok(Integer(a - b)),
                Mul => Ok(Integer(a * b)),
                Div => {
                    if *b == 0 {
                        Err(RuntimeError::DivisionByZero { line })
                    } else {
                        Ok(Integer(a / b))
                    }
                },
                _ => unreachable!(),
            },
            (Real(a), Real(b)) => Ok(Real(match op {
                                              Add => a + b,
                                              Sub => a - b,
                                              Mul => a * b,
                                              Div => a / b,
                                              _ => unreachable!(),
                                          })),
            _ => {
                if left.kind() == right.kind() {
                    Err(RuntimeError::ExpectedNumber { found: left.kind().to_string(),
                                                       line })
                } else {
                    Err(RuntimeError::MixedTypeOperands { operator: op.to_string(),
                                                          left: left.kind().to_string(),
                                                          right: right.kind().to_string(),
                                                          line })
                }
            },
        }
    }

    /// Evaluates `and` or `or` over two already computed operands.
    ///
    /// Both operands were evaluated by the caller, so neither operator
    /// short-circuits.
    fn eval_logic(op: BinaryOperator, left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
        let left = left.as_bool(line)?;
        let right = right.as_bool(line)?;

        match op {
            BinaryOperator::And => Ok(Value::Bool(left && right)),
            BinaryOperator::Or => Ok(Value::Bool(left || right)),
            _ => unreachable!(),
        }
    }

    /// Evaluates a relational comparison.
    ///
    /// Comparisons are defined on two integers or two reals, nothing else.
    ///
    /// # Parameters
    /// - `left`: Left operand expression.
    /// - `op`: The relational operator.
    /// - `right`: Right operand expression.
    /// - `env`: Environment both operands are evaluated in.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// `Value::Bool` holding the comparison result.
    pub(in crate::interpreter::evaluator) fn eval_relational(&mut self,
                                                             left: &Expr,
                                                             op: RelationalOperator,
                                                             right: &Expr,
                                                             env: &EnvRef,
                                                             line: usize)
                                                             -> EvalResult<Value> {
        use Value::{Bool, Integer, Real};

        let left_value = self.eval(left, env)?;
        let right_value = self.eval(right, env)?;

        match (&left_value, &right_value) {
            (Integer(a), Integer(b)) => Ok(Bool(compare(op, a, b))),
            (Real(a), Real(b)) => Ok(Bool(compare(op, a, b))),
            _ => {
                if left_value.kind() == right_value.kind() {
                    Err(RuntimeError::ExpectedNumber { found: left_value.kind().to_string(),
                                                       line })
                } else {
                    Err(RuntimeError::MixedTypeOperands { operator: op.to_string(),
                                                          left: left_value.kind().to_string(),
                                                          right: right_value.kind().to_string(),
                                                          line })
                }
            },
        }
    }

    /// Evaluates a unary operation. `not` is the only unary operator and it
    /// requires a boolean operand.
    pub(in crate::interpreter::evaluator) fn eval_unary(&mut self,
                                                        op: UnaryOperator,
                                                        expr: &Expr,
                                                        env: &EnvRef,
                                                        line: usize)
                                                        -> EvalResult<Value> {
        let value = self.eval(expr, env)?;

        match op {
            UnaryOperator::Not => Ok(Value::Bool(!value.as_bool(line)?)),
        }
    }
}

/// Applies a relational operator to two ordered operands.
fn compare<T: PartialOrd>(op: RelationalOperator, a: &T, b: &T) -> bool {
    match op {
        RelationalOperator::Less => a < b,
        RelationalOperator::Greater => a > b,
        RelationalOperator::LessEqual => a <= b,
        RelationalOperator::GreaterEqual => a >= b,
        RelationalOperator::Equal => a == b,
        RelationalOperator::NotEqual => a != b,
    }
}
