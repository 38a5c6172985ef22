use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        env::EnvRef,
        evaluator::core::{EvalResult, Interpreter},
        value::{Value, ValueKind},
    },
};

impl Interpreter {
    /// Evaluates a list literal.
    ///
    /// Every element must evaluate to the same kind as the first element.
    /// Functions and the nothing value are never legal elements.
    pub(in crate::interpreter::evaluator) fn eval_list(&mut self,
                                                       elements: &[Expr],
                                                       env: &EnvRef,
                                                       line: usize)
                                                       -> EvalResult<Value> {
        let values = self.eval_elements(elements, env)?;
        check_elements("list", &values, false, line)?;
        Ok(Value::list(values))
    }

    /// Evaluates a tuple literal.
    ///
    /// Tuples enforce the same homogeneity rule as lists, except that list
    /// and tuple elements count as one container kind, so the two can be
    /// mixed inside a tuple.
    pub(in crate::interpreter::evaluator) fn eval_tuple(&mut self,
                                                        elements: &[Expr],
                                                        env: &EnvRef,
                                                        line: usize)
                                                        -> EvalResult<Value> {
        let values = self.eval_elements(elements, env)?;
        check_elements("tuple", &values, true, line)?;
        Ok(Value::tuple(values))
    }

    fn eval_elements(&mut self, elements: &[Expr], env: &EnvRef) -> EvalResult<Vec<Value>> {
        elements.iter().map(|element| self.eval(element, env)).collect()
    }

    /// Concatenates two lists.
    ///
    /// An empty list is the identity on either side and carries no element
    /// kind, so it concatenates with anything. Two non-empty lists must
    /// agree on the kind of their first elements.
    pub(in crate::interpreter::evaluator) fn eval_concat(left: &Value,
                                                         right: &Value,
                                                         line: usize)
                                                         -> EvalResult<Value> {
        let left_elements = left.as_list(line)?;
        let right_elements = right.as_list(line)?;

        if left_elements.is_empty() {
            return Ok(right.clone());
        }
        if right_elements.is_empty() {
            return Ok(left.clone());
        }

        let expected = left_elements[0].kind();
        let found = right_elements[0].kind();
        if expected != found {
            return Err(RuntimeError::HeterogeneousElement { container: "list".to_string(),
                                                            expected:  expected.to_string(),
                                                            found:     found.to_string(),
                                                            line, });
        }

        let mut combined = left_elements.as_ref().clone();
        combined.extend(right_elements.iter().cloned());
        Ok(Value::list(combined))
    }

    /// Evaluates `hd`, the first element of a non-empty list.
    pub(in crate::interpreter::evaluator) fn eval_head(&mut self,
                                                       expr: &Expr,
                                                       env: &EnvRef,
                                                       line: usize)
                                                       -> EvalResult<Value> {
        let value = self.eval(expr, env)?;
        let elements = value.as_list(line)?;

        elements.first()
                .cloned()
                .ok_or_else(|| RuntimeError::EmptyList { operation: "hd".to_string(),
                                                         line })
    }

    /// Evaluates `tl`, everything after the first element of a non-empty
    /// list.
    pub(in crate::interpreter::evaluator) fn eval_tail(&mut self,
                                                       expr: &Expr,
                                                       env: &EnvRef,
                                                       line: usize)
                                                       -> EvalResult<Value> {
        let value = self.eval(expr, env)?;
        let elements = value.as_list(line)?;

        if elements.is_empty() {
            return Err(RuntimeError::EmptyList { operation: "tl".to_string(),
                                                 line });
        }
        Ok(Value::list(elements[1..].to_vec()))
    }
}

/// Checks the element rules shared by both containers.
///
/// Functions and nothing are rejected outright. The remaining elements must
/// all belong to the class of the first element, where `merge_containers`
/// folds tuples into the list class.
fn check_elements(container: &str,
                  values: &[Value],
                  merge_containers: bool,
                  line: usize)
                  -> EvalResult<()> {
    for value in values {
        if matches!(value.kind(), ValueKind::Function | ValueKind::Nothing) {
            return Err(RuntimeError::InvalidElementKind { container: container.to_string(),
                                                          found: value.kind().to_string(),
                                                          line });
        }
    }

    if let Some(first) = values.first() {
        let expected = element_class(first.kind(), merge_containers);
        for value in &values[1..] {
            if element_class(value.kind(), merge_containers) != expected {
                return Err(RuntimeError::HeterogeneousElement { container: container.to_string(),
                                                                expected:  first.kind().to_string(),
                                                                found:     value.kind().to_string(),
                                                                line, });
            }
        }
    }

    Ok(())
}

/// The kind used for homogeneity checks, with both container kinds folded
/// into one class when `merge_containers` is set.
const fn element_class(kind: ValueKind, merge_containers: bool) -> ValueKind {
    if merge_containers && matches!(kind, ValueKind::Tuple) {
        ValueKind::List
    } else {
        kind
    }
}
