use std::fs;

use letlang::{get_result, interpreter::value::Value};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_dsl_blocks(&content).into_iter().enumerate() {
            count += 1;
            if let Err(e) = get_result(&code, false) {
                panic!("DSL example {} in {:?} failed:\n{}\nError: {:?}",
                       i + 1,
                       path,
                       code,
                       e);
            }
        }
    }

    assert!(count > 0, "No DSL examples found in book/src");
}

fn extract_dsl_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```letlang") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

fn assert_result(src: &str, expected: &Value) {
    match get_result(src, false) {
        Ok(value) => assert_eq!(&value, expected, "Wrong final value for: {src}"),
        Err(e) => panic!("Script failed: {e}"),
    }
}

fn assert_success(src: &str) {
    if let Err(e) = get_result(src, false) {
        panic!("Script failed: {e}");
    }
}

fn assert_failure(src: &str) {
    if get_result(src, false).is_ok() {
        panic!("Script succeeded but was expected to fail")
    }
}

#[test]
fn let_bindings_and_arithmetic() {
    assert_result("let x, y := 3, 4 in x + y", &Value::Integer(7));
    assert_result("let x, y := 3, 4 in x * y", &Value::Integer(12));
    assert_result("let a := 12 in a / 2 - 1", &Value::Integer(5));
    assert_result("1.5 + 2.25", &Value::Real(3.75));
    assert_result("let half := 7.0 / 2.0 in half", &Value::Real(3.5));
}

#[test]
fn integer_division_truncates_and_checks_zero() {
    assert_result("7 / 2", &Value::Integer(3));
    assert_result("0 - 7 / 2", &Value::Integer(-3));
    assert_failure("1 / 0");
    assert_result("1.0 / 0.0", &Value::Real(f64::INFINITY));
}

#[test]
fn global_bindings_persist_across_statements() {
    assert_result("global ten := 10 ten + 5", &Value::Integer(15));
    assert_result("global a, b := 1, 2 a + b", &Value::Integer(3));
    assert_result("global base := 2 let x := base * 3 in x", &Value::Integer(6));
}

#[test]
fn let_bindings_do_not_outlive_their_statement() {
    assert_failure("let x := 1 in x x");
    // A let over a global name is rolled back once the statement ends.
    assert_result("global acc := 1 let acc := 99 in acc acc", &Value::Integer(1));
}

#[test]
fn conditionals_and_logic() {
    assert_result("if 1 < 2 then 10 else 20", &Value::Integer(10));
    assert_result("if 1 > 2 then 10 else 20", &Value::Integer(20));
    assert_result("if true and false then 1 else 2", &Value::Integer(2));
    assert_result("if true or false then 1 else 2", &Value::Integer(1));
    assert_result("if not (1 = 2) then 1 else 2", &Value::Integer(1));
    assert_result("1 = 1 and 2 = 2", &Value::Bool(true));
    assert_failure("if 1 then 2 else 3");
    assert_failure("true and 1");
}

#[test]
fn relational_operators() {
    assert_result("3 <= 3", &Value::Bool(true));
    assert_result("3 != 4", &Value::Bool(true));
    assert_result("2.5 < 2.6", &Value::Bool(true));
    assert_result("let x := 5 in x >= 6", &Value::Bool(false));
    assert_failure("1 < 2.0");
    assert_failure("true = false");
}

#[test]
fn lists() {
    assert_result("hd list(1, 2, 3)", &Value::Integer(1));
    assert_result("tl list(1, 2, 3)",
                  &Value::list(vec![Value::Integer(2), Value::Integer(3)]));
    assert_result("hd tl list(1, 2, 3)", &Value::Integer(2));
    assert_failure("hd list()");
    assert_failure("tl list()");
    assert_failure("hd 5");
}

#[test]
fn list_concatenation() {
    assert_result("list(1, 2) ++ list(3)",
                  &Value::list(vec![Value::Integer(1), Value::Integer(2), Value::Integer(3)]));
    assert_result("list() ++ list(1.5)", &Value::list(vec![Value::Real(1.5)]));
    assert_result("list(7) ++ list()", &Value::list(vec![Value::Integer(7)]));
    assert_result("list(1) ++ list(2) ++ list(3)",
                  &Value::list(vec![Value::Integer(1), Value::Integer(2), Value::Integer(3)]));
    assert_failure("list(1) ++ list(2.0)");
    assert_failure("1 ++ 2");
}

#[test]
fn container_homogeneity() {
    // Elements reached through identifiers are checked at runtime.
    assert_failure("let a := 1.5 in list(a, 2)");
    assert_success("let a := 1.5 in list(a, 2.5)");
    assert_failure("tuple(1, 2.0)");
    assert_result("tuple(1, 2, 3)",
                  &Value::tuple(vec![Value::Integer(1), Value::Integer(2), Value::Integer(3)]));
    assert_success("tuple(true, false)");
    // Lists and tuples count as one container kind inside a tuple.
    assert_success("tuple(list(1), tuple(2))");
    assert_failure("hd tuple(1, 2)");
}

#[test]
fn functions_and_application() {
    assert_result("fun inc := (lambda x => x + 1) apply inc 5", &Value::Integer(6));
    assert_result("fun double x => x * 2 apply double 21", &Value::Integer(42));
    assert_result("fun inc := (=> x => x + 1) apply inc 1", &Value::Integer(2));
    assert_result("apply (lambda x => x * x) 5", &Value::Integer(25));
    assert_failure("global n := 3 apply n 1");
    assert_failure("apply missing 1");
}

#[test]
fn closures_see_later_global_updates() {
    assert_result("fun f := (lambda x => x + base) global base := 10 apply f 1",
                  &Value::Integer(11));
    assert_result("global base := 1 fun g := (lambda x => x + base) global base := 5 apply g 0",
                  &Value::Integer(5));
}

#[test]
fn curried_functions() {
    assert_result("fun add := (lambda x => (lambda y => x + y)) apply (apply add 3) 4",
                  &Value::Integer(7));
    assert_result("fun plus := (lambda x => lambda y => x + y) apply (apply plus 1) 2",
                  &Value::Integer(3));
    assert_result("fun add := (lambda x => (lambda y => x + y)) apply (apply add 0 - 2) 5",
                  &Value::Integer(3));
}

#[test]
fn partial_applications_cannot_be_bound() {
    // The intermediate value is a function, which no binding may hold.
    assert_failure("fun add := (lambda x => (lambda y => x + y)) \
                    global inc := apply add 1 \
                    apply inc 5");
}

#[test]
fn recursion() {
    assert_result("fun fact := (lambda n => if n = 0 then 1 else n * (apply fact (n - 1))) \
                   apply fact 5",
                  &Value::Integer(120));
    assert_result("fun fib := (lambda n => if n < 2 then n \
                   else let a, b := apply fib (n - 1), apply fib (n - 2) in a + b) \
                   apply fib 10",
                  &Value::Integer(55));
}

#[test]
fn parameter_bindings_are_rolled_back_after_the_statement() {
    assert_result("fun fact := (lambda n => if n = 0 then 1 else n * (apply fact (n - 1))) \
                   global n := 77 \
                   apply fact 3 \
                   n",
                  &Value::Integer(77));
}

#[test]
fn runtime_error_halts_the_program() {
    assert_failure("1 + true");
    assert_failure("1 + true 42");
    assert_failure("list(1) + list(2)");
}

#[test]
fn rejected_bindings_are_skipped() {
    assert_result("let bad := 1 / 0, good := 2 in good", &Value::Integer(2));
    assert_result("let bad := missing in 5", &Value::Integer(5));
}

#[test]
fn programs_without_a_value_yield_nothing() {
    assert_result("global x := 1", &Value::Nothing);
    assert_result("fun id := (lambda x => x)", &Value::Nothing);
    // A statement producing nothing stops the run before later statements.
    assert_result("let g := 3 in global x := 1 5", &Value::Nothing);
}

#[test]
fn test_script_file() {
    let script = fs::read_to_string("tests/example.let").expect("missing file");
    assert_success(&script);
}

#[test]
fn comments() {
    assert_result("# a comment # 1 + 2", &Value::Integer(3));
    assert_result("1 + # inline # 2", &Value::Integer(3));
    assert_result("# stray $ % inside # 5", &Value::Integer(5));
    assert_failure("# never closed");
}

#[test]
fn malformed_programs_fail() {
    assert_failure("let x := 1 x + 1");
    assert_failure("5 $");
    assert_failure("let x, y := 1 in x");
    assert_failure("if true then 1");
}
