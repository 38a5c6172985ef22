//! # letlang
//!
//! letlang is an interpreter for Let Lang, a small expression-oriented
//! functional language. It parses `let` and `global` bindings, first-order
//! functions with lexical closures, lists, tuples and conditionals, and
//! evaluates them by walking the syntax tree.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::{LetError, ParseError},
    interpreter::{
        evaluator::core::Interpreter,
        parser::core::{ParseOutcome, Parser},
        value::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum and related types that represent the
/// syntactic structure of source code as a tree. The AST is built by the
/// parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression types for all language constructs.
/// - Attaches source line numbers to AST nodes for error reporting.
/// - Enables extensible and robust handling of parsed code.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while parsing or
/// evaluating code. It standardizes error reporting and carries detailed
/// information about failures, including descriptions and source locations
/// for debugging and user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, error handling, and all supporting infrastructure to
/// provide a complete runtime for Let Lang programs. It exposes the public
/// API for interpreting and executing programs.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for parsing and evaluating user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Parses a source text into a program.
///
/// Recoverable grammar violations are collected inside the returned
/// [`ParseOutcome`] rather than aborting the parse, so one run reports as
/// many of them as possible.
///
/// # Errors
/// Returns a `ParseError` for the fatal conditions only: a token no rule
/// recognizes, or a comment still open at the end of the input.
///
/// # Examples
/// ```
/// let outcome = letlang::parse_source("let x := 2 in x * 3").unwrap();
/// assert!(!outcome.has_errors());
///
/// let outcome = letlang::parse_source("let x := 2 x * 3").unwrap();
/// assert!(outcome.has_errors()); // missing 'in' was recorded
/// ```
pub fn parse_source(source: &str) -> Result<ParseOutcome, ParseError> {
    Parser::new(source).parse()
}

/// Returns the final evaluation result of a program.
///
/// The source is parsed and, when the parse recorded no diagnostics,
/// evaluated statement by statement. Binding rejections observed during
/// evaluation are printed to standard error; with `auto_print` set, a final
/// value other than nothing is printed to standard output.
///
/// # Errors
/// Returns [`LetError::Syntax`] with every recorded diagnostic when the
/// program does not parse cleanly, and [`LetError::Runtime`] when a
/// statement fails to evaluate.
///
/// # Examples
/// ```
/// use letlang::{get_result, interpreter::value::Value};
///
/// // Simple expression: the final statement value is returned.
/// let result = get_result("let x := 2 in x + 2", false).unwrap();
/// assert_eq!(result, Value::Integer(4));
///
/// // Example with an intentional error (unknown variable).
/// let result = get_result("let y := 1 in y + x", false);
/// assert!(result.is_err());
/// ```
pub fn get_result(source: &str, auto_print: bool) -> Result<Value, LetError> {
    run(source, auto_print, false)
}

/// Like [`get_result`], with parser rule tracing switched on or off.
///
/// # Errors
/// Same conditions as [`get_result`].
pub fn run(source: &str, auto_print: bool, trace: bool) -> Result<Value, LetError> {
    let outcome = Parser::new(source).with_tracing(trace).parse()?;
    if outcome.has_errors() {
        return Err(LetError::Syntax(outcome.diagnostics));
    }

    let mut interpreter = Interpreter::new();
    let result = interpreter.eval_program(&outcome.program);

    for diagnostic in interpreter.diagnostics() {
        eprintln!("{diagnostic}");
    }

    let result = result.map_err(LetError::Runtime)?;
    if auto_print && !matches!(result, Value::Nothing) {
        println!("{result}");
    }

    Ok(result)
}
