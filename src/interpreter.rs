/// The environment module stores name bindings during evaluation.
///
/// An environment maps identifiers to runtime values. The global environment
/// lives for the whole program run and is shared by handle with every closure
/// defined in it, which is what makes `global` bindings visible inside later
/// calls.
///
/// # Responsibilities
/// - Stores and resolves name bindings.
/// - Supports snapshotting and in-place restoration around statements.
/// - Provides the shared handle type closures capture.
pub mod env;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions, performs
/// arithmetic and logical operations, manages the environment, and produces
/// results. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Handles bindings, functions, conditionals and application.
/// - Reports runtime errors such as division by zero or type mismatches.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens, each
/// corresponding to a meaningful language element such as a number, an
/// identifier, an operator, a delimiter, or a keyword. This is the first
/// stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source location.
/// - Handles numeric and boolean literals, identifiers, and operators.
/// - Tracks line numbers for error reporting.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs an AST that represents the syntactic structure of programs.
/// This enables the evaluator to analyze and execute user code.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes with one token of lookahead.
/// - Records grammar violations with location info and keeps parsing.
/// - Supports bindings, functions, application, conditionals and more.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares all the value types used during interpretation, such
/// as integers, reals, booleans, lists, tuples and closures. It also
/// provides conversion helpers and the kind classification used by the
/// homogeneity and binding rules.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported value variants.
/// - Implements conversion, display, and error checking helpers.
/// - Classifies values by kind for container and binding checks.
pub mod value;
