/// Parser state and the one-token lookahead machinery.
///
/// Contains the `Parser` struct, the parse entry point for whole programs,
/// and the `advance` operation every rule relies on for lookahead refills
/// and comment skipping.
pub mod core;

/// Expression parsing and the operator precedence ladder.
///
/// Handles the `expr` rule, logical operator chains, and the relational,
/// additive and multiplicative precedence levels.
pub mod expr;

/// Parsing of atomic operands.
///
/// Implements the `factor` rule: literals, identifiers, list and tuple
/// literals, the `hd`/`tl` accessors, and parenthesized expressions.
pub mod factor;

/// Parsing of the keyword-introduced forms.
///
/// Covers `let`, `global`, `if`, `not`, lambda expressions, function
/// definitions and `apply`.
pub mod forms;
