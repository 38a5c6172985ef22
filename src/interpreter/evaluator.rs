/// Core evaluation logic and interpreter state.
///
/// Contains the main evaluation dispatch, environment handling for `let`
/// bindings, and conditional evaluation.
pub mod core;

/// Binary and unary operator evaluation.
///
/// Implements arithmetic, the logical operators, relational comparisons and
/// boolean negation.
pub mod binary;

/// List and tuple evaluation.
///
/// Builds container values, enforces element homogeneity, and implements
/// concatenation and the `hd`/`tl` accessors.
pub mod list;

/// Function definition and application.
///
/// Creates closures, binds arguments, and implements partial application of
/// curried functions.
pub mod apply;

/// Whole-program evaluation.
///
/// Drives the statement loop: installing functions and globals, isolating
/// ordinary statements from the global environment, and producing the final
/// program value.
pub mod program;
