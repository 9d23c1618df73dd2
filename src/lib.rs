//! # infixtree
//!
//! infixtree turns an infix arithmetic expression into an expression tree and
//! evaluates it. The work happens in three stages that each finish before the
//! next starts: infix to postfix conversion, postfix to tree construction, and
//! tree evaluation. The finished tree can be listed in-order or drawn as an
//! indented diagram.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::Write;

use crate::{
    config::Config,
    pipeline::{calculator::Calculator, value::Number},
    render::{Diagram, InOrder},
};

/// Numeric-mode configuration.
///
/// Declares `NumericMode` (integer or floating) and the `Config` that every
/// pipeline stage consults. Floating mode enables the function set; integer
/// mode rejects it.
pub mod config;
/// Provides unified error types for conversion, building and evaluation.
///
/// # Responsibilities
/// - Defines one error enum for the tokenizing stages and one for evaluation.
/// - Attaches positions to errors that point at input text.
/// - Implements `Display` and `std::error::Error` for reporting.
pub mod error;
/// The conversion, building and evaluation stages.
///
/// This module ties together the lexer, the function table, the number type
/// and the three stages, all exposed as methods on
/// [`pipeline::calculator::Calculator`].
///
/// # Responsibilities
/// - Converts infix text to a postfix token stream.
/// - Replays postfix into an owned expression tree.
/// - Reduces the tree to a number in the configured numeric mode.
pub mod pipeline;
/// In-order listing and sideways diagram of an expression tree.
pub mod render;
/// Defines the expression tree.
///
/// Declares `Node`, which exclusively owns its children, the `ExpressionTree`
/// that owns the root, and the `BinaryOperator` enum.
pub mod tree;

/// Runs the whole pipeline on `infix`, writing each stage's output to `out` as
/// soon as it is available.
///
/// The postfix form is written before the tree is built, so a failure in a
/// later stage leaves the earlier output in place. On success the result,
/// in-order listing and diagram follow, and the result is returned.
///
/// # Errors
/// Returns the first conversion, building or evaluation error, or an I/O error
/// from `out`.
///
/// # Examples
/// ```
/// use infixtree::{config::Config, pipeline::value::Number, run};
///
/// let mut out = Vec::new();
/// let result = run("2+3*4", &Config::default(), &mut out).unwrap();
/// assert_eq!(result, Number::Real(14.0));
///
/// let printed = String::from_utf8(out).unwrap();
/// assert!(printed.starts_with("Postfix expression: 2 3 4 * +\nResult: 14\n"));
///
/// // The postfix stage succeeds before the builder runs out of operands.
/// let mut out = Vec::new();
/// assert!(run("1+", &Config::default(), &mut out).is_err());
/// assert_eq!(String::from_utf8(out).unwrap(), "Postfix expression: 1 +\n");
/// ```
pub fn run<W: Write>(infix: &str,
                     config: &Config,
                     out: &mut W)
                     -> Result<Number, Box<dyn std::error::Error>> {
    let calculator = Calculator::new(*config);

    let postfix = calculator.convert(infix)?;
    writeln!(out, "Postfix expression: {postfix}")?;

    let tree = calculator.build(&postfix)?;
    let result = calculator.evaluate(&tree)?;
    writeln!(out, "Result: {result}")?;

    writeln!(out, "In-order: {}", InOrder(&tree))?;
    write!(out, "Tree:\n{}", Diagram(&tree))?;

    Ok(result)
}
