/// The lexer module tokenizes infix expressions and postfix streams.
///
/// Both the converter and the builder scan their input with the same token
/// set: digit runs, letter runs, the four operators and parentheses.
/// Whitespace is skipped and any other character is reported with its
/// position.
pub mod lexer;
/// The table of recognized unary functions and their aliases.
pub mod function;
/// The calculator ties the numeric-mode configuration to the pipeline stages.
///
/// Every stage is a method on [`calculator::Calculator`], so integer mode and
/// floating mode share one implementation.
pub mod calculator;
/// Infix to postfix conversion (shunting-yard with function application).
pub mod converter;
/// Postfix to expression tree construction.
///
/// Replays a postfix stream against a stack of owned nodes. Operators pop two
/// operands, functions pop one, and the sole survivor becomes the root.
pub mod builder;
/// Reduces an expression tree to a number.
pub mod evaluator;
/// The value module defines the evaluator's numeric result type.
pub mod value;
