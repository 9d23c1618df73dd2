/// Conversion and tree-building errors.
///
/// Defines all error types that can occur while tokenizing an infix
/// expression, converting it to postfix, or replaying a postfix stream into an
/// expression tree. These are raised before any arithmetic happens.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while reducing an expression
/// tree to a number, such as division by zero in integer mode or a node whose
/// value is not a supported operator.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
