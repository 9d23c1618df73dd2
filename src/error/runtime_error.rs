#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating an expression tree.
pub enum RuntimeError {
    /// There is no tree to evaluate.
    EmptyTree,
    /// A leaf holds text that is not a number in the active numeric mode.
    NumericParse {
        /// The leaf's literal text.
        literal: String,
    },
    /// An internal node holds a value that is neither a supported operator nor
    /// an enabled function.
    UnknownOperator {
        /// The node's value.
        value: String,
    },
    /// Attempted integer division by zero.
    DivisionByZero,
    /// Integer arithmetic overflowed.
    Overflow,
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTree => write!(f, "Empty expression tree."),
            Self::NumericParse { literal } => {
                write!(f, "Cannot read '{literal}' as a number.")
            },
            Self::UnknownOperator { value } => write!(f, "Unknown operator '{value}'."),
            Self::DivisionByZero => write!(f, "Division by zero."),
            Self::Overflow => write!(f, "Integer overflow while trying to compute result."),
        }
    }
}

impl std::error::Error for RuntimeError {}
