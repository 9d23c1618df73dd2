#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during conversion or tree building.
///
/// Positions are zero-based byte offsets into the string handed to the failing
/// stage (the infix expression for conversion, the postfix stream for
/// building).
pub enum ParseError {
    /// A character that is not a digit, letter, operator, parenthesis or
    /// whitespace.
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Where the character was found.
        position:  usize,
    },
    /// A letter run that does not name a recognized function.
    UnknownFunction {
        /// The identifier as written.
        name:     String,
        /// Where the identifier starts.
        position: usize,
    },
    /// A function name was used while the numeric mode has functions disabled.
    FunctionsDisabled {
        /// The identifier as written.
        name:     String,
        /// Where the identifier starts.
        position: usize,
    },
    /// A `)` without an opening partner, or a `(` that was never closed.
    MismatchedParenthesis {
        /// Where the unmatched parenthesis is.
        position: usize,
    },
    /// An operator or function found too few operands on the value stack.
    StackUnderflow {
        /// The operator or function that could not be applied.
        token:    String,
        /// Where the token is in the postfix stream.
        position: usize,
    },
    /// A token that cannot appear in a postfix stream.
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// Where the token is in the postfix stream.
        position: usize,
    },
    /// The postfix stream left more than one subtree on the value stack.
    MalformedExpression {
        /// How many subtrees were left over.
        remaining: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCharacter { character, position } => {
                write!(f, "Invalid character '{character}' at position {position}.")
            },
            Self::UnknownFunction { name, position } => {
                write!(f, "Unknown function '{name}' at position {position}.")
            },
            Self::FunctionsDisabled { name, position } => write!(f,
                                                                 "Function '{name}' at position {position} is not available in integer mode."),
            Self::MismatchedParenthesis { position } => {
                write!(f, "Mismatched parenthesis at position {position}.")
            },
            Self::StackUnderflow { token, position } => write!(f,
                                                               "Not enough operands for '{token}' at position {position}."),
            Self::UnexpectedToken { token, position } => {
                write!(f, "Unexpected token '{token}' at position {position}.")
            },
            Self::MalformedExpression { remaining } => write!(f,
                                                              "Malformed expression: {remaining} operands are not joined by an operator."),
        }
    }
}

impl std::error::Error for ParseError {}
