use crate::{
    error::ParseError,
    pipeline::{
        calculator::{Calculator, ParseResult},
        lexer::{Token, tokenize},
    },
    tree::BinaryOperator,
};

/// An entry on the converter's operator stack.
#[derive(Debug, Clone, Copy)]
enum StackEntry<'s> {
    /// An opening parenthesis and where it was written.
    Paren { position: usize },
    /// A pending binary operator.
    Operator(BinaryOperator),
    /// A function waiting for its parenthesized argument to close.
    Function(&'s str),
}

impl<'s> StackEntry<'s> {
    /// Parentheses and functions have precedence 0 and are never popped by an
    /// incoming operator.
    const fn precedence(self) -> u8 {
        match self {
            Self::Operator(op) => op.precedence(),
            Self::Paren { .. } | Self::Function(_) => 0,
        }
    }

    const fn symbol(self) -> &'s str {
        match self {
            Self::Operator(op) => op.symbol(),
            Self::Function(name) => name,
            Self::Paren { .. } => "(",
        }
    }
}

impl Calculator {
    /// Converts an infix expression to a space-separated postfix stream.
    ///
    /// Digit runs go straight to the output. Operators wait on a stack until an
    /// operator of lower precedence arrives (ties pop, making every operator
    /// left-associative). When a `)` closes a group that directly follows a
    /// function name, the function is emitted right after the group, so
    /// `sqrt(4)` becomes `4 sqrt`.
    ///
    /// # Errors
    /// - `InvalidCharacter` for characters outside the token set.
    /// - `UnknownFunction` or `FunctionsDisabled` for identifiers.
    /// - `MismatchedParenthesis` for a stray `)` or an unclosed `(`.
    ///
    /// # Example
    /// ```
    /// use infixtree::{config::Config, pipeline::calculator::Calculator};
    ///
    /// let calculator = Calculator::new(Config::default());
    ///
    /// assert_eq!(calculator.convert("2+3*4").unwrap(), "2 3 4 * +");
    /// assert_eq!(calculator.convert("2 * sin(1 + 2)").unwrap(), "2 1 2 + sin *");
    /// assert!(calculator.convert("(1+2").is_err());
    /// ```
    pub fn convert(&self, infix: &str) -> ParseResult<String> {
        let mut output: Vec<&str> = Vec::new();
        let mut stack: Vec<StackEntry<'_>> = Vec::new();

        for (token, position) in tokenize(infix)? {
            match token {
                Token::Number(digits) => output.push(digits),
                Token::LParen => stack.push(StackEntry::Paren { position }),
                Token::RParen => {
                    loop {
                        match stack.pop() {
                            Some(StackEntry::Paren { .. }) => break,
                            Some(entry) => output.push(entry.symbol()),
                            None => return Err(ParseError::MismatchedParenthesis { position }),
                        }
                    }

                    if let Some(&StackEntry::Function(name)) = stack.last() {
                        stack.pop();
                        output.push(name);
                    }
                },
                Token::Operator(op) => {
                    while let Some(&top) = stack.last()
                          && top.precedence() >= op.precedence()
                    {
                        stack.pop();
                        output.push(top.symbol());
                    }
                    stack.push(StackEntry::Operator(op));
                },
                Token::Identifier(name) => {
                    self.resolve_function(name, position)?;
                    stack.push(StackEntry::Function(name));
                },
                Token::Ignored => {},
            }
        }

        while let Some(entry) = stack.pop() {
            if let StackEntry::Paren { position } = entry {
                return Err(ParseError::MismatchedParenthesis { position });
            }
            output.push(entry.symbol());
        }

        Ok(output.join(" "))
    }
}
