use crate::{
    error::ParseError,
    pipeline::{
        calculator::{Calculator, ParseResult},
        lexer::{Token, tokenize},
    },
    tree::{ExpressionTree, Node},
};

impl Calculator {
    /// Builds an expression tree from a postfix stream.
    ///
    /// Each literal pushes a leaf. An operator pops its right operand, then its
    /// left operand, and pushes the joined node. A function pops one operand
    /// and attaches it on the right. An empty stream yields an empty tree.
    ///
    /// # Errors
    /// - `StackUnderflow` if an operator or function finds too few operands.
    /// - `MalformedExpression` if more than one subtree is left at the end.
    /// - `UnexpectedToken` for parentheses, which never occur in postfix.
    /// - `InvalidCharacter`, `UnknownFunction` or `FunctionsDisabled` as in
    ///   [`Calculator::convert`].
    ///
    /// # Example
    /// ```
    /// use infixtree::{config::Config, pipeline::calculator::Calculator};
    ///
    /// let calculator = Calculator::new(Config::default());
    /// let tree = calculator.build("8 3 - 2 -").unwrap();
    ///
    /// let root = tree.root().unwrap();
    /// assert_eq!(root.value(), "-");
    /// assert_eq!(root.right().unwrap().value(), "2");
    /// assert_eq!(root.left().unwrap().value(), "-");
    /// ```
    pub fn build(&self, postfix: &str) -> ParseResult<ExpressionTree> {
        let mut stack: Vec<Node> = Vec::new();

        for (token, position) in tokenize(postfix)? {
            match token {
                Token::Number(digits) => stack.push(Node::leaf(digits)),
                Token::Operator(op) => {
                    let (Some(right), Some(left)) = (stack.pop(), stack.pop()) else {
                        return Err(ParseError::StackUnderflow { token: op.to_string(),
                                                                position });
                    };
                    stack.push(Node::binary(op, left, right));
                },
                Token::Identifier(name) => {
                    self.resolve_function(name, position)?;
                    let Some(operand) = stack.pop() else {
                        return Err(ParseError::StackUnderflow { token: name.to_string(),
                                                                position });
                    };
                    stack.push(Node::unary(name, operand));
                },
                Token::LParen | Token::RParen => {
                    return Err(ParseError::UnexpectedToken { token: token.to_string(),
                                                             position });
                },
                Token::Ignored => {},
            }
        }

        let root = stack.pop();
        if !stack.is_empty() {
            return Err(ParseError::MalformedExpression { remaining: stack.len() + 1 });
        }

        Ok(root.map_or_else(ExpressionTree::empty, ExpressionTree::from))
    }
}
