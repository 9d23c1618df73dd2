use crate::{
    config::NumericMode,
    error::RuntimeError,
    pipeline::{calculator::Calculator, function::Function, value::Number},
    tree::{BinaryOperator, ExpressionTree, Node},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

impl Calculator {
    /// Evaluates a whole tree.
    ///
    /// # Errors
    /// Returns `RuntimeError::EmptyTree` for an empty tree, and otherwise any
    /// error from [`Calculator::evaluate_node`].
    ///
    /// # Example
    /// ```
    /// use infixtree::{
    ///     config::Config,
    ///     pipeline::{calculator::Calculator, value::Number},
    /// };
    ///
    /// let calculator = Calculator::new(Config::default());
    /// let tree = calculator.build("4 sqrt 7 2 / +").unwrap();
    ///
    /// assert_eq!(calculator.evaluate(&tree).unwrap(), Number::Real(5.5));
    /// ```
    pub fn evaluate(&self, tree: &ExpressionTree) -> EvalResult<Number> {
        tree.root()
            .map_or(Err(RuntimeError::EmptyTree), |root| self.evaluate_node(root))
    }

    /// Evaluates a subtree in post-order.
    ///
    /// Leaves are parsed according to the numeric mode. Internal nodes first
    /// evaluate whichever children are present (a missing child counts as
    /// zero) and then apply their operator, or their function to the right
    /// value. The walk keeps its own stack, so tree depth is bounded only by
    /// memory.
    ///
    /// # Errors
    /// - `NumericParse` if a leaf is not a number in the active mode.
    /// - `DivisionByZero` or `Overflow` in integer mode.
    /// - `UnknownOperator` for any other internal value, including functions
    ///   in integer mode.
    pub fn evaluate_node(&self, node: &Node) -> EvalResult<Number> {
        let mut pending = vec![(node, false)];
        let mut values: Vec<Number> = Vec::new();

        while let Some((node, children_done)) = pending.pop() {
            if node.is_leaf() {
                values.push(self.parse_literal(node.value())?);
            } else if children_done {
                // The right operand was evaluated last, so it is on top.
                let right = node.right().and_then(|_| values.pop()).unwrap_or(self.zero());
                let left = node.left().and_then(|_| values.pop()).unwrap_or(self.zero());
                values.push(self.apply_node(node, left, right)?);
            } else {
                pending.push((node, true));
                pending.extend(node.right().map(|right| (right, false)));
                pending.extend(node.left().map(|left| (left, false)));
            }
        }

        values.pop().ok_or(RuntimeError::EmptyTree)
    }

    /// Applies an internal node's operator or function to its operand values.
    fn apply_node(&self, node: &Node, left: Number, right: Number) -> EvalResult<Number> {
        if let Some(op) = BinaryOperator::from_value(node.value()) {
            return Self::eval_binary_op(op, left, right);
        }

        if self.config().functions_enabled()
           && let Some(function) = Function::from_name(node.value())
        {
            return Ok(Number::Real(function.apply(right.as_real())));
        }

        Err(RuntimeError::UnknownOperator { value: node.value().to_string() })
    }

    /// Parses a leaf literal in the active numeric mode.
    fn parse_literal(&self, literal: &str) -> EvalResult<Number> {
        let parsed = match self.config().mode {
            NumericMode::Integer => literal.parse().ok().map(Number::Integer),
            NumericMode::Floating => literal.parse().ok().map(Number::Real),
        };

        parsed.ok_or_else(|| RuntimeError::NumericParse { literal: literal.to_string() })
    }

    const fn zero(&self) -> Number {
        match self.config().mode {
            NumericMode::Integer => Number::Integer(0),
            NumericMode::Floating => Number::Real(0.0),
        }
    }

    /// Applies a binary operator.
    ///
    /// Two integers use checked arithmetic with truncating division. Any real
    /// operand promotes both sides to `f64`, where division by zero follows
    /// IEEE-754.
    ///
    /// # Example
    /// ```
    /// use infixtree::{
    ///     error::RuntimeError,
    ///     pipeline::{calculator::Calculator, value::Number},
    ///     tree::BinaryOperator,
    /// };
    ///
    /// let q = Calculator::eval_binary_op(BinaryOperator::Div, Number::Integer(7), Number::Integer(2));
    /// assert_eq!(q, Ok(Number::Integer(3)));
    ///
    /// let q = Calculator::eval_binary_op(BinaryOperator::Div, Number::Real(7.0), Number::Integer(2));
    /// assert_eq!(q, Ok(Number::Real(3.5)));
    ///
    /// let q = Calculator::eval_binary_op(BinaryOperator::Div, Number::Integer(1), Number::Integer(0));
    /// assert_eq!(q, Err(RuntimeError::DivisionByZero));
    /// ```
    pub fn eval_binary_op(op: BinaryOperator, left: Number, right: Number) -> EvalResult<Number> {
        use BinaryOperator::{Add, Div, Mul, Sub};
        use Number::{Integer, Real};

        match (left, right) {
            (Integer(left), Integer(right)) => {
                let value = match op {
                    Add => left.checked_add(right),
                    Sub => left.checked_sub(right),
                    Mul => left.checked_mul(right),
                    Div => {
                        if right == 0 {
                            return Err(RuntimeError::DivisionByZero);
                        }
                        left.checked_div(right)
                    },
                };
                value.map(Integer).ok_or(RuntimeError::Overflow)
            },
            _ => {
                let left = left.as_real();
                let right = right.as_real();

                Ok(Real(match op {
                            Add => left + right,
                            Sub => left - right,
                            Mul => left * right,
                            Div => left / right,
                        }))
            },
        }
    }
}
