/// Represents one of the four binary arithmetic operators.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl BinaryOperator {
    /// Looks up the operator written as `symbol`.
    ///
    /// # Example
    /// ```
    /// use infixtree::tree::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::from_symbol('*'), Some(BinaryOperator::Mul));
    /// assert_eq!(BinaryOperator::from_symbol('%'), None);
    /// ```
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            _ => None,
        }
    }

    /// Looks up the operator stored as a node value. The value must be exactly
    /// one operator character.
    #[must_use]
    pub fn from_value(value: &str) -> Option<Self> {
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(symbol), None) => Self::from_symbol(symbol),
            _ => None,
        }
    }

    /// The operator's source text.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }

    /// Binding strength used by the converter. Higher binds tighter; all four
    /// operators are left-associative.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
thread_local! {
    static LIVE_NODES: std::cell::Cell<usize> = const { std::cell::Cell::new(0) };
}

/// A vertex of an expression tree.
///
/// A node holds its value as text (a digit run, an operator symbol or a
/// function name) and exclusively owns up to two children:
/// - a leaf has no children,
/// - an operator node has both `left` and `right`,
/// - a function node has only `right`, its operand.
///
/// Children are fixed when the node is constructed.
#[derive(Debug, PartialEq)]
pub struct Node {
    value: String,
    left:  Option<Box<Self>>,
    right: Option<Box<Self>>,
}

impl Node {
    /// Creates a node with arbitrary children.
    ///
    /// The builder only produces leaves, operator nodes and function nodes;
    /// this constructor exists for trees assembled by hand.
    #[must_use]
    pub fn new(value: impl Into<String>, left: Option<Self>, right: Option<Self>) -> Self {
        #[cfg(test)]
        LIVE_NODES.with(|live| live.set(live.get() + 1));

        Self { value: value.into(),
               left:  left.map(Box::new),
               right: right.map(Box::new), }
    }

    /// Creates a leaf holding a numeric literal.
    #[must_use]
    pub fn leaf(literal: impl Into<String>) -> Self {
        Self::new(literal, None, None)
    }

    /// Creates an operator node over two operands.
    #[must_use]
    pub fn binary(op: BinaryOperator, left: Self, right: Self) -> Self {
        Self::new(op.symbol(), Some(left), Some(right))
    }

    /// Creates a function node; the operand is attached on the right.
    #[must_use]
    pub fn unary(function: impl Into<String>, operand: Self) -> Self {
        Self::new(function, None, Some(operand))
    }

    /// The node's value as text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The left child, present only on operator nodes.
    #[must_use]
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The right child, present on operator and function nodes.
    #[must_use]
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Returns `true` if the node has no children.
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Iterates over this node and all of its descendants in pre-order.
    #[must_use]
    pub fn nodes(&self) -> Nodes<'_> {
        Nodes { pending: vec![self] }
    }
}

impl Drop for Node {
    // Children are detached onto a worklist so that releasing a deep tree does
    // not recurse once per level.
    fn drop(&mut self) {
        let mut pending: Vec<Box<Self>> = self.left.take().into_iter().chain(self.right.take()).collect();

        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }

        #[cfg(test)]
        LIVE_NODES.with(|live| live.set(live.get() - 1));
    }
}

/// Pre-order iterator over a subtree, returned by [`Node::nodes`].
pub struct Nodes<'a> {
    pending: Vec<&'a Node>,
}

impl<'a> Iterator for Nodes<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.pending.pop()?;
        self.pending.extend(node.right());
        self.pending.extend(node.left());
        Some(node)
    }
}

/// An owned expression tree, possibly empty.
///
/// The builder returns an empty tree for an empty postfix stream; evaluating
/// it fails. Every node is released when the tree is dropped.
#[derive(Debug, Default, PartialEq)]
pub struct ExpressionTree {
    root: Option<Node>,
}

impl ExpressionTree {
    /// Creates a tree rooted at `root`.
    #[must_use]
    pub const fn new(root: Node) -> Self {
        Self { root: Some(root) }
    }

    /// Creates a tree with no nodes.
    #[must_use]
    pub const fn empty() -> Self {
        Self { root: None }
    }

    /// The root node, if any.
    #[must_use]
    pub const fn root(&self) -> Option<&Node> {
        self.root.as_ref()
    }

    /// Returns `true` if the tree has no nodes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Iterates over every node in pre-order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.root.iter().flat_map(Node::nodes)
    }

    /// Number of leaves (numeric literals).
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        self.nodes().filter(|node| node.is_leaf()).count()
    }

    /// Number of internal nodes (operators and functions).
    #[must_use]
    pub fn internal_count(&self) -> usize {
        self.nodes().filter(|node| !node.is_leaf()).count()
    }
}

impl From<Node> for ExpressionTree {
    fn from(root: Node) -> Self {
        Self::new(root)
    }
}
