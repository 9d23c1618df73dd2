use std::fmt::{self, Display, Formatter};

use crate::tree::{ExpressionTree, Node};

/// Spaces of indentation per tree level in a [`Diagram`].
pub const INDENT: usize = 4;

/// Lists a tree's values in in-order (left, node, right), separated by single
/// spaces.
///
/// Function nodes have no left child, so they list as `name operand`.
///
/// # Example
/// ```
/// use infixtree::{config::Config, pipeline::calculator::Calculator, render::InOrder};
///
/// let calculator = Calculator::new(Config::default());
/// let tree = calculator.build("2 3 4 * + sqrt").unwrap();
///
/// assert_eq!(InOrder(&tree).to_string(), "sqrt 2 + 3 * 4");
/// ```
pub struct InOrder<'a>(pub &'a ExpressionTree);

impl Display for InOrder<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut pending: Vec<&Node> = Vec::new();
        let mut current = self.0.root();
        let mut first = true;

        loop {
            while let Some(node) = current {
                pending.push(node);
                current = node.left();
            }

            let Some(node) = pending.pop() else {
                return Ok(());
            };

            if !first {
                write!(f, " ")?;
            }
            first = false;
            write!(f, "{}", node.value())?;

            current = node.right();
        }
    }
}

/// Draws a tree sideways, one node per line.
///
/// The right subtree is printed above its parent and the left subtree below,
/// each level indented by [`INDENT`] spaces, so the picture reads like the
/// tree rotated a quarter turn counter-clockwise. Every line ends with a
/// newline.
///
/// # Example
/// ```
/// use infixtree::{config::Config, pipeline::calculator::Calculator, render::Diagram};
///
/// let calculator = Calculator::new(Config::default());
/// let tree = calculator.build("2 3 4 * +").unwrap();
///
/// assert_eq!(Diagram(&tree).to_string(),
///            "        4\n    *\n        3\n+\n    2\n");
/// ```
pub struct Diagram<'a>(pub &'a ExpressionTree);

impl Display for Diagram<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        // (node, depth, subtrees already scheduled)
        let mut pending: Vec<(&Node, usize, bool)> = Vec::new();
        pending.extend(self.0.root().map(|root| (root, 0, false)));

        while let Some((node, depth, expanded)) = pending.pop() {
            if expanded {
                writeln!(f, "{:indent$}{}", "", node.value(), indent = depth * INDENT)?;
                continue;
            }

            pending.extend(node.left().map(|left| (left, depth + 1, false)));
            pending.push((node, depth, true));
            pending.extend(node.right().map(|right| (right, depth + 1, false)));
        }

        Ok(())
    }
}
