//! Key-bearing tree node stored in the tree's arena.

use std::fmt;

use generational_arena::Index;

/// Ordered scalar key stored in the tree.
pub type Key = i64;

/// Stable handle to a node inside an `OrderedTree`'s arena.
///
/// Handles locate nodes without owning them; only the tree frees arena slots.
pub type NodeId = Index;

/// One stored key plus optional handles to its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Key held by this node
    pub value: Key,
    /// Subtree of keys strictly less than `value`
    pub left: Option<NodeId>,
    /// Subtree of keys strictly greater than `value`
    pub right: Option<NodeId>,
}

impl Node {
    pub fn new(value: Key) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// The single child of a node with exactly one child.
    pub fn only_child(&self) -> Option<NodeId> {
        match (self.left, self.right) {
            (Some(child), None) | (None, Some(child)) => Some(child),
            _ => None,
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use generational_arena::Arena;

    #[test]
    fn given_new_node_when_created_then_is_leaf() {
        let node = Node::new(7);
        assert!(node.is_leaf());
        assert_eq!(node.only_child(), None);
        assert_eq!(node.to_string(), "7");
    }

    #[test]
    fn given_one_child_when_querying_then_reports_it() {
        let mut arena = Arena::new();
        let child = arena.insert(Node::new(3));
        let mut node = Node::new(7);
        node.left = Some(child);

        assert!(!node.is_leaf());
        assert_eq!(node.only_child(), Some(child));

        node.right = Some(arena.insert(Node::new(9)));
        assert_eq!(node.only_child(), None);
    }
}
