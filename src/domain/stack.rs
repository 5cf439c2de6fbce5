//! LIFO worklist of node handles.
//!
//! Drives in-order traversal and whole-tree teardown without recursion.
//! The stack owns its elements but never the nodes they point at.

use tracing::trace;

use crate::domain::node::NodeId;

#[derive(Debug)]
struct StackElement {
    node: NodeId,
    next: Option<Box<StackElement>>,
}

/// Linked LIFO stack of non-owning node handles.
#[derive(Debug, Default)]
pub struct NodeStack {
    top: Option<Box<StackElement>>,
    len: usize,
}

impl NodeStack {
    pub fn new() -> Self {
        Self { top: None, len: 0 }
    }

    /// Prepends `node`. O(1).
    pub fn push(&mut self, node: NodeId) {
        let element = Box::new(StackElement {
            node,
            next: self.top.take(),
        });
        self.top = Some(element);
        self.len += 1;
    }

    /// Removes the most recently pushed handle, `None` when empty. O(1).
    pub fn pop(&mut self) -> Option<NodeId> {
        self.top.take().map(|element| {
            let StackElement { node, next } = *element;
            self.top = next;
            self.len -= 1;
            node
        })
    }

    pub fn peek(&self) -> Option<NodeId> {
        self.top.as_ref().map(|element| element.node)
    }

    pub fn is_empty(&self) -> bool {
        self.top.is_none()
    }

    pub fn len(&self) -> usize {
        self.len
    }
}

impl Drop for NodeStack {
    // Unlink one element at a time so a long chain is not dropped recursively.
    fn drop(&mut self) {
        if !self.is_empty() {
            trace!("draining {} stack elements", self.len);
        }
        while self.pop().is_some() {}
    }
}
