//! FIFO worklist of node handles, used by level-order traversal.
//!
//! Elements live in the queue's own arena and are linked head to tail, so
//! both ends are reachable in O(1) without a scan.

use generational_arena::{Arena, Index};
use tracing::trace;

use crate::domain::node::NodeId;

#[derive(Debug)]
struct QueueElement {
    node: NodeId,
    next: Option<Index>,
}

/// Linked FIFO queue of non-owning node handles.
#[derive(Debug, Default)]
pub struct NodeQueue {
    elements: Arena<QueueElement>,
    head: Option<Index>,
    tail: Option<Index>,
}

impl NodeQueue {
    pub fn new() -> Self {
        Self {
            elements: Arena::new(),
            head: None,
            tail: None,
        }
    }

    /// Appends `node` at the tail. O(1).
    pub fn enqueue(&mut self, node: NodeId) {
        let idx = self.elements.insert(QueueElement { node, next: None });
        match self.tail.and_then(|tail| self.elements.get_mut(tail)) {
            Some(tail) => tail.next = Some(idx),
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
    }

    /// Removes the oldest handle, `None` when empty. O(1).
    pub fn dequeue(&mut self) -> Option<NodeId> {
        let head = self.head?;
        let element = self.elements.remove(head)?;
        self.head = element.next;
        if self.head.is_none() {
            self.tail = None;
        }
        Some(element.node)
    }

    pub fn peek(&self) -> Option<NodeId> {
        self.head
            .and_then(|head| self.elements.get(head))
            .map(|element| element.node)
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }
}

impl Drop for NodeQueue {
    fn drop(&mut self) {
        if !self.is_empty() {
            trace!("draining {} queue elements", self.len());
        }
        while self.dequeue().is_some() {}
    }
}
