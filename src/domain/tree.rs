//! Iterative binary search tree over an arena of nodes.
//!
//! The tree is the only owner of its nodes. Children are linked by arena
//! handles, and every walk over the structure is driven by an explicit
//! [`NodeStack`] or [`NodeQueue`] so degenerate (list-shaped) trees never
//! deepen the call stack. There is no balancing: insert, search and remove
//! are O(height), which is O(n) for sorted input.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

use generational_arena::Arena;
use termtree::Tree;
use tracing::{debug, instrument, trace};

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::node::{Key, Node, NodeId};
use crate::domain::queue::NodeQueue;
use crate::domain::stack::NodeStack;

/// Child slot of a parent node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

/// Parent slot that currently links to a node; `None` means the root slot.
type Link = Option<(NodeId, Side)>;

/// Ordered set of keys backed by an unbalanced binary search tree.
#[derive(Debug)]
pub struct OrderedTree {
    /// Storage for every node reachable from `root`
    arena: Arena<Node>,
    /// Handle of the root node, None for empty trees
    root: Option<NodeId>,
}

impl Default for OrderedTree {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderedTree {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    /// Inserts `key`, returning `false` when it was already present.
    ///
    /// A duplicate leaves the tree untouched.
    #[instrument(level = "trace", skip(self))]
    pub fn insert(&mut self, key: Key) -> bool {
        let Some(mut current) = self.root else {
            self.root = Some(self.arena.insert(Node::new(key)));
            debug!(key, "inserted as root");
            return true;
        };

        loop {
            let node = &self.arena[current];
            let (side, next) = match key.cmp(&node.value) {
                Ordering::Less => (Side::Left, node.left),
                Ordering::Greater => (Side::Right, node.right),
                Ordering::Equal => {
                    trace!(key, "duplicate ignored");
                    return false;
                }
            };
            match next {
                Some(child) => current = child,
                None => {
                    let id = self.arena.insert(Node::new(key));
                    self.relink(Some((current, side)), Some(id));
                    debug!(key, "inserted");
                    return true;
                }
            }
        }
    }

    /// Like [`insert`](Self::insert), but reports a duplicate as an error.
    pub fn try_insert(&mut self, key: Key) -> DomainResult<()> {
        if self.insert(key) {
            Ok(())
        } else {
            Err(DomainError::DuplicateKey(key))
        }
    }

    #[instrument(level = "trace", skip(self))]
    pub fn search(&self, key: Key) -> bool {
        self.find(key).is_some()
    }

    pub fn contains(&self, key: Key) -> bool {
        self.search(key)
    }

    /// Removes `key`, returning `false` when it was absent.
    ///
    /// A node with two children takes over its in-order successor's key and
    /// the successor node is the one freed.
    #[instrument(level = "trace", skip(self))]
    pub fn remove(&mut self, key: Key) -> bool {
        let mut link: Link = None;
        let mut current = self.root;

        let target = loop {
            let Some(id) = current else {
                trace!(key, "remove: key not found");
                return false;
            };
            let node = &self.arena[id];
            match key.cmp(&node.value) {
                Ordering::Equal => break id,
                Ordering::Less => {
                    link = Some((id, Side::Left));
                    current = node.left;
                }
                Ordering::Greater => {
                    link = Some((id, Side::Right));
                    current = node.right;
                }
            }
        };

        let node = &self.arena[target];
        match (node.left, node.right) {
            (Some(_), Some(right)) => self.remove_successor_into(target, right),
            _ => {
                // leaf or single child: splice the child (if any) into place
                let child = node.only_child();
                self.relink(link, child);
                self.arena.remove(target);
                debug!(key, "removed");
            }
        }
        true
    }

    /// Like [`remove`](Self::remove), but reports an absent key as an error.
    pub fn try_remove(&mut self, key: Key) -> DomainResult<()> {
        if self.remove(key) {
            Ok(())
        } else {
            Err(DomainError::KeyNotFound(key))
        }
    }

    /// Keys in ascending order.
    pub fn in_order(&self) -> Vec<Key> {
        self.iter_in_order().collect()
    }

    /// Keys in breadth-first order, root first, left before right.
    pub fn level_order(&self) -> Vec<Key> {
        self.iter_level_order().collect()
    }

    pub fn iter_in_order(&self) -> InOrderIter<'_> {
        InOrderIter::new(self)
    }

    pub fn iter_level_order(&self) -> LevelOrderIter<'_> {
        LevelOrderIter::new(self)
    }

    /// Frees every node and leaves the tree empty. Safe to call repeatedly.
    #[instrument(level = "debug", skip(self))]
    pub fn teardown(&mut self) {
        let Some(root) = self.root.take() else {
            return;
        };

        let mut stack = NodeStack::new();
        stack.push(root);
        let mut freed = 0usize;

        while let Some(id) = stack.pop() {
            if let Some(node) = self.arena.remove(id) {
                if let Some(left) = node.left {
                    stack.push(left);
                }
                if let Some(right) = node.right {
                    stack.push(right);
                }
                freed += 1;
            }
        }
        debug!(freed, "tree torn down");
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn root_key(&self) -> Option<Key> {
        self.root.map(|id| self.arena[id].value)
    }

    pub fn min(&self) -> Option<Key> {
        self.extreme(Side::Left)
    }

    pub fn max(&self) -> Option<Key> {
        self.extreme(Side::Right)
    }

    /// Number of levels; 0 for an empty tree.
    #[instrument(level = "trace", skip(self))]
    pub fn height(&self) -> usize {
        let Some(root) = self.root else {
            return 0;
        };

        let mut queue = NodeQueue::new();
        queue.enqueue(root);
        let mut height = 0;

        while !queue.is_empty() {
            for _ in 0..queue.len() {
                if let Some(id) = queue.dequeue() {
                    let node = &self.arena[id];
                    if let Some(left) = node.left {
                        queue.enqueue(left);
                    }
                    if let Some(right) = node.right {
                        queue.enqueue(right);
                    }
                }
            }
            height += 1;
        }
        height
    }

    /// Shape of the tree for display. A node with one child shows `-` in the
    /// empty slot so left and right stay distinguishable.
    ///
    /// Built bottom-up from a post-order worklist, children before parents.
    pub fn render(&self) -> Tree<String> {
        let Some(root) = self.root else {
            return Tree::new("(empty)".to_string());
        };

        let mut pending = NodeStack::new();
        let mut post_order = NodeStack::new();
        pending.push(root);
        while let Some(id) = pending.pop() {
            post_order.push(id);
            let node = &self.arena[id];
            if let Some(left) = node.left {
                pending.push(left);
            }
            if let Some(right) = node.right {
                pending.push(right);
            }
        }

        let mut built: HashMap<NodeId, Tree<String>> = HashMap::new();
        while let Some(id) = post_order.pop() {
            let node = &self.arena[id];
            let mut tree = Tree::new(node.value.to_string());
            if !node.is_leaf() {
                for child in [node.left, node.right] {
                    let leaf = child
                        .and_then(|child| built.remove(&child))
                        .unwrap_or_else(|| Tree::new("-".to_string()));
                    tree.push(leaf);
                }
            }
            built.insert(id, tree);
        }

        built
            .remove(&root)
            .unwrap_or_else(|| Tree::new("(empty)".to_string()))
    }

    fn find(&self, key: Key) -> Option<NodeId> {
        let mut current = self.root;
        while let Some(id) = current {
            let node = &self.arena[id];
            current = match key.cmp(&node.value) {
                Ordering::Equal => return Some(id),
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
            };
        }
        None
    }

    fn extreme(&self, side: Side) -> Option<Key> {
        let mut id = self.root?;
        loop {
            let node = &self.arena[id];
            let next = match side {
                Side::Left => node.left,
                Side::Right => node.right,
            };
            match next {
                Some(child) => id = child,
                None => return Some(node.value),
            }
        }
    }

    /// Points `link` (a parent's child slot, or the root slot) at `child`.
    fn relink(&mut self, link: Link, child: Option<NodeId>) {
        match link {
            None => self.root = child,
            Some((parent, Side::Left)) => self.arena[parent].left = child,
            Some((parent, Side::Right)) => self.arena[parent].right = child,
        }
    }

    /// Two-children removal: copy the leftmost key of `right`'s subtree into
    /// `target`, then splice out that successor node.
    fn remove_successor_into(&mut self, target: NodeId, right: NodeId) {
        let mut link = (target, Side::Right);
        let mut successor = right;
        while let Some(left) = self.arena[successor].left {
            link = (successor, Side::Left);
            successor = left;
        }

        let (value, successor_right) = {
            let node = &self.arena[successor];
            (node.value, node.right)
        };
        let removed = std::mem::replace(&mut self.arena[target].value, value);
        self.relink(Some(link), successor_right);
        self.arena.remove(successor);
        debug!(key = removed, successor = value, "removed via successor");
    }
}

impl Drop for OrderedTree {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl Extend<Key> for OrderedTree {
    fn extend<I: IntoIterator<Item = Key>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl FromIterator<Key> for OrderedTree {
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl fmt::Display for OrderedTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

/// Lazy ascending traversal driven by a [`NodeStack`].
pub struct InOrderIter<'a> {
    arena: &'a Arena<Node>,
    stack: NodeStack,
    current: Option<NodeId>,
}

impl<'a> InOrderIter<'a> {
    fn new(tree: &'a OrderedTree) -> Self {
        Self {
            arena: &tree.arena,
            stack: NodeStack::new(),
            current: tree.root,
        }
    }
}

impl Iterator for InOrderIter<'_> {
    type Item = Key;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(id) = self.current {
            self.stack.push(id);
            self.current = self.arena.get(id).and_then(|node| node.left);
        }

        let id = self.stack.pop()?;
        let node = self.arena.get(id)?;
        self.current = node.right;
        Some(node.value)
    }
}

/// Lazy breadth-first traversal driven by a [`NodeQueue`].
pub struct LevelOrderIter<'a> {
    arena: &'a Arena<Node>,
    queue: NodeQueue,
}

impl<'a> LevelOrderIter<'a> {
    fn new(tree: &'a OrderedTree) -> Self {
        let mut queue = NodeQueue::new();
        if let Some(root) = tree.root {
            queue.enqueue(root);
        }
        Self {
            arena: &tree.arena,
            queue,
        }
    }
}

impl Iterator for LevelOrderIter<'_> {
    type Item = Key;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.queue.dequeue()?;
        let node = self.arena.get(id)?;
        if let Some(left) = node.left {
            self.queue.enqueue(left);
        }
        if let Some(right) = node.right {
            self.queue.enqueue(right);
        }
        Some(node.value)
    }
}
