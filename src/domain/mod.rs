//! Domain layer: the ordered tree and its worklist containers
//!
//! This layer is independent of external concerns (no I/O, no console, no config loading).

pub mod error;
pub mod node;
pub mod queue;
pub mod stack;
pub mod tree;

pub use error::{DomainError, DomainResult};
pub use node::{Key, Node, NodeId};
pub use queue::NodeQueue;
pub use stack::NodeStack;
pub use tree::{InOrderIter, LevelOrderIter, OrderedTree};
