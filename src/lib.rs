//! Iterative, arena-backed binary search tree.
//!
//! The [`domain`] layer holds the tree and the explicit stack and queue that
//! drive its traversals and teardown. [`application`] maps a text menu onto
//! it, and [`cli`] wires everything to the command line.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;

pub use domain::{Key, OrderedTree};
