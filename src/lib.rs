//! Redwood - arena-backed red-black tree
//!
//! An ordered set whose height stays O(log n) under any insertion order.
//! Nodes live in an index-stable arena and refer to each other by
//! [`NodeId`], so parent back-links carry no ownership.
//!
//! Layers, bottom-up:
//! - [`node`] / [`arena`]: nodes, colors and read-only [`NodeLinks`]
//!   navigation
//! - `rotation`: the crate-internal rotation engine
//! - [`rbtree`]: insertion plus the red-black repair walk
//!
//! Trees are only restructured through their own operations. [`bst`] is
//! the unbalanced baseline and the one tree that exposes `rotate`;
//! [`verify`] checks invariants; [`scenario`] drives a configured run for
//! the `redwood` binary.

pub mod arena;
pub mod bst;
pub mod config;
pub mod error;
pub mod node;
mod print;
pub mod rbtree;
mod rotation;
pub mod scenario;
pub mod utils;
pub mod verify;

pub use arena::NodeLinks;
pub use bst::BinarySearchTree;
pub use error::{Result, TreeError};
pub use node::{Color, Node, NodeId, Side};
pub use rbtree::RedBlackTree;
pub use verify::InvariantViolation;
