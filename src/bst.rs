//! Plain, unbalanced binary search tree.
//!
//! Shares the node arena and rotation engine with
//! [`RedBlackTree`](crate::rbtree::RedBlackTree) but never rebalances, so its
//! shape is exactly the shape the insertion order produces. Nodes are stored
//! black and their color is never looked at.

use std::borrow::Borrow;
use std::fmt::Display;

use tracing::debug;

use crate::arena::{Descent, NodeArena, NodeLinks};
use crate::error::{Result, TreeError};
use crate::node::{Color, Node, NodeId};
use crate::print;
use crate::rotation::Rotate;

/// Unbalanced ordered set.
#[derive(Debug, Clone)]
pub struct BinarySearchTree<K> {
    arena: NodeArena<K>,
}

impl<K> Default for BinarySearchTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> BinarySearchTree<K> {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self {
            arena: NodeArena::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Remove every key.
    pub fn clear(&mut self) {
        self.arena.clear();
    }

    pub fn height(&self) -> usize {
        self.arena.height()
    }

    /// Keys in ascending order.
    pub fn in_order_keys(&self) -> Vec<&K> {
        self.arena
            .in_order()
            .into_iter()
            .map(|id| self.arena[id].key())
            .collect()
    }

    /// Promote `child` into `parent`'s position: a left rotation when
    /// `child` is the right child, a right rotation when it is the left one.
    ///
    /// Rotating a plain search tree keeps it a valid search tree, so unlike
    /// [`RedBlackTree`](crate::rbtree::RedBlackTree) this tree exposes the
    /// rotation directly.
    ///
    /// # Errors
    /// * [`TreeError::NullArgument`] if either node is absent, from another
    ///   tree, or issued before the last [`clear`](Self::clear).
    /// * [`TreeError::InvalidRelationship`] if `child` is not a direct child
    ///   of `parent`.
    pub fn rotate(&mut self, child: Option<NodeId>, parent: Option<NodeId>) -> Result<()> {
        self.arena.rotate(child, parent)
    }
}

impl<K: Ord> BinarySearchTree<K> {
    /// Insert `key`, returning `false` if an equal key is already stored.
    pub fn insert(&mut self, key: K) -> Result<bool> {
        match self.arena.descend(&key) {
            Descent::Occupied(_) => Ok(false),
            Descent::Vacant(slot) => {
                let id = self.arena.attach(key, Color::Black, slot)?;
                debug!(node = %id, size = self.arena.len(), "bst insert");
                Ok(true)
            }
        }
    }

    /// Like [`insert`](Self::insert), rejecting an absent key.
    pub fn insert_opt(&mut self, key: Option<K>) -> Result<bool> {
        let key = key.ok_or(TreeError::NullArgument { operation: "insert" })?;
        self.insert(key)
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.arena.find(key).is_some()
    }

    /// Node holding `key`, if any.
    pub fn find<Q>(&self, key: &Q) -> Option<NodeId>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.arena.find(key)
    }
}

impl<K: Display> BinarySearchTree<K> {
    /// Breadth-first dump, e.g. `[ 85, 54, 97 ]`.
    pub fn to_level_order_string(&self) -> String {
        print::level_order_string(&self.arena, print::plain_label)
    }
}

impl<K> NodeLinks<K> for BinarySearchTree<K> {
    fn root(&self) -> Option<NodeId> {
        self.arena.root()
    }

    fn node(&self, id: NodeId) -> Option<&Node<K>> {
        self.arena.node(id)
    }
}
