//! Red-black tree: ordered insertion followed by an upward repair walk.
//!
//! A new key is attached as a red leaf. If its parent is also red the walk
//! looks at the aunt (the parent's sibling):
//!
//! * red aunt: parent and aunt turn black, the grandparent turns red and the
//!   walk continues from the grandparent;
//! * black or absent aunt, straight line (LL/RR): one rotation of the parent
//!   over the grandparent;
//! * black or absent aunt, zig-zag (LR/RL): two rotations of the node, first
//!   over the parent, then over the grandparent.
//!
//! The rotations end the walk. Finally the root is painted black.

use std::borrow::Borrow;
use std::fmt::Display;

use tracing::{debug, trace};

use crate::arena::{Descent, LinkMut, NodeArena, NodeLinks};
use crate::error::{Result, TreeError};
use crate::node::{Color, Node, NodeId};
use crate::print;
use crate::rotation::Rotate;
use crate::verify::{self, InvariantViolation};

/// Self-balancing ordered set.
#[derive(Debug, Clone)]
pub struct RedBlackTree<K> {
    arena: NodeArena<K>,
}

impl<K> Default for RedBlackTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> RedBlackTree<K> {
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

    /// Restore the red property upward from the red node `node`.
    fn ensure_red_property(&mut self, mut node: NodeId) -> Result<()> {
        loop {
            let Some(parent) = self.arena[node].parent() else {
                return Ok(());
            };
            if self.arena[parent].is_black() {
                return Ok(());
            }

            let Some(grandparent) = self.arena[parent].parent() else {
                trace!(%node, %parent, "repair: red root");
                self.arena[parent].set_color(Color::Black);
                self.arena.set_root(Some(parent));
                return Ok(());
            };

            let parent_side = self.arena[grandparent]
                .side_of(parent)
                .ok_or(TreeError::InvalidRelationship {
                    child: parent,
                    parent: grandparent,
                })?;
            let aunt = self.arena[grandparent].child(parent_side.opposite());

            if let Some(aunt) = aunt.filter(|&a| self.arena[a].is_red()) {
                trace!(%node, %grandparent, "repair: red aunt, recolor");
                for id in [parent, aunt, grandparent] {
                    let flipped = self.arena[id].color().flipped();
                    self.arena[id].set_color(flipped);
                }
                node = grandparent;
                continue;
            }

            let node_side = self.arena[parent]
                .side_of(node)
                .ok_or(TreeError::InvalidRelationship {
                    child: node,
                    parent,
                })?;

            if node_side == parent_side {
                trace!(%node, %grandparent, "repair: straight line, single rotation");
                self.arena.rotate(Some(parent), Some(grandparent))?;
                self.swap_colors(parent, grandparent);
            } else {
                trace!(%node, %grandparent, "repair: zig-zag, double rotation");
                self.arena.rotate(Some(node), Some(parent))?;
                self.arena.rotate(Some(node), Some(grandparent))?;
                self.swap_colors(node, grandparent);
            }
            return Ok(());
        }
    }

    fn swap_colors(&mut self, a: NodeId, b: NodeId) {
        let color_a = self.arena[a].color();
        let color_b = self.arena[b].color();
        self.arena[a].set_color(color_b);
        self.arena[b].set_color(color_a);
    }

    fn blacken_root(&mut self) {
        if let Some(root) = self.arena.root() {
            self.arena[root].set_color(Color::Black);
        }
    }
}

impl<K: Ord> RedBlackTree<K> {
    /// Insert `key`, returning `false` if an equal key is already stored.
    ///
    /// # Errors
    /// [`TreeError::CapacityExceeded`] when no node id is left. A rotation
    /// error from the repair walk would mean the links are inconsistent.
    pub fn insert(&mut self, key: K) -> Result<bool> {
        let slot = match self.arena.descend(&key) {
            Descent::Occupied(_) => return Ok(false),
            Descent::Vacant(slot) => slot,
        };
        let id = self.arena.attach(key, Color::Red, slot)?;
        if slot.is_some() {
            self.ensure_red_property(id)?;
        }
        self.blacken_root();
        debug!(node = %id, size = self.arena.len(), "rb insert");
        Ok(true)
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

    /// Check every red-black invariant, returning the black height.
    pub fn verify(&self) -> std::result::Result<usize, InvariantViolation> {
        verify::check_red_black(&self.arena)
    }
}

impl<K: Display> RedBlackTree<K> {
    /// Breadth-first dump with colors, e.g. `[ J(b), F(r), W(b) ]`.
    pub fn to_level_order_string(&self) -> String {
        print::level_order_string(&self.arena, print::colored_label)
    }
}

impl<K> NodeLinks<K> for RedBlackTree<K> {
    fn root(&self) -> Option<NodeId> {
        self.arena.root()
    }

    fn node(&self, id: NodeId) -> Option<&Node<K>> {
        self.arena.node(id)
    }
}
