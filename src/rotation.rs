//! Rotation engine.
//!
//! A rotation swaps the tree positions of a node and its parent while
//! keeping the in-order key sequence intact:
//!
//! ```text
//!        P                 C            (right rotation, C was P's left)
//!       / \               / \
//!      C   c     ==>     a   P
//!     / \                   / \
//!    a   b                 b   c
//! ```
//!
//! The left rotation is the mirror image. Colors are never touched.

use tracing::trace;

use crate::arena::{LinkMut, NodeLinks};
use crate::error::{Result, TreeError};
use crate::node::{NodeId, Side};

/// Structural rotation over anything with mutable links.
pub(crate) trait Rotate<K>: LinkMut<K> {
    /// Promote `child` into `parent`'s position.
    ///
    /// When `child` is the right child of `parent` this is a left rotation,
    /// when it is the left child a right rotation. `parent` ends up as
    /// `child`'s child on the side `child` came from, and `child`'s inner
    /// subtree moves across to `parent`.
    ///
    /// # Errors
    /// * [`TreeError::NullArgument`] if either node is absent or not part of
    ///   this tree.
    /// * [`TreeError::InvalidRelationship`] if `child` is not a direct child
    ///   of `parent`.
    ///
    /// Nothing is modified when an error is returned.
    fn rotate(&mut self, child: Option<NodeId>, parent: Option<NodeId>) -> Result<()> {
        let (Some(child), Some(parent)) = (child, parent) else {
            return Err(TreeError::NullArgument {
                operation: "rotate",
            });
        };
        if self.node(child).is_none() {
            return Err(TreeError::NullArgument {
                operation: "rotate",
            });
        }
        let side = self
            .node(parent)
            .ok_or(TreeError::NullArgument {
                operation: "rotate",
            })?
            .side_of(child)
            .ok_or(TreeError::InvalidRelationship { child, parent })?;

        let direction = match side {
            Side::Left => "right",
            Side::Right => "left",
        };
        trace!(%child, %parent, direction, "rotate");

        relink(self, child, parent, side);
        Ok(())
    }
}

impl<K, T: LinkMut<K> + ?Sized> Rotate<K> for T {}

/// Re-link `child` (hanging on `side` of `parent`) above `parent`.
fn relink<K, T: LinkMut<K> + ?Sized>(tree: &mut T, child: NodeId, parent: NodeId, side: Side) {
    let inner = side.opposite();
    let moved = tree.node(child).and_then(|c| c.child(inner));
    let grandparent = tree.parent(parent);

    // The inner subtree of `child` moves across to `parent`.
    if let Some(p) = tree.node_mut(parent) {
        p.set_child(side, moved);
        p.set_parent(Some(child));
    }
    if let Some(m) = moved {
        if let Some(m) = tree.node_mut(m) {
            m.set_parent(Some(parent));
        }
    }

    if let Some(c) = tree.node_mut(child) {
        c.set_child(inner, Some(parent));
        c.set_parent(grandparent);
    }

    // Whatever pointed at `parent` now points at `child`.
    match grandparent {
        None => tree.set_root(Some(child)),
        Some(g) => {
            if let Some(g) = tree.node_mut(g) {
                if let Some(slot) = g.side_of(parent) {
                    g.set_child(slot, Some(child));
                }
            }
        }
    }
}
