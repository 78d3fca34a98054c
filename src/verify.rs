//! Structural invariant checks.
//!
//! Used by tests and by the `redwood` driver to confirm that a tree is a
//! valid red-black tree after a run of insertions.

use crate::arena::{NodeArena, NodeLinks};
use crate::node::{Color, NodeId};

/// A broken red-black or BST invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvariantViolation {
    #[error("root {0} is red")]
    RedRoot(NodeId),

    #[error("red node {child} has red parent {parent}")]
    RedRedEdge { child: NodeId, parent: NodeId },

    #[error("black height below {node} is {left} on the left but {right} on the right")]
    BlackHeightMismatch {
        node: NodeId,
        left: usize,
        right: usize,
    },

    #[error("keys of {left} and {right} are out of order")]
    OrderViolation { left: NodeId, right: NodeId },

    #[error("node {child} does not point back to its parent {parent:?}")]
    BrokenParentLink {
        child: NodeId,
        parent: Option<NodeId>,
    },
}

/// Check the red-black invariants and return the black height.
///
/// The black height returned counts the black nodes on any path from the
/// root down to an absent child, root included; an empty tree has height 0.
pub(crate) fn check_red_black<K: Ord>(arena: &NodeArena<K>) -> Result<usize, InvariantViolation> {
    check_order(arena)?;
    let Some(root) = arena.root() else {
        return Ok(0);
    };
    if arena[root].is_red() {
        return Err(InvariantViolation::RedRoot(root));
    }
    if let Some(parent) = arena[root].parent() {
        return Err(InvariantViolation::BrokenParentLink {
            child: root,
            parent: Some(parent),
        });
    }
    black_height(arena, root)
}

/// Check parent back-links and strictly ascending in-order keys.
pub(crate) fn check_order<K: Ord>(arena: &NodeArena<K>) -> Result<(), InvariantViolation> {
    for id in arena.level_order() {
        let node = &arena[id];
        for child in [node.left(), node.right()].into_iter().flatten() {
            if arena[child].parent() != Some(id) {
                return Err(InvariantViolation::BrokenParentLink {
                    child,
                    parent: Some(id),
                });
            }
        }
    }

    let in_order = arena.in_order();
    for pair in in_order.windows(2) {
        let (left, right) = (pair[0], pair[1]);
        if arena[left].key() >= arena[right].key() {
            return Err(InvariantViolation::OrderViolation { left, right });
        }
    }
    Ok(())
}

/// Post-order black-height computation with an explicit stack.
fn black_height<K>(arena: &NodeArena<K>, root: NodeId) -> Result<usize, InvariantViolation> {
    // (node, children already pushed)
    let mut stack = vec![(root, false)];
    let mut heights: Vec<usize> = Vec::new();

    while let Some((id, expanded)) = stack.pop() {
        let node = &arena[id];
        if !expanded {
            stack.push((id, true));
            // Right first so the left result sits deeper on `heights`.
            for child in [node.right(), node.left()].into_iter().flatten() {
                stack.push((child, false));
            }
            continue;
        }

        let mut side_height = |child: Option<NodeId>| -> Result<usize, InvariantViolation> {
            let Some(child) = child else { return Ok(0) };
            if node.is_red() && arena[child].color() == Color::Red {
                return Err(InvariantViolation::RedRedEdge { child, parent: id });
            }
            Ok(heights.pop().unwrap_or_default())
        };
        // Popped in reverse of the order the children finished in.
        let right = side_height(node.right())?;
        let left = side_height(node.left())?;
        if left != right {
            return Err(InvariantViolation::BlackHeightMismatch {
                node: id,
                left,
                right,
            });
        }
        heights.push(left + usize::from(node.is_black()));
    }

    Ok(heights.pop().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::{Descent, LinkMut};
    use crate::node::Side;

    #[test]
    fn test_empty_tree_is_valid() {
        let arena: NodeArena<i32> = NodeArena::new();
        assert_eq!(check_red_black(&arena), Ok(0));
    }

    #[test]
    fn test_valid_tree() {
        let mut arena = NodeArena::new();
        let root = arena.attach(20, Color::Black, None).unwrap();
        let left = arena.attach(10, Color::Black, Some((root, Side::Left))).unwrap();
        arena.attach(30, Color::Black, Some((root, Side::Right))).unwrap();
        arena.attach(5, Color::Red, Some((left, Side::Left))).unwrap();
        assert_eq!(check_red_black(&arena), Ok(2));
    }

    #[test]
    fn test_red_root() {
        let mut arena = NodeArena::new();
        let root = arena.attach(1, Color::Red, None).unwrap();
        assert_eq!(
            check_red_black(&arena),
            Err(InvariantViolation::RedRoot(root))
        );
    }

    #[test]
    fn test_red_red_edge() {
        let mut arena = NodeArena::new();
        let root = arena.attach(20, Color::Black, None).unwrap();
        let left = arena.attach(10, Color::Red, Some((root, Side::Left))).unwrap();
        arena.attach(30, Color::Red, Some((root, Side::Right))).unwrap();
        let inner = arena.attach(15, Color::Red, Some((left, Side::Right))).unwrap();
        assert_eq!(
            check_red_black(&arena),
            Err(InvariantViolation::RedRedEdge {
                child: inner,
                parent: left,
            })
        );
    }

    #[test]
    fn test_black_height_mismatch() {
        let mut arena = NodeArena::new();
        let root = arena.attach(20, Color::Black, None).unwrap();
        arena.attach(10, Color::Black, Some((root, Side::Left))).unwrap();
        assert_eq!(
            check_red_black(&arena),
            Err(InvariantViolation::BlackHeightMismatch {
                node: root,
                left: 1,
                right: 0,
            })
        );
    }

    #[test]
    fn test_order_violation() {
        let mut arena = NodeArena::new();
        let root = arena.attach(20, Color::Black, None).unwrap();
        let wrong = arena.attach(30, Color::Red, Some((root, Side::Left))).unwrap();
        assert_eq!(
            check_order(&arena),
            Err(InvariantViolation::OrderViolation {
                left: wrong,
                right: root,
            })
        );
    }

    #[test]
    fn test_broken_parent_link() {
        let mut arena = NodeArena::new();
        for key in [2, 1, 3] {
            if let Descent::Vacant(slot) = arena.descend(&key) {
                arena.attach(key, Color::Black, slot).unwrap();
            }
        }
        let root = arena.root().unwrap();
        let left = arena.left(root).unwrap();
        arena.node_mut(left).unwrap().set_parent(None);
        assert_eq!(
            check_order(&arena),
            Err(InvariantViolation::BrokenParentLink {
                child: left,
                parent: Some(root),
            })
        );
    }
}
