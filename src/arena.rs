//! Index-stable node storage and the link capability.
//!
//! Every tree owns one [`NodeArena`]. Nodes are appended on insertion and
//! only released all at once by [`NodeArena::clear`]. Each arena stamps its
//! ids with a generation drawn from a process-wide counter, renewed on every
//! clear, so ids from another tree or from before a clear are rejected
//! instead of resolving to whichever node now sits at that index.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::collections::VecDeque;
use std::ops::{Index, IndexMut};
use std::sync::atomic::{self, AtomicU32};

use crate::error::{Result, TreeError};
use crate::node::{Color, Node, NodeId, Side};

static NEXT_GENERATION: AtomicU32 = AtomicU32::new(0);

fn next_generation() -> u32 {
    NEXT_GENERATION.fetch_add(1, atomic::Ordering::Relaxed)
}

/// Read-only navigation over a tree's nodes.
pub trait NodeLinks<K> {
    /// Current root, `None` when the tree is empty.
    fn root(&self) -> Option<NodeId>;

    /// Look up a node; `None` for ids this tree did not issue, including
    /// ids issued before the tree was last cleared.
    fn node(&self, id: NodeId) -> Option<&Node<K>>;

    fn left(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(Node::left)
    }

    fn right(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(Node::right)
    }

    fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(Node::parent)
    }

    fn key(&self, id: NodeId) -> Option<&K> {
        self.node(id).map(Node::key)
    }

    fn color(&self, id: NodeId) -> Option<Color> {
        self.node(id).map(Node::color)
    }
}

/// Re-link access, the seam the rotation engine works through.
///
/// Crate-private: trees are only restructured by their own operations.
pub(crate) trait LinkMut<K>: NodeLinks<K> {
    fn set_root(&mut self, root: Option<NodeId>);

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node<K>>;
}

/// Where an ordered descent for a key ended.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Descent {
    /// A node with an equal key already exists.
    Occupied(NodeId),
    /// The key belongs in an empty slot: below `(parent, side)`, or at the
    /// root when the tree is empty.
    Vacant(Option<(NodeId, Side)>),
}

/// Arena of nodes plus the root slot.
///
/// A clone keeps the generation, so ids stay valid in both copies.
#[derive(Debug, Clone)]
pub(crate) struct NodeArena<K> {
    nodes: Vec<Node<K>>,
    root: Option<NodeId>,
    generation: u32,
}

impl<K> Default for NodeArena<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> NodeArena<K> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
            generation: next_generation(),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Drop every node. Previously issued ids become stale.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
        self.generation = next_generation();
    }

    fn owns(&self, id: NodeId) -> bool {
        id.generation() == self.generation && id.index() < self.nodes.len()
    }

    /// Append a node and hang it in `slot` (the root slot when `None`).
    ///
    /// The slot must be empty; callers obtain it from [`NodeArena::descend`].
    ///
    /// # Errors
    /// [`TreeError::CapacityExceeded`] once every 32-bit index is taken.
    pub fn attach(&mut self, key: K, color: Color, slot: Option<(NodeId, Side)>) -> Result<NodeId> {
        let id = NodeId::issue(self.nodes.len(), self.generation).ok_or(
            TreeError::CapacityExceeded {
                capacity: self.nodes.len(),
            },
        )?;
        let mut node = Node::new(key, color);
        match slot {
            None => self.root = Some(id),
            Some((parent, side)) => {
                node.set_parent(Some(parent));
                self[parent].set_child(side, Some(id));
            }
        }
        self.nodes.push(node);
        Ok(id)
    }

    /// Node ids in breadth-first, left-to-right order.
    pub fn level_order(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut queue: VecDeque<NodeId> = self.root.into_iter().collect();
        while let Some(id) = queue.pop_front() {
            order.push(id);
            let node = &self[id];
            queue.extend(node.left);
            queue.extend(node.right);
        }
        order
    }

    /// Node ids in in-order (ascending key) sequence.
    pub fn in_order(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack = Vec::new();
        let mut cursor = self.root;
        loop {
            while let Some(id) = cursor {
                stack.push(id);
                cursor = self[id].left;
            }
            let Some(id) = stack.pop() else { break };
            order.push(id);
            cursor = self[id].right;
        }
        order
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(NodeId, usize)> = self.root.map(|r| (r, 1)).into_iter().collect();
        while let Some((id, depth)) = stack.pop() {
            height = height.max(depth);
            let node = &self[id];
            stack.extend(node.left.map(|l| (l, depth + 1)));
            stack.extend(node.right.map(|r| (r, depth + 1)));
        }
        height
    }
}

impl<K: Ord> NodeArena<K> {
    /// Walk down from the root comparing against `key`.
    ///
    /// Goes left while `key` is smaller, right while it is greater, and stops
    /// at the first equal key.
    pub fn descend(&self, key: &K) -> Descent {
        let mut slot = None;
        let mut cursor = self.root;
        while let Some(id) = cursor {
            let node = &self[id];
            let side = match key.cmp(&node.key) {
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
                Ordering::Equal => return Descent::Occupied(id),
            };
            slot = Some((id, side));
            cursor = node.child(side);
        }
        Descent::Vacant(slot)
    }

    /// Find the node holding a key equal to `key`.
    pub fn find<Q>(&self, key: &Q) -> Option<NodeId>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut cursor = self.root;
        while let Some(id) = cursor {
            let node = &self[id];
            cursor = match key.cmp(node.key.borrow()) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(id),
            };
        }
        None
    }
}

impl<K> Index<NodeId> for NodeArena<K> {
    type Output = Node<K>;

    fn index(&self, id: NodeId) -> &Node<K> {
        &self.nodes[id.index()]
    }
}

impl<K> IndexMut<NodeId> for NodeArena<K> {
    fn index_mut(&mut self, id: NodeId) -> &mut Node<K> {
        &mut self.nodes[id.index()]
    }
}

impl<K> NodeLinks<K> for NodeArena<K> {
    fn root(&self) -> Option<NodeId> {
        self.root
    }

    fn node(&self, id: NodeId) -> Option<&Node<K>> {
        if self.owns(id) {
            self.nodes.get(id.index())
        } else {
            None
        }
    }
}

impl<K> LinkMut<K> for NodeArena<K> {
    fn set_root(&mut self, root: Option<NodeId>) {
        self.root = root;
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node<K>> {
        if self.owns(id) {
            self.nodes.get_mut(id.index())
        } else {
            None
        }
    }
}
