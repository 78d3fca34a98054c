//! Step definitions shared by all tree scenarios.

pub mod red_black;
pub mod rotation;

use cucumber::World;
use redwood::{BinarySearchTree, NodeId, NodeLinks, RedBlackTree, TreeError};

/// Test context for tree scenarios.
#[derive(Debug, Default, World)]
pub struct TreeWorld {
    bst: BinarySearchTree<i64>,
    rbt: RedBlackTree<String>,
    in_order_before: Vec<i64>,
    kept_ids: (Option<NodeId>, Option<NodeId>),
    last_error: Option<TreeError>,
}

impl TreeWorld {
    fn bst_in_order(&self) -> Vec<i64> {
        self.bst.in_order_keys().into_iter().copied().collect()
    }
}

/// Split `"a, b, c"` into trimmed, non-empty items.
fn split_keys(keys: &str) -> impl Iterator<Item = &str> {
    keys.split(',').map(str::trim).filter(|k| !k.is_empty())
}

/// Resolve a dotted path such as `root.left.right`; `none` is the absent
/// node.
fn resolve<K>(tree: &impl NodeLinks<K>, path: &str) -> Option<NodeId> {
    let mut segments = path.split('.');
    match segments.next() {
        Some("root") => {}
        Some("none") => return None,
        other => panic!("node path must start at root or be none, got {:?}", other),
    }
    let mut cursor = tree.root();
    for segment in segments {
        let id = cursor.unwrap_or_else(|| panic!("path {} walks off the tree", path));
        cursor = match segment {
            "left" => tree.left(id),
            "right" => tree.right(id),
            other => panic!("unknown path segment {}", other),
        };
    }
    cursor
}
