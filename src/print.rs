//! Level-order text dumps used to verify tree shapes.

use std::fmt::Display;

use crate::arena::NodeArena;
use crate::node::Node;

/// Render every node breadth-first, left to right, as `[ a, b, c ]`.
///
/// An empty tree renders as `[ ]`.
pub(crate) fn level_order_string<K, F>(arena: &NodeArena<K>, mut label: F) -> String
where
    F: FnMut(&Node<K>) -> String,
{
    let labels: Vec<String> = arena
        .level_order()
        .into_iter()
        .map(|id| label(&arena[id]))
        .collect();
    if labels.is_empty() {
        String::from("[ ]")
    } else {
        format!("[ {} ]", labels.join(", "))
    }
}

/// `key`
pub(crate) fn plain_label<K: Display>(node: &Node<K>) -> String {
    node.key().to_string()
}

/// `key(b)` or `key(r)`
pub(crate) fn colored_label<K: Display>(node: &Node<K>) -> String {
    format!("{}({})", node.key(), node.color().tag())
}
