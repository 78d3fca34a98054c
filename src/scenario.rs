//! One configured insertion run: build a tree, dump it, check it.

use std::fmt::Display;

use tracing::{debug, info};

use crate::bst::BinarySearchTree;
use crate::config::{Config, KeyType, TreeKind};
use crate::error::TreeError;
use crate::rbtree::RedBlackTree;
use crate::verify::InvariantViolation;

/// Result type for scenario runs.
pub type Result<T> = std::result::Result<T, ScenarioError>;

/// Errors that can occur while running a scenario.
#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    #[error("key '{key}' is not an integer: {source}")]
    InvalidKey {
        key: String,
        source: std::num::ParseIntError,
    },

    #[error("tree operation failed: {0}")]
    Tree(#[from] TreeError),

    #[error("invariant check failed: {0}")]
    Invariant(#[from] InvariantViolation),
}

/// What a run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Level-order dump of the final tree.
    pub level_order: String,
    /// Distinct keys stored.
    pub size: usize,
    /// Keys skipped because they were already present.
    pub duplicates: usize,
    /// Nodes on the longest root-to-leaf path.
    pub height: usize,
    /// Black height, when the tree was verified.
    pub black_height: Option<usize>,
}

/// Execute the run described by `config`.
pub fn run(config: &Config) -> Result<Report> {
    info!(
        tree = ?config.tree,
        key_type = ?config.key_type,
        keys = config.keys.len(),
        "running scenario"
    );
    match config.key_type {
        KeyType::Text => build(config, config.keys.iter().cloned()),
        KeyType::Integer => {
            let keys = config
                .keys
                .iter()
                .map(|key| {
                    key.trim().parse::<i64>().map_err(|source| ScenarioError::InvalidKey {
                        key: key.clone(),
                        source,
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            build(config, keys)
        }
    }
}

fn build<K, I>(config: &Config, keys: I) -> Result<Report>
where
    K: Ord + Display,
    I: IntoIterator<Item = K>,
{
    let mut duplicates = 0;
    let report = match config.tree {
        TreeKind::RedBlack => {
            let mut tree = RedBlackTree::new();
            for key in keys {
                if !tree.insert(key)? {
                    duplicates += 1;
                }
            }
            let black_height = if config.verify {
                Some(tree.verify()?)
            } else {
                None
            };
            Report {
                level_order: tree.to_level_order_string(),
                size: tree.len(),
                duplicates,
                height: tree.height(),
                black_height,
            }
        }
        TreeKind::BinarySearch => {
            let mut tree = BinarySearchTree::new();
            for key in keys {
                if !tree.insert(key)? {
                    duplicates += 1;
                }
            }
            Report {
                level_order: tree.to_level_order_string(),
                size: tree.len(),
                duplicates,
                height: tree.height(),
                black_height: None,
            }
        }
    };
    debug!(size = report.size, height = report.height, duplicates, "scenario done");
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(tree: TreeKind, key_type: KeyType, keys: &[&str]) -> Config {
        Config {
            tree,
            key_type,
            keys: keys.iter().map(|k| k.to_string()).collect(),
            verify: true,
        }
    }

    #[test]
    fn test_default_scenario() {
        let report = run(&Config::default()).unwrap();
        assert_eq!(
            report.level_order,
            "[ J(b), F(r), W(b), A(b), H(b), Y(r), G(r) ]"
        );
        assert_eq!(report.size, 7);
        assert_eq!(report.duplicates, 0);
        assert_eq!(report.black_height, Some(2));
    }

    #[test]
    fn test_integer_binary_search_scenario() {
        let cfg = config(
            TreeKind::BinarySearch,
            KeyType::Integer,
            &["85", "54", "97", " 32", "72", "89", "109", "54"],
        );
        let report = run(&cfg).unwrap();
        assert_eq!(report.level_order, "[ 85, 54, 97, 32, 72, 89, 109 ]");
        assert_eq!(report.size, 7);
        assert_eq!(report.duplicates, 1);
        assert_eq!(report.height, 3);
        assert_eq!(report.black_height, None);
    }

    #[test]
    fn test_integer_keys_sort_numerically() {
        let cfg = config(TreeKind::RedBlack, KeyType::Integer, &["9", "10", "100"]);
        let report = run(&cfg).unwrap();
        assert_eq!(report.level_order, "[ 10(b), 9(r), 100(r) ]");
    }

    #[test]
    fn test_invalid_integer_key() {
        let cfg = config(TreeKind::RedBlack, KeyType::Integer, &["1", "two"]);
        match run(&cfg) {
            Err(ScenarioError::InvalidKey { key, .. }) => assert_eq!(key, "two"),
            other => panic!("expected InvalidKey, got {:?}", other),
        }
    }

    #[test]
    fn test_verify_disabled() {
        let mut cfg = config(TreeKind::RedBlack, KeyType::Text, &["b", "a"]);
        cfg.verify = false;
        let report = run(&cfg).unwrap();
        assert_eq!(report.black_height, None);
        assert_eq!(report.level_order, "[ b(b), a(r) ]");
    }
}
