//! FILENAME: core/hierarchy/src/store.rs
//! The validated, read-only hierarchy store.
//!
//! Construction checks the depth invariant once; every lookup after that is
//! infallible. An absent path is a legitimate "no children" state and yields
//! an empty option list, never an error.

use crate::level::LEVEL_COUNT;
use crate::node::HierarchyNode;
use std::collections::BTreeMap;

/// Errors raised while constructing a store. Lookups never fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HierarchyError {
    /// A root-to-leaf path did not have exactly six levels.
    Depth { path: String, expected: usize, found: usize },
    /// The JSON payload could not be parsed into a tree.
    Json(String),
}

impl std::fmt::Display for HierarchyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HierarchyError::Depth { path, expected, found } => write!(
                f,
                "hierarchy path '{}' has depth {} (expected {})",
                path, found, expected
            ),
            HierarchyError::Json(msg) => write!(f, "hierarchy JSON error: {}", msg),
        }
    }
}

impl std::error::Error for HierarchyError {}

/// The immutable organization → ... → division tree.
///
/// The root mapping is keyed by organization name. Every path from an
/// organization down to a division list passes through exactly four
/// intermediate branch levels (zone, state, branch, sub-branch).
#[derive(Debug, Clone, PartialEq)]
pub struct HierarchyStore {
    root: BTreeMap<String, HierarchyNode>,
}

impl HierarchyStore {
    /// Builds a store from the root mapping, validating the depth invariant.
    pub fn new(root: BTreeMap<String, HierarchyNode>) -> Result<Self, HierarchyError> {
        for (org, subtree) in &root {
            validate_depth(subtree, org, 1)?;
        }
        Ok(HierarchyStore { root })
    }

    /// Parses the backend's `{"<org>": {...}}` JSON payload into a store.
    pub fn from_json(json: &str) -> Result<Self, HierarchyError> {
        let root: BTreeMap<String, HierarchyNode> =
            serde_json::from_str(json).map_err(|e| HierarchyError::Json(e.to_string()))?;
        HierarchyStore::new(root)
    }

    /// Top-level organization names.
    pub fn organizations(&self) -> Vec<String> {
        self.root.keys().cloned().collect()
    }

    /// Valid choices directly beneath the given selected path.
    ///
    /// `path` runs from organization downward (length 0..=5). An empty path
    /// yields the organizations. A path that is not present in the tree
    /// yields an empty list.
    pub fn options_at(&self, path: &[&str]) -> Vec<String> {
        if path.is_empty() {
            return self.organizations();
        }
        if path.len() >= LEVEL_COUNT {
            // Divisions are terminal; nothing is selectable beneath them.
            return Vec::new();
        }

        let mut node = match self.root.get(path[0]) {
            Some(n) => n,
            None => return Vec::new(),
        };
        for label in &path[1..] {
            node = match node.child(label) {
                Some(n) => n,
                None => return Vec::new(),
            };
        }
        node.options()
    }

    /// Whether a complete six-label path exists in the tree.
    ///
    /// `labels` is organization through division. Used by data-quality checks
    /// on generated records, not by the query engine.
    pub fn contains_path(&self, labels: &[&str]) -> bool {
        if labels.len() != LEVEL_COUNT {
            return false;
        }
        self.options_at(&labels[..LEVEL_COUNT - 1])
            .iter()
            .any(|division| division == labels[LEVEL_COUNT - 1])
    }
}

/// Walks a subtree checking that branches appear at depths 1..=4 and leaves
/// exactly at depth 5 (the division list under a sub-branch).
fn validate_depth(node: &HierarchyNode, path: &str, depth: usize) -> Result<(), HierarchyError> {
    const LEAF_DEPTH: usize = LEVEL_COUNT - 1;
    match node {
        HierarchyNode::Leaf(_) => {
            if depth != LEAF_DEPTH {
                return Err(HierarchyError::Depth {
                    path: path.to_string(),
                    expected: LEAF_DEPTH,
                    found: depth,
                });
            }
            Ok(())
        }
        HierarchyNode::Branch(children) => {
            if depth >= LEAF_DEPTH {
                return Err(HierarchyError::Depth {
                    path: path.to_string(),
                    expected: LEAF_DEPTH,
                    found: depth + 1,
                });
            }
            for (label, child) in children {
                let child_path = format!("{}/{}", path, label);
                validate_depth(child, &child_path, depth + 1)?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_store() -> HierarchyStore {
        HierarchyStore::from_json(
            r#"{
                "BRMS": {
                    "South": {
                        "AP": {
                            "Vijayawada": {
                                "Satyanayanapuram": ["SPMD", "Sales", "Ops"],
                                "Benz Circle": ["Sales", "Marketing"]
                            }
                        }
                    }
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_organizations() {
        assert_eq!(small_store().organizations(), vec!["BRMS"]);
    }

    #[test]
    fn test_options_at_each_depth() {
        let store = small_store();
        assert_eq!(store.options_at(&[]), vec!["BRMS"]);
        assert_eq!(store.options_at(&["BRMS"]), vec!["South"]);
        assert_eq!(store.options_at(&["BRMS", "South"]), vec!["AP"]);
        assert_eq!(store.options_at(&["BRMS", "South", "AP"]), vec!["Vijayawada"]);
        assert_eq!(
            store.options_at(&["BRMS", "South", "AP", "Vijayawada"]),
            vec!["Benz Circle", "Satyanayanapuram"]
        );
    }

    #[test]
    fn test_divisions_keep_source_order() {
        let store = small_store();
        assert_eq!(
            store.options_at(&["BRMS", "South", "AP", "Vijayawada", "Satyanayanapuram"]),
            vec!["SPMD", "Sales", "Ops"]
        );
    }

    #[test]
    fn test_absent_path_is_empty_not_error() {
        let store = small_store();
        assert!(store.options_at(&["BRMS", "East"]).is_empty());
        assert!(store.options_at(&["Nowhere"]).is_empty());
    }

    #[test]
    fn test_path_past_divisions_is_empty() {
        let store = small_store();
        let path = ["BRMS", "South", "AP", "Vijayawada", "Satyanayanapuram", "Ops"];
        assert!(store.options_at(&path).is_empty());
    }

    #[test]
    fn test_contains_path() {
        let store = small_store();
        assert!(store.contains_path(&[
            "BRMS", "South", "AP", "Vijayawada", "Satyanayanapuram", "Ops"
        ]));
        assert!(!store.contains_path(&[
            "BRMS", "South", "AP", "Vijayawada", "Satyanayanapuram", "Finance"
        ]));
        assert!(!store.contains_path(&["BRMS", "South"]));
    }

    #[test]
    fn test_shallow_tree_rejected() {
        let err = HierarchyStore::from_json(r#"{"BRMS": {"South": ["Ops"]}}"#).unwrap_err();
        assert!(matches!(err, HierarchyError::Depth { .. }));
    }

    #[test]
    fn test_deep_tree_rejected() {
        let json = r#"{
            "BRMS": {"S": {"AP": {"V": {"SP": {"Extra": ["Ops"]}}}}}
        }"#;
        assert!(HierarchyStore::from_json(json).is_err());
    }
}
