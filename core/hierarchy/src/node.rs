//! FILENAME: core/hierarchy/src/node.rs
//! The recursive hierarchy tree node.
//!
//! A node is either a Branch (mapping from child label to subtree) or a Leaf
//! (the terminal ordered division list). Modelling the two shapes as a tagged
//! variant keeps the depth-6 invariant checkable instead of relying on
//! runtime type sniffing.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One node of the location tree.
///
/// Deserializes untagged from the backend's JSON: arrays become leaves,
/// objects become branches. Division lists keep their source order; branch
/// keys sort lexicographically via the BTreeMap, which is acceptable because
/// intermediate levels carry no ordering guarantee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HierarchyNode {
    /// Terminal ordered list of divisions.
    Leaf(Vec<String>),
    /// Intermediate mapping from label to subtree.
    Branch(BTreeMap<String, HierarchyNode>),
}

impl HierarchyNode {
    pub fn is_leaf(&self) -> bool {
        matches!(self, HierarchyNode::Leaf(_))
    }

    /// Child subtree under the given label (None for leaves or absent labels).
    pub fn child(&self, label: &str) -> Option<&HierarchyNode> {
        match self {
            HierarchyNode::Branch(children) => children.get(label),
            HierarchyNode::Leaf(_) => None,
        }
    }

    /// Labels selectable directly under this node.
    ///
    /// Branch: the child keys. Leaf: the divisions verbatim, source order.
    pub fn options(&self) -> Vec<String> {
        match self {
            HierarchyNode::Branch(children) => children.keys().cloned().collect(),
            HierarchyNode::Leaf(divisions) => divisions.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_branch() -> HierarchyNode {
        serde_json::from_str(r#"{"Vijayawada": ["Ops", "Sales"], "Guntur": ["Support"]}"#).unwrap()
    }

    #[test]
    fn test_untagged_deserialization() {
        let leaf: HierarchyNode = serde_json::from_str(r#"["SPMD", "Sales", "Ops"]"#).unwrap();
        assert!(leaf.is_leaf());
        assert_eq!(leaf.options(), vec!["SPMD", "Sales", "Ops"]);

        let branch = sample_branch();
        assert!(!branch.is_leaf());
    }

    #[test]
    fn test_leaf_preserves_source_order() {
        // Division lists are ordered, not sorted
        let leaf: HierarchyNode = serde_json::from_str(r#"["Zeta", "Alpha", "Mid"]"#).unwrap();
        assert_eq!(leaf.options(), vec!["Zeta", "Alpha", "Mid"]);
    }

    #[test]
    fn test_child_lookup() {
        let branch = sample_branch();
        assert!(branch.child("Vijayawada").is_some());
        assert!(branch.child("Nowhere").is_none());
        // Leaves have no children
        assert!(branch.child("Vijayawada").unwrap().child("Ops").is_none());
    }
}
