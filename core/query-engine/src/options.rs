//! FILENAME: core/query-engine/src/options.rs
//! Selector option resolution.
//!
//! Given the current selection and a target level, produce the set of valid
//! choices at that level. A level whose parent is unselected gets an empty
//! list — that emptiness is what disables the downstream selector in the UI.

use crate::filter::FilterSet;
use hierarchy::{HierarchyStore, Level};

/// Valid choices for `level` under the current selection.
///
/// Pure function of its inputs. Level 0 (organization) needs no parent and
/// always yields the store's top-level keys; any deeper level requires the
/// full selected path above it, otherwise the result is empty. An incomplete
/// path is a normal state, not an error.
pub fn options_for(level: Level, filters: &FilterSet, store: &HierarchyStore) -> Vec<String> {
    if level == Level::Organization {
        return store.organizations();
    }
    match filters.path_above(level) {
        Some(path) => store.options_at(&path),
        None => Vec::new(),
    }
}
