//! FILENAME: core/hierarchy/src/lib.rs
//! Location hierarchy subsystem for the dashboard.
//!
//! This crate provides the immutable organization → zone → state → branch →
//! sub-branch → division tree and the path-walking lookups built on it. It is
//! pure data: no I/O, no mutation after construction.
//!
//! Layers:
//! - `level`: The fixed six-tier level enumeration (names, ordering, keys)
//! - `node`: The recursive tree node (Branch mapping | Leaf division list)
//! - `store`: The validated, read-only tree with `options_at` lookups

pub mod level;
pub mod node;
pub mod store;

pub use level::{Level, LEVEL_COUNT};
pub use node::HierarchyNode;
pub use store::{HierarchyError, HierarchyStore};
