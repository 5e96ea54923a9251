//! FILENAME: core/query-engine/src/lib.rs
//! Filter-and-query subsystem for the dashboard.
//!
//! This crate turns a filter selection into a result page plus aggregate
//! statistics. It depends on `hierarchy` for the location tree and is
//! otherwise pure: records go in, pages and counts come out.
//!
//! Layers:
//! - `filter`: The cascading FilterSet state machine (what is selected)
//! - `options`: Valid selector choices derived from the selection
//! - `record`: The read-only user record model
//! - `query`: The AND-matching engine over a record collection
//! - `paginate`: Page slicing with stable meta computation
//! - `aggregate`: Grouping/counting with explicit ordering modes
//! - `stats`: Chart-facing stat bundles built on `aggregate`

pub mod aggregate;
pub mod filter;
pub mod options;
pub mod paginate;
pub mod query;
pub mod record;
pub mod stats;

pub use aggregate::{aggregate, aggregate_seeded, share_of, Dimension, GroupCount, GroupOrdering};
pub use filter::{AttributeKey, FilterSet};
pub use options::options_for;
pub use paginate::{paginate, PageMeta, ResultPage};
pub use query::{query, query_admins};
pub use record::{AdminType, Location, Status, UserRecord};
pub use stats::{AdminStats, AdminTypeSlice, DashboardStats};
