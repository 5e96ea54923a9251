//! FILENAME: app/src/api_types.rs
// PURPOSE: Shared type definitions for the presentation-layer API.
// CONTEXT: All structs use camelCase serialization for JavaScript interoperability.

use query_engine::{AdminStats, DashboardStats, PageMeta, UserRecord};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Precomputed distinct values for each attribute selector, keyed by the
/// attribute's camelCase filter key.
pub type FilterOptions = BTreeMap<String, Vec<String>>;

/// One page of records as returned by a data source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordPage {
    pub data: Vec<UserRecord>,
    pub meta: PageMeta,
}

impl RecordPage {
    /// An empty page with correct meta, used when nothing matches.
    pub fn empty(page: usize, limit: usize) -> RecordPage {
        RecordPage {
            data: Vec::new(),
            meta: PageMeta::compute(0, page, limit),
        }
    }
}

/// Everything the user area renders for one filter state: the table page and
/// the chart breakdowns computed from the capped sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDashboard {
    pub table: RecordPage,
    pub stats: DashboardStats,
    /// Size of the sample the stats were computed over.
    pub chart_sample_size: usize,
}

/// The admin area's table page and role/zone breakdowns.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminDashboard {
    pub table: RecordPage,
    pub stats: AdminStats,
}
