//! FILENAME: core/query-engine/src/aggregate.rs
//! Grouping and counting over a record collection.
//!
//! Aggregates are recomputed per query, never persisted. Ordering is an
//! explicit parameter because two call-site families exist: category
//! breakdowns want descending counts, while small fixed label sets (the two
//! admin-type buckets) want discovery order.

use crate::record::UserRecord;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

// ============================================================================
// DIMENSIONS
// ============================================================================

/// A record field that can be grouped on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Dimension {
    Profession,
    Gender,
    Qualification,
    BloodGroup,
    MotherTongue,
    Status,
    Zone,
    State,
    AdminType,
    AgeBand,
}

impl Dimension {
    /// The grouping label this dimension extracts from a record.
    pub fn value_of(self, record: &UserRecord) -> String {
        match self {
            Dimension::Profession => record.profession.clone(),
            Dimension::Gender => record.gender.clone(),
            Dimension::Qualification => record.qualification.clone(),
            Dimension::BloodGroup => record.blood_group.clone(),
            Dimension::MotherTongue => record.mother_tongue.clone(),
            Dimension::Status => record.status.as_str().to_string(),
            Dimension::Zone => record.location.zone.clone(),
            Dimension::State => record.location.state.clone(),
            Dimension::AdminType => record
                .admin_type
                .map(|t| t.label().to_string())
                .unwrap_or_else(|| "None".to_string()),
            Dimension::AgeBand => {
                let lo = (record.age / 10) * 10;
                format!("{}-{}", lo, lo + 9)
            }
        }
    }
}

// ============================================================================
// GROUP COUNTS
// ============================================================================

/// One aggregation bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupCount {
    pub label: String,
    pub value: usize,
}

/// How the returned buckets are ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupOrdering {
    /// Descending by count; ties keep first-seen order (deterministic).
    CountDescending,
    /// Order of first appearance in the input.
    Discovery,
}

/// Groups records by a dimension and counts occurrences.
///
/// The sum of all returned counts equals the input length.
pub fn aggregate(records: &[&UserRecord], dimension: Dimension, ordering: GroupOrdering) -> Vec<GroupCount> {
    aggregate_seeded(records, dimension, ordering, &[])
}

/// Like [`aggregate`], but pre-seeds buckets (at count zero) in the given
/// order. Used when a small fixed label set must always appear — e.g. both
/// admin-type buckets even when one is empty.
pub fn aggregate_seeded(
    records: &[&UserRecord],
    dimension: Dimension,
    ordering: GroupOrdering,
    seed_labels: &[&str],
) -> Vec<GroupCount> {
    let mut counts: FxHashMap<String, usize> = FxHashMap::default();
    let mut discovery: Vec<String> = Vec::new();

    for label in seed_labels {
        if !counts.contains_key(*label) {
            counts.insert((*label).to_string(), 0);
            discovery.push((*label).to_string());
        }
    }

    for record in records {
        let label = dimension.value_of(record);
        match counts.get_mut(&label) {
            Some(count) => *count += 1,
            None => {
                counts.insert(label.clone(), 1);
                discovery.push(label);
            }
        }
    }

    let mut groups: Vec<GroupCount> = discovery
        .into_iter()
        .map(|label| {
            let value = counts[&label];
            GroupCount { label, value }
        })
        .collect();

    if ordering == GroupOrdering::CountDescending {
        // Stable sort keeps discovery order among equal counts
        groups.sort_by(|a, b| b.value.cmp(&a.value));
    }

    groups
}

/// Proportion of a count within its own group's total (0.0 when the group is
/// empty). Callers aggregating a sub-collection (admins only, one zone only)
/// must pass that sub-collection's total, not the population total.
pub fn share_of(count: usize, group_total: usize) -> f64 {
    if group_total == 0 {
        0.0
    } else {
        count as f64 / group_total as f64
    }
}
