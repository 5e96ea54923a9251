//! FILENAME: core/query-engine/src/stats.rs
//! Chart-facing stat bundles.
//!
//! These are the exact shapes the dashboard's chart panels consume: category
//! breakdowns for the user area and the two-bucket role split (with
//! group-scoped shares) plus per-zone counts for the admin area.

use crate::aggregate::{aggregate, aggregate_seeded, share_of, Dimension, GroupCount, GroupOrdering};
use crate::record::{AdminType, UserRecord};
use serde::{Deserialize, Serialize};

/// Breakdown set for the user dashboard charts, computed over the capped
/// chart sample of the filtered population.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub professions: Vec<GroupCount>,
    pub genders: Vec<GroupCount>,
    pub qualifications: Vec<GroupCount>,
    pub blood_groups: Vec<GroupCount>,
}

impl DashboardStats {
    pub fn compute(records: &[&UserRecord]) -> DashboardStats {
        DashboardStats {
            professions: aggregate(records, Dimension::Profession, GroupOrdering::CountDescending),
            genders: aggregate(records, Dimension::Gender, GroupOrdering::CountDescending),
            qualifications: aggregate(
                records,
                Dimension::Qualification,
                GroupOrdering::CountDescending,
            ),
            blood_groups: aggregate(records, Dimension::BloodGroup, GroupOrdering::CountDescending),
        }
    }
}

/// One admin-type bucket with its share of the admin sub-collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminTypeSlice {
    pub label: String,
    pub value: usize,
    /// Fraction of all admins in this bucket — scoped to the admin
    /// sub-collection, not the whole population.
    pub share: f64,
}

/// Breakdown set for the admin dashboard charts. Input must already be the
/// admin-scoped subset (see `query_admins`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    pub by_type: Vec<AdminTypeSlice>,
    pub by_zone: Vec<GroupCount>,
}

impl AdminStats {
    pub fn compute(admins: &[&UserRecord]) -> AdminStats {
        // Both role buckets always appear, in their fixed order, even at zero
        let seeded = aggregate_seeded(
            admins,
            Dimension::AdminType,
            GroupOrdering::Discovery,
            &[AdminType::ActiveAdmin.label(), AdminType::Admin.label()],
        );
        let total = admins.len();
        let by_type = seeded
            .into_iter()
            .map(|g| AdminTypeSlice {
                share: share_of(g.value, total),
                label: g.label,
                value: g.value,
            })
            .collect();

        AdminStats {
            by_type,
            by_zone: aggregate(admins, Dimension::Zone, GroupOrdering::Discovery),
        }
    }
}
