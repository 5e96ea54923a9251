//! FILENAME: app/src/structure.rs
//! Per-zone rollups for the organization structure view.
//!
//! Unlike the user and admin areas this view is not filterable: it always
//! summarizes the whole tree and population for the pinned organization.

use hierarchy::HierarchyStore;
use query_engine::{Status, UserRecord};
use serde::{Deserialize, Serialize};

/// One zone's card in the structure view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneSummary {
    pub id: usize,
    pub name: String,
    /// States under this zone.
    pub states: usize,
    /// Branches across all states of this zone.
    pub branches: usize,
    /// Users located anywhere under this zone.
    pub total_staff: usize,
    /// Percentage of this zone's staff with Active status, rounded.
    pub efficiency: u32,
    pub status: String,
}

/// One summary per zone of the organization, in tree order.
pub fn structure_overview(
    store: &HierarchyStore,
    records: &[UserRecord],
    organization: &str,
) -> Vec<ZoneSummary> {
    store
        .options_at(&[organization])
        .iter()
        .enumerate()
        .map(|(idx, zone)| summarize_zone(store, records, organization, zone, idx + 1))
        .collect()
}

fn summarize_zone(
    store: &HierarchyStore,
    records: &[UserRecord],
    organization: &str,
    zone: &str,
    id: usize,
) -> ZoneSummary {
    let states = store.options_at(&[organization, zone]);
    let branches: usize = states
        .iter()
        .map(|state| store.options_at(&[organization, zone, state]).len())
        .sum();

    let staff: Vec<&UserRecord> = records
        .iter()
        .filter(|r| r.location.organization == organization && r.location.zone == zone)
        .collect();
    let active = staff.iter().filter(|r| r.status == Status::Active).count();
    let efficiency = if staff.is_empty() {
        0
    } else {
        ((active as f64 / staff.len() as f64) * 100.0).round() as u32
    };

    ZoneSummary {
        id,
        name: zone.to_string(),
        states: states.len(),
        branches,
        total_staff: staff.len(),
        efficiency,
        status: "Operational".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_data::HIERARCHY_JSON;
    use query_engine::Location;

    fn user(id: u64, zone: &str, status: Status) -> UserRecord {
        UserRecord {
            id,
            name: format!("User {}", id),
            email: format!("user{}@example.com", id),
            phone: "+91 9000000000".into(),
            status,
            age: 35,
            profession: "Engineer".into(),
            gender: "Male".into(),
            qualification: "Bachelor".into(),
            blood_group: "A+".into(),
            mother_tongue: "Hindi".into(),
            location: Location {
                organization: "BRMS".into(),
                zone: zone.into(),
                state: String::new(),
                branch: String::new(),
                sub_branch: String::new(),
                division: String::new(),
            },
            is_admin: false,
            admin_type: None,
            admin_level: None,
            admin_location: None,
            created_at: "2024-01-01T00:00:00Z".into(),
        }
    }

    #[test]
    fn test_zone_tree_counts() {
        let store = HierarchyStore::from_json(HIERARCHY_JSON).unwrap();
        let summaries = structure_overview(&store, &[], "BRMS");
        assert_eq!(summaries.len(), 2);

        let south = summaries.iter().find(|z| z.name == "South").unwrap();
        assert_eq!(south.states, 3);
        // AP has 3 branches, Telangana 2, Karnataka 2
        assert_eq!(south.branches, 7);

        let north = summaries.iter().find(|z| z.name == "North").unwrap();
        assert_eq!(north.states, 2);
        assert_eq!(north.branches, 4);
    }

    #[test]
    fn test_staff_and_efficiency() {
        let store = HierarchyStore::from_json(HIERARCHY_JSON).unwrap();
        let records = vec![
            user(1, "South", Status::Active),
            user(2, "South", Status::Active),
            user(3, "South", Status::Inactive),
            user(4, "North", Status::Pending),
        ];
        let summaries = structure_overview(&store, &records, "BRMS");
        let south = summaries.iter().find(|z| z.name == "South").unwrap();
        assert_eq!(south.total_staff, 3);
        assert_eq!(south.efficiency, 67);

        let north = summaries.iter().find(|z| z.name == "North").unwrap();
        assert_eq!(north.total_staff, 1);
        assert_eq!(north.efficiency, 0);
        assert_eq!(north.status, "Operational");
    }

    #[test]
    fn test_unknown_organization_yields_nothing() {
        let store = HierarchyStore::from_json(HIERARCHY_JSON).unwrap();
        assert!(structure_overview(&store, &[], "Acme").is_empty());
    }

    #[test]
    fn test_empty_zone_has_zero_efficiency() {
        let store = HierarchyStore::from_json(HIERARCHY_JSON).unwrap();
        let summaries = structure_overview(&store, &[], "BRMS");
        assert!(summaries.iter().all(|z| z.efficiency == 0 && z.total_staff == 0));
    }
}
