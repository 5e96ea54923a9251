//! FILENAME: core/query-engine/src/record.rs
//! The read-only user record model.
//!
//! Records are produced by an external data source (backend or generator) and
//! the engine never mutates them — it only selects and aggregates. The serde
//! shape matches the backend's JSON: camelCase keys, location fields flattened
//! into the record object.

use hierarchy::Level;
use serde::{Deserialize, Serialize};

// ============================================================================
// ENUMS
// ============================================================================

/// Account status of a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Active,
    Pending,
    Inactive,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Active => "Active",
            Status::Pending => "Pending",
            Status::Inactive => "Inactive",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role of an administrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AdminType {
    #[serde(rename = "Active Admin")]
    ActiveAdmin,
    Admin,
}

impl AdminType {
    /// The label as stored and filtered ("Active Admin" / "Admin").
    pub fn label(self) -> &'static str {
        match self {
            AdminType::ActiveAdmin => "Active Admin",
            AdminType::Admin => "Admin",
        }
    }
}

impl std::fmt::Display for AdminType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// LOCATION
// ============================================================================

/// A record's position in the location hierarchy, one label per level.
///
/// The engine matches these level-by-level and does not itself verify the
/// path exists in the hierarchy store — path validity is the data source's
/// concern.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub organization: String,
    pub zone: String,
    pub state: String,
    pub branch: String,
    pub sub_branch: String,
    pub division: String,
}

impl Location {
    /// The label at a hierarchy level.
    pub fn level(&self, level: Level) -> &str {
        match level {
            Level::Organization => &self.organization,
            Level::Zone => &self.zone,
            Level::State => &self.state,
            Level::Branch => &self.branch,
            Level::SubBranch => &self.sub_branch,
            Level::Division => &self.division,
        }
    }

    /// All six labels, shallowest first.
    pub fn labels(&self) -> [&str; 6] {
        [
            &self.organization,
            &self.zone,
            &self.state,
            &self.branch,
            &self.sub_branch,
            &self.division,
        ]
    }
}

// ============================================================================
// USER RECORD
// ============================================================================

/// One user of the organization.
///
/// `id` is unique and stable. The optional admin block is present only when
/// `is_admin` is true; `admin_location` is the label at `admin_level` of the
/// user's own location (organization label when the level is Organization).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub status: Status,
    pub age: u32,
    pub profession: String,
    pub gender: String,
    pub qualification: String,
    pub blood_group: String,
    pub mother_tongue: String,

    #[serde(flatten)]
    pub location: Location,

    #[serde(default)]
    pub is_admin: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_type: Option<AdminType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_level: Option<Level>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_location: Option<String>,

    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_flattens_into_record_json() {
        let record = UserRecord {
            id: 1,
            name: "Jane Smith".into(),
            email: "jane.smith@example.com".into(),
            phone: "+91 9000000001".into(),
            status: Status::Active,
            age: 34,
            profession: "Engineer".into(),
            gender: "Female".into(),
            qualification: "Master".into(),
            blood_group: "A+".into(),
            mother_tongue: "Telugu".into(),
            location: Location {
                organization: "BRMS".into(),
                zone: "South".into(),
                state: "AP".into(),
                branch: "Vijayawada".into(),
                sub_branch: "Benz Circle".into(),
                division: "Sales".into(),
            },
            is_admin: false,
            admin_type: None,
            admin_level: None,
            admin_location: None,
            created_at: "2024-01-01T00:00:00Z".into(),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["subBranch"], "Benz Circle");
        assert_eq!(json["bloodGroup"], "A+");
        assert_eq!(json["status"], "Active");
        // Unset admin fields stay off the wire
        assert!(json.get("adminType").is_none());
    }

    #[test]
    fn test_admin_type_labels() {
        assert_eq!(AdminType::ActiveAdmin.label(), "Active Admin");
        assert_eq!(
            serde_json::to_string(&AdminType::ActiveAdmin).unwrap(),
            "\"Active Admin\""
        );
    }

    #[test]
    fn test_location_level_accessor() {
        let loc = Location {
            organization: "BRMS".into(),
            zone: "North".into(),
            state: "Delhi".into(),
            branch: "New Delhi".into(),
            sub_branch: "Hauz Khas".into(),
            division: "Ops".into(),
        };
        assert_eq!(loc.level(Level::Zone), "North");
        assert_eq!(loc.labels()[5], "Ops");
    }
}
