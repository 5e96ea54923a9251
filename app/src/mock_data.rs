//! FILENAME: app/src/mock_data.rs
//! Deterministic mock data source for development and tests.
//!
//! Generates a population whose location paths are always valid against the
//! built-in hierarchy, so downstream filtering behaves exactly as it would
//! against real backend data. Seeded: the same seed reproduces the same
//! population.

use crate::api_types::{FilterOptions, RecordPage};
use crate::data_source::{DataSource, SourceError};
use hierarchy::{HierarchyStore, Level};
use query_engine::{
    paginate, query, AdminType, AttributeKey, FilterSet, Location, Status, UserRecord,
};
use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

// ============================================================================
// BUILT-IN HIERARCHY
// ============================================================================

/// The single-tenant BRMS location tree. Intermediate levels are objects,
/// the sub-branch level maps to division lists.
pub const HIERARCHY_JSON: &str = r#"{
  "BRMS": {
    "South": {
      "AP": {
        "Vijayawada": {
          "Satyanayanapuram": ["SPMD", "Sales", "Ops"],
          "Benz Circle": ["Sales", "Marketing"],
          "Governorpet": ["Ops", "Support"]
        },
        "Visakhapatnam": {
          "Gajuwaka": ["SPMD", "Ops"],
          "MVP Colony": ["Sales", "Marketing"]
        },
        "Guntur": {
          "Arundelpet": ["Sales", "Support"],
          "Brodipet": ["Ops", "Marketing"]
        }
      },
      "Telangana": {
        "Hyderabad": {
          "Banjara Hills": ["SPMD", "Sales", "Marketing"],
          "Jubilee Hills": ["Ops", "Finance"],
          "Hitech City": ["Tech", "Support"]
        },
        "Warangal": {
          "Kazipet": ["Sales", "Ops"],
          "Hanamkonda": ["Marketing", "Support"]
        }
      },
      "Karnataka": {
        "Bangalore": {
          "Koramangala": ["Tech", "Sales", "SPMD"],
          "Indiranagar": ["Marketing", "Ops"],
          "Whitefield": ["Tech", "Support"]
        },
        "Mysore": {
          "Jayalakshmipuram": ["Sales", "Ops"],
          "Gokulam": ["Marketing", "Support"]
        }
      }
    },
    "North": {
      "Delhi": {
        "New Delhi": {
          "Connaught Place": ["SPMD", "Sales", "Finance"],
          "Hauz Khas": ["Marketing", "Ops"]
        },
        "Noida": {
          "Sector 18": ["Tech", "Sales"],
          "Sector 62": ["Ops", "Support"]
        }
      },
      "Punjab": {
        "Chandigarh": {
          "Sector 17": ["Sales", "Ops"],
          "Sector 35": ["Marketing", "Support"]
        },
        "Amritsar": {
          "Ranjit Avenue": ["Sales", "Marketing"],
          "Civil Lines": ["Ops", "Support"]
        }
      }
    }
  }
}"#;

// ============================================================================
// VALUE POOLS
// ============================================================================

const FIRST_NAMES: [&str; 10] = [
    "John", "Jane", "Michael", "Emma", "David", "Olivia", "Chris", "Sophia", "Thomas", "Isabella",
];

const LAST_NAMES: [&str; 10] = [
    "Smith", "Johnson", "Brown", "Taylor", "Miller", "Wilson", "Anderson", "Thomas", "Jackson",
    "White",
];

const PROFESSIONS: [&str; 10] = [
    "Engineer", "Doctor", "Artist", "Teacher", "Lawyer", "Manager", "Designer", "Developer",
    "Nurse", "Accountant",
];

const QUALIFICATIONS: [&str; 5] = ["High School", "Bachelor", "Master", "PhD", "Diploma"];

const BLOOD_GROUPS: [&str; 8] = ["A+", "A-", "B+", "B-", "O+", "O-", "AB+", "AB-"];

const MOTHER_TONGUES: [&str; 9] = [
    "English", "Spanish", "French", "Hindi", "Chinese", "German", "Japanese", "Tamil", "Telugu",
];

const GENDERS: [&str; 3] = ["Male", "Female", "Other"];

const STATUSES: [Status; 3] = [Status::Active, Status::Pending, Status::Inactive];

const LOG_ACTIONS: [&str; 5] = [
    "Login",
    "Export PDF",
    "Clear Filters",
    "Update Profile",
    "View Report",
];

// ============================================================================
// ADMIN ACTIVITY LOG
// ============================================================================

/// One line of the admin activity log panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminLogEntry {
    pub id: u64,
    pub user: String,
    pub action: String,
    pub timestamp: String,
    pub ip: String,
}

// ============================================================================
// MOCK SOURCE
// ============================================================================

/// In-memory data source backed by a seeded generator.
pub struct MockDataSource {
    hierarchy: HierarchyStore,
    records: Vec<UserRecord>,
    logs: Vec<AdminLogEntry>,
}

impl MockDataSource {
    /// Builds a source with `population` users generated from `seed`.
    pub fn new(seed: u64, population: usize) -> Result<MockDataSource, SourceError> {
        let hierarchy = HierarchyStore::from_json(HIERARCHY_JSON)
            .map_err(|e| SourceError::Upstream(e.to_string()))?;
        let mut rng = StdRng::seed_from_u64(seed);
        let records = generate_users(&mut rng, &hierarchy, population);
        let logs = generate_logs(&mut rng, &records);
        Ok(MockDataSource { hierarchy, records, logs })
    }

    pub fn records(&self) -> &[UserRecord] {
        &self.records
    }

    /// Recent admin activity, newest first.
    pub fn admin_logs(&self) -> &[AdminLogEntry] {
        &self.logs
    }
}

impl DataSource for MockDataSource {
    fn list_records(
        &self,
        filters: &FilterSet,
        page: usize,
        limit: usize,
    ) -> Result<RecordPage, SourceError> {
        let matches = query(&self.records, filters);
        let sliced = paginate(&matches, page, limit);
        Ok(RecordPage {
            data: sliced.data.into_iter().cloned().collect(),
            meta: sliced.meta,
        })
    }

    fn list_filter_options(&self) -> Result<FilterOptions, SourceError> {
        let mut options = FilterOptions::new();
        for key in [
            AttributeKey::Age,
            AttributeKey::Profession,
            AttributeKey::Gender,
            AttributeKey::Qualification,
            AttributeKey::BloodGroup,
            AttributeKey::MotherTongue,
            AttributeKey::AdminType,
        ] {
            options.insert(key.filter_key().to_string(), distinct_values(&self.records, key));
        }
        Ok(options)
    }

    fn get_hierarchy(&self) -> Result<HierarchyStore, SourceError> {
        Ok(self.hierarchy.clone())
    }
}

/// Distinct values present in the population for one attribute, sorted.
fn distinct_values(records: &[UserRecord], key: AttributeKey) -> Vec<String> {
    let mut values: Vec<String> = Vec::new();
    for record in records {
        let value = match key {
            AttributeKey::Name => record.name.clone(),
            AttributeKey::Age => record.age.to_string(),
            AttributeKey::Profession => record.profession.clone(),
            AttributeKey::Gender => record.gender.clone(),
            AttributeKey::Qualification => record.qualification.clone(),
            AttributeKey::BloodGroup => record.blood_group.clone(),
            AttributeKey::MotherTongue => record.mother_tongue.clone(),
            AttributeKey::AdminType => match record.admin_type {
                Some(t) => t.label().to_string(),
                None => continue,
            },
        };
        if !values.contains(&value) {
            values.push(value);
        }
    }
    if key == AttributeKey::Age {
        values.sort_by_key(|v| v.parse::<u32>().unwrap_or(0));
    } else {
        values.sort();
    }
    values
}

// ============================================================================
// GENERATION
// ============================================================================

fn generate_users(rng: &mut StdRng, store: &HierarchyStore, count: usize) -> Vec<UserRecord> {
    (1..=count as u64).map(|id| generate_user(rng, store, id)).collect()
}

fn generate_user(rng: &mut StdRng, store: &HierarchyStore, id: u64) -> UserRecord {
    let first = *FIRST_NAMES.choose(rng).unwrap_or(&FIRST_NAMES[0]);
    let last = *LAST_NAMES.choose(rng).unwrap_or(&LAST_NAMES[0]);
    let location = random_location(rng, store);

    let is_admin = rng.gen_bool(0.1);
    let (admin_type, admin_level, admin_location) = if is_admin {
        let admin_type = if rng.gen_bool(0.5) {
            AdminType::ActiveAdmin
        } else {
            AdminType::Admin
        };
        let level = *Level::ALL.choose(rng).unwrap_or(&Level::Organization);
        let label = location.level(level).to_string();
        (Some(admin_type), Some(level), Some(label))
    } else {
        (None, None, None)
    };

    UserRecord {
        id,
        name: format!("{} {}", first, last),
        email: format!(
            "{}.{}{}@example.com",
            first.to_lowercase(),
            last.to_lowercase(),
            id
        ),
        phone: format!("+91 {}", rng.gen_range(6_000_000_000u64..10_000_000_000u64)),
        status: *STATUSES.choose(rng).unwrap_or(&Status::Active),
        age: rng.gen_range(18..78),
        profession: PROFESSIONS.choose(rng).unwrap_or(&PROFESSIONS[0]).to_string(),
        gender: GENDERS.choose(rng).unwrap_or(&GENDERS[0]).to_string(),
        qualification: QUALIFICATIONS.choose(rng).unwrap_or(&QUALIFICATIONS[0]).to_string(),
        blood_group: BLOOD_GROUPS.choose(rng).unwrap_or(&BLOOD_GROUPS[0]).to_string(),
        mother_tongue: MOTHER_TONGUES.choose(rng).unwrap_or(&MOTHER_TONGUES[0]).to_string(),
        location,
        is_admin,
        admin_type,
        admin_level,
        admin_location,
        created_at: random_timestamp(rng),
    }
}

/// Walks the tree one level at a time, choosing uniformly among the children
/// at each step. Every path produced exists in the store.
fn random_location(rng: &mut StdRng, store: &HierarchyStore) -> Location {
    let mut labels: Vec<String> = Vec::with_capacity(6);
    for _ in Level::ALL {
        let path: Vec<&str> = labels.iter().map(String::as_str).collect();
        let choices = store.options_at(&path);
        match choices.choose(rng) {
            Some(label) => labels.push(label.clone()),
            None => labels.push(String::new()),
        }
    }
    let mut labels = labels.into_iter();
    Location {
        organization: labels.next().unwrap_or_default(),
        zone: labels.next().unwrap_or_default(),
        state: labels.next().unwrap_or_default(),
        branch: labels.next().unwrap_or_default(),
        sub_branch: labels.next().unwrap_or_default(),
        division: labels.next().unwrap_or_default(),
    }
}

/// A moment within the year before the generator epoch, RFC 3339.
fn random_timestamp(rng: &mut StdRng) -> String {
    let epoch = NaiveDate::from_ymd_opt(2024, 12, 31)
        .unwrap_or_default()
        .and_hms_opt(0, 0, 0)
        .unwrap_or_default();
    let back = Duration::days(rng.gen_range(0..365)) + Duration::hours(rng.gen_range(0..24));
    format!("{}Z", (epoch - back).format("%Y-%m-%dT%H:%M:%S"))
}

fn generate_logs(rng: &mut StdRng, records: &[UserRecord]) -> Vec<AdminLogEntry> {
    let admins: Vec<&UserRecord> = records.iter().filter(|r| r.is_admin).collect();
    if admins.is_empty() {
        return Vec::new();
    }
    (1..=20u64)
        .map(|id| {
            let who = admins.choose(rng).map(|r| r.name.clone()).unwrap_or_default();
            AdminLogEntry {
                id,
                user: who,
                action: LOG_ACTIONS.choose(rng).unwrap_or(&LOG_ACTIONS[0]).to_string(),
                timestamp: random_timestamp(rng),
                ip: format!("192.168.1.{}", rng.gen_range(2..255)),
            }
        })
        .collect()
}
