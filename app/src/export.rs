//! FILENAME: app/src/export.rs
//! Column mapping for spreadsheet and document exports.
//!
//! Exports always run over the full filtered match set, never the visible
//! page. Rendering the bytes (xlsx, pdf) is the presentation layer's job;
//! this module only flattens records into labelled string cells.

use query_engine::UserRecord;

/// One export column: a header and an accessor that renders the cell.
pub struct ExportColumn {
    pub header: &'static str,
    pub accessor: fn(&UserRecord) -> String,
}

/// Flattens records into rows under the given column set. The first row is
/// the header row.
pub fn export_rows(records: &[&UserRecord], columns: &[ExportColumn]) -> Vec<Vec<String>> {
    let mut rows = Vec::with_capacity(records.len() + 1);
    rows.push(columns.iter().map(|c| c.header.to_string()).collect());
    for record in records {
        rows.push(columns.iter().map(|c| (c.accessor)(record)).collect());
    }
    rows
}

fn or_na(value: &str) -> String {
    if value.is_empty() {
        "N/A".to_string()
    } else {
        value.to_string()
    }
}

/// The wide layout for spreadsheet export: every attribute plus the full
/// location path.
pub fn spreadsheet_columns() -> Vec<ExportColumn> {
    vec![
        ExportColumn { header: "ID", accessor: |r| r.id.to_string() },
        ExportColumn { header: "Name", accessor: |r| r.name.clone() },
        ExportColumn { header: "Email", accessor: |r| r.email.clone() },
        ExportColumn { header: "Phone", accessor: |r| r.phone.clone() },
        ExportColumn { header: "Status", accessor: |r| r.status.to_string() },
        ExportColumn { header: "Age", accessor: |r| r.age.to_string() },
        ExportColumn { header: "Profession", accessor: |r| r.profession.clone() },
        ExportColumn { header: "Gender", accessor: |r| r.gender.clone() },
        ExportColumn { header: "Qualification", accessor: |r| r.qualification.clone() },
        ExportColumn { header: "Blood Group", accessor: |r| r.blood_group.clone() },
        ExportColumn { header: "Mother Tongue", accessor: |r| r.mother_tongue.clone() },
        ExportColumn { header: "Zone", accessor: |r| r.location.zone.clone() },
        ExportColumn { header: "State", accessor: |r| r.location.state.clone() },
        ExportColumn { header: "Branch", accessor: |r| r.location.branch.clone() },
        ExportColumn { header: "Sub Branch", accessor: |r| r.location.sub_branch.clone() },
        ExportColumn { header: "Division", accessor: |r| r.location.division.clone() },
    ]
}

/// The compact layout for document export: identity, role and coarse
/// location. Missing location labels render as "N/A".
pub fn document_columns() -> Vec<ExportColumn> {
    vec![
        ExportColumn { header: "ID", accessor: |r| r.id.to_string() },
        ExportColumn { header: "Name", accessor: |r| r.name.clone() },
        ExportColumn {
            header: "Role",
            accessor: |r| match r.admin_type {
                Some(t) => t.label().to_string(),
                None => r.profession.clone(),
            },
        },
        ExportColumn { header: "Location", accessor: |r| or_na(&r.location.branch) },
        ExportColumn { header: "Zone", accessor: |r| or_na(&r.location.zone) },
        ExportColumn { header: "Age", accessor: |r| r.age.to_string() },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use query_engine::{AdminType, Location, Status};

    fn record(id: u64) -> UserRecord {
        UserRecord {
            id,
            name: "Emma Wilson".into(),
            email: "emma.wilson@example.com".into(),
            phone: "+91 9000000002".into(),
            status: Status::Active,
            age: 29,
            profession: "Designer".into(),
            gender: "Female".into(),
            qualification: "Bachelor".into(),
            blood_group: "O+".into(),
            mother_tongue: "English".into(),
            location: Location {
                organization: "BRMS".into(),
                zone: "North".into(),
                state: "Delhi".into(),
                branch: "Noida".into(),
                sub_branch: "Sector 18".into(),
                division: "Tech".into(),
            },
            is_admin: false,
            admin_type: None,
            admin_level: None,
            admin_location: None,
            created_at: "2024-03-04T09:00:00Z".into(),
        }
    }

    #[test]
    fn test_header_row_comes_first() {
        let all = vec![record(1), record(2)];
        let refs: Vec<&UserRecord> = all.iter().collect();
        let rows = export_rows(&refs, &document_columns());
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], vec!["ID", "Name", "Role", "Location", "Zone", "Age"]);
        assert_eq!(rows[1][0], "1");
        assert_eq!(rows[2][0], "2");
    }

    #[test]
    fn test_document_role_prefers_admin_type() {
        let mut admin = record(1);
        admin.is_admin = true;
        admin.admin_type = Some(AdminType::ActiveAdmin);
        let refs = vec![&admin];
        let rows = export_rows(&refs, &document_columns());
        assert_eq!(rows[1][2], "Active Admin");
    }

    #[test]
    fn test_missing_location_renders_na() {
        let mut r = record(1);
        r.location.branch = String::new();
        let refs = vec![&r];
        let rows = export_rows(&refs, &document_columns());
        assert_eq!(rows[1][3], "N/A");
        assert_eq!(rows[1][4], "North");
    }

    #[test]
    fn test_spreadsheet_covers_full_path() {
        let r = record(7);
        let refs = vec![&r];
        let rows = export_rows(&refs, &spreadsheet_columns());
        let header = &rows[0];
        let division_idx = header.iter().position(|h| h == "Division").unwrap();
        assert_eq!(rows[1][division_idx], "Tech");
        assert_eq!(rows[1][0], "7");
    }

    #[test]
    fn test_empty_match_set_yields_header_only() {
        let refs: Vec<&UserRecord> = Vec::new();
        let rows = export_rows(&refs, &spreadsheet_columns());
        assert_eq!(rows.len(), 1);
    }
}
