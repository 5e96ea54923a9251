//! FILENAME: core/query-engine/src/query.rs
//! The AND-matching engine over a record collection.
//!
//! A record is included iff it passes every set filter. Matching policy is
//! per-field and deliberately uneven — it mirrors what users of the original
//! dashboard see:
//! - name / profession / qualification / mother tongue: case-insensitive
//!   substring containment
//! - gender: case-insensitive exact equality
//! - blood group: case-sensitive exact equality
//! - age: integer equality, non-numeric filter values fail closed
//! - hierarchy levels: exact equality, unset levels unconstrained
//!
//! There are no error paths: an empty collection or an empty filter set are
//! normal states, not exceptions.

use crate::filter::FilterSet;
use crate::record::UserRecord;
use hierarchy::Level;

/// Applies the full filter set to a record collection.
///
/// Order-preserving relative to the input; no implicit sort. With no filters
/// set this returns the whole collection.
pub fn query<'a>(records: &'a [UserRecord], filters: &FilterSet) -> Vec<&'a UserRecord> {
    records.iter().filter(|r| matches(r, filters)).collect()
}

/// Admin-scoped variant: implicit `is_admin` precondition, then the same
/// filter set (including the optional adminType equality filter).
pub fn query_admins<'a>(records: &'a [UserRecord], filters: &FilterSet) -> Vec<&'a UserRecord> {
    records
        .iter()
        .filter(|r| r.is_admin && matches(r, filters))
        .collect()
}

/// Logical AND across both filter classes.
fn matches(record: &UserRecord, filters: &FilterSet) -> bool {
    // Attribute class
    if !substring_ci(&record.name, &filters.name) {
        return false;
    }
    if !substring_ci(&record.profession, &filters.profession) {
        return false;
    }
    if !substring_ci(&record.qualification, &filters.qualification) {
        return false;
    }
    if !substring_ci(&record.mother_tongue, &filters.mother_tongue) {
        return false;
    }
    if !filters.gender.is_empty() && !record.gender.eq_ignore_ascii_case(&filters.gender) {
        return false;
    }
    // Blood group is case-sensitive: "a+" does not match "A+"
    if !filters.blood_group.is_empty() && record.blood_group != filters.blood_group {
        return false;
    }
    if !age_matches(record.age, &filters.age) {
        return false;
    }
    if !filters.admin_type.is_empty() {
        let label = record.admin_type.map(|t| t.label()).unwrap_or("");
        if label != filters.admin_type {
            return false;
        }
    }

    // Hierarchy class: exact per level, unset levels impose nothing. The
    // record's path is matched level-by-level independently; whether it
    // exists in the hierarchy store is not checked here.
    for level in Level::ALL {
        let wanted = filters.level(level);
        if !wanted.is_empty() && record.location.level(level) != wanted {
            return false;
        }
    }

    true
}

/// Case-insensitive substring containment; an empty needle imposes nothing.
fn substring_ci(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Integer equality after parsing the filter value. A non-numeric filter
/// value fails closed (no match) rather than raising.
fn age_matches(age: u32, filter: &str) -> bool {
    if filter.is_empty() {
        return true;
    }
    match filter.trim().parse::<u32>() {
        Ok(wanted) => age == wanted,
        Err(_) => false,
    }
}
