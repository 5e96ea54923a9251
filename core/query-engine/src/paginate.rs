//! FILENAME: core/query-engine/src/paginate.rs
//! Page slicing over a matched subset.
//!
//! Pages are 1-based. The engine never clamps a past-the-end page — the
//! caller (session layer) is expected to clamp before issuing a request —
//! but the meta fields are always computed correctly so "Page X of Y" stays
//! truthful even for an empty slice.

use crate::record::UserRecord;
use serde::{Deserialize, Serialize};

/// Pagination metadata for one result page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    pub total_pages: usize,
}

impl PageMeta {
    /// Computes meta for a total match count.
    ///
    /// `total_pages` is `ceil(total / limit)`, held at a minimum of 1 so an
    /// empty result still renders as "page 1 of 1" rather than "of 0".
    /// A zero limit is normalized to 1; a zero page to 1.
    pub fn compute(total: usize, page: usize, limit: usize) -> PageMeta {
        let limit = limit.max(1);
        let page = page.max(1);
        let total_pages = total.div_ceil(limit).max(1);
        PageMeta { total, page, limit, total_pages }
    }
}

/// One page of matching records plus its metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultPage<'a> {
    pub data: Vec<&'a UserRecord>,
    pub meta: PageMeta,
}

/// Slices a matched subset into one page.
///
/// A page past the end yields an empty `data` with correct meta; no clamping
/// happens here by contract.
pub fn paginate<'a>(matches: &[&'a UserRecord], page: usize, limit: usize) -> ResultPage<'a> {
    let meta = PageMeta::compute(matches.len(), page, limit);
    let start = (meta.page - 1).saturating_mul(meta.limit);
    let data = if start >= matches.len() {
        Vec::new()
    } else {
        matches[start..(start + meta.limit).min(matches.len())].to_vec()
    };
    ResultPage { data, meta }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Location, Status};

    fn records(count: u64) -> Vec<UserRecord> {
        (1..=count)
            .map(|id| UserRecord {
                id,
                name: format!("User {}", id),
                email: format!("user{}@example.com", id),
                phone: "+91 9000000000".into(),
                status: Status::Active,
                age: 30,
                profession: "Engineer".into(),
                gender: "Male".into(),
                qualification: "Bachelor".into(),
                blood_group: "A+".into(),
                mother_tongue: "English".into(),
                location: Location::default(),
                is_admin: false,
                admin_type: None,
                admin_level: None,
                admin_location: None,
                created_at: "2024-01-01T00:00:00Z".into(),
            })
            .collect()
    }

    #[test]
    fn test_first_page_of_25_by_10() {
        let all = records(25);
        let matches: Vec<&UserRecord> = all.iter().collect();
        let page = paginate(&matches, 1, 10);
        assert_eq!(page.data.len(), 10);
        assert_eq!(page.meta.total, 25);
        assert_eq!(page.meta.total_pages, 3);
        assert_eq!(page.data[0].id, 1);
        assert_eq!(page.data[9].id, 10);
    }

    #[test]
    fn test_last_partial_page() {
        let all = records(25);
        let matches: Vec<&UserRecord> = all.iter().collect();
        let page = paginate(&matches, 3, 10);
        assert_eq!(page.data.len(), 5);
        assert_eq!(page.data[0].id, 21);
    }

    #[test]
    fn test_past_the_end_page_keeps_meta() {
        let all = records(25);
        let matches: Vec<&UserRecord> = all.iter().collect();
        let page = paginate(&matches, 4, 10);
        assert!(page.data.is_empty());
        assert_eq!(page.meta.total, 25);
        assert_eq!(page.meta.total_pages, 3);
        assert_eq!(page.meta.page, 4);
    }

    #[test]
    fn test_empty_total_still_has_one_page() {
        let matches: Vec<&UserRecord> = Vec::new();
        let page = paginate(&matches, 1, 10);
        assert!(page.data.is_empty());
        assert_eq!(page.meta.total_pages, 1);
    }

    #[test]
    fn test_exact_multiple_of_limit() {
        let all = records(30);
        let matches: Vec<&UserRecord> = all.iter().collect();
        let page = paginate(&matches, 3, 10);
        assert_eq!(page.data.len(), 10);
        assert_eq!(page.meta.total_pages, 3);
    }

    #[test]
    fn test_degenerate_inputs_normalized() {
        let all = records(5);
        let matches: Vec<&UserRecord> = all.iter().collect();
        let page = paginate(&matches, 0, 0);
        assert_eq!(page.meta.page, 1);
        assert_eq!(page.meta.limit, 1);
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.meta.total_pages, 5);
    }
}
