//! FILENAME: core/hierarchy/src/level.rs
//! The fixed six-tier location classification.
//!
//! Levels are ordered: Organization is the shallowest, Division the deepest.
//! The ordering drives both the cascade rule (selecting level i clears every
//! level deeper than i) and the option resolver's parent requirement.

use serde::{Deserialize, Serialize};

/// Number of levels in the hierarchy, Organization through Division.
pub const LEVEL_COUNT: usize = 6;

/// One tier of the location hierarchy.
///
/// Serialized variant names ("Organization", "SubBranch", ...) match the
/// values stored in a record's `adminLevel` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Level {
    Organization,
    Zone,
    State,
    Branch,
    SubBranch,
    Division,
}

impl Level {
    /// All levels in hierarchy order, shallowest first.
    pub const ALL: [Level; LEVEL_COUNT] = [
        Level::Organization,
        Level::Zone,
        Level::State,
        Level::Branch,
        Level::SubBranch,
        Level::Division,
    ];

    /// 0-based depth of this level (Organization = 0, Division = 5).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Level at the given depth, if within range.
    pub fn from_index(index: usize) -> Option<Level> {
        Level::ALL.get(index).copied()
    }

    /// The camelCase key this level uses in a FilterSet and on the wire.
    pub fn filter_key(self) -> &'static str {
        match self {
            Level::Organization => "organization",
            Level::Zone => "zone",
            Level::State => "state",
            Level::Branch => "branch",
            Level::SubBranch => "subBranch",
            Level::Division => "division",
        }
    }

    /// Display label for selectors and admin level badges.
    pub fn display_name(self) -> &'static str {
        match self {
            Level::Organization => "Organization",
            Level::Zone => "Zone",
            Level::State => "State",
            Level::Branch => "Branch",
            Level::SubBranch => "SubBranch",
            Level::Division => "Division",
        }
    }

    /// The level immediately above this one (None for Organization).
    pub fn parent(self) -> Option<Level> {
        match self.index() {
            0 => None,
            i => Level::from_index(i - 1),
        }
    }

    /// Every level strictly deeper than this one, in order.
    pub fn descendants(self) -> impl Iterator<Item = Level> {
        Level::ALL.iter().copied().skip(self.index() + 1)
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        assert!(Level::Organization < Level::Zone);
        assert!(Level::SubBranch < Level::Division);
        assert_eq!(Level::Organization.index(), 0);
        assert_eq!(Level::Division.index(), 5);
    }

    #[test]
    fn test_parent_chain() {
        assert_eq!(Level::Organization.parent(), None);
        assert_eq!(Level::Zone.parent(), Some(Level::Organization));
        assert_eq!(Level::Division.parent(), Some(Level::SubBranch));
    }

    #[test]
    fn test_descendants() {
        let deeper: Vec<Level> = Level::Branch.descendants().collect();
        assert_eq!(deeper, vec![Level::SubBranch, Level::Division]);
        assert_eq!(Level::Division.descendants().count(), 0);
        assert_eq!(Level::Organization.descendants().count(), LEVEL_COUNT - 1);
    }

    #[test]
    fn test_filter_keys_are_camel_case() {
        assert_eq!(Level::SubBranch.filter_key(), "subBranch");
        assert_eq!(Level::Organization.filter_key(), "organization");
    }

    #[test]
    fn test_serde_round_trip_matches_admin_level_values() {
        let json = serde_json::to_string(&Level::SubBranch).unwrap();
        assert_eq!(json, "\"SubBranch\"");
        let level: Level = serde_json::from_str("\"Zone\"").unwrap();
        assert_eq!(level, Level::Zone);
    }
}
