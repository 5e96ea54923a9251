//! FILENAME: core/query-engine/src/filter.rs
//! The cascading filter selection state.
//!
//! A FilterSet is the complete current selection for one view: one field per
//! hierarchy level plus the independent attribute filters. Empty string means
//! unset. Transitions are pure — callers get a new FilterSet and own exactly
//! one instance per view, so there is no ambient shared state to read.

use hierarchy::Level;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

// ============================================================================
// ATTRIBUTE KEYS
// ============================================================================

/// Non-hierarchy filter fields. These are independent of each other and of
/// the location levels: setting or clearing one never cascades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AttributeKey {
    Name,
    Age,
    Profession,
    Gender,
    Qualification,
    BloodGroup,
    MotherTongue,
    AdminType,
}

impl AttributeKey {
    pub const ALL: [AttributeKey; 8] = [
        AttributeKey::Name,
        AttributeKey::Age,
        AttributeKey::Profession,
        AttributeKey::Gender,
        AttributeKey::Qualification,
        AttributeKey::BloodGroup,
        AttributeKey::MotherTongue,
        AttributeKey::AdminType,
    ];

    /// The camelCase key used on the wire and in selector option maps.
    pub fn filter_key(self) -> &'static str {
        match self {
            AttributeKey::Name => "name",
            AttributeKey::Age => "age",
            AttributeKey::Profession => "profession",
            AttributeKey::Gender => "gender",
            AttributeKey::Qualification => "qualification",
            AttributeKey::BloodGroup => "bloodGroup",
            AttributeKey::MotherTongue => "motherTongue",
            AttributeKey::AdminType => "adminType",
        }
    }
}

// ============================================================================
// FILTER SET
// ============================================================================

/// The complete active filter selection for one view.
///
/// Hierarchy fields cascade (see [`FilterSet::with_level`]); attribute fields
/// are independent. Field names serialize camelCase to match the wire shape
/// the backend expects as query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterSet {
    // Attribute filters
    pub name: String,
    pub age: String,
    pub profession: String,
    pub gender: String,
    pub qualification: String,
    pub blood_group: String,
    pub mother_tongue: String,
    pub admin_type: String,

    // Location hierarchy, shallowest to deepest
    pub organization: String,
    pub zone: String,
    pub state: String,
    pub branch: String,
    pub sub_branch: String,
    pub division: String,
}

impl FilterSet {
    /// An empty selection pinned to the deployment's organization.
    ///
    /// The organization level is a fixed single-tenant constant, so it starts
    /// selected and `reset_all` restores it rather than clearing it.
    pub fn reset_all(default_organization: &str) -> FilterSet {
        FilterSet {
            organization: default_organization.to_string(),
            ..FilterSet::default()
        }
    }

    /// The selected value at a hierarchy level (empty string = unset).
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

    fn level_mut(&mut self, level: Level) -> &mut String {
        match level {
            Level::Organization => &mut self.organization,
            Level::Zone => &mut self.zone,
            Level::State => &mut self.state,
            Level::Branch => &mut self.branch,
            Level::SubBranch => &mut self.sub_branch,
            Level::Division => &mut self.division,
        }
    }

    /// The current value of an attribute filter.
    pub fn attribute(&self, key: AttributeKey) -> &str {
        match key {
            AttributeKey::Name => &self.name,
            AttributeKey::Age => &self.age,
            AttributeKey::Profession => &self.profession,
            AttributeKey::Gender => &self.gender,
            AttributeKey::Qualification => &self.qualification,
            AttributeKey::BloodGroup => &self.blood_group,
            AttributeKey::MotherTongue => &self.mother_tongue,
            AttributeKey::AdminType => &self.admin_type,
        }
    }

    /// Selects a value at a hierarchy level.
    ///
    /// Every strictly deeper level is cleared unconditionally — even when the
    /// new value is empty — so a stale descendant can never outlive a changed
    /// ancestor. Attribute filters are untouched. No ancestor validation
    /// happens here: selector disablement is the presentation layer's job,
    /// and the state machine stays permissive.
    pub fn with_level(&self, level: Level, value: impl Into<String>) -> FilterSet {
        let mut next = self.clone();
        *next.level_mut(level) = value.into();
        for deeper in level.descendants() {
            next.level_mut(deeper).clear();
        }
        next
    }

    /// Sets or clears one attribute filter. No cascade.
    pub fn with_attribute(&self, key: AttributeKey, value: impl Into<String>) -> FilterSet {
        let mut next = self.clone();
        let slot = match key {
            AttributeKey::Name => &mut next.name,
            AttributeKey::Age => &mut next.age,
            AttributeKey::Profession => &mut next.profession,
            AttributeKey::Gender => &mut next.gender,
            AttributeKey::Qualification => &mut next.qualification,
            AttributeKey::BloodGroup => &mut next.blood_group,
            AttributeKey::MotherTongue => &mut next.mother_tongue,
            AttributeKey::AdminType => &mut next.admin_type,
        };
        *slot = value.into();
        next
    }

    /// The selected hierarchy values above `level`, shallowest first.
    ///
    /// Returns None as soon as an unset level is encountered, which is the
    /// signal the option resolver uses to offer no choices.
    pub fn path_above(&self, level: Level) -> Option<SmallVec<[&str; 6]>> {
        let mut path = SmallVec::new();
        for shallower in Level::ALL.iter().take(level.index()) {
            let value = self.level(*shallower);
            if value.is_empty() {
                return None;
            }
            path.push(value);
        }
        Some(path)
    }

    /// Whether any filter (hierarchy or attribute) is set.
    pub fn has_any(&self) -> bool {
        Level::ALL.iter().any(|l| !self.level(*l).is_empty())
            || AttributeKey::ALL.iter().any(|k| !self.attribute(*k).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cascade_clears_all_deeper_levels() {
        let filters = FilterSet::reset_all("BRMS")
            .with_level(Level::Zone, "South")
            .with_level(Level::State, "AP")
            .with_level(Level::Branch, "Vijayawada")
            .with_level(Level::SubBranch, "Benz Circle")
            .with_level(Level::Division, "Sales");

        let next = filters.with_level(Level::Zone, "North");
        assert_eq!(next.zone, "North");
        for deeper in Level::Zone.descendants() {
            assert_eq!(next.level(deeper), "", "{:?} should be cleared", deeper);
        }
        // Ancestors untouched
        assert_eq!(next.organization, "BRMS");
    }

    #[test]
    fn test_cascade_fires_even_when_clearing() {
        let filters = FilterSet::reset_all("BRMS")
            .with_level(Level::Zone, "South")
            .with_level(Level::State, "AP");

        // Setting zone to empty still clears state
        let next = filters.with_level(Level::Zone, "");
        assert_eq!(next.zone, "");
        assert_eq!(next.state, "");
    }

    #[test]
    fn test_cascade_leaves_attributes_alone() {
        let filters = FilterSet::reset_all("BRMS")
            .with_attribute(AttributeKey::Profession, "Engineer")
            .with_level(Level::Zone, "South");
        let next = filters.with_level(Level::Zone, "North");
        assert_eq!(next.profession, "Engineer");
    }

    #[test]
    fn test_attribute_set_is_independent() {
        let filters = FilterSet::reset_all("BRMS")
            .with_level(Level::Zone, "South")
            .with_attribute(AttributeKey::Gender, "Female");
        assert_eq!(filters.zone, "South");
        assert_eq!(filters.gender, "Female");

        let cleared = filters.with_attribute(AttributeKey::Gender, "");
        assert_eq!(cleared.gender, "");
        assert_eq!(cleared.zone, "South");
    }

    #[test]
    fn test_reset_all_restores_default_organization() {
        let reset = FilterSet::reset_all("BRMS");
        assert_eq!(reset.organization, "BRMS");
        assert_eq!(reset.zone, "");
        assert_eq!(reset.age, "");
        // The pinned organization counts as a set filter
        assert!(reset.has_any());
    }

    #[test]
    fn test_path_above_stops_at_gap() {
        let filters = FilterSet::reset_all("BRMS").with_level(Level::Zone, "South");
        let path = filters.path_above(Level::State).unwrap();
        assert_eq!(path.as_slice(), &["BRMS", "South"]);
        // Branch requires state, which is unset
        assert!(filters.path_above(Level::Branch).is_none());
    }

    #[test]
    fn test_wire_shape_is_camel_case() {
        let filters = FilterSet::reset_all("BRMS").with_level(Level::SubBranch, "Benz Circle");
        let json = serde_json::to_value(&filters).unwrap();
        assert_eq!(json["subBranch"], "Benz Circle");
        assert_eq!(json["bloodGroup"], "");
    }
}
