//! Client-side filters for the `*_complete_matching_predicate` list helpers.

use crate::models::ResourceFields;

/// Equality filter over the envelope fields of a listed resource.
///
/// A `None` field matches anything; a `Some` field must equal the item's
/// value exactly, and an item lacking that field does not match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourcePredicate {
    pub id: Option<String>,
    pub kind: Option<String>,
    pub location: Option<String>,
    pub name: Option<String>,
    pub resource_type: Option<String>,
}

impl ResourcePredicate {
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn by_kind(kind: impl Into<String>) -> Self {
        Self {
            kind: Some(kind.into()),
            ..Default::default()
        }
    }

    pub fn matches(&self, input: &impl ResourceFields) -> bool {
        field_matches(&self.id, input.id())
            && field_matches(&self.kind, input.kind())
            && field_matches(&self.location, input.location())
            && field_matches(&self.name, input.name())
            && field_matches(&self.resource_type, input.resource_type())
    }
}

fn field_matches(wanted: &Option<String>, actual: Option<&str>) -> bool {
    match wanted {
        None => true,
        Some(wanted) => actual == Some(wanted.as_str()),
    }
}
