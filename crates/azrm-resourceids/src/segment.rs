//! Path template segments.

/// What kind of value a segment holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentType {
    /// A literal such as `subscriptions` or `sites`.
    Static,
    SubscriptionId,
    ResourceGroup,
    /// A literal provider namespace, e.g. `Microsoft.Web`.
    ResourceProvider,
    /// A name chosen by the user, e.g. a site or slot name.
    UserSpecified,
    /// One of a fixed set of values.
    Constant,
}

/// One element of a resource ID template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment {
    pub name: &'static str,
    pub segment_type: SegmentType,
    /// Literal value of static and provider segments.
    pub fixed_value: Option<&'static str>,
    /// Accepted values of a constant segment.
    pub possible_values: &'static [&'static str],
    pub example_value: &'static str,
}

impl Segment {
    pub const fn static_segment(name: &'static str, value: &'static str) -> Self {
        Self {
            name,
            segment_type: SegmentType::Static,
            fixed_value: Some(value),
            possible_values: &[],
            example_value: value,
        }
    }

    pub const fn subscription_id(name: &'static str) -> Self {
        Self {
            name,
            segment_type: SegmentType::SubscriptionId,
            fixed_value: None,
            possible_values: &[],
            example_value: "12345678-1234-9876-4563-123456789012",
        }
    }

    pub const fn resource_group(name: &'static str) -> Self {
        Self {
            name,
            segment_type: SegmentType::ResourceGroup,
            fixed_value: None,
            possible_values: &[],
            example_value: "example-resource-group",
        }
    }

    pub const fn resource_provider(name: &'static str, value: &'static str) -> Self {
        Self {
            name,
            segment_type: SegmentType::ResourceProvider,
            fixed_value: Some(value),
            possible_values: &[],
            example_value: value,
        }
    }

    pub const fn user_specified(name: &'static str) -> Self {
        Self {
            name,
            segment_type: SegmentType::UserSpecified,
            fixed_value: None,
            possible_values: &[],
            example_value: name,
        }
    }

    pub const fn constant(
        name: &'static str,
        possible_values: &'static [&'static str],
        example_value: &'static str,
    ) -> Self {
        Self {
            name,
            segment_type: SegmentType::Constant,
            fixed_value: None,
            possible_values,
            example_value,
        }
    }

    /// Static and provider segments carry a literal instead of a value.
    pub fn is_fixed(&self) -> bool {
        matches!(
            self.segment_type,
            SegmentType::Static | SegmentType::ResourceProvider
        )
    }

    /// Segments whose value ends up in an ID struct field.
    pub fn is_user_value(&self) -> bool {
        !self.is_fixed()
    }

    /// How the segment appears in a format string: the literal, or `{name}`.
    pub fn placeholder(&self) -> String {
        match self.fixed_value {
            Some(value) => value.to_string(),
            None => format!("{{{}}}", self.name),
        }
    }
}

/// Human label for a segment name: `resourceGroupName` becomes
/// `Resource Group Name`, a trailing `Id` word is dropped.
pub fn segment_label(name: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    for ch in name.chars() {
        match words.last_mut() {
            Some(word) if !ch.is_ascii_uppercase() => word.push(ch),
            _ => words.push(ch.to_ascii_uppercase().to_string()),
        }
    }
    if words.len() > 1 && words.last().is_some_and(|w| w == "Id") {
        words.pop();
    }
    words.join(" ")
}
