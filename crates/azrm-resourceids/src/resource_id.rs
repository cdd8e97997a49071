use std::fmt;

use serde_json::Value;

use crate::error::ResourceIdError;
use crate::parser::{render, ParseResult, Parser};
use crate::segment::{segment_label, Segment};

/// Warnings and errors in the shape validation frameworks expect.
pub type Validation = (Vec<String>, Vec<ResourceIdError>);

/// A typed resource ID backed by a fixed segment template.
///
/// Implementors supply the template and field accessors (usually through
/// [`crate::resource_id!`]); parsing, rendering and validation come for free.
pub trait ResourceId: Sized {
    /// Human name used in labels and error messages, e.g. `App Setting`.
    const TYPE_NAME: &'static str;

    fn segments() -> &'static [Segment];

    /// Field values in template order, one per value segment.
    fn values(&self) -> Vec<&str>;

    /// Build from values in template order.
    fn from_values(values: std::vec::IntoIter<String>) -> Self;

    /// Parse with exact matching of the static segments.
    fn parse(input: &str) -> Result<Self, ResourceIdError> {
        parse_with::<Self>(input, false)
    }

    /// Parse ignoring the casing of static segments. User-supplied values
    /// keep the casing of the input.
    fn parse_insensitively(input: &str) -> Result<Self, ResourceIdError> {
        parse_with::<Self>(input, true)
    }

    /// Read the value segments out of a parse result.
    fn from_parse_result(result: &ParseResult) -> Result<Self, ResourceIdError> {
        let mut values = Vec::new();
        for segment in Self::segments().iter().filter(|s| s.is_user_value()) {
            match result.get(segment.name) {
                Some(value) => values.push(value.to_string()),
                None => {
                    return Err(ResourceIdError::SegmentNotSpecified {
                        id_type: Self::TYPE_NAME,
                        segment: segment.name,
                        input: result.raw_input.clone(),
                        format: Self::format(),
                        example: Self::example(),
                    })
                }
            }
        }
        Ok(Self::from_values(values.into_iter()))
    }

    /// Canonical path of this ID.
    fn id(&self) -> String {
        render(Self::segments(), &self.values())
    }

    /// Template with placeholders, e.g. `/subscriptions/{subscriptionId}/...`.
    fn format() -> String {
        Self::segments().iter().map(|s| format!("/{}", s.placeholder())).collect()
    }

    /// The template filled with example values.
    fn example() -> String {
        Self::segments()
            .iter()
            .map(|s| format!("/{}", s.example_value))
            .collect()
    }

    fn validate(input: &str) -> Validation {
        match Self::parse(input) {
            Ok(_) => (Vec::new(), Vec::new()),
            Err(err) => (Vec::new(), vec![err]),
        }
    }

    /// Validate an untyped value, rejecting anything that is not a string.
    fn validate_value(input: &Value, key: &str) -> Validation {
        match input.as_str() {
            Some(s) => Self::validate(s),
            None => (
                Vec::new(),
                vec![ResourceIdError::ExpectedString { key: key.to_string() }],
            ),
        }
    }

    /// `Type Name (Label: "value"` newline-separated `...)`.
    fn fmt_label(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let components: Vec<String> = Self::segments()
            .iter()
            .filter(|s| s.is_user_value())
            .zip(self.values())
            .map(|(segment, value)| format!("{}: {:?}", segment_label(segment.name), value))
            .collect();
        write!(f, "{} ({})", Self::TYPE_NAME, components.join("\n"))
    }
}

fn parse_with<T: ResourceId>(input: &str, insensitively: bool) -> Result<T, ResourceIdError> {
    let result = Parser::new(T::segments())
        .parse(input, insensitively)
        .map_err(|source| ResourceIdError::Parsing {
            input: input.to_string(),
            source: Box::new(source),
        })?;
    T::from_parse_result(&result)
}

/// Fix the casing of the static segments in `input` for ID type `T`.
pub fn recase<T: ResourceId>(input: &str) -> Result<String, ResourceIdError> {
    T::parse_insensitively(input).map(|id| id.id())
}
