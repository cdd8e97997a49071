//! Template-driven resource ID parser.

use std::collections::BTreeMap;

use crate::error::ResourceIdError;
use crate::segment::{Segment, SegmentType};

/// Segment values keyed by segment name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParseResult {
    pub parsed: BTreeMap<String, String>,
    pub raw_input: String,
}

impl ParseResult {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.parsed.get(name).map(String::as_str)
    }
}

/// Parses paths against one template.
#[derive(Debug, Clone, Copy)]
pub struct Parser<'a> {
    segments: &'a [Segment],
}

impl<'a> Parser<'a> {
    pub fn new(segments: &'a [Segment]) -> Self {
        Self { segments }
    }

    /// Walk `input` against the template.
    ///
    /// Parsing stops quietly when the input runs out; callers find missing
    /// values when they read the result. Empty values are left out so they
    /// surface the same way.
    pub fn parse(&self, input: &str, insensitively: bool) -> Result<ParseResult, ResourceIdError> {
        if input.trim().is_empty() {
            return Err(ResourceIdError::EmptyInput);
        }

        let trimmed = input.strip_prefix('/').unwrap_or(input);
        let trimmed = trimmed.strip_suffix('/').unwrap_or(trimmed);
        let parts: Vec<&str> = trimmed.split('/').collect();

        if parts.len() > self.segments.len() {
            return Err(ResourceIdError::TooManySegments {
                expected: self.segments.len(),
                actual: parts.len(),
            });
        }

        let mut parsed = BTreeMap::new();
        for (position, (segment, part)) in self.segments.iter().zip(parts.iter()).enumerate() {
            let value = match (segment.segment_type, segment.fixed_value) {
                (SegmentType::Static | SegmentType::ResourceProvider, Some(expected)) => {
                    let matches = if insensitively {
                        part.eq_ignore_ascii_case(expected)
                    } else {
                        *part == expected
                    };
                    if !matches {
                        return Err(ResourceIdError::UnexpectedSegment {
                            position,
                            expected,
                            actual: part.to_string(),
                        });
                    }
                    expected.to_string()
                }
                (SegmentType::Constant, _) => {
                    let found = segment.possible_values.iter().find(|v| {
                        if insensitively {
                            v.eq_ignore_ascii_case(part)
                        } else {
                            **v == *part
                        }
                    });
                    match found {
                        Some(v) => v.to_string(),
                        None if part.is_empty() => continue,
                        None => {
                            return Err(ResourceIdError::InvalidConstant {
                                segment: segment.name,
                                possible: segment.possible_values,
                                actual: part.to_string(),
                            })
                        }
                    }
                }
                _ if part.is_empty() => continue,
                _ => part.to_string(),
            };
            parsed.insert(segment.name.to_string(), value);
        }

        Ok(ParseResult {
            parsed,
            raw_input: input.to_string(),
        })
    }
}

/// Canonical path for a template filled with `values` (one per value
/// segment, in template order).
pub fn render(segments: &[Segment], values: &[&str]) -> String {
    let mut values = values.iter();
    let mut out = String::new();
    for segment in segments {
        out.push('/');
        match segment.fixed_value {
            Some(literal) => out.push_str(literal),
            None => out.push_str(values.next().copied().unwrap_or_default()),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const TEMPLATE: &[Segment] = &[
        Segment::static_segment("staticSubscriptions", "subscriptions"),
        Segment::subscription_id("subscriptionId"),
        Segment::static_segment("staticProviders", "providers"),
        Segment::resource_provider("staticMicrosoftWeb", "Microsoft.Web"),
        Segment::constant("tier", &["Basic", "Premium"], "Basic"),
        Segment::user_specified("thingName"),
    ];

    #[test]
    fn parses_every_segment() {
        let r = Parser::new(TEMPLATE)
            .parse("/subscriptions/sub1/providers/Microsoft.Web/Basic/thing1", false)
            .unwrap();
        assert_eq!(r.get("subscriptionId"), Some("sub1"));
        assert_eq!(r.get("tier"), Some("Basic"));
        assert_eq!(r.get("thingName"), Some("thing1"));
        assert_eq!(r.get("staticMicrosoftWeb"), Some("Microsoft.Web"));
    }

    #[test]
    fn sensitive_rejects_wrong_case() {
        let err = Parser::new(TEMPLATE)
            .parse("/SUBSCRIPTIONS/sub1", false)
            .unwrap_err();
        assert_eq!(
            err,
            ResourceIdError::UnexpectedSegment {
                position: 0,
                expected: "subscriptions",
                actual: "SUBSCRIPTIONS".into(),
            }
        );
    }

    #[test]
    fn insensitive_normalises_literals_but_keeps_values() {
        let r = Parser::new(TEMPLATE)
            .parse("SUBSCRIPTIONS/Sub1/PROVIDERS/microsoft.web/premium/Thing1/", true)
            .unwrap();
        assert_eq!(r.get("staticSubscriptions"), Some("subscriptions"));
        assert_eq!(r.get("subscriptionId"), Some("Sub1"));
        assert_eq!(r.get("tier"), Some("Premium"));
        assert_eq!(r.get("thingName"), Some("Thing1"));
    }

    #[test]
    fn invalid_constant() {
        let err = Parser::new(TEMPLATE)
            .parse("/subscriptions/s/providers/Microsoft.Web/Free/x", false)
            .unwrap_err();
        assert!(matches!(err, ResourceIdError::InvalidConstant { segment: "tier", .. }));
    }

    #[test]
    fn short_input_stops_early() {
        let r = Parser::new(TEMPLATE).parse("/subscriptions/sub1", false).unwrap();
        assert_eq!(r.parsed.len(), 2);
        assert_eq!(r.get("thingName"), None);
    }

    #[test]
    fn empty_values_are_omitted() {
        let r = Parser::new(TEMPLATE)
            .parse("/subscriptions//providers/Microsoft.Web/Basic/x", false)
            .unwrap();
        assert_eq!(r.get("subscriptionId"), None);
    }

    #[test]
    fn too_many_segments() {
        let err = Parser::new(TEMPLATE)
            .parse("/subscriptions/s/providers/Microsoft.Web/Basic/x/extra", false)
            .unwrap_err();
        assert_eq!(err, ResourceIdError::TooManySegments { expected: 6, actual: 7 });
    }

    #[test]
    fn empty_input() {
        assert_eq!(Parser::new(TEMPLATE).parse("  ", false), Err(ResourceIdError::EmptyInput));
    }

    #[test]
    fn render_fills_values_in_order() {
        assert_eq!(
            render(TEMPLATE, &["sub1", "Premium", "thing1"]),
            "/subscriptions/sub1/providers/Microsoft.Web/Premium/thing1"
        );
    }
}
