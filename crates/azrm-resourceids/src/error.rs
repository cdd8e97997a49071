use thiserror::Error;

/// Errors from parsing or validating a resource ID.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResourceIdError {
    #[error("cannot parse an empty string as a resource ID")]
    EmptyInput,

    #[error("expected segment {position} to be {expected:?} but got {actual:?}")]
    UnexpectedSegment {
        position: usize,
        expected: &'static str,
        actual: String,
    },

    #[error("expected segment {segment:?} to be one of {possible:?} but got {actual:?}")]
    InvalidConstant {
        segment: &'static str,
        possible: &'static [&'static str],
        actual: String,
    },

    #[error("expected at most {expected} segments but got {actual}")]
    TooManySegments { expected: usize, actual: usize },

    #[error(
        "the segment {segment:?} was not specified in the {id_type} ID {input:?}\n\n\
         Expected a {id_type} ID matching:\n\n> {format}\n\nFor example:\n\n> {example}"
    )]
    SegmentNotSpecified {
        id_type: &'static str,
        segment: &'static str,
        input: String,
        format: String,
        example: String,
    },

    #[error("expected {key:?} to be a string")]
    ExpectedString { key: String },

    #[error("parsing {input:?}: {source}")]
    Parsing {
        input: String,
        source: Box<ResourceIdError>,
    },
}

impl ResourceIdError {
    /// Name of the missing segment, looking through `Parsing` wrappers.
    pub fn missing_segment(&self) -> Option<&'static str> {
        match self {
            Self::SegmentNotSpecified { segment, .. } => Some(*segment),
            Self::Parsing { source, .. } => source.missing_segment(),
            _ => None,
        }
    }
}
